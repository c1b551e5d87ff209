use rstest::rstest;
use serde_json::json;

use super::*;
use crate::error::ErrorCode;

fn fixture(tag: &str) -> FixtureObject {
    FixtureObject::new(json!({
        "card_pm": {
            "PaymentIntent": {
                "Request": {"currency": "USD"},
                "Response": {"status": 200, "body": {"tag": tag}}
            }
        }
    }))
}

fn sample_registry() -> FixtureRegistry {
    FixtureRegistry::from_entries([
        ("stripe", fixture("stripe")),
        ("nmi", fixture("nmi")),
        ("adyen", fixture("adyen")),
    ])
    .unwrap()
}

#[test]
fn resolves_registered_connector() {
    let registry = sample_registry();
    assert!(registry.contains("stripe"));
    let found = registry.resolve("stripe").unwrap();
    assert_eq!(found, &fixture("stripe"));
    assert_eq!(
        found.pointer("/card_pm/PaymentIntent/Response/body/tag"),
        Some(&json!("stripe"))
    );
}

#[rstest]
#[case("")]
#[case("Stripe")]
#[case("NMI")]
#[case("unknownconnector")]
#[case(" stripe")]
fn misses_return_none(#[case] id: &str) {
    let registry = sample_registry();
    assert!(registry.resolve(id).is_none());
    assert!(!registry.contains(id));
}

#[test]
fn repeated_lookups_return_same_reference() {
    let registry = sample_registry();
    let first = registry.resolve("nmi").unwrap();
    let second = registry.resolve("nmi").unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn connectors_are_sorted() {
    let registry = sample_registry();
    assert_eq!(registry.connectors(), vec!["adyen", "nmi", "stripe"]);
    let ids: Vec<&str> = registry.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["adyen", "nmi", "stripe"]);
    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());
}

#[test]
fn rejects_duplicate_ids() {
    let err = FixtureRegistry::from_entries([("nmi", fixture("a")), ("nmi", fixture("b"))])
        .unwrap_err();
    assert_eq!(
        err,
        FixtureError::DuplicateConnector {
            id: "nmi".to_string()
        }
    );
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("Stripe")]
#[case("stripe ")]
fn rejects_invalid_ids(#[case] id: &str) {
    let err = FixtureRegistry::from_entries([(id, fixture("x"))]).unwrap_err();
    assert_eq!(err.code(), 3001);
}

#[test]
fn empty_registry_resolves_nothing() {
    let registry = FixtureRegistry::from_entries(Vec::<(String, FixtureObject)>::new()).unwrap();
    assert!(registry.is_empty());
    assert!(registry.resolve("stripe").is_none());
}

#[test]
fn retain_connectors_narrows_registry() {
    let registry = sample_registry()
        .retain_connectors(&["nmi".to_string(), "stripe".to_string()])
        .unwrap();
    assert_eq!(registry.connectors(), vec!["nmi", "stripe"]);
    assert!(registry.resolve("adyen").is_none());
}

#[test]
fn retain_connectors_with_empty_allowlist_keeps_all() {
    let registry = sample_registry().retain_connectors(&[]).unwrap();
    assert_eq!(registry.len(), 3);
}

#[test]
fn retain_connectors_rejects_unknown_id() {
    let err = sample_registry()
        .retain_connectors(&["paypal".to_string()])
        .unwrap_err();
    assert_eq!(
        err,
        FixtureError::UnknownConnector {
            id: "paypal".to_string()
        }
    );
}

#[test]
fn default_registry_holds_supported_connectors() {
    let registry = default_registry().unwrap();
    assert_eq!(registry.connectors(), connectors::SUPPORTED_CONNECTORS.to_vec());
}

#[test]
fn get_connector_details_is_stable() {
    let first = get_connector_details("bluesnap").unwrap();
    let second = get_connector_details("bluesnap").unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(get_connector_details("Bluesnap").is_none());
}
