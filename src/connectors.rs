//! Fixture documents for every supported payment connector.
//!
//! Each connector ships one JSON document under `fixtures/connectors/`, embedded
//! at compile time. [`load_dir`] lets a test run point at an edited copy of the
//! fixtures, falling back to the embedded document for any file it does not find.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, info};

use crate::error::FixtureError;
use crate::fixture::FixtureObject;

/// Connector ids with bundled fixtures, in ascending order.
pub const SUPPORTED_CONNECTORS: &[&str] = &[
    "adyen",
    "bankofamerica",
    "bluesnap",
    "cybersource",
    "nmi",
    "paypal",
    "stripe",
    "trustpay",
];

/// Raw fixture document bundled for `connector`.
pub fn embedded_source(connector: &str) -> Option<&'static str> {
    let source = match connector {
        "adyen" => include_str!("../fixtures/connectors/adyen.json"),
        "bankofamerica" => include_str!("../fixtures/connectors/bankofamerica.json"),
        "bluesnap" => include_str!("../fixtures/connectors/bluesnap.json"),
        "cybersource" => include_str!("../fixtures/connectors/cybersource.json"),
        "nmi" => include_str!("../fixtures/connectors/nmi.json"),
        "paypal" => include_str!("../fixtures/connectors/paypal.json"),
        "stripe" => include_str!("../fixtures/connectors/stripe.json"),
        "trustpay" => include_str!("../fixtures/connectors/trustpay.json"),
        _ => return None,
    };
    Some(source)
}

/// Parse every embedded fixture document.
pub fn embedded_entries() -> Result<Vec<(String, FixtureObject)>, FixtureError> {
    SUPPORTED_CONNECTORS
        .iter()
        .map(|id| embedded_entry(id))
        .collect()
}

/// Load fixtures for `connectors` from `dir/<id>.json`.
///
/// A missing file falls back to the embedded document; ids without an
/// embedded document must then exist on disk.
pub fn load_dir(
    dir: &Path,
    connectors: &[&str],
) -> Result<Vec<(String, FixtureObject)>, FixtureError> {
    let mut entries = Vec::with_capacity(connectors.len());
    for id in connectors {
        let path = dir.join(format!("{id}.json"));
        match fs::read_to_string(&path) {
            Ok(contents) => {
                info!("[Fixtures] Loaded {} from {:?}", id, path);
                entries.push((id.to_string(), parse_fixture(id, &contents)?));
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("[Fixtures] {:?} not found, using embedded {}", path, id);
                entries.push(embedded_entry(id)?);
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(entries)
}

fn embedded_entry(id: &str) -> Result<(String, FixtureObject), FixtureError> {
    let source = embedded_source(id).ok_or_else(|| FixtureError::UnknownConnector {
        id: id.to_string(),
    })?;
    Ok((id.to_string(), parse_fixture(id, source)?))
}

fn parse_fixture(connector: &str, data: &str) -> Result<FixtureObject, FixtureError> {
    serde_json::from_str(data).map_err(|err| FixtureError::InvalidFixture {
        connector: connector.to_string(),
        reason: err.to_string(),
    })
}
