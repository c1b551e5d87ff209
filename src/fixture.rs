//! Opaque fixture documents plus read-only navigation helpers.
//!
//! The registry never looks inside a [`FixtureObject`]. Test code that wants
//! a single flow can use [`FixtureObject::flow`], which understands the
//! `payment_method -> FlowName -> {Request, Response, Configs}` layout used by
//! the connector fixture documents. Missing shape yields `None`, never an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured test inputs and expected outputs for one connector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FixtureObject(Value);

impl FixtureObject {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// JSON-pointer access, e.g. `/card_pm/PaymentIntent/Response/status`.
    pub fn pointer(&self, path: &str) -> Option<&Value> {
        self.0.pointer(path)
    }

    /// Payment method groups declared by this fixture, sorted.
    pub fn payment_methods(&self) -> Vec<&str> {
        sorted_keys(&self.0)
    }

    /// Flow names for a payment method, sorted. Empty when the method is absent.
    ///
    /// Only object-valued entries count as flows.
    pub fn flows(&self, payment_method: &str) -> Vec<&str> {
        let Some(group) = self.0.get(payment_method).and_then(Value::as_object) else {
            return Vec::new();
        };
        let mut flows: Vec<&str> = group
            .iter()
            .filter(|(_, flow)| flow.is_object())
            .map(|(name, _)| name.as_str())
            .collect();
        flows.sort_unstable();
        flows
    }

    /// Total number of flows across all payment methods.
    pub fn flow_count(&self) -> usize {
        self.payment_methods()
            .iter()
            .map(|pm| self.flows(pm).len())
            .sum()
    }

    pub fn flow(&self, payment_method: &str, flow: &str) -> Option<FlowFixture<'_>> {
        let value = self.0.get(payment_method)?.get(flow)?;
        value.is_object().then_some(FlowFixture { value })
    }
}

impl From<Value> for FixtureObject {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Borrowed view over a single request/response flow.
#[derive(Debug, Clone, Copy)]
pub struct FlowFixture<'a> {
    value: &'a Value,
}

impl<'a> FlowFixture<'a> {
    pub fn as_value(&self) -> &'a Value {
        self.value
    }

    pub fn request(&self) -> Option<&'a Value> {
        self.value.get("Request")
    }

    pub fn response_status(&self) -> Option<u16> {
        self.value
            .get("Response")?
            .get("status")?
            .as_u64()
            .and_then(|status| u16::try_from(status).ok())
    }

    pub fn response_body(&self) -> Option<&'a Value> {
        self.value.get("Response")?.get("body")
    }

    /// Per-flow runner switches such as `TRIGGER_SKIP`.
    pub fn configs(&self) -> Option<&'a Value> {
        self.value.get("Configs")
    }

    /// True when the expected status is a 2xx.
    pub fn expects_success(&self) -> bool {
        self.response_status()
            .is_some_and(|status| (200..300).contains(&status))
    }
}

fn sorted_keys(value: &Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default();
    keys.sort_unstable();
    keys
}
