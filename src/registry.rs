//! Connector id → fixture registry.
//!
//! A [`FixtureRegistry`] is assembled once from `(connector, fixture)` pairs and
//! is read-only afterwards, so shared references can be handed to any number of
//! test workers without locking. Lookups are exact and case-sensitive; a miss
//! is `None`, never an error.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use log::debug;
use once_cell::sync::OnceCell;

use crate::connectors;
use crate::error::{log_fixture_error, FixtureError};
use crate::fixture::FixtureObject;

/// Process-wide registry built from the embedded connector fixtures.
static DEFAULT_REGISTRY: OnceCell<FixtureRegistry> = OnceCell::new();

/// Immutable mapping from lowercase connector id to its fixture.
#[derive(Debug, Clone, Default)]
pub struct FixtureRegistry {
    entries: HashMap<String, FixtureObject>,
}

impl FixtureRegistry {
    /// Build a registry from `(connector, fixture)` pairs.
    ///
    /// Connector ids must be non-empty, lowercase, and unique.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, FixtureError>
    where
        I: IntoIterator<Item = (K, FixtureObject)>,
        K: Into<String>,
    {
        let mut map = HashMap::new();
        for (id, fixture) in entries {
            let id = id.into();
            validate_connector_id(&id)?;
            match map.entry(id) {
                Entry::Occupied(slot) => {
                    return Err(FixtureError::DuplicateConnector {
                        id: slot.key().clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(fixture);
                }
            }
        }
        debug!("[FixtureRegistry] Registered {} connectors", map.len());
        Ok(Self { entries: map })
    }

    /// Return the fixture registered for `connector`, if any.
    pub fn resolve(&self, connector: &str) -> Option<&FixtureObject> {
        self.entries.get(connector)
    }

    pub fn contains(&self, connector: &str) -> bool {
        self.entries.contains_key(connector)
    }

    /// Registered connector ids in ascending order.
    pub fn connectors(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Entries sorted by connector id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FixtureObject)> {
        let mut entries: Vec<(&str, &FixtureObject)> = self
            .entries
            .iter()
            .map(|(id, fixture)| (id.as_str(), fixture))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Narrow the registry to `allow`. An empty allowlist keeps every connector.
    pub fn retain_connectors(mut self, allow: &[String]) -> Result<Self, FixtureError> {
        if allow.is_empty() {
            return Ok(self);
        }
        if let Some(missing) = allow.iter().find(|id| !self.entries.contains_key(*id)) {
            return Err(FixtureError::UnknownConnector {
                id: missing.clone(),
            });
        }
        let keep: HashSet<&str> = allow.iter().map(String::as_str).collect();
        self.entries.retain(|id, _| keep.contains(id.as_str()));
        debug!(
            "[FixtureRegistry] Narrowed to {} connectors",
            self.entries.len()
        );
        Ok(self)
    }
}

/// Registry built from the fixtures embedded in this crate.
pub fn default_registry() -> Result<&'static FixtureRegistry, FixtureError> {
    DEFAULT_REGISTRY
        .get_or_try_init(|| FixtureRegistry::from_entries(connectors::embedded_entries()?))
}

/// Look up a connector in the default registry.
///
/// Returns `None` for unknown ids and, after logging, when the embedded
/// fixtures could not be assembled.
pub fn get_connector_details(connector: &str) -> Option<&'static FixtureObject> {
    match default_registry() {
        Ok(registry) => registry.resolve(connector),
        Err(err) => {
            log_fixture_error(&err, "get_connector_details");
            None
        }
    }
}

fn validate_connector_id(id: &str) -> Result<(), FixtureError> {
    let trimmed = id.trim();
    if trimmed.is_empty() || trimmed.len() != id.len() || id.chars().any(char::is_uppercase) {
        return Err(FixtureError::InvalidConnectorId { id: id.to_string() });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
