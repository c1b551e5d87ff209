// Error types for the connector fixture registry
//
// Lookups never fail; these errors only surface while building a registry
// from fixture documents, configuration, or a fixtures directory.

use log::error;
use std::fmt;

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, so the CLI and test harnesses can report
/// failures consistently.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}

/// Fixture error code constants.
///
/// Error code range: 3001-3005
pub struct FixtureErrorCodes {}

impl FixtureErrorCodes {
    /// Connector id is empty or not lowercase
    pub const INVALID_CONNECTOR_ID: i32 = 3001;

    /// Connector id registered more than once
    pub const DUPLICATE_CONNECTOR: i32 = 3002;

    /// Connector id is not part of the registry
    pub const UNKNOWN_CONNECTOR: i32 = 3003;

    /// Fixture document could not be parsed
    pub const INVALID_FIXTURE: i32 = 3004;

    /// Filesystem access failed
    pub const IO: i32 = 3005;
}

/// Log a fixture error with structured context
///
/// The logging is non-blocking and will not panic on failure.
pub fn log_fixture_error(err: &FixtureError, context: &str) {
    error!(
        "Fixture error in {}: code={}, component=FixtureRegistry, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Registry construction and loading errors
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureError {
    /// Connector id is empty, whitespace, or contains uppercase characters
    InvalidConnectorId { id: String },

    /// Same connector id supplied twice
    DuplicateConnector { id: String },

    /// Connector id requested but never registered
    UnknownConnector { id: String },

    /// Fixture document is not valid JSON
    InvalidFixture { connector: String, reason: String },

    /// Reading fixtures from disk failed
    Io { details: String },
}

impl ErrorCode for FixtureError {
    fn code(&self) -> i32 {
        match self {
            FixtureError::InvalidConnectorId { .. } => FixtureErrorCodes::INVALID_CONNECTOR_ID,
            FixtureError::DuplicateConnector { .. } => FixtureErrorCodes::DUPLICATE_CONNECTOR,
            FixtureError::UnknownConnector { .. } => FixtureErrorCodes::UNKNOWN_CONNECTOR,
            FixtureError::InvalidFixture { .. } => FixtureErrorCodes::INVALID_FIXTURE,
            FixtureError::Io { .. } => FixtureErrorCodes::IO,
        }
    }

    fn message(&self) -> String {
        match self {
            FixtureError::InvalidConnectorId { id } => {
                format!("Connector id must be non-empty lowercase (got {:?})", id)
            }
            FixtureError::DuplicateConnector { id } => {
                format!("Connector {} registered more than once", id)
            }
            FixtureError::UnknownConnector { id } => {
                format!("Connector {} is not registered", id)
            }
            FixtureError::InvalidFixture { connector, reason } => {
                format!("Invalid fixture for {}: {}", connector, reason)
            }
            FixtureError::Io { details } => format!("I/O error: {}", details),
        }
    }
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixtureError (code {}): {}", self.code(), self.message())
    }
}

impl std::error::Error for FixtureError {}

impl From<std::io::Error> for FixtureError {
    fn from(err: std::io::Error) -> Self {
        FixtureError::Io {
            details: err.to_string(),
        }
    }
}
