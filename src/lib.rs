// Connector Fixtures - payment connector test-fixture registry
// Resolves a connector id to the request/response fixtures an e2e suite runs against

// Module declarations
pub mod config;
pub mod connectors;
pub mod error;
pub mod fixture;
pub mod registry;
pub mod telemetry;

// Re-exports for convenience
pub use error::{ErrorCode, FixtureError};
pub use fixture::{FixtureObject, FlowFixture};
pub use registry::{default_registry, get_connector_details, FixtureRegistry};
