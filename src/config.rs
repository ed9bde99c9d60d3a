//! Gateway configuration management.
//!
//! Handles loading and merging configuration from three sources:
//! - Command-line arguments (highest priority)
//! - The persisted `~/theengsgw.conf` JSON file
//! - Built-in defaults (lowest priority)
//!
//! The merged result is validated and written back to the same file, which
//! is what the gateway runtime reads.

mod gateway;
mod overlay;
mod resolve;
mod store;

pub use gateway::GatewayConfig;
pub use resolve::resolve;
pub use store::ConfigStore;
