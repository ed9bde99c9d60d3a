//! Merging of the default table, the persisted file and the command line.
//!
//! Precedence (highest to lowest):
//! 1. Command-line flags
//! 2. Persisted configuration file
//! 3. Built-in defaults
//!
//! List flags are the exception: a list given on the command line is appended
//! to the default list rather than to the persisted one, and a leading
//! `reset` token restores the default list.

use crate::cli::{GatewayOptions, RESET_TOKEN};

use super::gateway::GatewayConfig;
use super::overlay::Overlay;
use super::store::LoadedConfig;

/// Resolves the configuration handed to the gateway runtime.
///
/// Pure: touches no files and leaves every argument unchanged.
pub fn resolve(
    defaults: &GatewayConfig,
    loaded: &LoadedConfig,
    overrides: &GatewayOptions,
) -> GatewayConfig {
    let mut config = defaults.clone();
    loaded.options.overlay(&mut config);
    config.extra = loaded.extra.clone();

    // Files written before discovery existed get all discovery defaults at once.
    if overrides.discovery.discovery.is_none() && !loaded.has_discovery() {
        config.reset_discovery(defaults);
    }

    let mut scalars = overrides.clone();
    let discovery_filter = scalars.discovery.discovery_filter.take();
    let time_sync = scalars.ble.time_sync.take();
    scalars.overlay(&mut config);

    if let Some(tokens) = discovery_filter {
        config.discovery_filter = extend_default_list(&defaults.discovery_filter, &tokens);
    }
    if let Some(tokens) = time_sync {
        config.time_sync = extend_default_list(&defaults.time_sync, &tokens);
    }

    config
}

/// Builds a list override on top of a copy of the default list.
fn extend_default_list(default: &[String], tokens: &[String]) -> Vec<String> {
    let mut list = default.to_vec();
    if tokens.first().map(String::as_str) != Some(RESET_TOKEN) {
        list.extend(tokens.iter().cloned());
    }
    list
}
