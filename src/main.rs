//! # theengsgw
//!
//! Launcher for the Theengs BLE to MQTT gateway.
//!
//! The gateway runtime reads its settings from `~/theengsgw.conf`. This
//! binary builds that file from three layers before starting the runtime:
//!
//! - **Defaults** compiled into the binary
//! - **Persisted settings** from the previous run
//! - **Command-line flags** given for this run
//!
//! ## Usage
//!
//! ```bash
//! # First run: the broker host is required
//! theengsgw --host 192.168.1.10 --user theengs --pass secret
//!
//! # Later runs reuse the stored settings
//! theengsgw
//!
//! # Append models to the discovery filter, or restore the default list
//! theengsgw --discovery_filter Govee Xiaomi
//! theengsgw --discovery_filter reset
//! ```

mod cli;
mod config;
mod gateway;

use std::env;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{expand_legacy_flags, Cli, GatewayOptions};
use crate::config::{resolve, ConfigStore, GatewayConfig};
use crate::gateway::{CommandGateway, Gateway};

fn main() -> Result<()> {
    let cli = Cli::parse_from(expand_legacy_flags(env::args_os()));
    init_tracing();

    let store = ConfigStore::open_default()?;
    let gateway = CommandGateway::new(cli.gateway_runtime);
    launch(&store, &cli.options, &gateway)
}

/// Resolves, validates and persists the configuration, then starts the
/// gateway on the written file.
fn launch(store: &ConfigStore, overrides: &GatewayOptions, gateway: &impl Gateway) -> Result<()> {
    let config = prepare_configuration(store, overrides)?;
    announce_configuration(&config, store);
    gateway.run(store.path())
}

fn prepare_configuration(
    store: &ConfigStore,
    overrides: &GatewayOptions,
) -> Result<GatewayConfig> {
    let loaded = store.load();
    let config = resolve(GatewayConfig::defaults(), &loaded, overrides);
    config.validate()?;
    store.save(&config)?;
    Ok(config)
}

fn announce_configuration(config: &GatewayConfig, store: &ConfigStore) {
    tracing::info!(
        "Config file: {} (log level {})",
        store.path().display(),
        config.log_level
    );
    tracing::info!(
        "MQTT broker: {}@{}:{} (password: {})",
        if config.user.is_empty() { "<anonymous>" } else { config.user.as_str() },
        config.host,
        config.port,
        config.masked_pass()
    );
    tracing::info!(
        "BLE scan: {}s every {}s, {} mode, adapter {}",
        config.ble_scan_time,
        config.ble_time_between_scans,
        config.scanning_mode,
        if config.adapter.is_empty() { "<default>" } else { config.adapter.as_str() }
    );
    tracing::info!(
        "Discovery: {} on {} as {} (filter: {})",
        if config.discovery == 1 { "enabled" } else { "disabled" },
        config.discovery_topic,
        config.discovery_device_name,
        config.discovery_filter.join(", ")
    );
    if !config.extra.is_empty() {
        let keys: Vec<&str> = config.extra.keys().map(String::as_str).collect();
        tracing::debug!("Unrecognised keys kept: {}", keys.join(", "));
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();

    if init_result.is_err() {
        // The global subscriber was already installed elsewhere (tests, etc.); ignore.
    }
}
