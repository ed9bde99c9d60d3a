//! Command-line interface definitions and argument parsing.
//!
//! This module provides the CLI structure for theengsgw using [`clap`].
//! Every flag is optional and maps onto one key of the persisted gateway
//! configuration; an omitted flag leaves that key untouched.

mod args;
mod ble;
mod discovery;
mod legacy;
mod mqtt;

pub use args::{Cli, GatewayOptions, LogLevel, DEFAULT_LOG_LEVEL};
pub use ble::{
    BleOptions, ScanningMode, DEFAULT_BLE_ADAPTER, DEFAULT_BLE_PUBLISH_ADVDATA,
    DEFAULT_BLE_SCANNING_MODE, DEFAULT_BLE_SCAN_TIME, DEFAULT_BLE_TIME_BETWEEN_SCANS,
    DEFAULT_BLE_TIME_FORMAT,
};
pub use discovery::{
    DiscoveryOptions, DEFAULT_DISCOVERY, DEFAULT_DISCOVERY_DEVICE_NAME, DEFAULT_DISCOVERY_FILTER,
    DEFAULT_DISCOVERY_TOPIC, DEFAULT_HASS_DISCOVERY,
};
pub use legacy::expand_legacy_flags;
pub use mqtt::{
    MqttOptions, DEFAULT_MQTT_HOST, DEFAULT_MQTT_LWT_TOPIC, DEFAULT_MQTT_PASS, DEFAULT_MQTT_PORT,
    DEFAULT_MQTT_PRESENCE, DEFAULT_MQTT_PRESENCE_TOPIC, DEFAULT_MQTT_PUBLISH_ALL,
    DEFAULT_MQTT_PUBLISH_TOPIC, DEFAULT_MQTT_SUBSCRIBE_TOPIC, DEFAULT_MQTT_USER,
};

/// List token that resets a list-valued key to its built-in default.
pub const RESET_TOKEN: &str = "reset";
