//! Fully resolved gateway configuration and its built-in defaults.

use std::sync::OnceLock;

use anyhow::{bail, Result};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::{
    LogLevel, ScanningMode, DEFAULT_BLE_ADAPTER, DEFAULT_BLE_PUBLISH_ADVDATA,
    DEFAULT_BLE_SCANNING_MODE, DEFAULT_BLE_SCAN_TIME, DEFAULT_BLE_TIME_BETWEEN_SCANS,
    DEFAULT_BLE_TIME_FORMAT, DEFAULT_DISCOVERY, DEFAULT_DISCOVERY_DEVICE_NAME,
    DEFAULT_DISCOVERY_FILTER, DEFAULT_DISCOVERY_TOPIC, DEFAULT_HASS_DISCOVERY, DEFAULT_LOG_LEVEL,
    DEFAULT_MQTT_HOST, DEFAULT_MQTT_LWT_TOPIC, DEFAULT_MQTT_PASS, DEFAULT_MQTT_PORT,
    DEFAULT_MQTT_PRESENCE, DEFAULT_MQTT_PRESENCE_TOPIC, DEFAULT_MQTT_PUBLISH_ALL,
    DEFAULT_MQTT_PUBLISH_TOPIC, DEFAULT_MQTT_SUBSCRIBE_TOPIC, DEFAULT_MQTT_USER,
};

static DEFAULTS: OnceLock<GatewayConfig> = OnceLock::new();

/// Every setting the gateway runtime reads from the configuration file.
///
/// Serialized as a flat JSON object; `extra` carries keys this crate does not
/// know about so they survive a rewrite of the file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub publish_topic: String,
    pub lwt_topic: String,
    pub subscribe_topic: String,
    pub presence_topic: String,
    pub presence: u8,
    pub publish_all: u8,
    pub ble_scan_time: u64,
    pub ble_time_between_scans: u64,
    pub log_level: LogLevel,
    pub discovery: u8,
    pub hass_discovery: u8,
    pub discovery_topic: String,
    pub discovery_device_name: String,
    pub discovery_filter: Vec<String>,
    pub adapter: String,
    pub scanning_mode: ScanningMode,
    pub time_sync: Vec<String>,
    pub time_format: u8,
    pub publish_advdata: u8,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GatewayConfig {
    /// Returns the built-in default table.
    ///
    /// The table is built on first use and only ever handed out by shared
    /// reference; callers clone whatever they intend to modify.
    pub fn defaults() -> &'static GatewayConfig {
        DEFAULTS.get_or_init(Self::build_defaults)
    }

    fn build_defaults() -> Self {
        Self {
            host: DEFAULT_MQTT_HOST.to_string(),
            port: DEFAULT_MQTT_PORT,
            user: DEFAULT_MQTT_USER.to_string(),
            pass: DEFAULT_MQTT_PASS.to_string(),
            publish_topic: DEFAULT_MQTT_PUBLISH_TOPIC.to_string(),
            lwt_topic: DEFAULT_MQTT_LWT_TOPIC.to_string(),
            subscribe_topic: DEFAULT_MQTT_SUBSCRIBE_TOPIC.to_string(),
            presence_topic: DEFAULT_MQTT_PRESENCE_TOPIC.to_string(),
            presence: DEFAULT_MQTT_PRESENCE,
            publish_all: DEFAULT_MQTT_PUBLISH_ALL,
            ble_scan_time: DEFAULT_BLE_SCAN_TIME,
            ble_time_between_scans: DEFAULT_BLE_TIME_BETWEEN_SCANS,
            log_level: DEFAULT_LOG_LEVEL,
            discovery: DEFAULT_DISCOVERY,
            hass_discovery: DEFAULT_HASS_DISCOVERY,
            discovery_topic: DEFAULT_DISCOVERY_TOPIC.to_string(),
            discovery_device_name: DEFAULT_DISCOVERY_DEVICE_NAME.to_string(),
            discovery_filter: DEFAULT_DISCOVERY_FILTER
                .iter()
                .map(|model| model.to_string())
                .collect(),
            adapter: DEFAULT_BLE_ADAPTER.to_string(),
            scanning_mode: DEFAULT_BLE_SCANNING_MODE,
            time_sync: Vec::new(),
            time_format: DEFAULT_BLE_TIME_FORMAT,
            publish_advdata: DEFAULT_BLE_PUBLISH_ADVDATA,
            extra: Map::new(),
        }
    }

    /// Checks the preconditions for persisting and launching the gateway.
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            bail!("Invalid MQTT host");
        }
        Ok(())
    }

    /// Restores the four discovery settings to their default values.
    pub fn reset_discovery(&mut self, defaults: &GatewayConfig) {
        self.discovery = defaults.discovery;
        self.discovery_topic = defaults.discovery_topic.clone();
        self.discovery_device_name = defaults.discovery_device_name.clone();
        self.discovery_filter = defaults.discovery_filter.clone();
    }

    /// Password suitable for log output.
    pub fn masked_pass(&self) -> &'static str {
        if self.pass.is_empty() {
            "<none>"
        } else {
            "********"
        }
    }
}

/// Names of every key in the default table.
pub fn known_keys() -> &'static [&'static str] {
    &[
        "adapter",
        "ble_scan_time",
        "ble_time_between_scans",
        "discovery",
        "discovery_device_name",
        "discovery_filter",
        "discovery_topic",
        "hass_discovery",
        "host",
        "log_level",
        "lwt_topic",
        "pass",
        "port",
        "presence",
        "presence_topic",
        "publish_advdata",
        "publish_all",
        "publish_topic",
        "scanning_mode",
        "subscribe_topic",
        "time_format",
        "time_sync",
        "user",
    ]
}
