//! Bluetooth scanning options.
//!
//! Covers the scan cadence, adapter selection, and the clock
//! synchronisation settings consumed by the gateway runtime.

use std::fmt;

use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

macro_rules! define_u64_default_with_help {
    ($value_ident:ident, $help_ident:ident, $value:literal, $help_prefix:literal) => {
        pub const $value_ident: u64 = $value;
        pub const $help_ident: &str = concat!($help_prefix, stringify!($value), "]");
    };
}

macro_rules! define_flag_default_with_help {
    ($value_ident:ident, $help_ident:ident, $value:literal, $help_prefix:literal) => {
        pub const $value_ident: u8 = $value;
        pub const $help_ident: &str = concat!($help_prefix, stringify!($value), "]");
    };
}

define_u64_default_with_help!(
    DEFAULT_BLE_SCAN_TIME,
    HELP_BLE_SCAN_TIME,
    5,
    "Optional. BLE scan duration in seconds. [default: "
);
define_u64_default_with_help!(
    DEFAULT_BLE_TIME_BETWEEN_SCANS,
    HELP_BLE_TIME_BETWEEN_SCANS,
    5,
    "Optional. Seconds to wait between scans. [default: "
);
define_flag_default_with_help!(
    DEFAULT_BLE_TIME_FORMAT,
    HELP_BLE_TIME_FORMAT,
    0,
    "Optional. Use 12-hour (1) or 24-hour (0) time format for clocks. [default: "
);
define_flag_default_with_help!(
    DEFAULT_BLE_PUBLISH_ADVDATA,
    HELP_BLE_PUBLISH_ADVDATA,
    0,
    "Optional. Publish advertising and advanced data (1) or not (0). [default: "
);

pub const DEFAULT_BLE_ADAPTER: &str = "";
pub const DEFAULT_BLE_SCANNING_MODE: ScanningMode = ScanningMode::Active;

/// How the adapter asks peripherals for advertisement data.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanningMode {
    /// Send scan requests to obtain scan responses.
    #[default]
    Active,
    /// Only listen to advertisements.
    Passive,
}

impl fmt::Display for ScanningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanningMode::Active => f.write_str("active"),
            ScanningMode::Passive => f.write_str("passive"),
        }
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[command(next_help_heading = "BLE parameters")]
#[serde(default)]
pub struct BleOptions {
    #[arg(
        long = "scan_duration",
        alias = "ble_scan_time",
        value_name = "SECONDS",
        help = HELP_BLE_SCAN_TIME
    )]
    pub ble_scan_time: Option<u64>,

    #[arg(
        long = "time_between",
        alias = "ble_time_between_scans",
        value_name = "SECONDS",
        help = HELP_BLE_TIME_BETWEEN_SCANS
    )]
    pub ble_time_between_scans: Option<u64>,

    #[arg(
        short = 'a',
        long = "adapter",
        value_name = "ADAPTER",
        help = "Optional. Bluetooth adapter (e.g. hci1 on Linux). [default: system default]"
    )]
    pub adapter: Option<String>,

    #[arg(
        short = 's',
        long = "scanning_mode",
        value_enum,
        value_name = "MODE",
        help = "Optional. Scanning mode. [default: active]"
    )]
    pub scanning_mode: Option<ScanningMode>,

    #[arg(
        long = "time_sync",
        num_args = 1..,
        value_name = "ADDRESS",
        help = "Optional. Addresses of Bluetooth devices to synchronize the time with; `reset` clears the list."
    )]
    pub time_sync: Option<Vec<String>>,

    #[arg(
        long = "time_format",
        value_name = "0|1",
        value_parser = clap::value_parser!(u8).range(0..=1),
        help = HELP_BLE_TIME_FORMAT
    )]
    pub time_format: Option<u8>,

    #[arg(
        long = "publish_advdata",
        value_name = "0|1",
        value_parser = clap::value_parser!(u8).range(0..=1),
        help = HELP_BLE_PUBLISH_ADVDATA
    )]
    pub publish_advdata: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scanning_mode_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&ScanningMode::Passive).expect("serialize"),
            "\"passive\""
        );
        let mode: ScanningMode = serde_json::from_str("\"active\"").expect("deserialize");
        assert_eq!(mode, ScanningMode::Active);
        assert!(serde_json::from_str::<ScanningMode>("\"Active\"").is_err());
    }

    #[test]
    fn scanning_mode_display_matches_serialized_form() {
        assert_eq!(ScanningMode::Active.to_string(), "active");
        assert_eq!(ScanningMode::Passive.to_string(), "passive");
    }

    #[test]
    fn time_sync_deserializes_as_list() {
        let options: BleOptions =
            serde_json::from_str(r#"{"time_sync": ["AA:BB:CC:DD:EE:FF"], "adapter": "hci1"}"#)
                .expect("ble options");

        assert_eq!(
            options.time_sync,
            Some(vec!["AA:BB:CC:DD:EE:FF".to_string()])
        );
        assert_eq!(options.adapter.as_deref(), Some("hci1"));
        assert_eq!(options.scanning_mode, None);
    }
}
