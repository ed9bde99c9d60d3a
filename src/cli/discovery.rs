//! MQTT discovery options.

use clap::Args;
use serde::Deserialize;

macro_rules! define_str_default_with_help {
    ($value_ident:ident, $help_ident:ident, $value:literal, $help_prefix:literal) => {
        pub const $value_ident: &str = $value;
        pub const $help_ident: &str = concat!($help_prefix, $value, "]");
    };
}

macro_rules! define_flag_default_with_help {
    ($value_ident:ident, $help_ident:ident, $value:literal, $help_prefix:literal) => {
        pub const $value_ident: u8 = $value;
        pub const $help_ident: &str = concat!($help_prefix, stringify!($value), "]");
    };
}

define_flag_default_with_help!(
    DEFAULT_DISCOVERY,
    HELP_DISCOVERY,
    1,
    "Optional. Enable (1) or disable (0) MQTT discovery. [default: "
);
define_flag_default_with_help!(
    DEFAULT_HASS_DISCOVERY,
    HELP_HASS_DISCOVERY,
    1,
    "Optional. Enable (1) or disable (0) Home Assistant MQTT discovery. [default: "
);
define_str_default_with_help!(
    DEFAULT_DISCOVERY_TOPIC,
    HELP_DISCOVERY_TOPIC,
    "homeassistant/sensor",
    "Optional. MQTT discovery topic. [default: "
);
define_str_default_with_help!(
    DEFAULT_DISCOVERY_DEVICE_NAME,
    HELP_DISCOVERY_DEVICE_NAME,
    "TheengsGateway",
    "Optional. Device name announced to Home Assistant. [default: "
);

/// Device models excluded from discovery unless the list is overridden.
pub const DEFAULT_DISCOVERY_FILTER: &[&str] = &["IBEACON"];

#[derive(Args, Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[command(next_help_heading = "Discovery parameters")]
#[serde(default)]
pub struct DiscoveryOptions {
    #[arg(
        short = 'D',
        long = "discovery",
        value_name = "0|1",
        value_parser = clap::value_parser!(u8).range(0..=1),
        help = HELP_DISCOVERY
    )]
    pub discovery: Option<u8>,

    #[arg(
        long = "hass_discovery",
        value_name = "0|1",
        value_parser = clap::value_parser!(u8).range(0..=1),
        help = HELP_HASS_DISCOVERY
    )]
    pub hass_discovery: Option<u8>,

    #[arg(
        long = "discovery-topic",
        alias = "discovery_topic",
        value_name = "TOPIC",
        help = HELP_DISCOVERY_TOPIC
    )]
    pub discovery_topic: Option<String>,

    #[arg(
        long = "discovery_name",
        alias = "discovery_device_name",
        value_name = "NAME",
        help = HELP_DISCOVERY_DEVICE_NAME
    )]
    pub discovery_device_name: Option<String>,

    #[arg(
        long = "discovery_filter",
        num_args = 1..,
        value_name = "MODEL",
        help = "Optional. Device models appended to the discovery filter list; `reset` restores the default list. [default: IBEACON]"
    )]
    pub discovery_filter: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_strings_embed_defaults() {
        assert!(HELP_DISCOVERY_TOPIC.ends_with("[default: homeassistant/sensor]"));
        assert!(HELP_DISCOVERY_DEVICE_NAME.ends_with("[default: TheengsGateway]"));
        assert!(HELP_HASS_DISCOVERY.ends_with("[default: 1]"));
    }

    #[test]
    fn missing_discovery_key_stays_absent() {
        let options: DiscoveryOptions =
            serde_json::from_str(r#"{"discovery_topic": "custom/sensor"}"#)
                .expect("discovery options");

        assert_eq!(options.discovery, None);
        assert_eq!(options.discovery_topic.as_deref(), Some("custom/sensor"));
    }
}
