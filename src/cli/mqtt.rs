//! MQTT broker connection and topic options.

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

pub const DEFAULT_MQTT_HOST: &str = "";
pub const DEFAULT_MQTT_USER: &str = "";
pub const DEFAULT_MQTT_PASS: &str = "";
pub const DEFAULT_MQTT_PORT: u16 = 1883;
pub const HELP_MQTT_PORT: &str = "Optional. MQTT broker port. [default: 1883]";

define_str_default_with_help!(
    DEFAULT_MQTT_PUBLISH_TOPIC,
    HELP_MQTT_PUBLISH_TOPIC,
    "home/TheengsGateway/BTtoMQTT",
    "Optional. MQTT topic decoded advertisements are published to. [default: "
);
define_str_default_with_help!(
    DEFAULT_MQTT_SUBSCRIBE_TOPIC,
    HELP_MQTT_SUBSCRIBE_TOPIC,
    "home/+/BTtoMQTT/undecoded",
    "Optional. MQTT topic watched for undecoded advertisements. [default: "
);
define_str_default_with_help!(
    DEFAULT_MQTT_LWT_TOPIC,
    HELP_MQTT_LWT_TOPIC,
    "home/TheengsGateway/LWT",
    "Optional. MQTT last will and testament topic. [default: "
);
define_str_default_with_help!(
    DEFAULT_MQTT_PRESENCE_TOPIC,
    HELP_MQTT_PRESENCE_TOPIC,
    "home/TheengsGateway/presence",
    "Optional. MQTT topic for presence messages. [default: "
);
define_flag_default_with_help!(
    DEFAULT_MQTT_PRESENCE,
    HELP_MQTT_PRESENCE,
    0,
    "Optional. Enable (1) or disable (0) presence publication. [default: "
);
define_flag_default_with_help!(
    DEFAULT_MQTT_PUBLISH_ALL,
    HELP_MQTT_PUBLISH_ALL,
    1,
    "Optional. Publish all (1) or only decoded (0) advertisements. [default: "
);

#[derive(Args, Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[command(next_help_heading = "MQTT parameters")]
#[serde(default)]
pub struct MqttOptions {
    #[arg(
        short = 'H',
        long = "host",
        value_name = "HOST",
        help = "MQTT broker host address. Required unless already stored in the configuration file."
    )]
    pub host: Option<String>,

    #[arg(short = 'P', long = "port", value_name = "PORT", help = HELP_MQTT_PORT)]
    pub port: Option<u16>,

    #[arg(
        short = 'u',
        long = "user",
        value_name = "USER",
        help = "Optional. MQTT username."
    )]
    pub user: Option<String>,

    #[arg(
        short = 'p',
        long = "pass",
        value_name = "PASSWORD",
        help = "Optional. MQTT password."
    )]
    pub pass: Option<String>,

    #[arg(
        long = "pub_topic",
        alias = "publish_topic",
        value_name = "TOPIC",
        help = HELP_MQTT_PUBLISH_TOPIC
    )]
    pub publish_topic: Option<String>,

    #[arg(
        long = "sub_topic",
        alias = "subscribe_topic",
        value_name = "TOPIC",
        help = HELP_MQTT_SUBSCRIBE_TOPIC
    )]
    pub subscribe_topic: Option<String>,

    #[arg(long = "lwt_topic", value_name = "TOPIC", help = HELP_MQTT_LWT_TOPIC)]
    pub lwt_topic: Option<String>,

    #[arg(long = "presence_topic", value_name = "TOPIC", help = HELP_MQTT_PRESENCE_TOPIC)]
    pub presence_topic: Option<String>,

    #[arg(
        long = "presence",
        value_name = "0|1",
        value_parser = clap::value_parser!(u8).range(0..=1),
        help = HELP_MQTT_PRESENCE
    )]
    pub presence: Option<u8>,

    #[arg(
        long = "publish_all",
        value_name = "0|1",
        value_parser = clap::value_parser!(u8).range(0..=1),
        help = HELP_MQTT_PUBLISH_ALL
    )]
    pub publish_all: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_strings_embed_defaults() {
        assert!(HELP_MQTT_PUBLISH_TOPIC.ends_with("[default: home/TheengsGateway/BTtoMQTT]"));
        assert!(HELP_MQTT_PUBLISH_ALL.ends_with("[default: 1]"));
        assert!(HELP_MQTT_PRESENCE.ends_with("[default: 0]"));
    }

    #[test]
    fn deserializes_partial_object() {
        let options: MqttOptions =
            serde_json::from_str(r#"{"host": "broker.local", "presence": 0}"#)
                .expect("partial mqtt options");

        assert_eq!(options.host.as_deref(), Some("broker.local"));
        assert_eq!(options.presence, Some(0));
        assert_eq!(options.port, None);
        assert_eq!(options.publish_all, None);
    }
}
