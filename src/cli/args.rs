use std::ffi::OsString;
use std::fmt;

use clap::{Args, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use super::{BleOptions, DiscoveryOptions, MqttOptions};

pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
pub const DEFAULT_GATEWAY_RUNTIME: &str = "TheengsGateway-runtime";

/// Command-line interface definition.
#[derive(Parser, Debug)]
#[command(
    name = "theengsgw",
    author,
    version,
    about = "Resolve the Theengs Gateway configuration and start the gateway"
)]
pub struct Cli {
    #[command(flatten)]
    pub options: GatewayOptions,

    /// Program started once the configuration has been written.
    #[arg(
        long = "gateway_runtime",
        env = "THEENGSGW_RUNTIME",
        hide = true,
        value_name = "PROGRAM",
        default_value = DEFAULT_GATEWAY_RUNTIME
    )]
    pub gateway_runtime: OsString,
}

/// Sparse set of gateway settings.
///
/// Parsed from the command line, where every omitted flag stays `None`, and
/// decoded from the persisted configuration file, where every missing key
/// stays `None`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GatewayOptions {
    #[arg(
        long = "log_level",
        value_enum,
        value_name = "LEVEL",
        help = "Optional. Gateway log level. [default: INFO]"
    )]
    #[serde(default)]
    pub log_level: Option<LogLevel>,

    #[command(flatten)]
    #[serde(flatten)]
    pub mqtt: MqttOptions,

    #[command(flatten)]
    #[serde(flatten)]
    pub ble: BleOptions,

    #[command(flatten)]
    #[serde(flatten)]
    pub discovery: DiscoveryOptions,
}

/// Log verbosity handed to the gateway runtime.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    #[value(name = "DEBUG")]
    Debug,
    #[default]
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "ERROR")]
    Error,
    #[value(name = "CRITICAL")]
    Critical,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        };
        f.write_str(name)
    }
}
