//! Reading and writing the persisted gateway configuration file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::cli::GatewayOptions;

use super::gateway::{known_keys, GatewayConfig};

const CONFIG_FILE_NAME: &str = "theengsgw.conf";
const INDENT: &[u8] = b"    ";

/// Returns `~/theengsgw.conf`.
pub fn default_config_path() -> Result<PathBuf> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| anyhow!("unable to determine the home directory for {CONFIG_FILE_NAME}"))?;
    Ok(dirs.home_dir().join(CONFIG_FILE_NAME))
}

/// Contents of the persisted file, split into recognised settings and
/// everything else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedConfig {
    pub options: GatewayOptions,
    pub extra: Map<String, Value>,
    /// The file has a `discovery` key, even one holding `null` or a value
    /// that could not be decoded.
    pub discovery_listed: bool,
}

impl LoadedConfig {
    /// Decodes a JSON object key by key.
    ///
    /// A recognised key whose value has the wrong type is skipped with a
    /// warning so it falls back to its default; every other key still
    /// applies.
    pub fn from_map(map: Map<String, Value>) -> Result<Self> {
        let mut known = Map::new();
        let mut extra = Map::new();
        let mut discovery_listed = false;

        for (key, value) in map {
            if !known_keys().contains(&key.as_str()) {
                extra.insert(key, value);
                continue;
            }
            if key == "discovery" {
                discovery_listed = true;
            }
            let single = Map::from_iter([(key.clone(), value.clone())]);
            match serde_json::from_value::<GatewayOptions>(Value::Object(single)) {
                Ok(_) => {
                    known.insert(key, value);
                }
                Err(err) => {
                    tracing::warn!(
                        key = %key,
                        value = %value,
                        error = %err,
                        "ignoring configuration value with unexpected type, using default"
                    );
                }
            }
        }

        let options = serde_json::from_value(Value::Object(known))
            .context("failed to decode configuration keys")?;
        Ok(Self {
            options,
            extra,
            discovery_listed,
        })
    }

    /// Whether the file already carries a discovery setting.
    pub fn has_discovery(&self) -> bool {
        self.discovery_listed || self.options.discovery.discovery.is_some()
    }
}

/// Persisted configuration file at a fixed location.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by [`default_config_path`].
    pub fn open_default() -> Result<Self> {
        default_config_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted configuration.
    ///
    /// A missing, unreadable, or malformed file is not an error: it yields an
    /// empty [`LoadedConfig`] so resolution falls back to the defaults.
    /// Individual values of the wrong type only lose that one key.
    pub fn load(&self) -> LoadedConfig {
        match self.try_load() {
            Ok(loaded) => {
                tracing::debug!(path = %self.path.display(), "loaded configuration file");
                loaded
            }
            Err(err) if is_not_found(&err) => {
                tracing::debug!(
                    path = %self.path.display(),
                    "no configuration file, using defaults"
                );
                LoadedConfig::default()
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %format!("{err:#}"),
                    "ignoring unusable configuration file, using defaults"
                );
                LoadedConfig::default()
            }
        }
    }

    fn try_load(&self) -> Result<LoadedConfig> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read config file {}", self.path.display()))?;
        let map: Map<String, Value> = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", self.path.display()))?;
        LoadedConfig::from_map(map)
            .with_context(|| format!("failed to decode config file {}", self.path.display()))
    }

    /// Overwrites the file with `config`, keys sorted and indented by four
    /// spaces.
    pub fn save(&self, config: &GatewayConfig) -> Result<()> {
        let contents = render(config)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Unable to write config file {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "configuration file written");
        Ok(())
    }
}

/// Serializes the configuration the way it is stored on disk.
pub fn render(config: &GatewayConfig) -> Result<Vec<u8>> {
    // Going through `Value` sorts the keys.
    let value = serde_json::to_value(config).context("failed to serialize configuration")?;
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut serializer)
        .context("failed to serialize configuration")?;
    Ok(buffer)
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == ErrorKind::NotFound)
}
