// config.rs
//
// responsible for loading the config/ json files

use std::{
    collections::HashMap,
    fs,
    path::Path,
};

use anyhow::{Context, Result};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

/// Deployment identity, read from `config/settings.json`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BaseSettings {
    pub env:      String,
    pub services: Vec<String>,
}

/// Infrastructure connections, read from `config/<env>.json`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubsystemSettings {
    pub db:        DbSettings,
    pub redis:     RedisSettings,
    pub apis:      ApiSettings,
    pub callbacks: CallbackSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DbSettings {
    pub url:      String,
    pub name:     String,
    pub username: String,
    pub password: String,
    pub max_conn: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RedisSettings {
    pub password:        String,
    pub time_format:     String,
    pub process_pub_key: String,
    pub clusters:        Vec<RedisCluster>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RedisCluster {
    pub name: String,
    pub url:  String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub rpc:    ApiToggle,
    pub socket: ApiToggle,
    pub mq:     ApiToggle,
}

/// An api with an on/off switch. Transports that don't bind a port (mq)
/// omit it, so it defaults to 0.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiToggle {
    pub active: bool,
    pub port:   u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CallbackSettings {
    pub redis: ChannelCallback,
    pub rpc:   RpcCallback,
    pub mq:    ChannelCallback,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChannelCallback {
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RpcCallback {
    pub active:       bool,
    pub deposit_url:  String,
    pub withdraw_url: String,
    pub collect_url:  String,
}

/// Coin parameters, read from `config/coin.json`
///
/// The json keys are camelCase, matching the deployed config files.
/// `collect_interval` is a raw nanosecond count and is left opaque.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoinSettings {
    pub name:             String,
    pub url:              String,
    pub assist_site:      String,
    pub decimal:          u32,
    pub stable:           u32,
    pub rpc_user:         String,
    pub rpc_password:     String,
    pub collect:          String,
    pub deposit:          String,
    pub min_collect:      f64,
    pub collect_interval: u64,
    pub trade_password:   String,
    pub unlock_duration:  u32,
    pub withdraw:         String,
}

/// Log behavior and message text, read from `config/message.json`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MessageSettings {
    pub logs:        LogSettings,
    pub level:       HashMap<String, String>,
    pub storage:     StorageSettings,
    pub errors:      HashMap<String, String>,
    pub warnings:    HashMap<String, String>,
    pub information: HashMap<String, String>,
    pub debugs:      HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub debug: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub file: FileStorageSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FileStorageSettings {
    pub active:      bool,
    pub split:       String,
    pub split_mode:  String,
    pub rotate:      String,
    pub path:        String,
    #[serde(rename = "nameFormat")]
    pub name_format: String,
}

/// Command response templates, read from `config/command.json`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CommandSettings {
    pub unknown: String,
    pub help:    String,
    pub version: String,
}

/// The five settings sections, loaded once and immutable thereafter.
///
/// Fields are private; the section getters hand out clones so callers
/// can't touch the cached state.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    base:      BaseSettings,
    subsystem: SubsystemSettings,
    coin:      CoinSettings,
    messages:  MessageSettings,
    commands:  CommandSettings,
}

impl Config {
    /// Load all five sections from `config/` under the working directory
    pub fn load() -> Result<Self> { Self::load_from(Path::new("config")) }

    /// Load all five sections from `dir`, in order:
    /// settings -> `<env>` -> coin -> message -> command.
    ///
    /// The subsystem file is named by the `env` field of settings.json.
    /// Any open, read, or decode failure aborts the whole load; there is
    /// no partial config.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let base: BaseSettings = load_json(dir, "settings")?;
        let subsystem = load_json(dir, &base.env)?;
        let coin = load_json(dir, "coin")?;
        let messages = load_json(dir, "message")?;
        let commands = load_json(dir, "command")?;

        Ok(Self { base, subsystem, coin, messages, commands })
    }

    pub fn base(&self) -> BaseSettings { self.base.clone() }

    pub fn subsystem(&self) -> SubsystemSettings { self.subsystem.clone() }

    pub fn coin(&self) -> CoinSettings { self.coin.clone() }

    pub fn messages(&self) -> MessageSettings { self.messages.clone() }

    pub fn commands(&self) -> CommandSettings { self.commands.clone() }
}

fn load_json<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T> {
    let path = dir.join(format!("{name}.json"));
    debug!("Loading {}", path.display());

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Couldn't read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid json in {}", path.display()))
}
