//! Layered CLI configuration: defaults, then an optional TOML file named by
//! `SUSHIGO_CONFIG`, then `SUSHIGO_*` environment overrides.

use serde::{Deserialize, Serialize};
use std::fs;

use sushigo_engine::rules::is_supported_player_count;

pub const CONFIG_ENV: &str = "SUSHIGO_CONFIG";
pub const SEED_ENV: &str = "SUSHIGO_SEED";
pub const PLAYERS_ENV: &str = "SUSHIGO_PLAYERS";
pub const PRETTY_ENV: &str = "SUSHIGO_PRETTY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Seed for `deck`/`deal` when none is given on the command line
    pub seed: Option<u64>,
    /// Table size for `deal`
    pub players: usize,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            players: 4,
            pretty: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub players: ValueSource,
    pub pretty: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            players: ValueSource::Default,
            pretty: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = non_empty_env(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.pretty {
            cfg.pretty = v;
            sources.pretty = ValueSource::File;
        }
    }

    if let Some(seed) = non_empty_env(SEED_ENV) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(players) = non_empty_env(PLAYERS_ENV) {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid players: {}", players)))?;
        sources.players = ValueSource::Env;
    }
    if let Some(pretty) = non_empty_env(PRETTY_ENV) {
        cfg.pretty = parse_bool(&pretty)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid pretty: {}", pretty)))?;
        sources.pretty = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    pretty: Option<bool>,
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !is_supported_player_count(cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be 2 to 5, got {}",
            cfg.players
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
