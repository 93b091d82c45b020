use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "FIVECARD_CONFIG";
pub const SEED_ENV: &str = "FIVECARD_SEED";
pub const PLAYER_ONE_ENV: &str = "FIVECARD_PLAYER_ONE";
pub const PLAYER_TWO_ENV: &str = "FIVECARD_PLAYER_TWO";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub player_one: String,
    pub player_two: String,
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
    pub player_one: ValueSource,
    pub player_two: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            player_one: ValueSource::Default,
            player_two: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            player_one: "player-one".into(),
            player_two: "player-two".into(),
        }
    }
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

/// Resolves configuration from defaults, the file named by `FIVECARD_CONFIG`
/// and `FIVECARD_*` environment overrides, in that order.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve_with(|key| std::env::var(key).ok())
}

pub fn resolve_with<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    // empty values count as unset
    let var = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(path) = var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.player_one {
            cfg.player_one = v;
            sources.player_one = ValueSource::File;
        }
        if let Some(v) = f.player_two {
            cfg.player_two = v;
            sources.player_two = ValueSource::File;
        }
    }

    if let Some(seed) = var(SEED_ENV) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(name) = var(PLAYER_ONE_ENV) {
        cfg.player_one = name;
        sources.player_one = ValueSource::Env;
    }
    if let Some(name) = var(PLAYER_TWO_ENV) {
        cfg.player_two = name;
        sources.player_two = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    player_one: Option<String>,
    #[serde(default)]
    player_two: Option<String>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.player_one.trim().is_empty() || cfg.player_two.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player names must not be blank".into(),
        ));
    }
    if cfg.player_one == cfg.player_two {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player names must differ".into(),
        ));
    }
    Ok(())
}
