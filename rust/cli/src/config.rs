//! Layered configuration: defaults, then a TOML file, then environment
//! variables, then command line flags. Every value remembers which layer set
//! it so `sixmax cfg` can explain the result.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sixmax_engine::chips::Chips;
use sixmax_engine::config::SessionConfig;
use sixmax_engine::engine::Blinds;
use sixmax_engine::errors::ConfigError as SessionError;

pub const ENV_CONFIG: &str = "SIXMAX_CONFIG";
pub const ENV_SEED: &str = "SIXMAX_SEED";
pub const ENV_HANDS: &str = "SIXMAX_HANDS";
pub const ENV_STACK: &str = "SIXMAX_STACK";
pub const ENV_POLICY: &str = "SIXMAX_POLICY";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Config {
    /// `None` draws a fresh seed per run
    pub seed: Option<u64>,
    pub hands: u64,
    pub starting_stack: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub policy: String,
    pub button: usize,
}

impl Default for Config {
    fn default() -> Self {
        let blinds = Blinds::default();
        Self {
            seed: None,
            hands: 10,
            starting_stack: Chips::from_units(100),
            small_blind: blinds.small,
            big_blind: blinds.big,
            policy: "random".into(),
            button: 0,
        }
    }
}

impl Config {
    /// Session settings for a run; `seed` is the one actually used.
    pub fn session(&self, seed: u64) -> SessionConfig {
        SessionConfig {
            starting_stack: self.starting_stack,
            blinds: Blinds {
                small: self.small_blind,
                big: self.big_blind,
            },
            hands: self.hands,
            seed,
            button_seat: self.button,
            ..SessionConfig::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Flag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub hands: ValueSource,
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub policy: ValueSource,
    pub button: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            hands: ValueSource::Default,
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            policy: ValueSource::Default,
            button: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

/// Values given on the command line; they win over everything else.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub hands: Option<u64>,
    pub stack: Option<Chips>,
    pub policy: Option<String>,
    pub button: Option<usize>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
    Session(SessionError),
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<SessionError> for ConfigError {
    fn from(e: SessionError) -> Self {
        ConfigError::Session(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "cannot read {}: {}", path.display(), e),
            ConfigError::Parse(e) => write!(f, "invalid config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
            ConfigError::Session(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Chip amounts in the file may be written as `100`, `0.5` or `"1.50"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Amount {
    Whole(u64),
    Decimal(f64),
    Text(String),
}

impl Amount {
    fn chips(&self, key: &str) -> Result<Chips, ConfigError> {
        let parsed = match self {
            Amount::Whole(n) => Ok(Chips::from_units(*n)),
            Amount::Decimal(x) => format!("{x:.2}").parse(),
            Amount::Text(s) => s.parse(),
        };
        parsed.map_err(|e| ConfigError::Invalid(format!("{key}: {e}")))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    hands: Option<u64>,
    #[serde(default)]
    starting_stack: Option<Amount>,
    #[serde(default)]
    small_blind: Option<Amount>,
    #[serde(default)]
    big_blind: Option<Amount>,
    #[serde(default)]
    policy: Option<String>,
    #[serde(default)]
    button: Option<usize>,
}

/// Resolves the configuration from the process environment.
pub fn load_with_sources(flags: &Overrides) -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok(), flags)
}

/// Resolves the configuration with `env` standing in for the environment.
pub fn load_from<E>(env: E, flags: &Overrides) -> Result<ConfigResolved, ConfigError>
where
    E: Fn(&str) -> Option<String>,
{
    let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    let path = flags
        .config_path
        .clone()
        .or_else(|| env(ENV_CONFIG).map(PathBuf::from));
    if let Some(path) = path {
        let s = fs::read_to_string(&path).map_err(|e| ConfigError::Io(path.clone(), e))?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.hands {
            cfg.hands = v;
            sources.hands = ValueSource::File;
        }
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v.chips("starting_stack")?;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v.chips("small_blind")?;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v.chips("big_blind")?;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.policy {
            cfg.policy = v;
            sources.policy = ValueSource::File;
        }
        if let Some(v) = f.button {
            cfg.button = v;
            sources.button = ValueSource::File;
        }
    }

    if let Some(seed) = env(ENV_SEED) {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("{ENV_SEED}: invalid seed '{seed}'")))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(hands) = env(ENV_HANDS) {
        cfg.hands = hands
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{ENV_HANDS}: invalid hand count '{hands}'")))?;
        sources.hands = ValueSource::Env;
    }
    if let Some(stack) = env(ENV_STACK) {
        cfg.starting_stack = stack
            .trim()
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("{ENV_STACK}: {e}")))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(policy) = env(ENV_POLICY) {
        cfg.policy = policy.trim().to_string();
        sources.policy = ValueSource::Env;
    }

    if let Some(v) = flags.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Flag;
    }
    if let Some(v) = flags.hands {
        cfg.hands = v;
        sources.hands = ValueSource::Flag;
    }
    if let Some(v) = flags.stack {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::Flag;
    }
    if let Some(v) = &flags.policy {
        cfg.policy = v.clone();
        sources.policy = ValueSource::Flag;
    }
    if let Some(v) = flags.button {
        cfg.button = v;
        sources.button = ValueSource::Flag;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.session(0).validate()?;
    sixmax_ai::table_policies(&cfg.policy, 0).map_err(|e| ConfigError::Invalid(e.to_string()))?;
    Ok(())
}
