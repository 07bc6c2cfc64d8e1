use bem_naming_engine::{BemError, NamingRules};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid naming rules in {config_path}: {reason}")]
    InvalidRules { config_path: PathBuf, reason: String },
}

/// On-disk form of the naming rules.
///
/// ```toml
/// bevis = false
/// logic = true
///
/// [delimiters]
/// be = "__"
/// bm = "_"
/// em = "_"
/// mm = "_"
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(flatten)]
    pub rules: NamingRules,
}

impl RulesConfig {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: RulesConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config
            .validate()
            .map_err(|reason| ConfigError::InvalidRules {
                config_path: config_path.to_path_buf(),
                reason,
            })?;

        log::debug!("Loaded naming rules from {}", config_path.display());
        Ok(Some(config))
    }

    /// Loads the user's rules from [`Self::config_path`].
    ///
    /// The rules are meant to be handed to `BemEngine::new` once at startup;
    /// the engine keeps them as its default for every call that doesn't pass
    /// its own rules.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Rules from the user's config file, or the defaults when there is none.
    pub fn load_or_default() -> Result<NamingRules, ConfigError> {
        Ok(Self::load()?.map(|config| config.rules).unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/bem-naming");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn validate(&self) -> Result<(), String> {
        let dms = &self.rules.delimiters;
        for (key, value) in ["be", "bm", "em", "mm"].into_iter().zip(dms.all()) {
            if value.is_empty() {
                return Err(format!("delimiter `{key}` is empty"));
            }
        }
        self.rules.validate().map_err(|e| match e {
            BemError::Config(reason) => reason,
            other => other.to_string(),
        })
    }
}

impl From<NamingRules> for RulesConfig {
    fn from(rules: NamingRules) -> Self {
        Self { rules }
    }
}
