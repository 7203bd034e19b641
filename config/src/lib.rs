//! Configuration loading for numword.
//!
//! ```toml
//! [translate]
//! language = "french"
//! strategy = "chain"
//! default_token = "<?>"
//!
//! [tables.german]
//! "1" = "<eins>"
//! "2" = "<zwei>"
//! ```
//!
//! The file lives at `~/.numword/config.toml` unless `NUMWORD_CONFIG` points
//! elsewhere. A missing file is not an error; defaults apply.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use numword_types::{
    DEFAULT_TOKEN, Language, TableError, Token, TranslationTable, UnknownLanguage,
};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "NUMWORD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("table {table:?}: key {key:?} must be exactly one character")]
    InvalidSymbol { table: String, key: String },
    #[error("table {table:?} is invalid")]
    InvalidTable { table: String, source: TableError },
    #[error("default_token must not be empty")]
    EmptyDefaultToken,
    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguage),
}

/// How input is translated.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One lookup per character.
    #[default]
    Table,
    /// Ordered substitution steps, fallback last.
    Chain,
}

impl Strategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Chain => "chain",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown strategy: {0} (expected \"table\" or \"chain\")")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "chain" => Ok(Self::Chain),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NumwordConfig {
    pub translate: Option<TranslateConfig>,
    /// Custom vocabularies keyed by name. Each maps a one-character key to a token.
    #[serde(default)]
    pub tables: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TranslateConfig {
    /// Built-in language or the name of a custom table. Default: "english".
    pub language: Option<String>,
    #[serde(default)]
    pub strategy: Strategy,
    /// Token for unrecognised symbols. Default: "<?>".
    pub default_token: Option<String>,
}

impl NumwordConfig {
    /// Load from [`config_path`]. `Ok(None)` when there is no config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str::<Self>(&content) {
            Ok(config) => {
                tracing::debug!(
                    path = %path.display(),
                    tables = config.tables.len(),
                    "config loaded"
                );
                Ok(Some(config))
            }
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Configured language or table name, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.translate
            .as_ref()
            .and_then(|translate| translate.language.as_deref())
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.translate
            .as_ref()
            .map(|translate| translate.strategy)
            .unwrap_or_default()
    }

    /// The configured default token, or [`DEFAULT_TOKEN`].
    pub fn default_token(&self) -> Result<Token, ConfigError> {
        match self
            .translate
            .as_ref()
            .and_then(|translate| translate.default_token.as_deref())
        {
            Some(raw) => Token::new(raw).map_err(|_| ConfigError::EmptyDefaultToken),
            None => Ok(DEFAULT_TOKEN),
        }
    }

    /// Resolve `name` to a table: a custom table of that name first, then a
    /// built-in language. The configured default token applies to both.
    pub fn resolve_table(&self, name: &str) -> Result<TranslationTable, ConfigError> {
        let default = self.default_token()?;

        if let Some(entries) = self.tables.get(name) {
            return custom_table(name, entries, default);
        }

        let mut table = Language::parse(name)?.table().clone();
        table.set_default_token(default);
        Ok(table)
    }

    /// Resolve the configured language, `"english"` when unset.
    pub fn active_table(&self) -> Result<TranslationTable, ConfigError> {
        self.resolve_table(self.language().unwrap_or(Language::English.as_str()))
    }
}

fn custom_table(
    name: &str,
    entries: &BTreeMap<String, String>,
    default: Token,
) -> Result<TranslationTable, ConfigError> {
    let mut pairs = Vec::with_capacity(entries.len());
    for (key, token) in entries {
        let mut chars = key.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(symbol), None) => symbol,
            _ => {
                return Err(ConfigError::InvalidSymbol {
                    table: name.to_string(),
                    key: key.clone(),
                });
            }
        };
        pairs.push((symbol, token.as_str()));
    }

    TranslationTable::from_pairs(pairs, default).map_err(|source| ConfigError::InvalidTable {
        table: name.to_string(),
        source,
    })
}

/// `$NUMWORD_CONFIG`, else `~/.numword/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".numword").join("config.toml"))
}
