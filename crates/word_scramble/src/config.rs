//! Game configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use word_scramble_core::Language;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "word_scramble.toml";

/// Environment variable overriding the root word list path.
pub const WORDS_ENV: &str = "WORD_SCRAMBLE_WORDS";

/// Environment variable overriding the dictionary path.
pub const DICTIONARY_ENV: &str = "WORD_SCRAMBLE_DICTIONARY";

/// Configuration for a word scramble game.
///
/// Every field is optional in the file; missing fields fall back to the
/// bundled assets.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Newline-delimited list of root words.
    #[serde(default = "default_word_list")]
    word_list: PathBuf,

    /// Newline-delimited dictionary used to accept words.
    #[serde(default = "default_dictionary")]
    dictionary: PathBuf,

    /// Dictionary language.
    #[serde(default)]
    language: Language,

    /// Log file written while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_word_list() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/start.txt"))
}

#[instrument]
fn default_dictionary() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/dictionary.txt"))
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("word_scramble.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_list: default_word_list(),
            dictionary: default_dictionary(),
            language: Language::default(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(word_list = %config.word_list.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but is invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Applies path overrides from the process environment.
    #[instrument(skip(self))]
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Applies path overrides from `lookup`, keyed by [`WORDS_ENV`] and
    /// [`DICTIONARY_ENV`].
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(WORDS_ENV).filter(|p| !p.is_empty()) {
            debug!(path = %path, "Using {} env var", WORDS_ENV);
            self.word_list = PathBuf::from(path);
        }
        if let Some(path) = lookup(DICTIONARY_ENV).filter(|p| !p.is_empty()) {
            debug!(path = %path, "Using {} env var", DICTIONARY_ENV);
            self.dictionary = PathBuf::from(path);
        }
        self
    }

    /// Applies command-line overrides, which win over everything else.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        word_list: Option<PathBuf>,
        dictionary: Option<PathBuf>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = word_list {
            self.word_list = path;
        }
        if let Some(path) = dictionary {
            self.dictionary = path;
        }
        if let Some(path) = log_file {
            self.log_file = path;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
