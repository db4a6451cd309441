#![forbid(unsafe_code)]

//! Parsing and validation of `argscope.toml`

use crate::diagnostic::{DEFAULT_ERROR_SYMBOL, DEFAULT_INFO_SYMBOL, Symbols};
use crate::parse::ParseConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "argscope.toml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "ARGSCOPE_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Root of `argscope.toml`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub parse: ParseConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: ColorOption,
    pub format: OutputFormat,
    pub error_symbol: String,
    pub info_symbol: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            color: ColorOption::Auto,
            format: OutputFormat::Human,
            error_symbol: DEFAULT_ERROR_SYMBOL.to_string(),
            info_symbol: DEFAULT_INFO_SYMBOL.to_string(),
        }
    }
}

impl OutputConfig {
    pub fn symbols(&self) -> Symbols {
        Symbols {
            error: self.error_symbol.clone(),
            info: self.info_symbol.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorOption> for termcolor::ColorChoice {
    fn from(option: ColorOption) -> Self {
        match option {
            ColorOption::Auto => termcolor::ColorChoice::Auto,
            ColorOption::Always => termcolor::ColorChoice::Always,
            ColorOption::Never => termcolor::ColorChoice::Never,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl Config {
    /// Parse and validate a TOML document
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path`, or defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Config::load_required(path)
    }

    /// Load a file the user named explicitly; a missing file is an error
    pub fn load_required(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Config::parse(&content, path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from `$ARGSCOPE_CONFIG`, falling back to `./argscope.toml`
    ///
    /// Only the implicit `./argscope.toml` may be absent.
    pub fn discover() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Config::load_required(Path::new(&path)),
            None => Config::load(Path::new(CONFIG_FILE_NAME)),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parse.default_capacity == 0 {
            return Err(ConfigError::Invalid(
                "parse.default_capacity must be at least 1".to_string(),
            ));
        }
        if self.output.error_symbol.is_empty() || self.output.info_symbol.is_empty() {
            return Err(ConfigError::Invalid(
                "output symbols must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
