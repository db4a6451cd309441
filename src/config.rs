//! Configuration file parsing and validation

pub mod argscope_toml;

pub use argscope_toml::{
    CONFIG_ENV_VAR, CONFIG_FILE_NAME, ColorOption, Config, ConfigError, OutputConfig, OutputFormat,
};
