//! Configuration module for the lexc driver.
//!
//! Settings come from a `lexc.toml` file. Command-line flags override
//! whatever the file says.

use clap::ValueEnum;
use dirs::config_dir;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lexc.toml";

/// Which scan outputs to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Emit {
    /// The token sequence
    Tokens,
    /// The symbol table
    Symbols,
    /// Diagnostics only
    Diagnostics,
    /// Tokens, symbols and diagnostics
    #[default]
    All,
}

impl Emit {
    /// Whether the token sequence is printed.
    pub fn tokens(self) -> bool {
        matches!(self, Emit::Tokens | Emit::All)
    }

    /// Whether the symbol table is printed.
    pub fn symbols(self) -> bool {
        matches!(self, Emit::Symbols | Emit::All)
    }

    /// Whether diagnostics are printed.
    pub fn diagnostics(self) -> bool {
        matches!(self, Emit::Diagnostics | Emit::All)
    }
}

/// How scan outputs are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One line per item
    #[default]
    Text,
    /// A single JSON document on stdout
    Json,
}

/// Driver configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Enable debug logging.
    #[serde(default)]
    pub verbose: bool,

    /// Outputs to print.
    #[serde(default)]
    pub emit: Emit,

    /// Output format.
    #[serde(default)]
    pub format: Format,

    /// Quote the offending source line under each text diagnostic.
    #[serde(default = "default_true")]
    pub show_snippets: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            emit: Emit::default(),
            format: Format::default(),
            show_snippets: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. System configuration directory (`<config_dir>/lexc/lexc.toml`)
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content).map_err(|e| match e {
            DriverError::Config(msg) => DriverError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DriverError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("lexc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_system_config)
    }
}
