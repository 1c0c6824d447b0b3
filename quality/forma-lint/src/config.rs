//! Analyzer configuration
//!
//! Thresholds default to the values the playground checker has always used.
//! A project can override them with `.formalintrc.json` or
//! `.formalintrc.yaml`:
//!
//! ```yaml
//! maxLineLength: 100
//! indentWidth: 2
//! entrypoint: start
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_MAX_LINE_LENGTH: usize = 120;
pub const DEFAULT_INDENT_WIDTH: usize = 4;
pub const DEFAULT_CHARS_PER_TOKEN: usize = 4;
pub const DEFAULT_COMPARATIVE_TOKEN_RATIO: f64 = 0.62;
pub const DEFAULT_ENTRYPOINT: &str = "main";

/// File names searched by [`AnalyzerConfig::find_and_load`], in order
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".formalintrc.json",
    ".formalintrc.yaml",
    ".formalintrc.yml",
    ".formalintrc",
    "formalint.json",
    "formalint.yaml",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("Failed to parse JSON config: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("Failed to parse YAML config: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error("Invalid entrypoint pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Tunable thresholds for the heuristic rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzerConfig {
    /// Lines longer than this many characters are flagged
    pub max_line_length: usize,
    /// Leading spaces must be a multiple of this
    pub indent_width: usize,
    /// Characters per estimated token
    pub chars_per_token: usize,
    /// Divisor turning the token estimate into the comparative estimate
    pub comparative_token_ratio: f64,
    /// Name of the function expected to start the program
    pub entrypoint: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            indent_width: DEFAULT_INDENT_WIDTH,
            chars_per_token: DEFAULT_CHARS_PER_TOKEN,
            comparative_token_ratio: DEFAULT_COMPARATIVE_TOKEN_RATIO,
            entrypoint: DEFAULT_ENTRYPOINT.to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = if path.extension().is_some_and(|e| e == "yaml" || e == "yml") {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        config.validate()?;
        Ok(config)
    }

    /// Walk up from `start_dir` and load the first config file found
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let mut current = start_dir.to_path_buf();
        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    debug!("loading config from {}", config_path.display());
                    let config = Self::from_file(&config_path)?;
                    return Ok(Some((config_path, config)));
                }
            }

            if !current.pop() {
                break;
            }
        }

        debug!("no config file found above {}", start_dir.display());
        Ok(None)
    }

    /// Reject values the rules cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_line_length == 0 {
            return Err(ConfigError::Invalid("maxLineLength must be positive".into()));
        }
        if self.indent_width == 0 {
            return Err(ConfigError::Invalid("indentWidth must be positive".into()));
        }
        if self.chars_per_token == 0 {
            return Err(ConfigError::Invalid("charsPerToken must be positive".into()));
        }
        if !self.comparative_token_ratio.is_finite() || self.comparative_token_ratio <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "comparativeTokenRatio must be a positive number, got {}",
                self.comparative_token_ratio
            )));
        }
        if !is_identifier(&self.entrypoint) {
            return Err(ConfigError::Invalid(format!(
                "entrypoint `{}` is not an identifier",
                self.entrypoint
            )));
        }
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
