/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform configuration.
 */

//! Transform configuration.
//!
//! Configuration is read from YAML with kebab-case keys. Every key is
//! optional:
//!
//! ```yaml
//! sectionize: true
//! code-blocks: true
//! code-block-component: BoxedCode
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transforms::DEFAULT_CODE_BLOCK_COMPONENT;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: `code-block-component` must not be empty")]
    EmptyComponent,
}

/// Which passes run, and how they name their output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct MdsectionConfig {
    /// Replace headings with section elements and build the ToC
    pub sectionize: bool,

    /// Replace fenced code blocks with boxed-code elements
    pub code_blocks: bool,

    /// Element name emitted for fenced code blocks
    pub code_block_component: String,
}

impl Default for MdsectionConfig {
    fn default() -> Self {
        Self {
            sectionize: true,
            code_blocks: true,
            code_block_component: DEFAULT_CODE_BLOCK_COMPONENT.to_string(),
        }
    }
}

impl MdsectionConfig {
    /// Parse a YAML config document. An empty document yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.code_block_component.trim().is_empty() {
            return Err(ConfigError::EmptyComponent);
        }
        Ok(())
    }
}
