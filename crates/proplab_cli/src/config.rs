//! Proplab configuration file handling
//!
//! `proplab.toml` is optional; every section and field has a default.
//!
//! ```toml
//! [playground]
//! default_component = "Button"
//!
//! [codegen]
//! indent = 4
//! content_placeholder = "<Menu />"
//!
//! [display]
//! color = false
//! ```

use anyhow::{Context, Result};
use proplab_codegen::{SerializerOptions, DEFAULT_CONTENT_PLACEHOLDER};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "proplab.toml";

/// Proplab configuration (proplab.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProplabConfig {
    #[serde(default)]
    pub playground: PlaygroundConfig,
    #[serde(default)]
    pub codegen: CodegenConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    /// File the configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Session settings
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlaygroundConfig {
    /// Component used when a command is given no id
    #[serde(default)]
    pub default_component: Option<String>,
}

/// Code preview settings
#[derive(Debug, Deserialize, Serialize)]
pub struct CodegenConfig {
    /// Spaces per indentation step
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Stand-in for overlay content
    #[serde(default = "default_placeholder")]
    pub content_placeholder: String,
}

fn default_indent() -> usize {
    2
}

fn default_placeholder() -> String {
    DEFAULT_CONTENT_PLACEHOLDER.to_string()
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            content_placeholder: default_placeholder(),
        }
    }
}

/// Terminal output settings
#[derive(Debug, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// ANSI colors in reports
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl ProplabConfig {
    /// Load `proplab.toml` from a directory, falling back to defaults when
    /// there is none
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load(&config_path)
    }

    /// Load an explicit configuration file, which must exist
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let mut config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        config.source = Some(config_path.to_path_buf());

        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ProplabConfig = toml::from_str(content)?;
        if config.codegen.indent == 0 {
            anyhow::bail!("codegen.indent must be at least 1");
        }
        Ok(config)
    }

    pub fn serializer_options(&self) -> SerializerOptions {
        SerializerOptions {
            indent: self.codegen.indent,
            content_placeholder: self.codegen.content_placeholder.clone(),
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
