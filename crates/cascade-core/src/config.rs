//! Framework configuration loading and parsing
//!
//! The CLI ships with a `config.toml` compiled into the binary. It carries the
//! framework's display name, the default development port, and the fixed
//! command line used to launch the hot-reload dev server.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Embedded framework configuration
const EMBEDDED_CONFIG: &str = include_str!("../config.toml");

/// Dev server launch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevServerConfig {
    /// Program to execute (must be on PATH)
    pub program: String,

    /// Fixed arguments passed before `--port N`
    #[serde(default)]
    pub args: Vec<String>,
}

/// Framework configuration shipped with the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkConfig {
    /// Framework display name (e.g. "Cascade")
    pub framework_name: String,

    /// Default development server port
    #[serde(default = "default_port")]
    pub default_port: u16,

    /// Dev server command line
    pub dev_server: DevServerConfig,
}

fn default_port() -> u16 {
    8000
}

impl FrameworkConfig {
    /// Load the configuration embedded at compile time
    pub fn embedded() -> Result<Self> {
        Self::from_toml(EMBEDDED_CONFIG)
    }

    /// Parse a configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Lowercase framework name, used as the CLI/module identifier
    pub fn module_name(&self) -> String {
        self.framework_name.to_lowercase()
    }

    fn validate(&self) -> Result<()> {
        if self.framework_name.trim().is_empty() {
            return Err(Error::invalid_config("framework_name cannot be empty"));
        }

        if self.dev_server.program.trim().is_empty() {
            return Err(Error::invalid_config("dev_server.program cannot be empty"));
        }

        Ok(())
    }
}
