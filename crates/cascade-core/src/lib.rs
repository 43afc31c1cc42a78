//! # cascade-core
//!
//! Core library for the Cascade CLI providing:
//! - Framework configuration (embedded config.toml)
//! - Shared error types

pub mod config;
pub mod error;

pub use config::{DevServerConfig, FrameworkConfig};
pub use error::{Error, Result};
