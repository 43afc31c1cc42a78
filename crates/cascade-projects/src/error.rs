//! Error types for cascade-projects

use thiserror::Error;

/// Result type alias using cascade-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// App already exists
    #[error("An app already exists at: {path}")]
    AppExists { path: String },

    /// Invalid app name
    #[error("Invalid app name: {name}. Use letters, digits, hyphens and underscores")]
    InvalidAppName { name: String },

    /// Template not found in the embedded skeleton
    #[error("Template not found: {template}")]
    TemplateNotFound { template: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an app exists error
    pub fn app_exists(path: impl Into<String>) -> Self {
        Self::AppExists { path: path.into() }
    }

    /// Create an invalid app name error
    pub fn invalid_app_name(name: impl Into<String>) -> Self {
        Self::InvalidAppName { name: name.into() }
    }

    /// Create a template not found error
    pub fn template_not_found(template: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            template: template.into(),
        }
    }
}
