//! Error types for cascade-server

use thiserror::Error;

/// Result type alias using cascade-server's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Dev server error types
#[derive(Error, Debug)]
pub enum Error {
    /// Port scan exhausted the port range
    #[error("No free TCP port found scanning upward from {start}")]
    NoFreePort { start: u16 },

    /// Server program missing from PATH
    #[error("Dev server '{program}' not found. Please ensure it is installed and in PATH")]
    ServerNotFound { program: String },

    /// Server process failed to start
    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Browser could not be opened
    #[error("Failed to open browser: {0}")]
    Browser(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a server not found error
    pub fn server_not_found(program: impl Into<String>) -> Self {
        Self::ServerNotFound {
            program: program.into(),
        }
    }

    /// Create a browser error
    pub fn browser(message: impl Into<String>) -> Self {
        Self::Browser(message.into())
    }
}
