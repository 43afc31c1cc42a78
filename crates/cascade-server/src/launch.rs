//! Dev server process launch
//!
//! The server command line is fixed by the framework config; only the port
//! varies. The child is spawned detached: the CLI returns while the server
//! keeps running with hot reload.

use crate::error::{Error, Result};
use cascade_core::DevServerConfig;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Launcher for the hot-reload development server
#[derive(Debug, Clone)]
pub struct DevServer {
    program: String,
    args: Vec<String>,
}

impl DevServer {
    /// Create a launcher from the framework's dev-server config
    pub fn new(config: &DevServerConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }

    /// Program this launcher will execute
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full argument list for a launch on `port` (program excluded)
    pub fn command_args(&self, port: u16) -> Vec<String> {
        let mut args = self.args.clone();
        args.push("--port".to_string());
        args.push(port.to_string());
        args
    }

    /// Verify the server program exists on PATH
    pub fn check_available(&self) -> Result<PathBuf> {
        which::which(&self.program).map_err(|_| Error::server_not_found(&self.program))
    }

    /// Spawn the server on `port` as a detached child, returning its PID
    ///
    /// The child inherits stdout/stderr so reload and request logs stay
    /// visible in the user's terminal.
    pub fn spawn(&self, port: u16) -> Result<u32> {
        let args = self.command_args(port);
        tracing::debug!("Launching dev server: {} {}", self.program, args.join(" "));

        let child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                source,
            })?;

        Ok(child.id())
    }
}

/// URL the dev server will serve on `port`
pub fn local_url(port: u16) -> String {
    format!("http://localhost:{}", port)
}

/// Open a URL in the system's default browser
pub fn open_in_browser(url: &str) -> Result<()> {
    open::that(url).map_err(|e| Error::browser(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launcher() -> DevServer {
        DevServer::new(&DevServerConfig {
            program: "uvicorn".to_string(),
            args: vec!["app:app".to_string(), "--reload".to_string()],
        })
    }

    #[test]
    fn test_command_args_appends_port() {
        let args = launcher().command_args(8000);
        assert_eq!(args, vec!["app:app", "--reload", "--port", "8000"]);
    }

    #[test]
    fn test_command_args_uses_given_port() {
        let args = launcher().command_args(5000);
        assert_eq!(args.last().unwrap(), "5000");
    }

    #[test]
    fn test_check_available_missing_program() {
        let server = DevServer::new(&DevServerConfig {
            program: "definitely-not-a-real-server-binary".to_string(),
            args: vec![],
        });
        let err = server.check_available().unwrap_err();
        assert!(matches!(err, Error::ServerNotFound { .. }));
    }

    #[test]
    fn test_spawn_missing_program_errors() {
        let server = DevServer::new(&DevServerConfig {
            program: "definitely-not-a-real-server-binary".to_string(),
            args: vec![],
        });
        let err = server.spawn(8000).unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
    }

    #[test]
    fn test_local_url_format() {
        assert_eq!(local_url(8000), "http://localhost:8000");
        assert_eq!(local_url(5173), "http://localhost:5173");
    }
}
