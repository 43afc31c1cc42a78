//! Run command
//!
//! Starts the hot-reload development server on the requested port, falling
//! back to the next free port (after confirmation) when it is taken, then
//! opens the app in the system browser.

use anyhow::{anyhow, Context, Result};
use cascade_core::FrameworkConfig;
use cascade_server::{
    find_next_available_port, is_port_in_use, local_url, open_in_browser, DevServer,
};
use dialoguer::Confirm;

use crate::cli::RunArgs;
use crate::output;

pub fn run(args: RunArgs) -> Result<()> {
    let config =
        FrameworkConfig::embedded().context("Failed to load framework configuration")?;

    let requested = args.port.unwrap_or(config.default_port);
    let port = match resolve_port(requested, args.yes)? {
        Some(port) => port,
        None => {
            // User declined the fallback port
            output::info("Not starting the server. Re-run with --port to pick another port.");
            return Ok(());
        }
    };

    let server = DevServer::new(&config.dev_server);
    if let Err(e) = server.check_available() {
        output::error(&e.to_string());
        output::info(&format!(
            "The {} dev server runs through '{}'. Install it and try again.",
            config.framework_name,
            server.program()
        ));
        return Err(e.into());
    }

    output::info(&format!(
        "Starting {} on port {}...",
        server.program(),
        port
    ));
    let pid = server.spawn(port)?;
    tracing::debug!("Dev server running with PID {}", pid);

    let url = local_url(port);
    output::success(&format!("Development server running at {}", url));

    if args.no_browser {
        return Ok(());
    }

    output::info(&format!("Opening {} in your default browser", url));
    if let Err(e) = open_in_browser(&url) {
        // The server is already up; a browser failure is not fatal
        output::warning(&e.to_string());
    }

    Ok(())
}

/// Resolve the port to serve on.
///
/// Returns `Ok(None)` when the requested port is taken and the user declines
/// the next-available fallback.
fn resolve_port(requested: u16, assume_yes: bool) -> Result<Option<u16>> {
    resolve_port_with(requested, assume_yes, |start| {
        Confirm::new()
            .with_prompt(format!(
                "Use the next available port (starting from {})?",
                start
            ))
            .default(false)
            .interact()
            .context("Failed to read confirmation")
    })
}

/// Port resolution with the confirmation prompt injected.
///
/// `confirm` receives the first fallback candidate and is only invoked when
/// the requested port is taken and `assume_yes` is not set.
fn resolve_port_with(
    requested: u16,
    assume_yes: bool,
    confirm: impl FnOnce(u16) -> Result<bool>,
) -> Result<Option<u16>> {
    if !is_port_in_use(requested) {
        return Ok(Some(requested));
    }

    output::warning(&format!("Port {} is already in use.", requested));

    let start = requested
        .checked_add(1)
        .ok_or_else(|| anyhow!("No ports available above {}", requested))?;

    let accepted = assume_yes || confirm(start)?;
    if !accepted {
        return Ok(None);
    }

    let port = find_next_available_port(start)?;
    output::info(&format!("Using port {} instead.", port));
    Ok(Some(port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    fn occupied_port() -> (TcpListener, u16) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        (listener, port)
    }

    #[test]
    fn test_free_port_used_without_prompting() {
        let (listener, port) = occupied_port();
        drop(listener);

        let resolved = resolve_port_with(port, false, |_| panic!("prompt should not be shown"));
        assert_eq!(resolved.unwrap(), Some(port));
    }

    #[test]
    fn test_accepting_fallback_picks_next_free_port() {
        let (_listener, port) = occupied_port();

        let resolved = resolve_port_with(port, false, |start| {
            assert_eq!(start, port + 1);
            Ok(true)
        });
        let chosen = resolved.unwrap().unwrap();
        assert!(chosen > port);
    }

    #[test]
    fn test_declining_fallback_resolves_to_none() {
        let (_listener, port) = occupied_port();

        let resolved = resolve_port_with(port, false, |_| Ok(false));
        assert_eq!(resolved.unwrap(), None);
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let (_listener, port) = occupied_port();

        let resolved = resolve_port_with(port, true, |_| panic!("prompt should not be shown"));
        let chosen = resolved.unwrap().unwrap();
        assert!(chosen > port);
    }
}
