//! TCP port probing
//!
//! A port counts as in use when a TCP connection to it on loopback succeeds.
//! The probe targets 127.0.0.1 directly so the result does not depend on how
//! `localhost` resolves.

use crate::error::{Error, Result};
use std::net::{Ipv4Addr, SocketAddr, TcpStream};
use std::time::Duration;

/// Loopback connections either succeed or are refused immediately; the
/// timeout only guards against pathological firewall setups that drop
/// packets instead of rejecting them.
const PROBE_TIMEOUT: Duration = Duration::from_millis(250);

/// Check if a TCP port is already in use on loopback
pub fn is_port_in_use(port: u16) -> bool {
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
    TcpStream::connect_timeout(&addr, PROBE_TIMEOUT).is_ok()
}

/// Find the next available port, scanning linearly from `starting_port`
///
/// Returns `Error::NoFreePort` if every port up to 65535 is occupied.
pub fn find_next_available_port(starting_port: u16) -> Result<u16> {
    scan_from(starting_port, is_port_in_use)
}

fn scan_from(starting_port: u16, mut in_use: impl FnMut(u16) -> bool) -> Result<u16> {
    let mut port = starting_port;
    loop {
        if !in_use(port) {
            return Ok(port);
        }
        port = port.checked_add(1).ok_or(Error::NoFreePort {
            start: starting_port,
        })?;
    }
}
