//! # cascade-server
//!
//! Development server support for the Cascade CLI:
//! - TCP port probing and next-free-port scanning
//! - Hot-reload dev server process launch
//! - Opening the served URL in the system browser

pub mod error;
pub mod launch;
pub mod ports;

pub use error::{Error, Result};
pub use launch::{local_url, open_in_browser, DevServer};
pub use ports::{find_next_available_port, is_port_in_use};
