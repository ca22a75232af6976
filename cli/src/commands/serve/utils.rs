//! # DAVID AI Server Utilities
//!
//! File: cli/src/commands/serve/utils.rs
//!
//! ## Overview
//!
//! Helpers for the startup banner of `david serve`. Nothing here affects how
//! requests are handled.
//!
use std::net::{IpAddr, UdpSocket};
use tracing::{debug, warn};

/// # Get Local IP Address (`get_local_ip`)
///
/// Finds the address of the interface the host would use for outbound
/// traffic. A UDP socket is "connected" to a public address, which selects a
/// route without sending any packet. Falls back to `"localhost"` when no
/// non-loopback address can be determined.
pub fn get_local_ip() -> String {
    match outbound_ip() {
        Some(ip) if !ip.is_loopback() && !ip.is_unspecified() => {
            debug!("Found local IP: {}", ip);
            ip.to_string()
        }
        _ => {
            warn!("Could not detect local network IP, falling back to 'localhost'");
            "localhost".to_string()
        }
    }
}

fn outbound_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    socket.local_addr().ok().map(|addr| addr.ip())
}
