//! Best-effort LAN address detection for the startup banner.
//!
//! Connecting a UDP socket to a public address makes the OS pick the outbound
//! interface and source address without sending a single packet; reading the
//! socket's local address back then yields the machine's LAN IP.  Purely a
//! diagnostic convenience — clients are free to connect to any interface the
//! listener is bound on.

use std::net::{IpAddr, UdpSocket};

/// Returns the LAN IP the OS would use to reach the public internet, or
/// `None` if the machine has no route (offline hosts, locked-down sandboxes).
pub fn detect() -> Option<IpAddr> {
    let socket = UdpSocket::bind(("0.0.0.0", 0)).ok()?;
    // No traffic is generated: connect() on UDP only sets the default peer.
    socket.connect(("8.8.8.8", 80)).ok()?;
    socket.local_addr().ok().map(|addr| addr.ip())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
