//! Server configuration types.
//!
//! [`ServerConfig`] is the single source of truth for all runtime settings.
//! It can be constructed from CLI arguments (preferred for production) or from
//! sensible defaults (useful for local development and tests).
//!
//! Keeping configuration as a plain struct — no global state, no environment
//! variable reads inside the domain — makes the server easy to embed in tests.
//! The binary entry point is responsible for populating the struct from CLI
//! args or environment variables.

use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

/// How the server acknowledges each inbound command frame.
///
/// The reference protocol is a bare echo: the server replies with the original
/// command text unchanged, regardless of dispatch outcome.  That discards
/// failure information, so an opt-in structured mode is offered as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AckMode {
    /// Reply with the original command text unchanged (bit-compatible with
    /// the reference protocol; dispatch failures are invisible to the client).
    #[default]
    Echo,
    /// Reply with a JSON object carrying the command and the dispatch outcome.
    Status,
}

/// Error returned when parsing an [`AckMode`] from a string fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown ack mode '{0}' (expected 'echo' or 'status')")]
pub struct AckModeParseError(pub String);

impl FromStr for AckMode {
    type Err = AckModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "echo" => Ok(Self::Echo),
            "status" => Ok(Self::Status),
            other => Err(AckModeParseError(other.to_string())),
        }
    }
}

/// All runtime configuration for the keywire server.
///
/// Build this struct once at startup (via CLI args or defaults) and then wrap
/// it in an `Arc` so it can be shared cheaply across all session tasks.
///
/// # Example
///
/// ```rust
/// use keywire_server::domain::ServerConfig;
///
/// // Defaults are suitable for local development:
/// let cfg = ServerConfig::default();
/// assert_eq!(cfg.bind_addr.port(), 8765);
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address and port the WebSocket server binds to.
    ///
    /// `0.0.0.0` accepts connections from any network interface (LAN +
    /// localhost).  Set to `127.0.0.1` to accept only local connections —
    /// note that the protocol carries no authentication, so anyone who can
    /// reach the port can inject keystrokes.
    pub bind_addr: SocketAddr,

    /// The acknowledgement mode for inbound command frames.
    pub ack_mode: AckMode,
}

impl Default for ServerConfig {
    /// Returns a `ServerConfig` matching the reference service: all
    /// interfaces, port 8765, plain echo acknowledgements.
    fn default() -> Self {
        Self {
            // Safe: compile-time-known valid socket address string.
            bind_addr: "0.0.0.0:8765".parse().unwrap(),
            ack_mode: AckMode::Echo,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
