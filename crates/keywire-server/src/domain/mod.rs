//! Domain layer for keywire-server.
//!
//! Pure business-logic types with no dependencies on I/O, networking, or
//! external frameworks, so they can be tested in isolation and shared freely
//! across session tasks.
//!
//! # What belongs in the domain layer?
//!
//! - Configuration structures ([`ServerConfig`], [`AckMode`])
//! - Acknowledgement message types (the JSON "language" of status mode)
//!
//! # What does NOT belong here?
//!
//! - Any `tokio`, `TcpStream`, or `WebSocket` types
//! - OS input calls or environment variable reading

pub mod config;
pub mod messages;

pub use config::{AckMode, AckModeParseError, ServerConfig};
pub use messages::ServerAck;
