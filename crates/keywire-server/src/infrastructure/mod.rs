//! Infrastructure layer for keywire-server.
//!
//! Everything that touches the outside world lives here: accepting WebSocket
//! connections, injecting key events into the OS, and probing the local
//! network address for the startup banner.
//!
//! # Responsibilities
//!
//! - Binding a TCP listener and performing WebSocket upgrade handshakes
//! - Running the per-connection command loop (one task per connection)
//! - Driving the OS input facility through the `KeyInjector` trait
//! - Handling the graceful shutdown signal
//!
//! # What does NOT belong here?
//!
//! - Chord resolution and dispatch ordering (application layer)
//! - Message and configuration type definitions (domain layer)
//! - CLI parsing (done in `main.rs`)

pub mod injector;
pub mod local_ip;
pub mod ws_server;

// Re-export the primary entry point so `main.rs` can call it concisely.
pub use ws_server::run_server;
