//! keywire-server library crate.
//!
//! This crate turns textual key-combination commands received over WebSocket
//! into synthetic keyboard input on the host machine.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Client (text frames over WebSocket)
//!         ↕
//! [keywire-server]
//!   ├── domain/           Pure types: ServerConfig, AckMode, ack messages
//!   ├── application/      Chord dispatch + acknowledgement building
//!   └── infrastructure/
//!         ├── ws_server/  WebSocket accept loop (tokio-tungstenite)
//!         ├── injector/   OS key injection (enigo) + recording mock
//!         └── local_ip/   LAN address detection for the startup banner
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no external dependencies beyond serde derives (no I/O, no
//!   async, no frameworks).
//! - `application` depends on `domain` and `keywire-core` only; the OS input
//!   device is abstracted behind the `KeyInjector` trait.
//! - `infrastructure` depends on all other layers plus `tokio`, `tungstenite`
//!   and `enigo`.
//!
//! Separating *what the server does* (resolve a command, play it out in
//! modifier-hold order, acknowledge it) from *how it does it* (WebSocket
//! frames, enigo calls) is what lets the whole command pipeline be tested
//! end-to-end with a recording injector and a loopback socket — no desktop
//! session required.

/// Domain layer: pure configuration and message types (no I/O).
pub mod domain;

/// Application layer: chord dispatch and acknowledgement logic.
pub mod application;

/// Infrastructure layer: WebSocket server and OS key injection.
pub mod infrastructure;
