//! # keywire-core
//!
//! Shared library for keywire containing the key token model, the static
//! command-keyword symbol table, and the chord resolver.
//!
//! This crate is pure: it has zero dependencies on OS APIs, network sockets,
//! or async runtimes.  Everything here can be compiled and unit-tested on any
//! platform without external setup.
//!
//! # Architecture overview
//!
//! keywire is a remote keyboard: a client sends a textual key-combination
//! command (e.g. `"cmd+c"`, `"ctrl+shift+a"`, `"space"`) over the network, and
//! the server replays it as synthetic keyboard input on the host machine.
//!
//! This crate defines the first half of that pipeline:
//!
//! - **`key`** – The vocabulary: [`NamedKey`] (the fixed set of special keys),
//!   [`KeyToken`] (a named key or a literal character), and [`Chord`] (an
//!   ordered sequence of tokens derived from one command string).
//!
//! - **`symbols`** – The static symbol table mapping lowercase command
//!   keywords (`"ctrl"`, `"esc"`, `"page_up"`, ...) to their canonical
//!   [`NamedKey`].
//!
//! - **`resolve`** – The resolver: a total, deterministic function from a raw
//!   command string to a [`Chord`].  It never fails; unparseable input simply
//!   degenerates to an empty chord, which the dispatcher treats as invalid.
//!
//! The second half of the pipeline (driving the OS input device in the correct
//! press/release order) lives in the `keywire-server` crate.

pub mod key;
pub mod resolve;
pub mod symbols;

// Re-export the most-used items at the crate root so callers can write
// `keywire_core::resolve(...)` instead of the longer module paths.
pub use key::{Chord, KeyToken, NamedKey};
pub use resolve::resolve;
