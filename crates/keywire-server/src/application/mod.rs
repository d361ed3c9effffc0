//! Application layer for keywire-server.
//!
//! Use cases that orchestrate the domain types against abstract
//! infrastructure: playing a resolved chord out through a [`KeyInjector`] and
//! building the acknowledgement frame for a processed command.
//!
//! Nothing in this layer touches sockets or the OS input device directly —
//! the injector is a trait implemented in the infrastructure layer (and by a
//! recording mock in tests).

pub mod acknowledge;
pub mod dispatch_chord;

pub use acknowledge::build_ack;
pub use dispatch_chord::{DispatchChordUseCase, InjectionError, KeyInjector};
