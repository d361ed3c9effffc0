//! Key injector implementations.
//!
//! [`desktop`] drives the real OS input facility through `enigo` and is used
//! by the binary.  [`mock`] records calls in memory and is used by unit and
//! integration tests.

pub mod desktop;
pub mod mock;

pub use desktop::DesktopKeyInjector;
pub use mock::MockKeyInjector;
