//! Mock key injector for testing.
//!
//! # Why a mock injector?
//!
//! The real [`DesktopKeyInjector`](super::DesktopKeyInjector) makes OS API
//! calls that:
//!
//! - Require a desktop session to run.
//! - Actually press keys on the test machine.
//! - Cannot be observed directly from Rust test code.
//!
//! The `MockKeyInjector` replaces all OS calls with in-memory recording.
//! Each press/release is pushed into a `Mutex<Vec<...>>` so assertions can
//! inspect exactly what was emitted and in what order.
//!
//! # Usage in tests
//!
//! ```ignore
//! let injector = Arc::new(MockKeyInjector::new());
//! let dispatcher = DispatchChordUseCase::new(Arc::clone(&injector) as _);
//!
//! dispatcher.dispatch(&resolve("space"));
//!
//! assert_eq!(
//!     injector.calls(),
//!     vec![
//!         KeyCall::Press(KeyToken::Named(NamedKey::Space)),
//!         KeyCall::Release(KeyToken::Named(NamedKey::Space)),
//!     ]
//! );
//! ```
//!
//! # `should_fail` flag
//!
//! Construct with `should_fail = true` to make every call return an error.
//! This exercises error-handling paths without needing a broken OS.

use std::sync::Mutex;

use keywire_core::KeyToken;

use crate::application::dispatch_chord::{InjectionError, KeyInjector};

/// One recorded injector call, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCall {
    Press(KeyToken),
    Release(KeyToken),
}

/// A mock injector that records all calls without performing OS API calls.
///
/// The call log lives in a `Mutex<Vec<...>>` so tests can safely share the
/// injector across threads (e.g., when wrapping it in an `Arc`).
#[derive(Default)]
pub struct MockKeyInjector {
    /// Every press/release in call order.
    pub calls: Mutex<Vec<KeyCall>>,
    /// When `true`, every method immediately returns `InjectionError::Platform`.
    pub should_fail: bool,
}

impl MockKeyInjector {
    /// Creates a new `MockKeyInjector` with an empty log and `should_fail = false`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the call log.
    pub fn calls(&self) -> Vec<KeyCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl KeyInjector for MockKeyInjector {
    /// Records the press, or returns an error if `should_fail` is set.
    fn press(&self, token: KeyToken) -> Result<(), InjectionError> {
        if self.should_fail {
            return Err(InjectionError::Platform("mock failure".into()));
        }
        self.calls.lock().unwrap().push(KeyCall::Press(token));
        Ok(())
    }

    /// Records the release, or returns an error if `should_fail` is set.
    fn release(&self, token: KeyToken) -> Result<(), InjectionError> {
        if self.should_fail {
            return Err(InjectionError::Platform("mock failure".into()));
        }
        self.calls.lock().unwrap().push(KeyCall::Release(token));
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
