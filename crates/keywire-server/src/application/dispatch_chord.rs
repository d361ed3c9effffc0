//! DispatchChordUseCase: plays a resolved chord out as press/release events.
//!
//! This use case sits at the application layer and delegates to a
//! [`KeyInjector`] trait object for OS-level event injection.  The real
//! injector (enigo-backed) lives in the infrastructure layer; tests substitute
//! a recording mock.
//!
//! # The modifier-hold pattern
//!
//! A chord of N tokens is played as strictly nested press/release brackets:
//! the first N-1 tokens are held down in order, the last token is tapped
//! (press then release), and the held tokens are released in *reverse* order.
//!
//! ```text
//! dispatch("ctrl+shift+a"):
//!   press(Ctrl) press(Shift) press('a') release('a') release(Shift) release(Ctrl)
//! ```
//!
//! Releasing in reverse order mirrors standard chord semantics: the
//! last-pressed modifier goes up first.

use std::sync::{Arc, Mutex};

use keywire_core::{Chord, KeyToken};
use thiserror::Error;
use tracing::warn;

/// Error type for key injection operations.
#[derive(Debug, Error)]
pub enum InjectionError {
    /// The platform input facility rejected the event.
    #[error("platform error: {0}")]
    Platform(String),
}

/// Platform-agnostic key injection trait.
///
/// The only two primitives the dispatcher needs: press a key, release a key.
/// The infrastructure layer provides the enigo-backed implementation; tests
/// provide a recording mock.
pub trait KeyInjector: Send + Sync {
    /// Presses (holds down) the given key.
    fn press(&self, token: KeyToken) -> Result<(), InjectionError>;

    /// Releases the given key.
    fn release(&self, token: KeyToken) -> Result<(), InjectionError>;
}

/// The Dispatch Chord use case.
///
/// Owns the injector behind a process-wide dispatch guard: the OS keyboard is
/// a single global shared resource, so the entire press/release sequence of
/// one chord runs under a mutex.  Concurrent connections therefore cannot
/// interleave their key events.
pub struct DispatchChordUseCase {
    injector: Arc<dyn KeyInjector>,
    /// Serialises whole chords, not individual key events.
    guard: Mutex<()>,
}

impl DispatchChordUseCase {
    /// Creates a new use case with the given key injector.
    pub fn new(injector: Arc<dyn KeyInjector>) -> Self {
        Self {
            injector,
            guard: Mutex::new(()),
        }
    }

    /// Plays the chord out in modifier-hold order.
    ///
    /// Returns `false` for an empty chord (no injector calls are made),
    /// `true` when the full press/release sequence completed, and `false`
    /// when the injector reported a failure at any step.  Injection errors
    /// are absorbed here — they are logged, never propagated, so a failing
    /// OS facility can never crash a connection task.
    ///
    /// On failure, every key that was already pressed is released again in
    /// reverse press order on a best-effort basis (further errors are
    /// ignored).  The result is still `false`, and callers should treat the
    /// physical key state as indeterminate.
    pub fn dispatch(&self, chord: &Chord) -> bool {
        let Some((held, active)) = chord.split_active() else {
            return false;
        };

        // Hold the guard for the whole sequence so chords from concurrent
        // connections never interleave.
        let _guard = self.guard.lock().unwrap_or_else(|poisoned| {
            // A poisoned guard only means another thread panicked mid-chord;
            // the lock itself is still usable.
            poisoned.into_inner()
        });

        let mut pressed: Vec<KeyToken> = Vec::with_capacity(chord.len());

        let outcome = self.press_sequence(held, active, &mut pressed);

        if let Err(e) = outcome {
            warn!("chord dispatch failed: {e}");
            // Best-effort unwind of whatever is still held down.
            for token in pressed.iter().rev() {
                let _ = self.injector.release(*token);
            }
            return false;
        }

        true
    }

    /// Runs the nested press/release bracketing, recording each successful
    /// press in `pressed` so the caller can unwind on failure.
    fn press_sequence(
        &self,
        held: &[KeyToken],
        active: KeyToken,
        pressed: &mut Vec<KeyToken>,
    ) -> Result<(), InjectionError> {
        for token in held {
            self.injector.press(*token)?;
            pressed.push(*token);
        }

        self.injector.press(active)?;
        pressed.push(active);
        self.injector.release(active)?;
        pressed.pop();

        for token in held.iter().rev() {
            self.injector.release(*token)?;
            pressed.pop();
        }

        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
