//! The chord resolver: command string → ordered token sequence.
//!
//! [`resolve`] is the single entry point.  It is a *total* function: there is
//! no error type, and no input can make it fail.  Empty or unparseable input
//! degenerates to an empty [`Chord`], which the dispatcher treats as an
//! invalid request.
//!
//! # Grammar
//!
//! ```text
//! command  = segment ('+' segment)*
//! segment  = keyword | character-run
//! ```
//!
//! Each segment is trimmed and matched against the symbol table first; a
//! recognised keyword always wins over character-splitting, so `"esc"` is one
//! `Named(Escape)` token, never three literals.  An unrecognised
//! multi-character segment is expanded into one `Literal` token per character,
//! left to right — this lets a client send a short text run (e.g. `"abc"`)
//! without a dedicated "type text" message.

use crate::key::{Chord, KeyToken};
use crate::symbols;

/// Resolves a raw command string into a [`Chord`].
///
/// The algorithm:
///
/// 1. Empty input → empty chord.
/// 2. Lowercase the entire string, split on `+`, trim whitespace per segment.
/// 3. Per segment, in order: symbol-table keyword → one [`KeyToken::Named`];
///    exactly one character → one [`KeyToken::Literal`]; otherwise one
///    `Literal` per character (an empty segment contributes nothing).
///
/// Segments are not deduplicated and no semantic validation is applied —
/// `"ctrl+ctrl+c"` produces three tokens and the dispatcher will happily
/// press Ctrl twice.  Splitting is purely syntactic.
///
/// The function is pure and deterministic: the same input always yields a
/// structurally equal chord.
///
/// # Examples
///
/// ```rust
/// use keywire_core::{resolve, KeyToken, NamedKey};
///
/// let chord = resolve("ctrl+shift+a");
/// assert_eq!(
///     chord.tokens(),
///     &[
///         KeyToken::Named(NamedKey::Ctrl),
///         KeyToken::Named(NamedKey::Shift),
///         KeyToken::Literal('a'),
///     ]
/// );
/// ```
pub fn resolve(command: &str) -> Chord {
    if command.is_empty() {
        return Chord::new();
    }

    let lowered = command.to_lowercase();
    let mut chord = Chord::new();

    for segment in lowered.split('+') {
        let segment = segment.trim();

        if let Some(named) = symbols::lookup(segment) {
            chord.push(KeyToken::Named(named));
        } else if segment.chars().count() == 1 {
            // Single printable character typed as-is.
            chord.push(KeyToken::Literal(segment.chars().next().unwrap()));
        } else {
            // Unrecognised run of characters: expand left to right.
            // An empty segment (e.g. from "ctrl++c") contributes nothing.
            for ch in segment.chars() {
                chord.push(KeyToken::Literal(ch));
            }
        }
    }

    chord
}

// ── Tests ─────────────────────────────────────────────────────────────────────
