//! The key token vocabulary: named keys, literal characters, and chords.
//!
//! A command string such as `"ctrl+shift+a"` is resolved into an ordered
//! sequence of [`KeyToken`]s — a [`Chord`].  Tokens are small immutable value
//! objects (`Copy`), so chords can be passed around and inspected freely
//! without ownership concerns.
//!
//! The distinction between [`KeyToken::Named`] and [`KeyToken::Literal`]
//! mirrors the two kinds of keys a client can request:
//!
//! - **Named** keys are the fixed set of special keys (modifiers, navigation,
//!   function keys, whitespace/control keys) that have a keyword in the
//!   symbol table.
//! - **Literal** keys are single printable characters typed as-is.

use serde::{Deserialize, Serialize};

/// The fixed set of special keys recognised by the symbol table.
///
/// This enumeration is closed by design: it is exactly the vocabulary the
/// wire protocol understands.  Adding a variant requires adding a keyword in
/// [`crate::symbols`] and a platform mapping in the server's injector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedKey {
    // Whitespace / control
    Space,
    Enter,
    Escape,
    Tab,
    Delete,
    Backspace,

    // Modifiers
    Shift,
    Ctrl,
    Cmd,
    Alt,

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

/// One abstract unit of keyboard input.
///
/// Either a [`NamedKey`] looked up from the symbol table, or a single literal
/// character.  Because the resolver lowercases the whole command string before
/// tokenising, `Literal` characters are always lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyToken {
    /// A special key with a keyword in the symbol table (e.g. `"ctrl"`).
    Named(NamedKey),
    /// A single printable character to be typed as-is.
    Literal(char),
}

/// An ordered sequence of [`KeyToken`]s derived from one command string.
///
/// Order is significant: it equals the left-to-right order of `+`-separated
/// segments in the command, and the dispatcher relies on it for the
/// modifier-hold press/release pattern (all tokens but the last are held
/// while the last is tapped).
///
/// A chord may be empty — the resolver is a total function, and empty or
/// unparseable input degenerates to an empty chord.  The dispatcher treats an
/// empty chord as an invalid request and reports failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord(Vec<KeyToken>);

impl Chord {
    /// Creates an empty chord.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a token, preserving insertion order.
    pub fn push(&mut self, token: KeyToken) {
        self.0.push(token);
    }

    /// Number of tokens in the chord.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the chord holds no tokens (the resolver's "invalid" output).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the tokens in order.
    pub fn iter(&self) -> std::slice::Iter<'_, KeyToken> {
        self.0.iter()
    }

    /// The tokens as a slice, in order.
    pub fn tokens(&self) -> &[KeyToken] {
        &self.0
    }

    /// Splits the chord into the held prefix and the active (last) token.
    ///
    /// Returns `None` for an empty chord.  For a single-token chord the held
    /// prefix is empty.
    pub fn split_active(&self) -> Option<(&[KeyToken], KeyToken)> {
        self.0.split_last().map(|(last, held)| (held, *last))
    }
}

impl From<Vec<KeyToken>> for Chord {
    fn from(tokens: Vec<KeyToken>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<KeyToken> for Chord {
    fn from_iter<I: IntoIterator<Item = KeyToken>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Chord {
    type Item = &'a KeyToken;
    type IntoIter = std::slice::Iter<'a, KeyToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
