//! Desktop key injector backed by `enigo`.
//!
//! `enigo` provides cross-platform synthetic input (SendInput on Windows,
//! XTest/libei on Linux, CGEvent on macOS) behind one API, so a single
//! injector covers every desktop target.
//!
//! `Enigo` is not `Sync`, so the handle sits behind a `std::sync::Mutex`.
//! Chord-level ordering across connections is enforced one layer up by the
//! dispatch guard; this mutex only makes the handle shareable.

use std::sync::Mutex;

use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use keywire_core::{KeyToken, NamedKey};

use crate::application::dispatch_chord::{InjectionError, KeyInjector};

/// Maps a [`KeyToken`] to the corresponding `enigo` key.
///
/// Total over the token vocabulary: every `NamedKey` has an enigo equivalent
/// and literals map to `Key::Unicode`, so dispatch never fails on an
/// unmappable token.
fn to_enigo_key(token: KeyToken) -> Key {
    match token {
        KeyToken::Literal(c) => Key::Unicode(c),
        KeyToken::Named(named) => match named {
            NamedKey::Space => Key::Space,
            NamedKey::Enter => Key::Return,
            NamedKey::Escape => Key::Escape,
            NamedKey::Tab => Key::Tab,
            NamedKey::Delete => Key::Delete,
            NamedKey::Backspace => Key::Backspace,
            NamedKey::Shift => Key::Shift,
            NamedKey::Ctrl => Key::Control,
            NamedKey::Cmd => Key::Meta,
            NamedKey::Alt => Key::Alt,
            NamedKey::Up => Key::UpArrow,
            NamedKey::Down => Key::DownArrow,
            NamedKey::Left => Key::LeftArrow,
            NamedKey::Right => Key::RightArrow,
            NamedKey::Home => Key::Home,
            NamedKey::End => Key::End,
            NamedKey::PageUp => Key::PageUp,
            NamedKey::PageDown => Key::PageDown,
            NamedKey::F1 => Key::F1,
            NamedKey::F2 => Key::F2,
            NamedKey::F3 => Key::F3,
            NamedKey::F4 => Key::F4,
            NamedKey::F5 => Key::F5,
            NamedKey::F6 => Key::F6,
            NamedKey::F7 => Key::F7,
            NamedKey::F8 => Key::F8,
            NamedKey::F9 => Key::F9,
            NamedKey::F10 => Key::F10,
            NamedKey::F11 => Key::F11,
            NamedKey::F12 => Key::F12,
        },
    }
}

/// The production key injector: forwards press/release calls to the OS.
pub struct DesktopKeyInjector {
    enigo: Mutex<Enigo>,
}

impl DesktopKeyInjector {
    /// Connects to the platform input facility.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError::Platform`] if the facility is unavailable —
    /// typically no display server / desktop session, or missing accessibility
    /// permissions on macOS.
    pub fn new() -> Result<Self, InjectionError> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| InjectionError::Platform(e.to_string()))?;
        Ok(Self {
            enigo: Mutex::new(enigo),
        })
    }

    fn emit(&self, token: KeyToken, direction: Direction) -> Result<(), InjectionError> {
        let mut enigo = self
            .enigo
            .lock()
            .map_err(|_| InjectionError::Platform("injector mutex poisoned".to_string()))?;
        enigo
            .key(to_enigo_key(token), direction)
            .map_err(|e| InjectionError::Platform(e.to_string()))
    }
}

impl KeyInjector for DesktopKeyInjector {
    fn press(&self, token: KeyToken) -> Result<(), InjectionError> {
        self.emit(token, Direction::Press)
    }

    fn release(&self, token: KeyToken) -> Result<(), InjectionError> {
        self.emit(token, Direction::Release)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
