//! The static command-keyword symbol table.
//!
//! Maps lowercase command keywords (`"ctrl"`, `"esc"`, `"page_up"`, ...) to
//! their canonical [`NamedKey`].  The table is a `match` over `&str`: it is
//! baked into the binary at compile time, needs no initialisation or
//! synchronisation, and lookups are case-sensitive on purpose — the resolver
//! lowercases the whole command string before looking anything up.
//!
//! A few keywords are aliases for the same key (`return`/`enter`,
//! `esc`/`escape`, `option`/`alt`); every keyword still maps to exactly one
//! canonical token.

use crate::key::NamedKey;

/// Every keyword the symbol table recognises, in table order.
///
/// Exposed so tests (and future diagnostics) can enumerate the full keyword
/// vocabulary without duplicating it.
pub const KEYWORDS: [&str; 33] = [
    "space",
    "enter",
    "return",
    "escape",
    "esc",
    "tab",
    "shift",
    "ctrl",
    "cmd",
    "option",
    "alt",
    "delete",
    "backspace",
    "up",
    "down",
    "left",
    "right",
    "home",
    "end",
    "page_up",
    "page_down",
    "f1",
    "f2",
    "f3",
    "f4",
    "f5",
    "f6",
    "f7",
    "f8",
    "f9",
    "f10",
    "f11",
    "f12",
];

/// Looks up a lowercase keyword in the symbol table.
///
/// Returns `None` for anything that is not a recognised keyword; the resolver
/// then falls back to literal-character treatment.
pub fn lookup(keyword: &str) -> Option<NamedKey> {
    match keyword {
        "space" => Some(NamedKey::Space),
        "enter" | "return" => Some(NamedKey::Enter),
        "escape" | "esc" => Some(NamedKey::Escape),
        "tab" => Some(NamedKey::Tab),
        "shift" => Some(NamedKey::Shift),
        "ctrl" => Some(NamedKey::Ctrl),
        "cmd" => Some(NamedKey::Cmd),
        "option" | "alt" => Some(NamedKey::Alt),
        "delete" => Some(NamedKey::Delete),
        "backspace" => Some(NamedKey::Backspace),
        "up" => Some(NamedKey::Up),
        "down" => Some(NamedKey::Down),
        "left" => Some(NamedKey::Left),
        "right" => Some(NamedKey::Right),
        "home" => Some(NamedKey::Home),
        "end" => Some(NamedKey::End),
        "page_up" => Some(NamedKey::PageUp),
        "page_down" => Some(NamedKey::PageDown),
        "f1" => Some(NamedKey::F1),
        "f2" => Some(NamedKey::F2),
        "f3" => Some(NamedKey::F3),
        "f4" => Some(NamedKey::F4),
        "f5" => Some(NamedKey::F5),
        "f6" => Some(NamedKey::F6),
        "f7" => Some(NamedKey::F7),
        "f8" => Some(NamedKey::F8),
        "f9" => Some(NamedKey::F9),
        "f10" => Some(NamedKey::F10),
        "f11" => Some(NamedKey::F11),
        "f12" => Some(NamedKey::F12),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
