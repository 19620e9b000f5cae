// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Named non-printable keys, distinct from literal characters.
///
/// The declaration order below is the canonical iteration order used when a
/// [`KeyState`](crate::KeyState) is serialized: it determines which token wins
/// if more than one special flag is asserted on a hand-built state (the
/// constructors in [`key_creator`](crate::key_creator) only ever assert one).
///
/// The `strum` display form is the canonical lower-case token that appears in
/// shortcut strings, e.g. [`SpecialKey::UpArrow`] is `uparrow` and
/// [`SpecialKey::PageDown`] is `pagedown`.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, Display, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum SpecialKey {
    UpArrow,
    DownArrow,
    LeftArrow,
    RightArrow,
    PageUp,
    PageDown,
    Return,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,
    Home,
    End,
}

/// Modifier keys that can co-occur with a special key, a literal character, or
/// stand alone (e.g. a bare `ctrl` press).
///
/// The declaration order below is the canonical modifier order in shortcut
/// strings: `shift`, then `ctrl`, then `meta`, regardless of the order in
/// which the flags were set.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, Display, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ModifierKey {
    Shift,
    Ctrl,
    Meta,
}
