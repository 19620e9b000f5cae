// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{ModifierKey, SpecialKey};

/// Which special key and which modifier keys are active for one keyboard
/// event.
///
/// Two disjoint flag sets: one boolean per [`SpecialKey`] and one boolean per
/// [`ModifierKey`], all defaulting to `false`. The constructors in
/// [`key_creator`] only ever assert a single special flag; any number of
/// modifier flags may be true at the same time. The type itself does not
/// enforce the at-most-one-special invariant: a hand-built multi-flag state
/// still serializes deterministically, in [`SpecialKey`] order.
///
/// Always obtain instances from [`key_creator`] (or by copying an existing
/// value). `KeyState` is `Copy`, so there is no shared mutable storage to
/// contaminate between logically distinct key events.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct KeyState {
    pub up_arrow: bool,
    pub down_arrow: bool,
    pub left_arrow: bool,
    pub right_arrow: bool,
    pub page_up: bool,
    pub page_down: bool,
    #[serde(rename = "return")]
    pub return_key: bool,
    pub escape: bool,
    pub tab: bool,
    pub backspace: bool,
    pub delete: bool,
    pub space: bool,
    pub home: bool,
    pub end: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyState {
    /// `true` iff any special-key flag is set.
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.up_arrow
            || self.down_arrow
            || self.left_arrow
            || self.right_arrow
            || self.page_up
            || self.page_down
            || self.return_key
            || self.escape
            || self.tab
            || self.backspace
            || self.delete
            || self.space
            || self.home
            || self.end
    }

    /// `true` iff any modifier flag is set.
    #[must_use]
    pub fn is_modifier(&self) -> bool { self.ctrl || self.shift || self.meta }

    /// Read the flag for one named special key.
    #[must_use]
    pub fn special_flag(&self, special_key: SpecialKey) -> bool {
        match special_key {
            SpecialKey::UpArrow => self.up_arrow,
            SpecialKey::DownArrow => self.down_arrow,
            SpecialKey::LeftArrow => self.left_arrow,
            SpecialKey::RightArrow => self.right_arrow,
            SpecialKey::PageUp => self.page_up,
            SpecialKey::PageDown => self.page_down,
            SpecialKey::Return => self.return_key,
            SpecialKey::Escape => self.escape,
            SpecialKey::Tab => self.tab,
            SpecialKey::Backspace => self.backspace,
            SpecialKey::Delete => self.delete,
            SpecialKey::Space => self.space,
            SpecialKey::Home => self.home,
            SpecialKey::End => self.end,
        }
    }

    /// Read the flag for one modifier key.
    #[must_use]
    pub fn modifier_flag(&self, modifier_key: ModifierKey) -> bool {
        match modifier_key {
            ModifierKey::Shift => self.shift,
            ModifierKey::Ctrl => self.ctrl,
            ModifierKey::Meta => self.meta,
        }
    }

    /// Set the flag for one named special key.
    pub fn set_special_flag(&mut self, special_key: SpecialKey) {
        match special_key {
            SpecialKey::UpArrow => self.up_arrow = true,
            SpecialKey::DownArrow => self.down_arrow = true,
            SpecialKey::LeftArrow => self.left_arrow = true,
            SpecialKey::RightArrow => self.right_arrow = true,
            SpecialKey::PageUp => self.page_up = true,
            SpecialKey::PageDown => self.page_down = true,
            SpecialKey::Return => self.return_key = true,
            SpecialKey::Escape => self.escape = true,
            SpecialKey::Tab => self.tab = true,
            SpecialKey::Backspace => self.backspace = true,
            SpecialKey::Delete => self.delete = true,
            SpecialKey::Space => self.space = true,
            SpecialKey::Home => self.home = true,
            SpecialKey::End => self.end = true,
        }
    }

    /// Set or clear the flag for one modifier key.
    pub fn set_modifier_flag(&mut self, modifier_key: ModifierKey, value: bool) {
        match modifier_key {
            ModifierKey::Shift => self.shift = value,
            ModifierKey::Ctrl => self.ctrl = value,
            ModifierKey::Meta => self.meta = value,
        }
    }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// Factory for fresh [`KeyState`] values, one accessor per named key.
///
/// Every call returns a brand-new instance with exactly the flags for that
/// key set. Nothing in this module hands out a shared default instance, so a
/// caller mutating the value it received can never contaminate another key
/// event.
pub mod key_creator {
    use super::{KeyState, ModifierKey, SpecialKey};

    /// All flags false. The base for building up modifier-augmented or
    /// plain-character keypresses.
    #[must_use]
    pub fn empty() -> KeyState { KeyState::default() }

    /// A fresh state with exactly the flag for `special_key` set.
    #[must_use]
    pub fn special(special_key: SpecialKey) -> KeyState {
        let mut key = empty();
        key.set_special_flag(special_key);
        key
    }

    /// A fresh state with exactly the flag for `modifier_key` set.
    #[must_use]
    pub fn modifier(modifier_key: ModifierKey) -> KeyState {
        let mut key = empty();
        key.set_modifier_flag(modifier_key, true);
        key
    }

    #[must_use]
    pub fn up_arrow() -> KeyState { special(SpecialKey::UpArrow) }

    #[must_use]
    pub fn down_arrow() -> KeyState { special(SpecialKey::DownArrow) }

    #[must_use]
    pub fn left_arrow() -> KeyState { special(SpecialKey::LeftArrow) }

    #[must_use]
    pub fn right_arrow() -> KeyState { special(SpecialKey::RightArrow) }

    #[must_use]
    pub fn page_up() -> KeyState { special(SpecialKey::PageUp) }

    #[must_use]
    pub fn page_down() -> KeyState { special(SpecialKey::PageDown) }

    #[must_use]
    pub fn return_key() -> KeyState { special(SpecialKey::Return) }

    #[must_use]
    pub fn escape() -> KeyState { special(SpecialKey::Escape) }

    #[must_use]
    pub fn tab() -> KeyState { special(SpecialKey::Tab) }

    #[must_use]
    pub fn backspace() -> KeyState { special(SpecialKey::Backspace) }

    #[must_use]
    pub fn delete() -> KeyState { special(SpecialKey::Delete) }

    #[must_use]
    pub fn space() -> KeyState { special(SpecialKey::Space) }

    #[must_use]
    pub fn home() -> KeyState { special(SpecialKey::Home) }

    #[must_use]
    pub fn end() -> KeyState { special(SpecialKey::End) }

    #[must_use]
    pub fn shift() -> KeyState { modifier(ModifierKey::Shift) }

    #[must_use]
    pub fn ctrl() -> KeyState { modifier(ModifierKey::Ctrl) }

    #[must_use]
    pub fn meta() -> KeyState { modifier(ModifierKey::Meta) }
}
