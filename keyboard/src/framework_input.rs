// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::{key_creator, Keypress};

/// Raw key flags as reported by a component-rendering framework's native
/// keyboard hook.
///
/// Structurally this mirrors [`KeyState`](crate::KeyState): one boolean per
/// special key and per modifier, all present and defaulting to `false`. It is
/// a separate type because it belongs to the collaborator's wire contract,
/// not to this crate's normalized model.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct FrameworkKeyDescriptor {
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

impl Keypress {
    /// Adapter for the component-framework raw source.
    ///
    /// Copies every flag from the raw descriptor onto a freshly created empty
    /// key state and copies the input verbatim. No disambiguation is needed:
    /// the framework already provides discrete boolean flags per key. Never
    /// fails; absent key and input yield an empty keypress (`""`).
    #[must_use]
    pub fn from_framework(
        maybe_key: Option<&FrameworkKeyDescriptor>,
        maybe_input: Option<&str>,
    ) -> Keypress {
        let maybe_key_state = maybe_key.map(|raw| {
            let mut key = key_creator::empty();
            key.up_arrow = raw.up_arrow;
            key.down_arrow = raw.down_arrow;
            key.left_arrow = raw.left_arrow;
            key.right_arrow = raw.right_arrow;
            key.page_up = raw.page_up;
            key.page_down = raw.page_down;
            key.return_key = raw.return_key;
            key.escape = raw.escape;
            key.tab = raw.tab;
            key.backspace = raw.backspace;
            key.delete = raw.delete;
            key.space = raw.space;
            key.home = raw.home;
            key.end = raw.end;
            key.ctrl = raw.ctrl;
            key.shift = raw.shift;
            key.meta = raw.meta;
            key
        });
        Keypress::build_immutable(maybe_key_state, maybe_input)
    }
}

pub(crate) mod converters {
    use super::{FrameworkKeyDescriptor, KeyCode, KeyEvent, KeyModifiers};

    impl From<&KeyEvent> for FrameworkKeyDescriptor {
        /// Typecast / convert a [`KeyEvent`] to the framework's flag record.
        ///
        /// Character codes carry no special flag (the literal character
        /// travels separately as the input string). `BackTab` is reported as
        /// `tab` + `shift`, matching how terminals encode it. Both `ALT` and
        /// `SUPER`/`META` map onto the single `meta` flag, since terminals
        /// report alt-chords with the ESC-prefix meta convention.
        fn from(key_event: &KeyEvent) -> Self {
            let mut raw = FrameworkKeyDescriptor {
                ctrl: key_event.modifiers.intersects(KeyModifiers::CONTROL),
                shift: key_event.modifiers.intersects(KeyModifiers::SHIFT),
                meta: key_event.modifiers.intersects(
                    KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META,
                ),
                ..Default::default()
            };
            match key_event.code {
                KeyCode::Up => raw.up_arrow = true,
                KeyCode::Down => raw.down_arrow = true,
                KeyCode::Left => raw.left_arrow = true,
                KeyCode::Right => raw.right_arrow = true,
                KeyCode::PageUp => raw.page_up = true,
                KeyCode::PageDown => raw.page_down = true,
                KeyCode::Enter => raw.return_key = true,
                KeyCode::Esc => raw.escape = true,
                KeyCode::Tab => raw.tab = true,
                KeyCode::BackTab => {
                    raw.tab = true;
                    raw.shift = true;
                }
                KeyCode::Backspace => raw.backspace = true,
                KeyCode::Delete => raw.delete = true,
                KeyCode::Home => raw.home = true,
                KeyCode::End => raw.end = true,
                KeyCode::Char(' ') => raw.space = true,
                _ => {}
            }
            raw
        }
    }
}
