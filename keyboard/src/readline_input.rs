// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{key_creator, KeyState, Keypress};

/// Raw key descriptor as reported by a readline-style keypress stream.
///
/// Unlike [`FrameworkKeyDescriptor`](crate::FrameworkKeyDescriptor), this
/// shape is ambiguous: which of `code` / `name` / `sequence` is populated
/// (and with what) varies by terminal and by key. The adapter resolves the
/// ambiguity in a strict priority order; see [`Keypress::from_readline`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ReadlineKeyDescriptor {
    pub code: Option<String>,
    pub name: Option<String>,
    pub sequence: Option<String>,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

/// Factory signature for the lookup tables below. Each entry hands out a
/// fresh [`KeyState`] so table hits never share storage.
type KeyStateFactoryFn = fn() -> KeyState;

/// Escape-sequence fragments reported in the `code` field. Matched by
/// substring containment, first entry wins.
const CODE_LOOKUP_TABLE: &[(&str, KeyStateFactoryFn)] = &[
    ("[A", key_creator::up_arrow),
    ("[B", key_creator::down_arrow),
    ("[C", key_creator::right_arrow),
    ("[D", key_creator::left_arrow),
    ("[5~", key_creator::page_up),
    ("[6~", key_creator::page_down),
    ("[3~", key_creator::delete),
    ("[H", key_creator::home),
    ("[F", key_creator::end),
];

/// Key names reported in the `name` field. Matched exactly.
const NAME_LOOKUP_TABLE: &[(&str, KeyStateFactoryFn)] = &[
    ("space", key_creator::space),
    ("backspace", key_creator::backspace),
    ("delete", key_creator::delete),
    ("return", key_creator::return_key),
    ("enter", key_creator::return_key),
    ("tab", key_creator::tab),
    ("escape", key_creator::escape),
    ("up", key_creator::up_arrow),
    ("down", key_creator::down_arrow),
    ("left", key_creator::left_arrow),
    ("right", key_creator::right_arrow),
    ("pageup", key_creator::page_up),
    ("pagedown", key_creator::page_down),
    ("home", key_creator::home),
    ("end", key_creator::end),
];

/// Raw escape/control-character sequences reported in the `sequence` field.
/// Matched by substring containment, first entry wins. The bare `ESC` entry
/// must stay last: every `ESC [ …` sequence above contains it.
const SEQUENCE_LOOKUP_TABLE: &[(&str, KeyStateFactoryFn)] = &[
    ("\x1b[A", key_creator::up_arrow),
    ("\x1b[B", key_creator::down_arrow),
    ("\x1b[C", key_creator::right_arrow),
    ("\x1b[D", key_creator::left_arrow),
    ("\x1b[5~", key_creator::page_up),
    ("\x1b[6~", key_creator::page_down),
    ("\x1b[3~", key_creator::delete),
    ("\x1b[H", key_creator::home),
    ("\x1b[F", key_creator::end),
    ("\x1b[Z", key_creator::tab),
    ("\r", key_creator::return_key),
    ("\n", key_creator::return_key),
    ("\t", key_creator::tab),
    ("\x7f", key_creator::backspace),
    (" ", key_creator::space),
    ("\x1b", key_creator::escape),
];

impl Keypress {
    /// Adapter for the readline-style raw source.
    ///
    /// The descriptor is resolved in priority order:
    ///
    /// 1. `code` against [`CODE_LOOKUP_TABLE`] (substring containment).
    /// 2. `name` against [`NAME_LOOKUP_TABLE`] (exact match).
    /// 3. `sequence` against [`SEQUENCE_LOOKUP_TABLE`] (substring
    ///    containment).
    /// 4. A special key resolved by 1-3 gets the descriptor's modifier flags
    ///    applied and that is the result.
    /// 5. No special key, but `ctrl` or `meta` set: a regular character
    ///    chorded with a modifier. The literal character travels in `name`
    ///    here, not in the `input` parameter, because terminals report
    ///    ctrl/meta chords without a usable literal input byte.
    /// 6. Otherwise the plain case: empty key state with the descriptor's
    ///    modifier flags (only `shift` can still be set, since ctrl/meta
    ///    were taken by step 5) and the literal `input`.
    ///
    /// The order of steps 1-3 is load-bearing: a raw event can match more
    /// than one table, and `code` beats `name` beats `sequence`. Never
    /// fails; always returns a concrete (possibly empty) keypress.
    #[must_use]
    pub fn from_readline(
        maybe_key: Option<&ReadlineKeyDescriptor>,
        maybe_input: Option<&str>,
    ) -> Keypress {
        let Some(descriptor) = maybe_key else {
            return Keypress::build_immutable(None, maybe_input);
        };

        let maybe_resolved = resolve_code(descriptor)
            .or_else(|| resolve_name(descriptor))
            .or_else(|| resolve_sequence(descriptor));

        match maybe_resolved {
            Some(mut key) => {
                apply_modifier_flags(&mut key, descriptor);
                Keypress::build_immutable(Some(key), maybe_input)
            }
            None if descriptor.ctrl || descriptor.meta => {
                let mut key = key_creator::empty();
                apply_modifier_flags(&mut key, descriptor);
                Keypress::build_immutable(Some(key), descriptor.name.as_deref())
            }
            None => {
                let mut key = key_creator::empty();
                apply_modifier_flags(&mut key, descriptor);
                Keypress::build_immutable(Some(key), maybe_input)
            }
        }
    }
}

fn resolve_code(descriptor: &ReadlineKeyDescriptor) -> Option<KeyState> {
    let code = descriptor.code.as_deref()?;
    CODE_LOOKUP_TABLE
        .iter()
        .find(|(fragment, _)| code.contains(*fragment))
        .map(|(_, factory)| factory())
}

fn resolve_name(descriptor: &ReadlineKeyDescriptor) -> Option<KeyState> {
    let name = descriptor.name.as_deref()?;
    NAME_LOOKUP_TABLE
        .iter()
        .find(|(entry, _)| name == *entry)
        .map(|(_, factory)| factory())
}

fn resolve_sequence(descriptor: &ReadlineKeyDescriptor) -> Option<KeyState> {
    let sequence = descriptor.sequence.as_deref()?;
    SEQUENCE_LOOKUP_TABLE
        .iter()
        .find(|(fragment, _)| sequence.contains(*fragment))
        .map(|(_, factory)| factory())
}

fn apply_modifier_flags(key: &mut KeyState, descriptor: &ReadlineKeyDescriptor) {
    if descriptor.ctrl {
        key.ctrl = true;
    }
    if descriptor.shift {
        key.shift = true;
    }
    if descriptor.meta {
        key.meta = true;
    }
}
