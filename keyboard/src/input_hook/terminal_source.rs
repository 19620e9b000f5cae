// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::RawKeypressEvent;
use crate::ReadlineKeyDescriptor;

/// Typecast / convert a crossterm [`KeyEvent`] into the readline-style raw
/// event shape that feeds [`Keypress::from_readline`](crate::Keypress).
///
/// This reproduces what a readline keypress stream reports for the same
/// physical key: a lower-case `name`, the escape-sequence fragment in `code`
/// for keys that have one, the raw byte `sequence`, and discrete
/// ctrl/meta/shift booleans. Ctrl/meta chords deliberately carry no literal
/// `input` string — the character travels in `name` — matching how terminals
/// report chorded keys.
///
/// Only `KeyEventKind::Press` is translated. In terminals without the kitty
/// keyboard protocol the kind is always `Press`; where the protocol is
/// active, repeat/release events are dropped here so each physical keypress
/// produces exactly one raw event. Keys outside the supported special set
/// (function keys, media keys, …) translate to `None`.
#[must_use]
pub fn readline_event_from_key_event(key_event: &KeyEvent) -> Option<RawKeypressEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key_event.modifiers.intersects(KeyModifiers::CONTROL);
    let shift = key_event.modifiers.intersects(KeyModifiers::SHIFT);
    let meta = key_event
        .modifiers
        .intersects(KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META);

    let mut descriptor = ReadlineKeyDescriptor {
        ctrl,
        meta,
        shift,
        ..Default::default()
    };
    let mut input: Option<String> = None;

    match key_event.code {
        KeyCode::Up => describe(&mut descriptor, "up", Some("[A"), "\x1b[A"),
        KeyCode::Down => describe(&mut descriptor, "down", Some("[B"), "\x1b[B"),
        KeyCode::Right => describe(&mut descriptor, "right", Some("[C"), "\x1b[C"),
        KeyCode::Left => describe(&mut descriptor, "left", Some("[D"), "\x1b[D"),
        KeyCode::PageUp => describe(&mut descriptor, "pageup", Some("[5~"), "\x1b[5~"),
        KeyCode::PageDown => describe(&mut descriptor, "pagedown", Some("[6~"), "\x1b[6~"),
        KeyCode::Home => describe(&mut descriptor, "home", Some("[H"), "\x1b[H"),
        KeyCode::End => describe(&mut descriptor, "end", Some("[F"), "\x1b[F"),
        KeyCode::Delete => describe(&mut descriptor, "delete", Some("[3~"), "\x1b[3~"),
        KeyCode::Enter => describe(&mut descriptor, "return", None, "\r"),
        KeyCode::Tab => describe(&mut descriptor, "tab", None, "\t"),
        KeyCode::BackTab => {
            describe(&mut descriptor, "tab", None, "\x1b[Z");
            descriptor.shift = true;
        }
        KeyCode::Backspace => describe(&mut descriptor, "backspace", None, "\x7f"),
        KeyCode::Esc => describe(&mut descriptor, "escape", None, "\x1b"),
        KeyCode::Char(' ') => {
            describe(&mut descriptor, "space", None, " ");
            input = Some(" ".to_owned());
        }
        KeyCode::Char(character) => {
            descriptor.name = Some(character.to_lowercase().to_string());
            descriptor.sequence = Some(character.to_string());
            // Chorded ctrl/meta events have no usable literal input byte.
            if !ctrl && !meta {
                input = Some(character.to_string());
            }
        }
        _ => return None,
    }

    Some(RawKeypressEvent {
        input,
        key: descriptor,
    })
}

fn describe(
    descriptor: &mut ReadlineKeyDescriptor,
    name: &str,
    maybe_code: Option<&str>,
    sequence: &str,
) {
    descriptor.name = Some(name.to_owned());
    descriptor.code = maybe_code.map(ToOwned::to_owned);
    descriptor.sequence = Some(sequence.to_owned());
}
