// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words keypress keypresses chorded readline tuify

//! # r3bl_keyboard
//!
//! Keyboard input normalization and shortcut dispatch for TTY apps.
//!
//! Terminal keypress data arrives in two structurally different, loosely
//! specified shapes: a component-framework input hook reports discrete
//! boolean flags per key, while a readline-style raw stream reports an
//! ambiguous `code` / `name` / `sequence` descriptor. This crate unifies
//! both into one immutable, comparable [`Keypress`] value with a canonical
//! string form (`ctrl+q`, `shift+tab`, `uparrow`, …), and dispatches those
//! canonical strings through a [`ShortcutToActionMap`].
//!
//! Here's the flow:
//!
//! ```text
//! ┌──────────────────────────┐  ┌──────────────────────────────┐
//! │ Framework input hook     │  │ Readline-style raw stream    │
//! │ (flags per key)          │  │ (code / name / sequence)     │
//! └───────────┬──────────────┘  └──────────────┬───────────────┘
//!             │                                │
//! ┌───────────▼──────────────┐  ┌──────────────▼───────────────┐
//! │ Keypress::from_framework │  │ Keypress::from_readline      │
//! │ (exhaustive flag copy)   │  │ (code → name → sequence      │
//! │                          │  │  priority resolution)        │
//! └───────────┬──────────────┘  └──────────────┬───────────────┘
//!             └───────────────┬────────────────┘
//!                             │ immutable Keypress
//!             ┌───────────────▼────────────────┐
//!             │ KeyboardHook                   │
//!             │ (a) latest-keypress state      │
//!             │ (b) handler / shortcut lookup  │
//!             └────────────────────────────────┘
//! ```
//!
//! # Module Map
//!
//! - [`special_key`] - canonical [`SpecialKey`] / [`ModifierKey`]
//!   enumerations and their lower-case tokens
//! - [`key_state`] - the [`KeyState`] flag record and the [`key_creator`]
//!   factory
//! - [`keypress`] - the immutable [`Keypress`] value type
//! - [`framework_input`] - adapter A, from framework flag records
//! - [`readline_input`] - adapter B, from readline-style descriptors
//! - [`shortcuts`] - [`ShortcutToActionMap`] and
//!   [`try_run_action_for_shortcut`]
//! - [`input_hook`] - the [`KeyboardHook`] integration layer, raw-mode
//!   bookkeeping, and the real terminal source
//!
//! # Failure philosophy
//!
//! Keyboard input is inherently noisy and must never crash the UI.
//! Malformed or absent raw input resolves to a well-formed (possibly empty)
//! [`Keypress`]; an unmatched shortcut is silently ignored; a missing TTY
//! degrades to `in_raw_mode() == false` with no events delivered. Nothing in
//! the normalization path returns an error.

// Attach source files.
pub mod decl_macros;
pub mod framework_input;
pub mod input_hook;
pub mod key_state;
pub mod keyboard_error;
pub mod keypress;
pub mod readline_input;
pub mod shortcuts;
pub mod special_key;

// Re-export.
pub use framework_input::*;
pub use input_hook::*;
pub use key_state::*;
pub use keyboard_error::*;
pub use keypress::*;
pub use readline_input::*;
pub use shortcuts::*;
pub use special_key::*;

/// Enable copious debug logging of every keypress flowing through the hook
/// layer (via `tracing`). Off by default; per-event chatter is too noisy for
/// normal operation.
pub const DEBUG_KEYBOARD: bool = false;

#[cfg(test)]
mod test_keypress;
#[cfg(test)]
mod test_readline_input;
