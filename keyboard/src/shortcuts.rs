// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::HashMap,
          fmt::{Debug, Display, Formatter, Result as FmtResult},
          ops::{Deref, DerefMut}};

use crate::{Keypress, DEBUG_KEYBOARD};

/// Zero-argument callback bound to a shortcut string.
pub type Action = Box<dyn Fn() + Send + Sync>;

/// Mapping from canonical shortcut strings (e.g. `ctrl+q`, `shift+tab`) to
/// zero-argument actions.
///
/// Keys are unique and the last insert wins. Insertion order is irrelevant
/// for lookup; the [`Display`] impl sorts the shortcuts, which only matters
/// for display/debugging. The map is owned exclusively by the consumer that
/// created it; [`try_run_action_for_shortcut`] only reads it.
#[derive(Default)]
pub struct ShortcutToActionMap {
    inner: HashMap<String, Action>,
}

impl ShortcutToActionMap {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(capacity),
        }
    }

    /// Bind `shortcut` to `action`, replacing any existing binding (last
    /// write wins). Consumes and returns `self` so maps can be built up in
    /// one chained expression.
    #[must_use]
    pub fn add(mut self, shortcut: impl Into<String>, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.inner.insert(shortcut.into(), Box::new(action));
        self
    }
}

impl Deref for ShortcutToActionMap {
    type Target = HashMap<String, Action>;

    fn deref(&self) -> &Self::Target { &self.inner }
}

impl DerefMut for ShortcutToActionMap {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.inner }
}

impl Debug for ShortcutToActionMap {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter
            .debug_struct("ShortcutToActionMap")
            .field("shortcuts", &sorted_shortcuts(self))
            .finish()
    }
}

impl Display for ShortcutToActionMap {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write!(formatter, "{}", sorted_shortcuts(self).join(", "))
    }
}

fn sorted_shortcuts(map: &ShortcutToActionMap) -> Vec<String> {
    let mut shortcuts: Vec<String> = map.keys().cloned().collect();
    shortcuts.sort();
    shortcuts
}

/// Outcome of [`try_run_action_for_shortcut`]. A miss is an expected,
/// silent outcome, not an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DispatchResult {
    Dispatched,
    NoMatchingShortcut,
}

/// Look up the keypress's canonical string in `map`; if a binding exists,
/// invoke it. Unmatched keypresses are silently ignored.
pub fn try_run_action_for_shortcut(
    keypress: &Keypress,
    map: &ShortcutToActionMap,
) -> DispatchResult {
    let shortcut = keypress.to_string();
    match map.get(&shortcut) {
        Some(action) => {
            action();
            DispatchResult::Dispatched
        }
        None => {
            DEBUG_KEYBOARD.then(|| {
                tracing::debug!(
                    message = "keyboard: no action bound for shortcut",
                    shortcut = %shortcut
                );
            });
            DispatchResult::NoMatchingShortcut
        }
    }
}
