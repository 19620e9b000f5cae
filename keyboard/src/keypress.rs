// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{KeyState, ModifierKey, SpecialKey};

/// One normalized keyboard event: an optional [`KeyState`] plus an optional
/// literal input character.
///
/// This is the single value type both raw-input adapters produce, regardless
/// of which raw source the event came from. See
/// [`Keypress::from_framework`](crate::framework_input) and
/// [`Keypress::from_readline`](crate::readline_input).
///
/// # Immutability
///
/// The fields are private and there is no public constructor other than
/// [`build_immutable`](Keypress::build_immutable); no method mutates `self`.
/// The only way to get a "changed" keypress is
/// [`set_modifier_key`](Keypress::set_modifier_key), which returns a **new**
/// instance and leaves the original untouched.
///
/// # Canonical string form
///
/// [`Display`] produces the canonical serialization used for equality and
/// shortcut matching: present modifiers in the fixed order `shift`, `ctrl`,
/// `meta`, then either the special-key token or the lower-cased literal
/// input, all joined by `+`. No key and no input serialize to `""`.
///
/// ```
/// use r3bl_keyboard::{key_creator, Keypress};
///
/// let keypress = Keypress::build_immutable(Some(key_creator::ctrl()), Some("a"));
/// assert_eq!(keypress.to_string(), "ctrl+a");
/// assert!(keypress.matches("ctrl+a"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Keypress {
    #[serde(rename = "key")]
    maybe_key: Option<KeyState>,
    #[serde(rename = "input")]
    maybe_input: Option<String>,
}

impl Keypress {
    /// Factory for frozen instances. The caller supplies already-independent
    /// data (`KeyState` is `Copy`, the input is copied here); the returned
    /// value never shares storage with anything the caller holds.
    #[must_use]
    pub fn build_immutable(maybe_key: Option<KeyState>, maybe_input: Option<&str>) -> Self {
        Self {
            maybe_key,
            maybe_input: maybe_input.map(ToOwned::to_owned),
        }
    }

    /// `true` iff any special-key flag is set on the underlying key state.
    #[must_use]
    pub fn is_special_key(&self) -> bool { self.maybe_key.is_some_and(|key| key.is_special()) }

    /// `true` iff any modifier flag is set on the underlying key state. This
    /// is independent of [`is_special_key`](Keypress::is_special_key): a
    /// `shift+tab` keypress is both.
    #[must_use]
    pub fn is_modifier_key(&self) -> bool { self.maybe_key.is_some_and(|key| key.is_modifier()) }

    /// Canonical-string equality. This is the sole equality mechanism used
    /// for shortcut matching.
    #[must_use]
    pub fn matches(&self, selector: &str) -> bool { self.to_string() == selector }

    /// Copy-on-write: a **new** frozen instance with only the given modifier
    /// flag changed. The original is untouched. If there is no underlying
    /// key state this is a no-op copy (the returned value has no key state).
    #[must_use]
    pub fn set_modifier_key(&self, modifier_key: ModifierKey, value: bool) -> Self {
        match self.maybe_key {
            Some(mut key) => {
                key.set_modifier_flag(modifier_key, value);
                Self {
                    maybe_key: Some(key),
                    maybe_input: self.maybe_input.clone(),
                }
            }
            None => self.clone(),
        }
    }

    /// The lower-cased literal input character, or `""` when this event has
    /// no literal input. Total, never fails.
    #[must_use]
    pub fn input(&self) -> String {
        self.maybe_input
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default()
    }

    /// The canonical special/modifier substring of this keypress (no literal
    /// input), or `""` when this event has no key state. Total, never fails.
    #[must_use]
    pub fn key(&self) -> String {
        match self.maybe_key {
            Some(key) => canonical_key_tokens(key).join("+"),
            None => String::new(),
        }
    }
}

/// Modifier tokens in the fixed canonical order, then special-key tokens in
/// the canonical [`SpecialKey`] order.
fn canonical_key_tokens(key: KeyState) -> Vec<&'static str> {
    let mut tokens: Vec<&'static str> = vec![];
    for modifier_key in ModifierKey::iter() {
        if key.modifier_flag(modifier_key) {
            tokens.push(modifier_key.into());
        }
    }
    for special_key in SpecialKey::iter() {
        if key.special_flag(special_key) {
            tokens.push(special_key.into());
        }
    }
    tokens
}

impl Display for Keypress {
    /// Canonical serialization. Unique per distinct logical keypress; when a
    /// special key is present the literal input does not participate (it is
    /// still reachable via [`Keypress::input`]).
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        let mut parts: Vec<String> = vec![];

        if let Some(key) = self.maybe_key {
            for token in canonical_key_tokens(key) {
                parts.push(token.to_owned());
            }
        }

        let has_special_key = self.maybe_key.is_some_and(|key| key.is_special());
        if !has_special_key
            && let Some(input) = self.maybe_input.as_deref()
            && !input.is_empty()
        {
            parts.push(input.to_lowercase());
        }

        write!(formatter, "{}", parts.join("+"))
    }
}
