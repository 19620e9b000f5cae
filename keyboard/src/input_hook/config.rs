// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{Keypress, ReadlineKeyDescriptor, ShortcutToActionMap};

/// Free-form handler invoked with every normalized keypress.
pub type SafeKeypressHandler = Box<dyn FnMut(Keypress) + Send>;

/// Factory producing a [`ShortcutToActionMap`] for the
/// [`KeyboardHandler::MapCached`] configuration.
pub type SafeMapFactory = Box<dyn FnMut() -> ShortcutToActionMap + Send>;

/// What the hook does with each normalized keypress.
pub enum KeyboardHandler {
    /// Every keypress is passed to the handler.
    Fun(SafeKeypressHandler),

    /// Every keypress's canonical string is looked up in the map; a hit
    /// invokes the bound action, a miss is silently ignored.
    Map(ShortcutToActionMap),

    /// Same as [`KeyboardHandler::Map`], but the map is built lazily from
    /// the factory, once per attachment: it is recomputed only when the
    /// active/inactive flag flips, not per event.
    MapCached(SafeMapFactory),
}

impl Debug for KeyboardHandler {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            KeyboardHandler::Fun(_) => write!(formatter, "KeyboardHandler::Fun"),
            KeyboardHandler::Map(map) => {
                write!(formatter, "KeyboardHandler::Map({map})")
            }
            KeyboardHandler::MapCached(_) => write!(formatter, "KeyboardHandler::MapCached"),
        }
    }
}

/// One raw event from the readline-style source (real terminal stream or
/// test-double emitter): the literal input string, if the terminal reported
/// a usable one, plus the raw key descriptor.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RawKeypressEvent {
    pub input: Option<String>,
    pub key: ReadlineKeyDescriptor,
}

/// Sender half of a raw-event channel; this is what a test hands to
/// [`TestingOverride`].
pub type RawEventSender = tokio::sync::broadcast::Sender<RawKeypressEvent>;

/// Receiver half of a raw-event channel, held by one subscription.
pub type RawEventReceiver = tokio::sync::broadcast::Receiver<RawKeypressEvent>;

/// Redirects the raw-event source from the real terminal stream to the
/// provided emitter, so normalization and dispatch can be exercised without
/// a real TTY. The emitter is consumer-scoped: it bypasses the TTY check and
/// the process-wide raw-mode bookkeeping entirely.
#[derive(Clone, Debug)]
pub struct TestingOverride {
    pub emitter: RawEventSender,
}

/// Recognized configuration for [`KeyboardHook`](super::KeyboardHook).
#[derive(Debug)]
pub struct KeyboardHookOptions {
    /// When false, no subscription is attached (or an existing one is torn
    /// down); when it flips true, a fresh subscription is attached.
    pub is_active: bool,

    /// See [`TestingOverride`].
    pub testing: Option<TestingOverride>,
}

impl Default for KeyboardHookOptions {
    fn default() -> Self {
        Self {
            is_active: true,
            testing: None,
        }
    }
}
