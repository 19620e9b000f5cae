// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Input-hook integration layer
//!
//! Bridges a raw keypress source into consumer-visible state and drives
//! either a free-form handler or a
//! [`ShortcutToActionMap`](crate::ShortcutToActionMap) lookup on every event.
//!
//! Here's the flow:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ Raw source (exactly one per subscription)   │
//! │ - crossterm EventStream (real terminal)     │
//! │ - broadcast test-double emitter             │
//! │ - push-delivered framework descriptor       │
//! └────────────────┬────────────────────────────┘
//!                  │ raw event, arrival order
//! ┌────────────────▼────────────────────────────┐
//! │ Adapter (readline / framework)              │
//! │ → immutable Keypress                        │
//! └────────────────┬────────────────────────────┘
//!                  │
//! ┌────────────────▼────────────────────────────┐
//! │ KeyboardHook                                │
//! │ (a) latest-keypress watch state             │
//! │ (b) handler fn / shortcut-map dispatch      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The subscription lifecycle is an explicit Detached ⇄ Attached state
//! machine driven by [`KeyboardHook::set_active`](hook::KeyboardHook):
//! attach subscribes to the raw source (engaging raw mode for the real
//! terminal, reference-counted process-wide), detach tears the subscription
//! down and is guaranteed to complete before any re-attach for the same
//! hook. Attach and detach are idempotent by construction: re-running a
//! transition the hook is already in is a no-op, never an error, because the
//! surrounding effect lifecycle can legitimately re-run.

// Attach source files.
pub mod config;
pub mod hook;
pub mod raw_mode_guard;
pub mod terminal_source;

// Re-export.
pub use config::*;
pub use hook::*;
pub use raw_mode_guard::*;
pub use terminal_source::*;
