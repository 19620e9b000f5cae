// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;
use thiserror::Error;

/// Convenience type alias used across this crate at the terminal-resource
/// seam. Normalization itself is total and never produces one of these; see
/// the error-handling notes on [`crate::input_hook`].
pub type CommonResult<T> = miette::Result<T>;

/// Errors from the terminal-resource layer (TTY detection, raw-mode toggle).
///
/// These never escape to keypress consumers under normal operation: the hook
/// layer absorbs them into degraded mode (`in_raw_mode() == false`) and logs
/// a warning.
#[derive(Debug, Error, Diagnostic)]
pub enum KeyboardError {
    #[error("stdin is not attached to an interactive terminal")]
    NotInteractive,

    #[error("failed to toggle terminal raw mode")]
    RawModeToggle(#[from] std::io::Error),
}
