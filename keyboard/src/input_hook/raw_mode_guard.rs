// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{stdin, IsTerminal},
          sync::atomic::{AtomicUsize, Ordering}};

use crate::{ok, CommonResult, KeyboardError};

/// Number of live [`RawModeGuard`]s across the whole process.
///
/// The real terminal input stream is a process-wide singleton, and so is the
/// raw-mode toggle. Raw mode is engaged when this count goes 0 → 1 and
/// disengaged only when it returns to 0, so one consumer's teardown cannot
/// disable input for another consumer that is still attached.
static RAW_MODE_LISTENER_COUNT: AtomicUsize = AtomicUsize::new(0);

/// Does stdin belong to an interactive terminal?
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IsTTYResult {
    IsTTY,
    IsNotTTY,
}

/// If you run `echo "test" | cargo run` the following will return
/// [`IsTTYResult::IsNotTTY`].
#[must_use]
pub fn is_tty() -> IsTTYResult {
    match stdin().is_terminal() {
        true => IsTTYResult::IsTTY,
        false => IsTTYResult::IsNotTTY,
    }
}

/// RAII handle on the process-wide raw-mode resource.
///
/// Obtain one via [`RawModeGuard::try_engage`] before subscribing to the
/// real terminal stream; drop it when the subscription detaches. The
/// underlying `crossterm` raw-mode toggle only fires on the first engage and
/// the last drop.
#[derive(Debug)]
pub struct RawModeGuard {
    // Not constructible outside `try_engage`.
    _private: (),
}

impl RawModeGuard {
    /// Register one listener on the shared terminal input stream, enabling
    /// raw mode if this is the first one.
    ///
    /// # Errors
    ///
    /// - [`KeyboardError::NotInteractive`] when stdin is not a TTY; raw mode
    ///   is never attempted in that case.
    /// - [`KeyboardError::RawModeToggle`] when the terminal rejects the raw
    ///   mode switch; the listener registration is rolled back.
    pub fn try_engage() -> CommonResult<RawModeGuard> {
        if is_tty() == IsTTYResult::IsNotTTY {
            return Err(KeyboardError::NotInteractive.into());
        }

        let previous_count = RAW_MODE_LISTENER_COUNT.fetch_add(1, Ordering::SeqCst);
        if previous_count == 0 {
            if let Err(error) = crossterm::terminal::enable_raw_mode() {
                RAW_MODE_LISTENER_COUNT.fetch_sub(1, Ordering::SeqCst);
                return Err(KeyboardError::RawModeToggle(error).into());
            }
            tracing::debug!(message = "keyboard: raw mode engaged (first listener)");
        }

        ok!(RawModeGuard { _private: () })
    }

    /// Current number of live guards in this process.
    #[must_use]
    pub fn listener_count() -> usize { RAW_MODE_LISTENER_COUNT.load(Ordering::SeqCst) }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let previous_count = RAW_MODE_LISTENER_COUNT.fetch_sub(1, Ordering::SeqCst);
        if previous_count == 1 {
            if let Err(error) = crossterm::terminal::disable_raw_mode() {
                tracing::warn!(
                    message = "keyboard: failed to disable raw mode on last listener detach",
                    error = ?error
                );
            } else {
                tracing::debug!(message = "keyboard: raw mode disengaged (last listener)");
            }
        }
    }
}
