// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter, Result as FmtResult},
          sync::{Arc, Mutex as StdMutex}};

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use tokio::{sync::watch, task::JoinHandle};

use super::{readline_event_from_key_event, KeyboardHandler, KeyboardHookOptions,
            RawEventReceiver, RawModeGuard, TestingOverride};
use crate::{try_run_action_for_shortcut, FrameworkKeyDescriptor, Keypress,
            ShortcutToActionMap, DEBUG_KEYBOARD};

/// The handler configuration, shared between the hook and its subscription
/// task.
pub type SharedKeyboardHandler = Arc<StdMutex<KeyboardHandler>>;

/// Watch half exposing the latest-observed keypress to consumers (e.g. for
/// rendering). The value is `None` until the first event arrives, and is
/// cleared back to `None` when the input source deactivates.
pub type LatestKeypressReceiver = watch::Receiver<Option<Keypress>>;

type LatestKeypressSender = watch::Sender<Option<Keypress>>;

/// Dispatch target resolved at attach time. [`KeyboardHandler::MapCached`]
/// memoizes here: the factory runs once per attachment and the built map
/// lives for exactly as long as the subscription does.
#[derive(Clone)]
enum AttachedDispatch {
    Shared(SharedKeyboardHandler),
    CachedMap(Arc<ShortcutToActionMap>),
}

/// The Attached half of the subscription state machine.
struct AttachedSubscription {
    task: JoinHandle<()>,
    /// `None` when the raw source is a testing emitter, which does not touch
    /// the process-wide raw-mode resource.
    raw_mode_guard: Option<RawModeGuard>,
    /// Kept here so the push-style framework path dispatches through the
    /// same (possibly memoized) target as the subscription task.
    dispatch: AttachedDispatch,
}

/// Bridges a raw keypress source into consumer-visible state and drives a
/// handler or shortcut map on every event. See the
/// [module docs](super) for the lifecycle state machine.
///
/// ```no_run
/// use r3bl_keyboard::{KeyboardHandler, KeyboardHook, KeyboardHookOptions,
///                     ShortcutToActionMap};
///
/// # async fn demo() {
/// let map = ShortcutToActionMap::new().add("ctrl+q", || { /* quit */ });
/// let mut hook = KeyboardHook::new(
///     KeyboardHandler::Map(map),
///     KeyboardHookOptions::default(),
/// );
///
/// // ... later, e.g. when the consuming component loses focus:
/// hook.set_active(false).await;
/// # }
/// ```
pub struct KeyboardHook {
    handler: SharedKeyboardHandler,
    testing: Option<TestingOverride>,
    latest_tx: LatestKeypressSender,
    latest_rx: LatestKeypressReceiver,
    attached: Option<AttachedSubscription>,
}

impl KeyboardHook {
    /// Create the hook and, when `options.is_active`, attach it immediately.
    ///
    /// Must be called from within a tokio runtime: attaching spawns the
    /// subscription task.
    #[must_use]
    pub fn new(handler: KeyboardHandler, options: KeyboardHookOptions) -> Self {
        let KeyboardHookOptions { is_active, testing } = options;
        let (latest_tx, latest_rx) = watch::channel(None);
        let mut hook = Self {
            handler: Arc::new(StdMutex::new(handler)),
            testing,
            latest_tx,
            latest_rx,
            attached: None,
        };
        if is_active {
            hook.attach();
        }
        hook
    }

    /// Drive the Detached ⇄ Attached state machine.
    ///
    /// Deactivation awaits the subscription task's termination, so by the
    /// time this returns the listener really is gone — a subsequent
    /// activation can never produce a duplicate listener on the underlying
    /// source. Both transitions are idempotent.
    pub async fn set_active(&mut self, is_active: bool) {
        if is_active {
            self.attach();
        } else {
            self.detach().await;
        }
    }

    /// `true` while a subscription is attached.
    #[must_use]
    pub fn is_active(&self) -> bool { self.attached.is_some() }

    /// Whether raw (or raw-equivalent) input mode is currently engaged.
    ///
    /// `false` when detached, and always `false` when stdin is not an
    /// interactive terminal (the real stream is never subscribed in that
    /// case). A testing emitter counts as raw-equivalent input.
    #[must_use]
    pub fn in_raw_mode(&self) -> bool {
        match &self.attached {
            Some(subscription) => {
                self.testing.is_some() || subscription.raw_mode_guard.is_some()
            }
            None => false,
        }
    }

    /// The latest-observed keypress, or `None` if no event arrived since the
    /// hook (re)attached.
    #[must_use]
    pub fn latest_keypress(&self) -> Option<Keypress> { self.latest_rx.borrow().clone() }

    /// A watch receiver over the latest-observed keypress, for consumers
    /// that want to re-render on change rather than poll.
    #[must_use]
    pub fn latest_keypress_receiver(&self) -> LatestKeypressReceiver { self.latest_rx.clone() }

    /// Push-style entry point for the component-framework raw source.
    ///
    /// The framework's native input hook calls this once per keypress; the
    /// event runs through the same update-state + dispatch path as the
    /// subscribed stream, synchronously. Gated on the attached state: while
    /// detached this is a no-op.
    pub fn deliver_framework_keypress(
        &self,
        maybe_key: Option<&FrameworkKeyDescriptor>,
        maybe_input: Option<&str>,
    ) {
        let Some(subscription) = &self.attached else {
            return;
        };
        let keypress = Keypress::from_framework(maybe_key, maybe_input);
        process_keypress(keypress, &self.latest_tx, &subscription.dispatch);
    }

    fn attach(&mut self) {
        if self.attached.is_some() {
            return;
        }

        let dispatch = self.resolve_dispatch();

        match &self.testing {
            Some(testing_override) => {
                // Listener registration happens here, synchronously, so the
                // emitter's receiver count is accurate as soon as we return.
                let receiver = testing_override.emitter.subscribe();
                let task = tokio::spawn(run_testing_subscription(
                    receiver,
                    self.latest_tx.clone(),
                    dispatch.clone(),
                ));
                self.attached = Some(AttachedSubscription {
                    task,
                    raw_mode_guard: None,
                    dispatch,
                });
            }
            None => match RawModeGuard::try_engage() {
                Ok(raw_mode_guard) => {
                    let task = tokio::spawn(run_terminal_subscription(
                        self.latest_tx.clone(),
                        dispatch.clone(),
                    ));
                    self.attached = Some(AttachedSubscription {
                        task,
                        raw_mode_guard: Some(raw_mode_guard),
                        dispatch,
                    });
                }
                Err(report) => {
                    // Degraded mode: stay detached, report in_raw_mode()
                    // false. Keyboard input must never crash the UI.
                    tracing::warn!(
                        message = "keyboard: raw input unavailable, staying detached",
                        report = %report
                    );
                }
            },
        }
    }

    async fn detach(&mut self) {
        let Some(subscription) = self.attached.take() else {
            return;
        };
        let AttachedSubscription {
            task,
            raw_mode_guard,
            dispatch: _,
        } = subscription;

        task.abort();
        // A cancelled JoinError is the expected outcome here.
        let _unused = task.await;

        // Only after the task is gone: release this listener's claim on the
        // process-wide raw-mode resource, and clear the latest keypress.
        drop(raw_mode_guard);
        self.latest_tx.send_replace(None);
    }

    /// [`KeyboardHandler::MapCached`] is resolved to a concrete map once per
    /// attachment; the other configurations dispatch through the shared
    /// handler cell.
    fn resolve_dispatch(&self) -> AttachedDispatch {
        let Ok(mut handler_guard) = self.handler.lock() else {
            return AttachedDispatch::Shared(self.handler.clone());
        };
        match &mut *handler_guard {
            KeyboardHandler::MapCached(map_factory) => {
                AttachedDispatch::CachedMap(Arc::new(map_factory()))
            }
            KeyboardHandler::Fun(_) | KeyboardHandler::Map(_) => {
                AttachedDispatch::Shared(self.handler.clone())
            }
        }
    }
}

impl Debug for KeyboardHook {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter
            .debug_struct("KeyboardHook")
            .field("is_active", &self.is_active())
            .field("in_raw_mode", &self.in_raw_mode())
            .field("has_testing_override", &self.testing.is_some())
            .field("latest_keypress", &self.latest_keypress())
            .finish()
    }
}

impl Drop for KeyboardHook {
    /// Best-effort teardown on unmount: abort the subscription task and
    /// release the raw-mode claim. Consumers that need the detachment to
    /// have completed (rather than merely begun) should call
    /// [`KeyboardHook::set_active`]`(false)` first.
    fn drop(&mut self) {
        if let Some(subscription) = self.attached.take() {
            subscription.task.abort();
        }
    }
}

/// One normalized keypress through the shared pipeline: update the
/// latest-observed state, then hand it to the handler / shortcut map. Runs
/// synchronously within one event-loop turn.
fn process_keypress(
    keypress: Keypress,
    latest_tx: &LatestKeypressSender,
    dispatch: &AttachedDispatch,
) {
    DEBUG_KEYBOARD.then(|| {
        tracing::debug!(message = "keyboard: keypress", keypress = %keypress);
    });

    latest_tx.send_replace(Some(keypress.clone()));

    match dispatch {
        AttachedDispatch::Shared(handler_cell) => {
            let Ok(mut handler_guard) = handler_cell.lock() else {
                tracing::warn!(message = "keyboard: handler mutex poisoned, dropping keypress");
                return;
            };
            match &mut *handler_guard {
                KeyboardHandler::Fun(handler) => handler(keypress),
                KeyboardHandler::Map(map) => {
                    try_run_action_for_shortcut(&keypress, map);
                }
                // Resolved to CachedMap at attach time; nothing to do here.
                KeyboardHandler::MapCached(_) => {}
            }
        }
        AttachedDispatch::CachedMap(map) => {
            try_run_action_for_shortcut(&keypress, map);
        }
    }
}

/// Drains the testing emitter in arrival order until it closes or the
/// subscription is torn down.
async fn run_testing_subscription(
    mut receiver: RawEventReceiver,
    latest_tx: LatestKeypressSender,
    dispatch: AttachedDispatch,
) {
    use tokio::sync::broadcast::error::RecvError;
    loop {
        match receiver.recv().await {
            Ok(raw_event) => {
                let keypress =
                    Keypress::from_readline(Some(&raw_event.key), raw_event.input.as_deref());
                process_keypress(keypress, &latest_tx, &dispatch);
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(
                    message = "keyboard: test emitter lagged, events skipped",
                    skipped
                );
            }
            Err(RecvError::Closed) => break,
        }
    }
}

/// Drains the real terminal stream in arrival order until it ends, errors,
/// or the subscription is torn down.
async fn run_terminal_subscription(
    latest_tx: LatestKeypressSender,
    dispatch: AttachedDispatch,
) {
    let mut event_stream = EventStream::new();
    while let Some(event_result) = event_stream.next().await {
        match event_result {
            Ok(Event::Key(key_event)) => {
                if let Some(raw_event) = readline_event_from_key_event(&key_event) {
                    let keypress = Keypress::from_readline(
                        Some(&raw_event.key),
                        raw_event.input.as_deref(),
                    );
                    process_keypress(keypress, &latest_tx, &dispatch);
                }
            }
            // Mouse / resize / focus / paste events are not this crate's
            // concern.
            Ok(_) => {}
            Err(error) => {
                tracing::warn!(
                    message = "keyboard: terminal event stream error",
                    error = ?error
                );
                break;
            }
        }
    }
}
