//! Entry/exit hooks attached to registered states.
//!
//! Hooks are plain callable handles stored per state. "No hook" is an
//! explicit `None`, never a do-nothing sentinel function.

use super::state::StateId;
use std::collections::HashMap;
use std::fmt;

/// Caller-supplied metadata handed to hooks for a single transition.
///
/// The engine passes the mapping through to both hooks by reference and
/// never retains it past the `transition` call; the caller owns its
/// lifetime.
pub type Metadata = HashMap<String, String>;

/// A single hook handle.
///
/// Enter hooks receive the state being left; leave hooks receive the
/// state being entered. Both receive the transition's metadata.
pub type Hook<S> = Box<dyn Fn(&S, &Metadata) + Send + Sync>;

/// Registration record for one state: an optional enter hook and an
/// optional leave hook.
///
/// Built fluently and handed to [`Fsm::register_state_with`]. Registering
/// the same state again replaces the whole record (last write wins).
///
/// [`Fsm::register_state_with`]: crate::engine::Fsm::register_state_with
///
/// # Example
///
/// ```rust
/// use switchyard::{Metadata, StateHooks};
///
/// let hooks: StateHooks<u32> = StateHooks::new()
///     .on_enter(|from: &u32, _md: &Metadata| println!("entered from {from}"))
///     .on_leave(|to: &u32, _md: &Metadata| println!("leaving for {to}"));
///
/// assert!(hooks.has_enter());
/// assert!(hooks.has_leave());
/// ```
pub struct StateHooks<S: StateId> {
    enter: Option<Hook<S>>,
    leave: Option<Hook<S>>,
}

impl<S: StateId> StateHooks<S> {
    /// Create a record with no hooks.
    pub fn new() -> Self {
        Self {
            enter: None,
            leave: None,
        }
    }

    /// Set the enter hook, invoked after the machine has moved into this
    /// state. Receives the previous state and the transition metadata.
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S, &Metadata) + Send + Sync + 'static,
    {
        self.enter = Some(Box::new(hook));
        self
    }

    /// Set the leave hook, invoked before the machine moves out of this
    /// state. Receives the target state and the transition metadata.
    pub fn on_leave<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S, &Metadata) + Send + Sync + 'static,
    {
        self.leave = Some(Box::new(hook));
        self
    }

    /// Whether an enter hook is registered.
    pub fn has_enter(&self) -> bool {
        self.enter.is_some()
    }

    /// Whether a leave hook is registered.
    pub fn has_leave(&self) -> bool {
        self.leave.is_some()
    }

    /// Fire the enter hook, if any, with the state being left.
    pub(crate) fn fire_enter(&self, from: &S, metadata: &Metadata) {
        if let Some(hook) = &self.enter {
            hook(from, metadata);
        }
    }

    /// Fire the leave hook, if any, with the state being entered.
    pub(crate) fn fire_leave(&self, to: &S, metadata: &Metadata) {
        if let Some(hook) = &self.leave {
            hook(to, metadata);
        }
    }
}

impl<S: StateId> Default for StateHooks<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId> fmt::Debug for StateHooks<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateHooks")
            .field("enter", &self.enter.as_ref().map(|_| "<hook>"))
            .field("leave", &self.leave.as_ref().map(|_| "<hook>"))
            .finish()
    }
}
