//! The transition-validating, hook-dispatching engine.

use crate::core::{Metadata, StateHooks, StateId, TransitionLog, TransitionRecord};
use crate::engine::error::FsmError;
use crate::engine::rules::TransitionRule;
use std::collections::HashMap;

/// A registration-driven finite state machine.
///
/// The machine starts empty: callers register states (with optional
/// entry/exit hooks) and the directed edges permitted between them, then
/// call [`initialize`] once to establish a starting state, then drive it
/// with [`transition`]. Only registered edges are followed, and hooks fire
/// in a fixed order around each successful move.
///
/// Each instance is fully self-contained; there is no process-wide
/// registry. Operations are synchronous and the machine provides no
/// internal locking: callers needing concurrent access must serialize it
/// externally.
///
/// [`initialize`]: Fsm::initialize
/// [`transition`]: Fsm::transition
///
/// # Example
///
/// ```rust
/// use switchyard::{Fsm, Metadata};
///
/// let mut fsm: Fsm<u32> = Fsm::new();
/// fsm.register_state(1);
/// fsm.register_state(2);
/// fsm.register_transition(1, 2);
///
/// fsm.initialize(1).unwrap();
/// fsm.transition(2, &Metadata::new()).unwrap();
/// assert_eq!(fsm.current(), Some(&2));
/// ```
pub struct Fsm<S: StateId> {
    states: HashMap<S, StateHooks<S>>,
    rules: HashMap<S, Vec<TransitionRule<S>>>,
    log: TransitionLog<S>,
    current: Option<S>,
}

impl<S: StateId> Fsm<S> {
    /// Create an empty machine: no states, no rules, no current state.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            rules: HashMap::new(),
            log: TransitionLog::new(),
            current: None,
        }
    }

    /// Register a state with no hooks.
    ///
    /// Equivalent to `register_state_with(state, StateHooks::new())`:
    /// re-registering replaces any hooks the state previously carried.
    pub fn register_state(&mut self, state: S) {
        self.register_state_with(state, StateHooks::new());
    }

    /// Register a state together with its hooks.
    ///
    /// Inserts or overwrites the state's registration record (last write
    /// wins). Always succeeds; registering after [`initialize`] is legal
    /// and affects only future transitions into or out of the state.
    ///
    /// [`initialize`]: Fsm::initialize
    pub fn register_state_with(&mut self, state: S, hooks: StateHooks<S>) {
        self.states.insert(state, hooks);
    }

    /// Register a permitted edge `from -> to`.
    ///
    /// Neither endpoint needs to be registered via [`register_state`]; an
    /// edge may name a state that carries no hooks. Duplicate edges are
    /// stored as-is and change nothing observable.
    ///
    /// [`register_state`]: Fsm::register_state
    pub fn register_transition(&mut self, from: S, to: S) {
        self.rules
            .entry(from.clone())
            .or_default()
            .push(TransitionRule::new(from, to));
    }

    /// The current state, or `None` before the first successful
    /// [`initialize`].
    ///
    /// [`initialize`]: Fsm::initialize
    pub fn current(&self) -> Option<&S> {
        self.current.as_ref()
    }

    /// The audit log of every successful transition, in execution order.
    pub fn log(&self) -> &TransitionLog<S> {
        &self.log
    }

    /// Set the current state directly, bypassing rule validation and
    /// firing no hooks. This is a cold-start operation, not a transition:
    /// nothing is appended to the log.
    ///
    /// Fails with [`FsmError::UnknownState`] if `state` was never
    /// registered, leaving the current state untouched. Calling this again
    /// later is legal and resets the machine the same silent way.
    pub fn initialize(&mut self, state: S) -> Result<(), FsmError<S>> {
        if !self.states.contains_key(&state) {
            return Err(FsmError::UnknownState { state });
        }

        self.current = Some(state);
        Ok(())
    }

    /// Execute a guarded move to `to`, passing `metadata` through to both
    /// hooks.
    ///
    /// Validation distinguishes a dead-end current state
    /// ([`FsmError::NoOutboundRules`]) from a wrong target
    /// ([`FsmError::InvalidTarget`]); calling before [`initialize`] yields
    /// [`FsmError::NotInitialized`]. On any failure the machine is
    /// untouched: no log entry, no hook fired, no state change.
    ///
    /// On success the order is fixed: log append, then the old state's
    /// leave hook, then the state change, then the new state's enter hook.
    /// Hooks run synchronously on the caller's thread; a panicking hook
    /// propagates to the caller.
    ///
    /// [`initialize`]: Fsm::initialize
    pub fn transition(&mut self, to: S, metadata: &Metadata) -> Result<(), FsmError<S>> {
        let from = self.current.clone().ok_or(FsmError::NotInitialized)?;

        let rules = self
            .rules
            .get(&from)
            .ok_or_else(|| FsmError::NoOutboundRules { from: from.clone() })?;

        if !rules.iter().any(|rule| rule.permits(&to)) {
            return Err(FsmError::InvalidTarget { from, to });
        }

        // The record reflects the rule's approval; hooks cannot fail and
        // so cannot roll it back.
        self.log
            .append(TransitionRecord::now(from.clone(), to.clone()));

        if let Some(hooks) = self.states.get(&from) {
            hooks.fire_leave(&to, metadata);
        }

        self.current = Some(to.clone());

        if let Some(hooks) = self.states.get(&to) {
            hooks.fire_enter(&from, metadata);
        }

        Ok(())
    }
}

impl<S: StateId> Default for Fsm<S> {
    fn default() -> Self {
        Self::new()
    }
}
