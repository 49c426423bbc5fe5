//! Error taxonomy for initialization and transition failures.

use crate::core::StateId;
use thiserror::Error;

/// Errors returned by [`Fsm::initialize`] and [`Fsm::transition`].
///
/// All variants are recoverable: a failed call leaves the machine exactly
/// as it was, with no hook fired and no log entry appended. Variants carry
/// the offending states so callers match on kinds; the message text is a
/// human-readable detail, not a contract.
///
/// [`Fsm::initialize`]: crate::engine::Fsm::initialize
/// [`Fsm::transition`]: crate::engine::Fsm::transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FsmError<S: StateId> {
    /// The target of `initialize` was never registered.
    #[error("cannot initialize to state {state:?}: state does not exist")]
    UnknownState { state: S },

    /// `transition` was called before a successful `initialize`.
    #[error("cannot transition: state machine has not been initialized")]
    NotInitialized,

    /// The current state has no outbound rules at all (dead end).
    #[error("cannot transition from state {from:?}: no outbound rules registered")]
    NoOutboundRules { from: S },

    /// Rules exist for the current state, but none permits the target.
    #[error("cannot transition to state {to:?} from {from:?}")]
    InvalidTarget { from: S, to: S },
}
