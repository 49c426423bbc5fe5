//! The imperative shell around the core types.
//!
//! This module owns the mutable machine: rule lookup, transition
//! validation, hook dispatch, and log appends all happen here, in a fixed
//! order per transition.

mod error;
mod machine;
mod rules;

pub use error::FsmError;
pub use machine::Fsm;
pub use rules::TransitionRule;
