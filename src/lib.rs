//! Switchyard: a registration-driven finite state machine engine.
//!
//! Callers register states, the directed transitions permitted between
//! them, and optional per-state entry/exit hooks; the engine then enforces
//! that only registered transitions occur and fires hooks in a fixed order
//! with caller-supplied metadata. It is a reusable building block for
//! protocol handlers, workflow steps, and lifecycle managers that need
//! explicit state modeling.
//!
//! # Core Concepts
//!
//! - **StateId**: any cheap comparable token (small integer, fieldless enum)
//! - **StateHooks**: optional enter/leave callables attached per state
//! - **TransitionRule**: a permitted directed edge between two states
//! - **TransitionLog**: an append-only audit trail of successful moves
//!
//! # Example
//!
//! ```rust
//! use switchyard::{Fsm, Metadata, StateHooks};
//!
//! let mut fsm: Fsm<u32> = Fsm::new();
//!
//! fsm.register_state(1);
//! fsm.register_state_with(
//!     2,
//!     StateHooks::new().on_enter(|from, _md| println!("entered from {from}")),
//! );
//! fsm.register_transition(1, 2);
//!
//! fsm.initialize(1)?;
//! fsm.transition(2, &Metadata::new())?;
//!
//! assert_eq!(fsm.current(), Some(&2));
//! assert_eq!(fsm.log().len(), 1);
//! # Ok::<(), switchyard::FsmError<u32>>(())
//! ```
//!
//! # Concurrency
//!
//! The engine is single-threaded by design: every operation runs to
//! completion synchronously, hooks execute on the caller's thread inside
//! [`Fsm::transition`], and there is no internal locking. Instances are
//! `Send`, so callers needing shared access wrap the machine in their own
//! mutex or keep one instance per logical actor.

pub mod core;
pub mod engine;

// Re-export the full API surface
pub use crate::core::{Hook, Metadata, StateHooks, StateId, TransitionLog, TransitionRecord};
pub use crate::engine::{Fsm, FsmError, TransitionRule};
