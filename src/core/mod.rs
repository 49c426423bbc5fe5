//! Core state machine building blocks.
//!
//! This module contains the data types the engine is assembled from:
//! - State identifiers via the `StateId` trait
//! - Entry/exit hook records attached to registered states
//! - The append-only transition log
//!
//! Nothing here validates transitions; that logic lives in [`crate::engine`].

mod history;
mod hooks;
mod state;

pub use history::{TransitionLog, TransitionRecord};
pub use hooks::{Hook, Metadata, StateHooks};
pub use state::StateId;
