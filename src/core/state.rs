//! Core StateId trait for state machine identifiers.
//!
//! States are opaque, comparable identifiers. The engine never inspects
//! them beyond equality and hashing, so any cheap token type qualifies.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for state identifiers.
///
/// A state is pure identity: the engine compares states, keys maps by
/// them, and echoes them back through hooks and errors, but attaches no
/// meaning of its own.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition log
/// - `Eq` + `Hash`: states key the registration and rule maps
/// - `Debug`: states appear in error messages
/// - `Serialize` + `DeserializeOwned`: the transition log is serializable
///
/// The blanket impl below means you never implement this trait by hand;
/// a small integer or a fieldless enum with the usual derives is enough.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use switchyard::StateId;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// fn assert_state_id<S: StateId>() {}
/// assert_state_id::<DoorState>();
/// assert_state_id::<u32>();
/// ```
pub trait StateId:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
}

impl<T> StateId for T where
    T: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    fn assert_state_id<S: StateId>() {}

    #[test]
    fn integers_are_state_ids() {
        assert_state_id::<i32>();
        assert_state_id::<u64>();
    }

    #[test]
    fn enums_are_state_ids() {
        assert_state_id::<TestState>();
    }

    #[test]
    fn strings_are_state_ids() {
        assert_state_id::<String>();
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Processing;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable_and_hashable() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(TestState::Initial, 1);
        map.insert(TestState::Complete, 2);

        assert_eq!(map.get(&TestState::Initial), Some(&1));
        assert_eq!(map.get(&TestState::Processing), None);
    }
}
