//! Reducer trait.

use super::action::Action;
use super::state::StateTree;

/// Computes the next state-tree snapshot from the current one and an action.
///
/// The store hands a reducer its own clone of the snapshot, so a reducer may
/// rebuild any subtree it touches. Subtrees it leaves alone should be
/// returned as they came in; selectors compare them to decide whether to
/// recompute.
pub trait Reducer {
    type State: StateTree;

    type Action: Action;

    /// Returning a state equal to the input tells the store nothing changed.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
