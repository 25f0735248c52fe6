use std::sync::Arc;

use crate::mvi::Action;

/// Single entry point for submitting actions.
///
/// Fire and forget: failures belong to whatever processes the action.
pub trait Dispatch<A: Action> {
    fn dispatch(&self, action: A);
}

/// Dispatch handle shared by callbacks.
pub type SharedDispatch<A> = Arc<dyn Dispatch<A> + Send + Sync>;
