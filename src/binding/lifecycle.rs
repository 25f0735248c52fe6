//! Mount lifecycle for bound components.
//!
//! `Unmounted → Mounted` is the only transition that matters: it is where
//! the one-time load request fires. The reducer stays pure; the caller
//! dispatches the load when it observes that transition.

use crate::mvi::{Action, Reducer, StateTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountState {
    #[default]
    Unmounted,
    Mounted,
}

impl StateTree for MountState {}

impl MountState {
    pub fn is_mounted(&self) -> bool {
        matches!(self, Self::Mounted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountIntent {
    /// Component is about to render for the first time (or again after
    /// being deactivated).
    Activate,
    /// Component left the view. The next activation loads again.
    Deactivate,
}

impl Action for MountIntent {
    fn name(&self) -> &'static str {
        match self {
            MountIntent::Activate => "lifecycle/activate",
            MountIntent::Deactivate => "lifecycle/deactivate",
        }
    }
}

pub struct MountReducer;

impl Reducer for MountReducer {
    type State = MountState;
    type Action = MountIntent;

    fn reduce(_state: Self::State, action: Self::Action) -> Self::State {
        match action {
            MountIntent::Activate => MountState::Mounted,
            MountIntent::Deactivate => MountState::Unmounted,
        }
    }
}

impl MountReducer {
    /// True when this transition is the one that should trigger the load.
    pub fn should_load(previous: MountState, next: MountState) -> bool {
        !previous.is_mounted() && next.is_mounted()
    }
}
