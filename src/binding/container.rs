use crate::mvi::{Action, StateTree};
use crate::store::SharedDispatch;

/// Wiring for one presentational component.
pub trait Container {
    /// State tree the container reads from.
    type State: StateTree;

    /// Actions its callbacks dispatch.
    type Action: Action;

    /// Parent-owned ephemeral state (route state and its setter).
    type OwnProps;

    /// Flat read-only props handed to the component.
    type Props: Clone + PartialEq;

    /// Callback bundle handed to the component.
    type Callbacks;

    /// Pure projection of state plus own props. Called on every render.
    fn map_state(&self, state: &Self::State, own: &Self::OwnProps) -> Self::Props;

    /// Bind callbacks to a dispatch handle.
    fn map_dispatch(
        &self,
        dispatch: SharedDispatch<Self::Action>,
        own: &Self::OwnProps,
    ) -> Self::Callbacks;

    /// Load request fired once when the component is first activated.
    fn on_mount(&self) -> Option<Self::Action> {
        None
    }
}
