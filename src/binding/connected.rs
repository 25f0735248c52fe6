use crate::mvi::{Action, Reducer};
use crate::store::SharedDispatch;

use super::container::Container;
use super::lifecycle::{MountIntent, MountReducer, MountState};

/// A container bound to a dispatch handle.
///
/// Renders compare the freshly mapped props with the previous ones; only a
/// difference is reported back as something to re-render.
pub struct Connected<C: Container> {
    container: C,
    dispatch: SharedDispatch<C::Action>,
    mount: MountState,
    last_props: Option<C::Props>,
}

impl<C: Container> Connected<C> {
    pub fn new(container: C, dispatch: SharedDispatch<C::Action>) -> Self {
        Self {
            container,
            dispatch,
            mount: MountState::default(),
            last_props: None,
        }
    }

    /// Mark the component active. Fires the container's load request on
    /// the first activation only. Returns true if a load was dispatched.
    pub fn activate(&mut self) -> bool {
        let previous = self.mount;
        self.mount = MountReducer::reduce(previous, MountIntent::Activate);
        if !MountReducer::should_load(previous, self.mount) {
            return false;
        }

        match self.container.on_mount() {
            Some(action) => {
                tracing::debug!(action = action.name(), "Dispatching mount-time load");
                self.dispatch.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Mark the component inactive and forget the last props.
    pub fn deactivate(&mut self) {
        self.mount = MountReducer::reduce(self.mount, MountIntent::Deactivate);
        self.last_props = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_mounted()
    }

    /// Run one render cycle. Activates first if needed, then maps props.
    ///
    /// Returns the new props when they differ from the last render, `None`
    /// when the component can skip re-rendering.
    pub fn render(&mut self, state: &C::State, own: &C::OwnProps) -> Option<&C::Props> {
        if !self.is_mounted() {
            self.activate();
        }
        self.update(state, own)
    }

    /// Re-run the binding for a store update without touching the mount
    /// state. An inactive component ignores updates.
    pub fn update(&mut self, state: &C::State, own: &C::OwnProps) -> Option<&C::Props> {
        if !self.is_mounted() {
            return None;
        }

        let props = self.container.map_state(state, own);
        if self.last_props.as_ref() == Some(&props) {
            return None;
        }
        self.last_props = Some(props);
        self.last_props.as_ref()
    }

    /// Props from the most recent render that produced any.
    pub fn props(&self) -> Option<&C::Props> {
        self.last_props.as_ref()
    }

    /// Callbacks bound to the current own props.
    pub fn callbacks(&self, own: &C::OwnProps) -> C::Callbacks {
        self.container.map_dispatch(self.dispatch.clone(), own)
    }

    pub fn container(&self) -> &C {
        &self.container
    }
}
