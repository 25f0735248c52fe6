use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::app::{AppAction, AppState};
use crate::binding::Container;
use crate::selector::{EqualityMode, SelectError};
use crate::store::SharedDispatch;

use super::action::DevicesAction;
use super::selectors::DeviceSelectors;
use super::state::{DeviceId, DeviceKind};

/// Parent-owned view state for the device screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteState {
    pub showing_revoked: bool,
}

/// Setter for [`RouteState`], owned by the parent/route layer.
pub type RouteSetter = Arc<dyn Fn(RouteState) + Send + Sync>;

#[derive(Clone)]
pub struct DevicesOwnProps {
    pub route_state: RouteState,
    pub set_route_state: RouteSetter,
}

impl DevicesOwnProps {
    pub fn new<F>(route_state: RouteState, set_route_state: F) -> Self
    where
        F: Fn(RouteState) + Send + Sync + 'static,
    {
        Self {
            route_state,
            set_route_state: Arc::new(set_route_state),
        }
    }
}

/// Props for the device list. Id lists are plain vectors; the component
/// never sees shared state containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevicesProps {
    pub device_ids: Vec<DeviceId>,
    pub revoked_device_ids: Vec<DeviceId>,
    pub showing_revoked: bool,
    pub waiting_for_server: bool,
}

pub struct DevicesCallbacks {
    dispatch: SharedDispatch<AppAction>,
    route_state: RouteState,
    set_route_state: RouteSetter,
}

impl DevicesCallbacks {
    pub fn add_new_computer(&self) {
        self.add_new(DeviceKind::Computer);
    }

    pub fn add_new_paper_key(&self) {
        self.add_new(DeviceKind::PaperKey);
    }

    pub fn add_new_phone(&self) {
        self.add_new(DeviceKind::Phone);
    }

    pub fn load_devices(&self) {
        self.dispatch.dispatch(DevicesAction::LoadDevices.into());
    }

    /// Flip "showing revoked" through the parent's setter. Nothing is
    /// dispatched to the store.
    pub fn on_toggle_show_revoked(&self) {
        (self.set_route_state)(RouteState {
            showing_revoked: !self.route_state.showing_revoked,
        });
    }

    fn add_new(&self, kind: DeviceKind) {
        self.dispatch.dispatch(DevicesAction::AddNew { kind }.into());
    }
}

/// Binding for the device list. Loads the device list on first activation.
pub struct DeviceList {
    selectors: DeviceSelectors,
}

impl DeviceList {
    pub fn new(equality: EqualityMode) -> Self {
        Self {
            selectors: DeviceSelectors::new(equality),
        }
    }

    pub fn selectors(&self) -> &DeviceSelectors {
        &self.selectors
    }
}

impl Default for DeviceList {
    fn default() -> Self {
        Self::new(EqualityMode::default())
    }
}

impl Container for DeviceList {
    type State = AppState;
    type Action = AppAction;
    type OwnProps = DevicesOwnProps;
    type Props = Result<DevicesProps, SelectError>;
    type Callbacks = DevicesCallbacks;

    fn map_state(&self, state: &AppState, own: &DevicesOwnProps) -> Self::Props {
        let partition = self.selectors.partition(state)?;
        Ok(DevicesProps {
            device_ids: partition.device_ids.clone(),
            revoked_device_ids: partition.revoked_device_ids.clone(),
            showing_revoked: own.route_state.showing_revoked,
            waiting_for_server: state.devices.waiting_for_server,
        })
    }

    fn map_dispatch(
        &self,
        dispatch: SharedDispatch<AppAction>,
        own: &DevicesOwnProps,
    ) -> Self::Callbacks {
        DevicesCallbacks {
            dispatch,
            route_state: own.route_state,
            set_route_state: own.set_route_state.clone(),
        }
    }

    fn on_mount(&self) -> Option<AppAction> {
        Some(DevicesAction::LoadDevices.into())
    }
}
