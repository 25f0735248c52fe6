use std::sync::Arc;

use crate::mvi::Reducer;

use super::action::DevicesAction;
use super::state::{DevicesState, Entities};

/// Device id list reducer.
pub struct DevicesReducer;

impl Reducer for DevicesReducer {
    type State = DevicesState;
    type Action = DevicesAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            DevicesAction::LoadDevices | DevicesAction::AddNew { .. } => {
                state.waiting_for_server = true;
            }
            DevicesAction::DevicesLoaded { devices } => {
                state.device_ids = Arc::new(devices.into_iter().map(|(id, _)| id).collect());
                state.waiting_for_server = false;
            }
            DevicesAction::Revoked { .. } => {}
        }
        state
    }
}

/// Device entity reducer.
pub struct EntitiesReducer;

impl Reducer for EntitiesReducer {
    type State = Entities;
    type Action = DevicesAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            DevicesAction::DevicesLoaded { devices } => {
                state.devices = Arc::new(devices.into_iter().collect());
            }
            DevicesAction::Revoked { device_id, at } => {
                let current = state.devices.get(&device_id).map(|d| d.revoked_at);
                match current {
                    Some(revoked_at) if revoked_at != Some(at) => {
                        if let Some(device) = Arc::make_mut(&mut state.devices).get_mut(&device_id)
                        {
                            device.revoked_at = Some(at);
                        }
                    }
                    Some(_) => {}
                    None => {
                        tracing::warn!(
                            device_id = %device_id,
                            "Revocation for unknown device ignored"
                        );
                    }
                }
            }
            DevicesAction::LoadDevices | DevicesAction::AddNew { .. } => {}
        }
        state
    }
}
