use std::time::SystemTime;

use crate::mvi::Action;

use super::state::{DeviceDetail, DeviceId, DeviceKind};

#[derive(Debug, Clone, PartialEq)]
pub enum DevicesAction {
    /// Request the device list.
    LoadDevices,

    /// Device list arrived, in server order.
    DevicesLoaded {
        devices: Vec<(DeviceId, DeviceDetail)>,
    },

    /// Start provisioning a new device of the given kind.
    AddNew { kind: DeviceKind },

    /// A device was revoked.
    Revoked { device_id: DeviceId, at: SystemTime },
}

impl Action for DevicesAction {
    fn name(&self) -> &'static str {
        match self {
            DevicesAction::LoadDevices => "devices/load",
            DevicesAction::DevicesLoaded { .. } => "devices/loaded",
            DevicesAction::AddNew { kind } => match kind {
                DeviceKind::Computer => "devices/add_new_computer",
                DeviceKind::Phone => "devices/add_new_phone",
                DeviceKind::PaperKey => "devices/add_new_paper_key",
            },
            DevicesAction::Revoked { .. } => "devices/revoked",
        }
    }
}
