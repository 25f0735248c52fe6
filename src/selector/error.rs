use thiserror::Error;

use crate::devices::DeviceId;

/// Errors a selector can report instead of deriving a view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// A device id is listed but no entity record exists for it.
    #[error("Device '{device_id}' not found in device entities")]
    DeviceNotFound { device_id: DeviceId },
}
