//! Device list feature.
//!
//! - `state.rs` - Device id list and device entity records
//! - `action.rs` - Load, add and revoke actions
//! - `reducer.rs` - Slice reducers for ids and entities
//! - `selectors.rs` - Active/revoked partition
//! - `container.rs` - Binding for the device list component, including the
//!   parent-owned "showing revoked" route state

mod action;
mod container;
mod reducer;
mod selectors;
mod state;

pub use action::DevicesAction;
pub use container::{
    DeviceList, DevicesCallbacks, DevicesOwnProps, DevicesProps, RouteSetter, RouteState,
};
pub use reducer::{DevicesReducer, EntitiesReducer};
pub use selectors::{
    get_device_entities, get_device_ids, partition_devices, DevicePartition, DeviceSelectors,
    PartitionResult,
};
pub use state::{DeviceDetail, DeviceId, DeviceKind, DevicesState, Entities};
