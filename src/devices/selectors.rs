//! Active/revoked device partition.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::app::AppState;
use crate::selector::{EqualityMode, Memo, SelectError};

use super::state::{DeviceDetail, DeviceId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DevicePartition {
    pub device_ids: Vec<DeviceId>,
    pub revoked_device_ids: Vec<DeviceId>,
}

pub type PartitionResult = Result<Arc<DevicePartition>, SelectError>;

type PartitionInputs = (Arc<Vec<DeviceId>>, Arc<HashMap<DeviceId, DeviceDetail>>);

pub fn get_device_ids(state: &AppState) -> Arc<Vec<DeviceId>> {
    state.devices.device_ids.clone()
}

pub fn get_device_entities(state: &AppState) -> Arc<HashMap<DeviceId, DeviceDetail>> {
    state.entities.devices.clone()
}

/// Split ids by whether their entity carries a revocation timestamp.
///
/// Both groups keep the order of `device_ids`. An id without an entity
/// record is reported rather than guessed into either group.
pub fn partition_devices(
    device_ids: &[DeviceId],
    entities: &HashMap<DeviceId, DeviceDetail>,
) -> Result<DevicePartition, SelectError> {
    let mut partition = DevicePartition::default();
    for id in device_ids {
        let detail = entities
            .get(id)
            .ok_or_else(|| SelectError::DeviceNotFound {
                device_id: id.clone(),
            })?;
        if detail.is_revoked() {
            partition.revoked_device_ids.push(id.clone());
        } else {
            partition.device_ids.push(id.clone());
        }
    }
    Ok(partition)
}

/// Memoized selectors for the device list.
pub struct DeviceSelectors {
    partition: Memo<AppState, PartitionInputs, PartitionResult, EqualityMode>,
}

impl DeviceSelectors {
    pub fn new(equality: EqualityMode) -> Self {
        let partition = Memo::with_equality(
            equality,
            |state: &AppState| (get_device_ids(state), get_device_entities(state)),
            |(device_ids, entities): &PartitionInputs| {
                partition_devices(device_ids, entities).map(Arc::new)
            },
        );
        Self { partition }
    }

    pub fn partition(&self, state: &AppState) -> PartitionResult {
        self.partition.select(state)
    }

    pub fn partition_recomputations(&self) -> u64 {
        self.partition.recomputations()
    }
}

impl Default for DeviceSelectors {
    fn default() -> Self {
        Self::new(EqualityMode::default())
    }
}
