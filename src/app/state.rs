use serde::{Deserialize, Serialize};

use crate::chat::ChatState;
use crate::devices::{DevicesState, Entities};
use crate::mvi::StateTree;

/// Global state tree.
///
/// Subtrees hold their collections behind `Arc`, and reducers replace an
/// `Arc` only when its contents change, so untouched subtrees keep their
/// identity across snapshots.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub chat: ChatState,
    pub devices: DevicesState,
    pub entities: Entities,
}

impl StateTree for AppState {}
