//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;
use viewbind::app::{AppAction, AppState};
use viewbind::chat::{ConversationId, InboxItem};
use viewbind::devices::{DeviceDetail, DeviceId, DeviceKind};
use viewbind::store::{Dispatch, SharedDispatch};

/// Dispatcher that only records what it was handed.
#[derive(Default)]
pub struct RecordingDispatch {
    actions: Mutex<Vec<AppAction>>,
}

impl RecordingDispatch {
    pub fn actions(&self) -> Vec<AppAction> {
        self.actions.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.actions.lock().len()
    }
}

impl Dispatch<AppAction> for RecordingDispatch {
    fn dispatch(&self, action: AppAction) {
        self.actions.lock().push(action);
    }
}

/// A recorder plus the same recorder as a shared dispatch handle.
pub fn recording() -> (Arc<RecordingDispatch>, SharedDispatch<AppAction>) {
    let recorder = Arc::new(RecordingDispatch::default());
    let dispatch: SharedDispatch<AppAction> = recorder.clone();
    (recorder, dispatch)
}

pub fn ids(keys: &[&str]) -> Vec<ConversationId> {
    keys.iter().map(|k| ConversationId::new(*k)).collect()
}

pub fn device_ids(keys: &[&str]) -> Vec<DeviceId> {
    keys.iter().map(|k| DeviceId::new(*k)).collect()
}

pub fn revoked_at() -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)
}

// -- State builders -----------------------------------------------------------

/// Inbox = [{a, empty}, {b, non-empty}], always_show = {a}, pending = [c].
pub fn example_chat_state() -> AppState {
    let mut state = AppState::default();
    state.chat.inbox = Arc::new(vec![InboxItem::new("a", true), InboxItem::new("b", false)]);
    state.chat.always_show = Arc::new(HashSet::from([ConversationId::new("a")]));
    state.chat.pending = Arc::new(ids(&["c"]));
    state
}

/// Devices given as (id, revoked) pairs, in order.
pub fn devices_state(devices: &[(&str, bool)]) -> AppState {
    let mut state = AppState::default();
    state.devices.device_ids =
        Arc::new(devices.iter().map(|(id, _)| DeviceId::new(*id)).collect());

    let mut entities = HashMap::new();
    for (id, revoked) in devices {
        let mut detail = DeviceDetail::new(format!("device {}", id), DeviceKind::Computer);
        if *revoked {
            detail = detail.revoked(revoked_at());
        }
        entities.insert(DeviceId::new(*id), detail);
    }
    state.entities.devices = Arc::new(entities);
    state
}

// -- Files --------------------------------------------------------------------

/// Write `state` as a JSON snapshot into a fresh temp dir.
pub fn temp_snapshot(state: &AppState) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("state.json");
    let content = serde_json::to_string(state).expect("Failed to serialize state");
    std::fs::write(&path, content).expect("Failed to write snapshot");
    (temp_dir, path)
}

/// Write a config file with the given TOML body.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}
