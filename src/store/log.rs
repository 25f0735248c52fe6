use std::time::SystemTime;

/// Log entry for a dispatched action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLogEntry {
    /// When the action was applied.
    pub timestamp: SystemTime,
    /// The action's tag.
    pub action: &'static str,
    /// Store version after the action was applied.
    pub version: u64,
    /// Whether the reducer produced a different snapshot.
    pub changed: bool,
}
