//! Base trait for actions.

use std::fmt::Debug;

/// Marker trait for action objects.
///
/// Actions represent:
/// - User intents (start a chat, add a device)
/// - Load requests (inbox, device list)
/// - Results reported back by whatever performed the load
///
/// Actions are consumed once by a reducer.
pub trait Action: Clone + Debug + Send + 'static {
    /// Stable tag used for logging and the store's action log.
    fn name(&self) -> &'static str;
}
