//! Root state tree, root action and root reducer.

mod action;
mod reducer;
mod snapshot;
mod state;

pub use action::AppAction;
pub use reducer::AppReducer;
pub use snapshot::SnapshotError;
pub use state::AppState;
