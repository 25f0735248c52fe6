//! Binding layer between the state tree and presentational components.
//!
//! A [`Container`] describes how one component is wired:
//! - `map_state`: (snapshot, own props) → flat read-only props
//! - `map_dispatch`: (dispatch, own props) → callbacks, one action each
//! - `on_mount`: the load request fired on first activation, if any
//!
//! [`Connected`] drives a container through render cycles and remembers the
//! last props so unchanged renders can be skipped. [`Connection`] subscribes
//! a `Connected` to a store so every update re-runs the binding.

mod connected;
mod connection;
mod container;
mod lifecycle;

pub use connected::Connected;
pub use connection::Connection;
pub use container::Container;
pub use lifecycle::{MountIntent, MountReducer, MountState};
