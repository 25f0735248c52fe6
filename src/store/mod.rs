//! Reference state container.
//!
//! Holds the current snapshot behind an `Arc`, applies actions through a
//! [`Reducer`](crate::mvi::Reducer) and notifies subscribers when the
//! snapshot changes. Containers never touch the store directly; they only
//! see a [`Dispatch`] handle and the snapshot they are rendered with.

mod container;
mod dispatch;
mod log;

pub use container::{Store, SubscriptionId};
pub use dispatch::{Dispatch, SharedDispatch};
pub use log::ActionLogEntry;
