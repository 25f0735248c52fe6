//! Memoized selectors and container bindings over an immutable state tree.
//!
//! - [`selector`]: memoized derivations with pluggable input equality
//! - [`binding`]: containers mapping state and own props to props and callbacks
//! - [`store`]: reference store that applies actions through reducers
//! - [`chat`], [`devices`]: the conversation list and device list features

pub mod app;
pub mod binding;
pub mod chat;
pub mod config;
pub mod devices;
pub mod logging;
pub mod mvi;
pub mod selector;
pub mod store;
