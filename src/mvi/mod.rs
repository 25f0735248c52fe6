//! Unidirectional data flow primitives.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Selectors ──→ Props
//!    ↑                                             │
//!    └─────────────── callbacks ───────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of the application state tree
//! - **Action**: Named intent to change state
//! - **Reducer**: Pure function that produces the next state from an action

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::StateTree;
