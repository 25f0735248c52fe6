//! Memoized derivations over state snapshots.
//!
//! A [`Memo`] pairs an extraction function (snapshot → inputs) with a pure
//! combiner (inputs → output). It caches the last inputs and output and
//! hands back the cached output, same `Arc` and all, whenever the freshly
//! extracted inputs compare equal under its [`Equality`].
//!
//! Memos compose by calling one memo from another memo's extraction.

mod equality;
mod error;
mod memo;

pub use equality::{Equality, EqualityMode, Identity, Shared, Structural};
pub use error::SelectError;
pub use memo::Memo;
