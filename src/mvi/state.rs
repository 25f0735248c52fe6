//! Base trait for state trees.

/// A complete snapshot of the state a store holds.
///
/// Snapshots are never mutated after the store publishes them. The
/// `PartialEq` bound is how the store tells a real transition from a no-op,
/// and `Default` is the tree a fresh store starts from.
pub trait StateTree: Clone + PartialEq + Default + Send + Sync + 'static {}
