//! Input comparators for memoized selectors.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decides whether freshly extracted inputs match the cached ones.
pub trait Equality<T>: Send + Sync {
    fn equal(&self, previous: &T, next: &T) -> bool;
}

/// Deep comparison through `PartialEq`.
///
/// Freshly allocated but equal containers count as unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Structural;

impl<T: PartialEq> Equality<T> for Structural {
    fn equal(&self, previous: &T, next: &T) -> bool {
        previous == next
    }
}

/// Pointer identity of shared inputs.
///
/// Only sound when every input is structurally shared, i.e. the state tree
/// replaces a subtree's `Arc` whenever the subtree changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<T: Shared> Equality<T> for Identity {
    fn equal(&self, previous: &T, next: &T) -> bool {
        previous.same(next)
    }
}

/// Values whose identity can be compared.
pub trait Shared {
    fn same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Shared for Arc<T> {
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<A: Shared, B: Shared> Shared for (A, B) {
    fn same(&self, other: &Self) -> bool {
        self.0.same(&other.0) && self.1.same(&other.1)
    }
}

impl<A: Shared, B: Shared, C: Shared> Shared for (A, B, C) {
    fn same(&self, other: &Self) -> bool {
        self.0.same(&other.0) && self.1.same(&other.1) && self.2.same(&other.2)
    }
}

/// Comparator picked at runtime, e.g. from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqualityMode {
    #[default]
    Structural,
    Identity,
}

impl<T: PartialEq + Shared> Equality<T> for EqualityMode {
    fn equal(&self, previous: &T, next: &T) -> bool {
        match self {
            EqualityMode::Structural => Structural.equal(previous, next),
            EqualityMode::Identity => Identity.equal(previous, next),
        }
    }
}
