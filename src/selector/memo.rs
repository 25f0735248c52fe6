use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use super::equality::{Equality, Structural};

type Extract<S, I> = Box<dyn Fn(&S) -> I + Send + Sync>;
type Combine<I, O> = Box<dyn Fn(&I) -> O + Send + Sync>;

/// Memoized selector.
///
/// Holds exactly one cached `(inputs, output)` pair. `O` is usually an
/// `Arc<T>` (or a `Result` around one) so a cache hit hands back the same
/// allocation and downstream change checks stay cheap.
pub struct Memo<S, I, O, E = Structural> {
    extract: Extract<S, I>,
    combine: Combine<I, O>,
    equality: E,
    cache: Mutex<Option<(I, O)>>,
    recomputations: AtomicU64,
}

impl<S, I: PartialEq, O> Memo<S, I, O, Structural> {
    /// Memo comparing inputs structurally.
    pub fn new<X, C>(extract: X, combine: C) -> Self
    where
        X: Fn(&S) -> I + Send + Sync + 'static,
        C: Fn(&I) -> O + Send + Sync + 'static,
    {
        Self::with_equality(Structural, extract, combine)
    }
}

impl<S, I, O, E: Equality<I>> Memo<S, I, O, E> {
    pub fn with_equality<X, C>(equality: E, extract: X, combine: C) -> Self
    where
        X: Fn(&S) -> I + Send + Sync + 'static,
        C: Fn(&I) -> O + Send + Sync + 'static,
    {
        Self {
            extract: Box::new(extract),
            combine: Box::new(combine),
            equality,
            cache: Mutex::new(None),
            recomputations: AtomicU64::new(0),
        }
    }

    /// Derive the output for `state`, reusing the cached output when the
    /// extracted inputs match the previous call's.
    pub fn select(&self, state: &S) -> O
    where
        O: Clone,
    {
        let inputs = (self.extract)(state);

        let mut cache = self.cache.lock();
        if let Some((cached_inputs, output)) = cache.as_ref() {
            if self.equality.equal(cached_inputs, &inputs) {
                return output.clone();
            }
        }

        let output = (self.combine)(&inputs);
        let count = self.recomputations.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::trace!(recomputations = count, "Selector recomputed");

        *cache = Some((inputs, output.clone()));
        output
    }

    /// How many times the combiner has run.
    pub fn recomputations(&self) -> u64 {
        self.recomputations.load(Ordering::Relaxed)
    }

    /// Drop the cached pair; the next `select` recomputes.
    pub fn reset(&self) {
        *self.cache.lock() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::Identity;
    use std::sync::Arc;

    #[derive(Default)]
    struct Tree {
        numbers: Vec<i32>,
        threshold: i32,
    }

    fn above_threshold() -> Memo<Tree, (Vec<i32>, i32), Arc<Vec<i32>>> {
        Memo::new(
            |tree: &Tree| (tree.numbers.clone(), tree.threshold),
            |(numbers, threshold): &(Vec<i32>, i32)| {
                Arc::new(numbers.iter().copied().filter(|n| n > threshold).collect())
            },
        )
    }

    #[test]
    fn equal_inputs_return_cached_output() {
        let memo = above_threshold();
        let tree = Tree {
            numbers: vec![1, 5, 9],
            threshold: 4,
        };

        let first = memo.select(&tree);
        let second = memo.select(&Tree {
            numbers: vec![1, 5, 9],
            threshold: 4,
        });

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(memo.recomputations(), 1);
    }

    #[test]
    fn changed_inputs_recompute() {
        let memo = above_threshold();
        let first = memo.select(&Tree {
            numbers: vec![1, 5, 9],
            threshold: 4,
        });
        let second = memo.select(&Tree {
            numbers: vec![1, 5, 9],
            threshold: 6,
        });

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*second, vec![9]);
        assert_eq!(memo.recomputations(), 2);
    }

    #[test]
    fn fresh_empty_containers_do_not_defeat_memoization() {
        let memo = above_threshold();
        let first = memo.select(&Tree::default());
        let second = memo.select(&Tree::default());
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn identity_misses_on_fresh_allocations() {
        let memo: Memo<Arc<Vec<i32>>, Arc<Vec<i32>>, usize, Identity> = Memo::with_equality(
            Identity,
            |tree: &Arc<Vec<i32>>| tree.clone(),
            |v: &Arc<Vec<i32>>| v.len(),
        );

        let shared = Arc::new(vec![1, 2]);
        memo.select(&shared);
        memo.select(&shared);
        assert_eq!(memo.recomputations(), 1);

        memo.select(&Arc::new(vec![1, 2]));
        assert_eq!(memo.recomputations(), 2);
    }

    #[test]
    fn reset_forces_recompute() {
        let memo = above_threshold();
        let tree = Tree::default();
        memo.select(&tree);
        memo.reset();
        memo.select(&tree);
        assert_eq!(memo.recomputations(), 2);
    }

    #[test]
    fn memos_compose_through_extraction() {
        let inner = Arc::new(above_threshold());
        let outer_inner = inner.clone();
        let outer: Memo<Tree, Arc<Vec<i32>>, usize> = Memo::new(
            move |tree: &Tree| outer_inner.select(tree),
            |kept: &Arc<Vec<i32>>| kept.len(),
        );

        let tree = Tree {
            numbers: vec![3, 7, 8],
            threshold: 5,
        };
        assert_eq!(outer.select(&tree), 2);
        assert_eq!(outer.select(&tree), 2);
        assert_eq!(inner.recomputations(), 1);
        assert_eq!(outer.recomputations(), 1);
    }
}
