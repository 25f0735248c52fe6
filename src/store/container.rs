use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::{Mutex, RwLock};

use crate::mvi::{Action, Reducer};

use super::dispatch::Dispatch;
use super::log::ActionLogEntry;

type Listener<S> = Arc<dyn Fn(&Arc<S>) + Send + Sync>;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Single-writer state container.
///
/// Every dispatch runs the reducer on a clone of the current snapshot and
/// swaps in the result. Readers holding an older `Arc` keep seeing the old
/// snapshot. The version only moves when the reducer produced a different
/// state.
pub struct Store<R: Reducer> {
    inner: RwLock<StoreInner<R::State>>,
    listeners: Mutex<Vec<(SubscriptionId, Listener<R::State>)>>,
    next_subscription: AtomicU64,
    _reducer: PhantomData<fn() -> R>,
}

struct StoreInner<S> {
    state: Arc<S>,
    version: u64,
    log: VecDeque<ActionLogEntry>,
    log_capacity: usize,
}

impl<S> StoreInner<S> {
    fn record(&mut self, entry: ActionLogEntry) {
        if self.log_capacity == 0 {
            return;
        }
        while self.log.len() >= self.log_capacity {
            self.log.pop_front();
        }
        self.log.push_back(entry);
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding the default state.
    pub fn new(log_capacity: usize) -> Self {
        Self::with_state(R::State::default(), log_capacity)
    }

    /// Create a store from an initial snapshot.
    pub fn with_state(state: R::State, log_capacity: usize) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                state: Arc::new(state),
                version: 0,
                log: VecDeque::with_capacity(log_capacity),
                log_capacity,
            }),
            listeners: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
            _reducer: PhantomData,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> Arc<R::State> {
        self.inner.read().state.clone()
    }

    pub fn version(&self) -> u64 {
        self.inner.read().version
    }

    /// Register a listener called with the new snapshot after every
    /// dispatch that changed state. Listeners run in registration order.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Arc<R::State>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Most recent actions, oldest first.
    pub fn action_log(&self) -> Vec<ActionLogEntry> {
        self.inner.read().log.iter().cloned().collect()
    }

    /// Apply one action. Returns the new snapshot and its version when the
    /// state changed.
    fn apply(&self, action: R::Action) -> Option<(Arc<R::State>, u64)> {
        let name = action.name();
        let mut inner = self.inner.write();

        let next = R::reduce((*inner.state).clone(), action);
        let changed = next != *inner.state;
        if changed {
            inner.state = Arc::new(next);
            inner.version += 1;
        }

        let version = inner.version;
        inner.record(ActionLogEntry {
            timestamp: SystemTime::now(),
            action: name,
            version,
            changed,
        });

        tracing::debug!(action = name, version, changed, "Action applied");

        changed.then(|| (inner.state.clone(), version))
    }
}

impl<R: Reducer> Dispatch<R::Action> for Store<R> {
    fn dispatch(&self, action: R::Action) {
        let Some((state, version)) = self.apply(action) else {
            return;
        };

        // Listeners may dispatch again, so no lock is held while they run.
        let listeners: Vec<Listener<R::State>> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            // A nested dispatch already announced a newer snapshot to everyone.
            if self.version() != version {
                tracing::trace!(version, "Skipping superseded notification");
                return;
            }
            listener(&state);
        }
    }
}
