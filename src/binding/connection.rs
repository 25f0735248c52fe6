use std::sync::Arc;

use parking_lot::Mutex;

use crate::mvi::Reducer;
use crate::store::{Store, SubscriptionId};

use super::connected::Connected;
use super::container::Container;

/// A [`Connected`] container subscribed to a store.
///
/// Every store update re-runs the binding with the new snapshot. Props that
/// differ from the previous render are handed to the change callback after
/// the component lock is released, so the callback may dispatch.
pub struct Connection<C: Container> {
    connected: Arc<Mutex<Connected<C>>>,
    own: Arc<C::OwnProps>,
    subscription: SubscriptionId,
}

impl<C> Connection<C>
where
    C: Container + Send + 'static,
    C::OwnProps: Send + Sync + 'static,
    C::Props: Send,
{
    /// Activate the component, render it against the current snapshot and
    /// subscribe it to later updates.
    pub fn open<R, F>(
        store: &Store<R>,
        mut connected: Connected<C>,
        own: C::OwnProps,
        on_change: F,
    ) -> Self
    where
        R: Reducer<State = C::State>,
        F: Fn(&C::Props) + Send + Sync + 'static,
    {
        // The mount-time load is applied before anyone listens.
        connected.activate();
        if let Some(props) = connected.render(&store.state(), &own) {
            on_change(props);
        }

        let connected = Arc::new(Mutex::new(connected));
        let own = Arc::new(own);

        let listener = connected.clone();
        let listener_own = own.clone();
        let subscription = store.subscribe(move |state: &Arc<C::State>| {
            let changed = listener.lock().update(state, &listener_own).cloned();
            if let Some(props) = changed {
                on_change(&props);
            }
        });
        tracing::debug!(subscription = ?subscription, "Container connected");

        Self {
            connected,
            own,
            subscription,
        }
    }

    /// Props from the most recent render that produced any.
    pub fn props(&self) -> Option<C::Props> {
        self.connected.lock().props().cloned()
    }

    /// Callbacks bound to this connection's own props.
    pub fn callbacks(&self) -> C::Callbacks {
        self.connected.lock().callbacks(&self.own)
    }

    /// Stop listening and deactivate the component.
    pub fn close<R>(self, store: &Store<R>)
    where
        R: Reducer<State = C::State>,
    {
        store.unsubscribe(self.subscription);
        self.connected.lock().deactivate();
        tracing::debug!(subscription = ?self.subscription, "Container disconnected");
    }
}
