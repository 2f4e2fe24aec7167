use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use gb_core::SessionSnapshot;
use log::debug;

/// Receives a snapshot after every completed session transition.
pub trait SessionObserver: Send + Sync {
    fn on_session_changed(&self, snapshot: &SessionSnapshot);
}

impl<F> SessionObserver for F
where
    F: Fn(&SessionSnapshot) + Send + Sync,
{
    fn on_session_changed(&self, snapshot: &SessionSnapshot) {
        self(snapshot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

/// Registry of session observers, notified in subscription order.
#[derive(Default)]
pub struct SessionObservers {
    inner: Mutex<ObserversInner>,
}

#[derive(Default)]
struct ObserversInner {
    next_id: u64,
    observers: BTreeMap<SubscriptionId, Arc<dyn SessionObserver>>,
}

impl SessionObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, observer: Arc<dyn SessionObserver>) -> SubscriptionId {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.observers.insert(id, observer);

        debug!(
            "Session observer {:?} subscribed ({} total)",
            id,
            inner.observers.len()
        );
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let removed = inner.observers.remove(&id).is_some();

        if removed {
            debug!(
                "Session observer {:?} unsubscribed ({} remaining)",
                id,
                inner.observers.len()
            );
        }
        removed
    }

    /// Calls every observer synchronously. The registry lock is released
    /// first so observers may subscribe or unsubscribe from the callback.
    pub fn notify(&self, snapshot: &SessionSnapshot) -> usize {
        let observers: Vec<Arc<dyn SessionObserver>> = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .observers
            .values()
            .cloned()
            .collect();

        for observer in &observers {
            observer.on_session_changed(snapshot);
        }
        observers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .observers
            .len()
    }
}
