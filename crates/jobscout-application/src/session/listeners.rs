//! Change listeners and their subscription handles.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// Callback run after the session changed. It carries no payload; listeners
/// re-read the store.
pub type SessionListener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Entries {
    next_id: u64,
    listeners: Vec<(u64, SessionListener)>,
}

/// Listeners registered on one store instance.
#[derive(Default)]
pub struct ListenerRegistry {
    entries: Arc<Mutex<Entries>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut entries = lock(&self.entries);
        let id = entries.next_id;
        entries.next_id += 1;
        entries.listeners.push((id, Arc::new(listener)));

        Subscription {
            id,
            entries: Arc::downgrade(&self.entries),
        }
    }

    /// Runs every listener registered at the time of the call, once each.
    ///
    /// The registry lock is released before the first listener runs. A
    /// listener removed by an earlier one during the same round is skipped.
    pub fn notify(&self) {
        let snapshot: Vec<(u64, SessionListener)> = lock(&self.entries)
            .listeners
            .iter()
            .map(|(id, listener)| (*id, Arc::clone(listener)))
            .collect();

        for (id, listener) in snapshot {
            if is_registered(&self.entries, id) {
                listener();
            }
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// A listener that panicked must not disable notifications for the others.
fn lock(entries: &Mutex<Entries>) -> MutexGuard<'_, Entries> {
    entries.lock().unwrap_or_else(|e| e.into_inner())
}

fn is_registered(entries: &Mutex<Entries>, id: u64) -> bool {
    lock(entries).listeners.iter().any(|(entry, _)| *entry == id)
}

/// Handle returned by `subscribe`.
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: u64,
    entries: Weak<Mutex<Entries>>,
}

impl Subscription {
    /// Removes the listener. Calling it again, or after the store is gone,
    /// does nothing.
    pub fn unsubscribe(&self) {
        if let Some(entries) = self.entries.upgrade() {
            lock(&entries).listeners.retain(|(id, _)| *id != self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.entries
            .upgrade()
            .is_some_and(|entries| is_registered(&entries, self.id))
    }
}
