//! Observable toast store.
//!
//! The store owns the newest-first list of active toasts and the set of
//! listeners interested in changes. Handles are cheap to clone and all of
//! them point at the same list.

use super::{ToastId, ToastOptions, ToastRecord};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Immutable point-in-time view of the store, newest first.
///
/// The same `Arc` is handed out until the contents change, so consumers can
/// use [`Arc::ptr_eq`] to skip redundant work.
pub type Snapshot = Arc<Vec<ToastRecord>>;

type Listener = Arc<dyn Fn() + Send + Sync>;

static GLOBAL_STORE: Lazy<ToastStore> = Lazy::new(ToastStore::new);

struct StoreInner {
    toasts: Snapshot,
    listeners: Vec<(u64, Listener)>,
    next_toast_id: u64,
    next_listener_id: u64,
}

#[derive(Clone)]
pub struct ToastStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl ToastStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                toasts: Arc::new(Vec::new()),
                listeners: Vec::new(),
                next_toast_id: 1,
                next_listener_id: 1,
            })),
        }
    }

    /// Process-wide store shared by [`toast`] and [`dismiss_toast`]
    pub fn global() -> &'static ToastStore {
        &GLOBAL_STORE
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        // Nothing inside the lock can panic half way through a mutation
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a toast and return its id. Subscribers are notified before this returns.
    pub fn add(&self, options: ToastOptions) -> ToastId {
        let (id, listeners) = {
            let mut inner = self.lock();
            let id = ToastId::new(inner.next_toast_id);
            inner.next_toast_id += 1;

            let record = ToastRecord::from_options(id, options);
            let mut toasts = Vec::with_capacity(inner.toasts.len() + 1);
            toasts.push(record);
            toasts.extend(inner.toasts.iter().cloned());
            inner.toasts = Arc::new(toasts);

            (id, Self::listener_snapshot(&inner))
        };

        log::debug!("toast store: added {}", id);
        Self::notify(listeners);
        id
    }

    /// Remove the toast with `id`. Unknown ids are ignored.
    ///
    /// Subscribers are only notified when a toast was actually removed.
    pub fn dismiss(&self, id: ToastId) {
        let listeners = {
            let mut inner = self.lock();
            if !inner.toasts.iter().any(|t| t.id == id) {
                return;
            }

            let remaining: Vec<ToastRecord> = inner.toasts.iter().filter(|t| t.id != id).cloned().collect();
            inner.toasts = Arc::new(remaining);
            Self::listener_snapshot(&inner)
        };

        log::debug!("toast store: dismissed {}", id);
        Self::notify(listeners);
    }

    /// Remove every toast. The id counter keeps running.
    pub fn clear(&self) {
        let listeners = {
            let mut inner = self.lock();
            if !inner.toasts.is_empty() {
                inner.toasts = Arc::new(Vec::new());
            }
            Self::listener_snapshot(&inner)
        };

        log::debug!("toast store: cleared");
        Self::notify(listeners);
    }

    /// Register `listener`, called with no arguments after every change.
    #[must_use = "dropping the subscription handle leaves the listener registered forever"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let listener_id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((listener_id, Arc::new(listener)));

        Subscription {
            store: self.clone(),
            listener_id,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.lock().toasts)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.lock().toasts.iter().any(|t| t.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().toasts.is_empty()
    }

    /// Number of registered listeners
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn listener_snapshot(inner: &StoreInner) -> Vec<Listener> {
        inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
    }

    // Runs with the lock released so listeners may call back into the store.
    fn notify(listeners: Vec<Listener>) {
        for listener in listeners {
            listener();
        }
    }

    fn remove_listener(&self, listener_id: u64) {
        self.lock().listeners.retain(|(id, _)| *id != listener_id);
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle returned by [`ToastStore::subscribe`].
pub struct Subscription {
    store: ToastStore,
    listener_id: u64,
}

impl Subscription {
    /// Remove exactly the listener this handle was created for
    pub fn unsubscribe(self) {
        self.store.remove_listener(self.listener_id);
    }
}

/// Add a toast to the process-wide store
pub fn toast(options: ToastOptions) -> ToastId {
    ToastStore::global().add(options)
}

/// Dismiss a toast from the process-wide store
pub fn dismiss_toast(id: ToastId) {
    ToastStore::global().dismiss(id);
}
