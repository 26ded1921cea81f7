use super::{ToastId, ToastStore};
use std::collections::HashMap;
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug)]
struct DismissTimer {
    handle: JoinHandle<()>,
    duration: Duration,
    started_at: tokio::time::Instant,
}

/// Cancellable auto-dismiss timers, at most one per toast.
///
/// Must be used from within a tokio runtime.
pub struct DismissTimers {
    store: ToastStore,
    timers: HashMap<ToastId, DismissTimer>,
}

impl DismissTimers {
    pub fn new(store: ToastStore) -> Self {
        Self {
            store,
            timers: HashMap::new(),
        }
    }

    /// Arm a timer for `id`. An existing timer with the same duration is kept,
    /// one with a different duration is replaced.
    pub fn arm(&mut self, id: ToastId, duration: Duration) {
        if let Some(existing) = self.timers.get(&id) {
            if existing.duration == duration && !existing.handle.is_finished() {
                return;
            }
            self.cancel(id);
        }

        let store = self.store.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            // The toast may already be gone, dismiss is only issued for live ids
            if store.contains(id) {
                log::debug!("dismiss timer elapsed for {}", id);
                store.dismiss(id);
            }
        });

        self.timers.insert(
            id,
            DismissTimer {
                handle,
                duration,
                started_at: tokio::time::Instant::now(),
            },
        );
    }

    pub fn cancel(&mut self, id: ToastId) {
        if let Some(timer) = self.timers.remove(&id) {
            timer.handle.abort();
        }
    }

    /// Cancel every timer whose id is not in `keep`
    pub fn retain(&mut self, keep: impl Fn(ToastId) -> bool) {
        let stale: Vec<ToastId> = self.timers.keys().copied().filter(|id| !keep(*id)).collect();
        for id in stale {
            self.cancel(id);
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.handle.abort();
        }
    }

    #[must_use]
    pub fn is_armed(&self, id: ToastId) -> bool {
        self.timers.get(&id).is_some_and(|t| !t.handle.is_finished())
    }

    /// Time left before the timer for `id` fires
    #[must_use]
    pub fn remaining(&self, id: ToastId) -> Option<Duration> {
        self.timers
            .get(&id)
            .map(|t| t.duration.saturating_sub(t.started_at.elapsed()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

impl Drop for DismissTimers {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
