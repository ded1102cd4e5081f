use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub value: String,
    pub busy: bool,
}

/// Notified every time the form text or the busy flag changes.
pub trait StateObserver: Send + Sync {
    fn on_state_changed(&self, snapshot: &FormSnapshot);
}

/// Text typed by the user plus the busy flag of the create button.
///
/// Only the submit orchestrator flips `busy`, through [`FormState::begin_submit`].
#[derive(Default)]
pub struct FormState {
    value: Mutex<String>,
    busy: AtomicBool,
    observers: Mutex<Vec<Arc<dyn StateObserver>>>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, observer: Arc<dyn StateObserver>) {
        lock(&self.observers).push(observer);
    }

    pub fn value(&self) -> String {
        lock(&self.value).clone()
    }

    pub fn set_value(&self, text: impl Into<String>) {
        let text = text.into();
        {
            let mut value = lock(&self.value);
            if *value == text {
                return;
            }
            *value = text;
        }
        self.notify();
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            value: self.value(),
            busy: self.is_busy(),
        }
    }

    /// Returns `None` when a submit is already in flight.
    pub(crate) fn begin_submit(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()?;
        self.notify();
        Some(BusyGuard {
            form: self,
            released: false,
        })
    }

    fn clear_busy(&self) {
        if self.busy.swap(false, Ordering::SeqCst) {
            self.notify();
        }
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        // Clone the list so observers may subscribe from inside the callback.
        let observers = lock(&self.observers).clone();
        for observer in observers {
            observer.on_state_changed(&snapshot);
        }
    }
}

/// Clears the busy flag when released or dropped.
pub(crate) struct BusyGuard<'a> {
    form: &'a FormState,
    released: bool,
}

impl BusyGuard<'_> {
    pub(crate) fn release(mut self) {
        self.released = true;
        self.form.clear_busy();
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if !self.released {
            self.form.clear_busy();
        }
    }
}

// A poisoned lock only means an observer panicked; the data is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
