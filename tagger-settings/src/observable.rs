//! Observable value cells used for every settings field.
//!
//! An [`Observable`] is a cloneable handle to one shared value. Writing a
//! different value notifies every subscriber synchronously with the old and
//! new value, after the internal locks have been released, so a callback may
//! read or even write the same observable.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

type Callback<T> = Arc<dyn Fn(&T, &T) + Send + Sync>;

/// Handle returned by [`Observable::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Inner<T> {
    value: RwLock<T>,
    subscribers: Mutex<Vec<(SubscriptionId, Callback<T>)>>,
    next_id: AtomicU64,
}

pub struct Observable<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*self.inner.value.read())
            .field("subscribers", &self.inner.subscribers.lock().len())
            .finish()
    }
}

impl<T: Default + Clone + PartialEq + Send + Sync + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(value),
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.read().clone()
    }

    /// Borrows the current value without cloning it.
    ///
    /// The read lock is held while `f` runs; `f` must not write to this observable.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.read())
    }

    /// Replaces the value. Returns `false` and notifies nobody when `value`
    /// equals the current one.
    pub fn set(&self, value: T) -> bool {
        let previous = {
            let mut current = self.inner.value.write();
            if *current == value {
                return false;
            }
            std::mem::replace(&mut *current, value.clone())
        };

        let callbacks: Vec<Callback<T>> = self
            .inner
            .subscribers
            .lock()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for callback in callbacks {
            callback(&previous, &value);
        }
        true
    }

    /// Applies `f` to a copy of the value and stores the result through [`Observable::set`].
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut value = self.get();
        f(&mut value);
        self.set(value)
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T, &T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner.subscribers.lock().push((id, Arc::new(callback)));
        id
    }

    /// Returns whether a subscription with this id was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn set_notifies_with_old_and_new_value() {
        let port = Observable::new(3067u16);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        port.subscribe(move |old, new| sink.lock().push((*old, *new)));

        assert!(port.set(8080));
        assert!(port.set(9000));
        assert_eq!(*seen.lock(), vec![(3067, 8080), (8080, 9000)]);
        assert_eq!(port.get(), 9000);
    }

    #[test]
    fn equal_write_is_silent() {
        let theme = Observable::new("dark".to_string());
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        theme.subscribe(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!theme.set("dark".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn clones_share_state_and_subscribers() {
        let flag = Observable::new(false);
        let handle = flag.clone();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        flag.subscribe(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        handle.set(true);
        assert!(flag.get());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(handle.subscriber_count(), 1);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let value = Observable::new(0u16);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let id = value.subscribe(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        value.set(1);
        assert!(value.unsubscribe(id));
        assert!(!value.unsubscribe(id));
        value.set(2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(value.subscriber_count(), 0);
    }

    #[test]
    fn callback_may_read_the_observable() {
        let value = Observable::new(1u16);
        let observed = Arc::new(Mutex::new(None));
        let (handle, sink) = (value.clone(), Arc::clone(&observed));
        value.subscribe(move |_, _| *sink.lock() = Some(handle.get()));

        value.set(5);
        assert_eq!(*observed.lock(), Some(5));
    }

    #[test]
    fn update_mutates_a_copy() {
        let tags = Observable::new(vec!["a".to_string()]);
        assert!(tags.update(|v| v.push("b".to_string())));
        assert!(!tags.update(|_| {}));
        assert_eq!(tags.with(|v| v.len()), 2);
    }
}
