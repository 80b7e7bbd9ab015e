//! A value that notifies a single listener when it actually changes.
//!
//! Setting an equal value is a no-op: the listener does not fire, so side
//! effects hanging off the listener are never repeated redundantly.

use std::fmt;
use std::mem;

#[cfg(test)]
#[path = "observe_test.rs"]
mod observe_test;

type Listener<T> = Box<dyn FnMut(&T, &T)>;

/// State container with change detection.
pub struct Observable<T> {
    value: T,
    listener: Option<Listener<T>>,
}

impl<T: PartialEq> Observable<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value, listener: None }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Register the change listener, replacing any previous one.
    ///
    /// The listener receives `(old, new)` after the new value is stored.
    pub fn subscribe(&mut self, listener: impl FnMut(&T, &T) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Drop the change listener.
    pub fn unsubscribe(&mut self) {
        self.listener = None;
    }

    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Store `value`. Returns `true` and notifies the listener only when it
    /// differs from the current value.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        let old = mem::replace(&mut self.value, value);
        if let Some(listener) = self.listener.as_mut() {
            listener(&old, &self.value);
        }
        true
    }

    /// Compute the next value from the current one and [`set`](Self::set) it.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> bool {
        let next = f(&self.value);
        self.set(next)
    }
}

impl<T: PartialEq + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
