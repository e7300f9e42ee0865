//! Observable values shared between the engine and a rendering layer.
//!
//! Scroll progress and visibility are published as [`Signal`]s. A host binding can poll them
//! with [`Signal::get`] or [`Signal::subscribe`] to be called on every change. Signals are
//! single-threaded: all updates happen on the thread that dispatches host events.

use std::{cell::RefCell, fmt, rc::Rc};

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

/// Handle returned by [`Signal::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
    // Set while a notification pass runs; nested writes only mark the value dirty.
    notifying: bool,
    dirty: bool,
}

// Bounds write-back chains between subscribers.
const MAX_NOTIFY_PASSES: usize = 64;

/// Shared, observable value. Clones refer to the same underlying value.
pub struct Signal<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Signal")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T> Signal<T>
where
    T: Clone + PartialEq + 'static,
{
    /// Create a signal holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
                notifying: false,
                dirty: false,
            })),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replace the value. Subscribers are notified only when it changed.
    ///
    /// A subscriber may write back to the signal it observes: the nested write is applied at
    /// once and delivered to every subscriber after the current pass finishes.
    ///
    /// Returns `true` when the value changed.
    pub fn set(&self, value: T) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return false;
            }
            inner.value = value;
            if inner.notifying {
                inner.dirty = true;
                return true;
            }
            inner.notifying = true;
        }
        self.notify();
        true
    }

    fn notify(&self) {
        for _ in 0..MAX_NOTIFY_PASSES {
            let (value, callbacks) = {
                let mut inner = self.inner.borrow_mut();
                inner.dirty = false;
                let callbacks = inner
                    .subscribers
                    .iter()
                    .map(|(_, cb)| Rc::clone(cb))
                    .collect::<Vec<_>>();
                (inner.value.clone(), callbacks)
            };
            for cb in callbacks {
                if let Ok(mut f) = cb.try_borrow_mut() {
                    (*f)(&value);
                }
            }
            let mut inner = self.inner.borrow_mut();
            if !inner.dirty {
                inner.notifying = false;
                return;
            }
        }
        tracing::warn!(
            passes = MAX_NOTIFY_PASSES,
            "signal subscribers kept rewriting the value; dropping further notifications"
        );
        let mut inner = self.inner.borrow_mut();
        inner.notifying = false;
        inner.dirty = false;
    }

    /// Modify the value in place, then notify as [`Signal::set`] does.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut next = self.get();
        f(&mut next);
        self.set(next)
    }

    /// Call `f` with every future value.
    pub fn subscribe(&self, f: impl FnMut(&T) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        let cb: Callback<T> = Rc::new(RefCell::new(f));
        inner.subscribers.push((id, cb));
        id
    }

    /// Stop notifying a subscriber. Returns `false` for unknown ids.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        inner.subscribers.len() != before
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Derived signal that tracks `f(value)`.
    pub fn map<U>(&self, f: impl Fn(&T) -> U + 'static) -> Signal<U>
    where
        U: Clone + PartialEq + 'static,
    {
        let derived = Signal::new(f(&self.inner.borrow().value));
        let target = derived.clone();
        self.subscribe(move |v| {
            target.set(f(v));
        });
        derived
    }
}

#[cfg(test)]
#[path = "../tests/unit/signal.rs"]
mod tests;
