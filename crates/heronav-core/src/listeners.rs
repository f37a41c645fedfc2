//! Single-threaded listener registry and scoped subscriptions
//!
//! All header state lives on the UI thread, so listeners are plain `Rc`
//! callbacks. A [`Subscription`] releases its listener exactly once, either
//! explicitly or on drop.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Identifier handed out for each registered listener
pub type ListenerId = u64;

/// Callback invoked with each delivered value
pub type Listener<T> = Rc<dyn Fn(T)>;

struct Registry<T> {
    next_id: ListenerId,
    entries: Vec<(ListenerId, Listener<T>)>,
}

/// Ordered set of listeners sharing one registry
///
/// Cloning yields another handle to the same registry.
pub struct ListenerSet<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: Copy + 'static> ListenerSet<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register a listener, returning its id
    pub fn add(&self, listener: Listener<T>) -> ListenerId {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, listener));
        id
    }

    /// Remove a listener; returns false if it was already gone
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let before = registry.entries.len();
        registry.entries.retain(|(entry_id, _)| *entry_id != id);
        registry.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `value` to every listener registered at call time
    ///
    /// Listeners may subscribe or release during delivery. A listener released
    /// by an earlier callback in the same pass is not invoked.
    pub fn emit(&self, value: T) {
        let ids: Vec<ListenerId> = self
            .registry
            .borrow()
            .entries
            .iter()
            .map(|(id, _)| *id)
            .collect();

        for id in ids {
            let listener = self
                .registry
                .borrow()
                .entries
                .iter()
                .find(|(entry_id, _)| *entry_id == id)
                .map(|(_, listener)| Rc::clone(listener));

            if let Some(listener) = listener {
                listener(value);
            }
        }
    }

    /// Register a listener whose lifetime is bound to the returned subscription
    pub fn subscribe(&self, listener: impl Fn(T) + 'static) -> Subscription {
        let id = self.add(Rc::new(listener));
        let registry: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);

        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                let handle = ListenerSet { registry };
                handle.remove(id);
            }
        })
    }
}

impl<T: Copy + 'static> Default for ListenerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ListenerSet<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

/// Scoped registration that stops delivery once released
///
/// Releasing is idempotent, and dropping an active subscription releases it.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the action that undoes a registration
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Stop delivery; a second call is a no-op
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
            debug!("Subscription released");
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
