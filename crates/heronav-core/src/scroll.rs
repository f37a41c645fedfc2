//! Scroll-progress signal and observer
//!
//! The host environment owns the scroll fraction and exposes it through
//! [`ScrollSource`]. [`ScrollSignal`] is the in-process implementation; it
//! backs the browser source and serves as a scripted source in tests.

use crate::listeners::{Listener, ListenerId, ListenerSet, Subscription};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// A continuous scroll fraction in `[0, 1]` owned by the host
pub trait ScrollSource {
    /// Latest fraction
    fn current(&self) -> f64;

    /// Start delivering changes to `listener`
    fn add_listener(&self, listener: Listener<f64>) -> ListenerId;

    /// Stop delivering to `id`; returns false if it was not registered
    fn remove_listener(&self, id: ListenerId) -> bool;
}

/// Clamp a raw sample into `[0, 1]`; NaN samples are dropped
pub fn normalize_fraction(raw: f64) -> Option<f64> {
    if raw.is_nan() {
        warn!("Dropping NaN scroll sample");
        return None;
    }
    if !(0.0..=1.0).contains(&raw) {
        warn!(raw, "Clamping out-of-range scroll sample");
    }
    Some(raw.clamp(0.0, 1.0))
}

/// Fraction of the scrollable distance covered by `scroll_top`
///
/// A document that fits in the viewport has nothing to scroll and reports 0.
pub fn fraction_from_offsets(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// Host-side scroll fraction with change notification
///
/// Listeners fire only when the stored value actually changes. Clones share
/// the same value and listeners.
#[derive(Clone)]
pub struct ScrollSignal {
    value: Rc<Cell<f64>>,
    listeners: ListenerSet<f64>,
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self::with_value(0.0)
    }

    pub fn with_value(initial: f64) -> Self {
        Self {
            value: Rc::new(Cell::new(normalize_fraction(initial).unwrap_or(0.0))),
            listeners: ListenerSet::new(),
        }
    }

    /// Record a new sample and notify listeners if it differs
    pub fn set(&self, raw: f64) {
        let Some(fraction) = normalize_fraction(raw) else {
            return;
        };
        if fraction == self.value.get() {
            return;
        }

        self.value.set(fraction);
        trace!(fraction, listeners = self.listeners.len(), "Scroll progress changed");
        self.listeners.emit(fraction);
    }

    /// Feed a scripted sequence of samples
    pub fn play(&self, samples: &[f64]) {
        for &sample in samples {
            self.set(sample);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for ScrollSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSource for ScrollSignal {
    fn current(&self) -> f64 {
        self.value.get()
    }

    fn add_listener(&self, listener: Listener<f64>) -> ListenerId {
        self.listeners.add(listener)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

/// Subscribes callbacks to a [`ScrollSource`]
#[derive(Clone)]
pub struct ScrollProgressObserver {
    source: Rc<dyn ScrollSource>,
}

impl ScrollProgressObserver {
    pub fn new(source: Rc<dyn ScrollSource>) -> Self {
        Self { source }
    }

    /// Latest fraction reported by the source
    pub fn latest(&self) -> f64 {
        self.source.current()
    }

    /// Deliver every change to `on_change` until the subscription is released
    pub fn subscribe(&self, on_change: impl Fn(f64) + 'static) -> Subscription {
        let id = self.source.add_listener(Rc::new(on_change));
        debug!(listener = id, "Scroll listener attached");

        let source = Rc::clone(&self.source);
        Subscription::new(move || {
            if source.remove_listener(id) {
                debug!(listener = id, "Scroll listener detached");
            }
        })
    }
}
