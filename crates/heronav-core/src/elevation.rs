//! Elevated ("scrolled") style flag derived from scroll progress

use crate::error::CoreError;
use crate::listeners::Subscription;
use crate::scroll::ScrollProgressObserver;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

/// Scroll fraction above which the header is elevated
pub const DEFAULT_ELEVATION_THRESHOLD: f64 = 0.05;

/// Threshold rule mapping scroll progress to the elevated flag
///
/// With `release_band == 0` the flag is exactly `progress > threshold` and
/// flips on every sample crossing the threshold. A positive band keeps an
/// elevated header elevated until progress falls to `threshold - release_band`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElevationPolicy {
    pub threshold: f64,
    pub release_band: f64,
}

impl Default for ElevationPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_ELEVATION_THRESHOLD,
            release_band: 0.0,
        }
    }
}

impl ElevationPolicy {
    pub fn validate(&self) -> Result<(), CoreError> {
        let threshold_ok = self.threshold > 0.0 && self.threshold < 1.0;
        let band_ok = self.release_band >= 0.0 && self.release_band <= self.threshold;
        if threshold_ok && band_ok {
            Ok(())
        } else {
            Err(CoreError::InvalidThreshold {
                threshold: self.threshold,
                release_band: self.release_band,
            })
        }
    }

    /// Stateless rule: elevated iff progress is strictly above the threshold
    pub fn is_elevated(&self, progress: f64) -> bool {
        progress > self.threshold
    }

    /// Next flag value given the previous one
    pub fn next(&self, was_elevated: bool, progress: f64) -> bool {
        if was_elevated {
            progress > self.threshold - self.release_band
        } else {
            progress > self.threshold
        }
    }
}

/// `progress > 0.05`
pub fn elevated(progress: f64) -> bool {
    ElevationPolicy::default().is_elevated(progress)
}

/// Elevated flag kept in sync with a scroll observer
///
/// Owns the scroll subscription; dropping the state releases it.
pub struct ElevationState {
    flag: Rc<Cell<bool>>,
    subscription: Subscription,
}

impl ElevationState {
    /// Subscribe to `observer`, seeding the flag from its latest value
    pub fn bind(observer: &ScrollProgressObserver, policy: ElevationPolicy) -> Self {
        Self::bind_with(observer, policy, |_| {})
    }

    /// Like [`Self::bind`], calling `on_flip` whenever the flag changes
    pub fn bind_with(
        observer: &ScrollProgressObserver,
        policy: ElevationPolicy,
        on_flip: impl Fn(bool) + 'static,
    ) -> Self {
        let flag = Rc::new(Cell::new(policy.is_elevated(observer.latest())));

        let state = Rc::clone(&flag);
        let subscription = observer.subscribe(move |progress| {
            let was = state.get();
            let now = policy.next(was, progress);
            if now != was {
                state.set(now);
                debug!(elevated = now, progress, "Header elevation changed");
                on_flip(now);
            }
        });

        Self { flag, subscription }
    }

    pub fn is_elevated(&self) -> bool {
        self.flag.get()
    }

    /// Release the scroll subscription early; the flag freezes at its last value
    pub fn release(&mut self) {
        self.subscription.release();
    }

    pub fn is_bound(&self) -> bool {
        self.subscription.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::ScrollSignal;
    use std::cell::RefCell;

    fn bound(signal: &ScrollSignal, policy: ElevationPolicy) -> ElevationState {
        let observer = ScrollProgressObserver::new(Rc::new(signal.clone()));
        ElevationState::bind(&observer, policy)
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!elevated(0.0));
        assert!(!elevated(0.05));
        assert!(elevated(0.050001));
        assert!(elevated(1.0));
    }

    #[test]
    fn test_follows_scripted_sequence() {
        let signal = ScrollSignal::new();
        let state = bound(&signal, ElevationPolicy::default());

        let mut flags = Vec::new();
        for sample in [0.0, 0.03, 0.06, 0.04] {
            signal.set(sample);
            flags.push(state.is_elevated());
        }
        assert_eq!(flags, vec![false, false, true, false]);
    }

    #[test]
    fn test_flickers_without_band() {
        let signal = ScrollSignal::new();
        let flips = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&flips);
        let observer = ScrollProgressObserver::new(Rc::new(signal.clone()));
        let _state = ElevationState::bind_with(&observer, ElevationPolicy::default(), move |e| {
            sink.borrow_mut().push(e)
        });

        signal.play(&[0.051, 0.049, 0.051, 0.049]);
        assert_eq!(*flips.borrow(), vec![true, false, true, false]);
    }

    #[test]
    fn test_release_band_suppresses_flicker() {
        let policy = ElevationPolicy {
            threshold: 0.05,
            release_band: 0.02,
        };
        let signal = ScrollSignal::new();
        let state = bound(&signal, policy);

        signal.set(0.051);
        assert!(state.is_elevated());
        signal.set(0.049);
        assert!(state.is_elevated());
        signal.set(0.03);
        assert!(!state.is_elevated());
    }

    #[test]
    fn test_seeded_from_current_value() {
        let signal = ScrollSignal::with_value(0.5);
        let state = bound(&signal, ElevationPolicy::default());
        assert!(state.is_elevated());
    }

    #[test]
    fn test_drop_releases_subscription() {
        let signal = ScrollSignal::new();
        let state = bound(&signal, ElevationPolicy::default());
        assert_eq!(signal.listener_count(), 1);
        drop(state);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn test_release_freezes_flag() {
        let signal = ScrollSignal::new();
        let mut state = bound(&signal, ElevationPolicy::default());
        state.release();
        state.release();
        signal.set(0.9);
        assert!(!state.is_elevated());
        assert!(!state.is_bound());
    }

    #[test]
    fn test_policy_validation() {
        assert!(ElevationPolicy::default().validate().is_ok());
        let bad = ElevationPolicy {
            threshold: 0.05,
            release_band: 0.1,
        };
        assert!(bad.validate().is_err());
        let bad = ElevationPolicy {
            threshold: 1.5,
            release_band: 0.0,
        };
        assert!(bad.validate().is_err());
    }
}
