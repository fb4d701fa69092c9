//! Session expiry timer
//!
//! A scheduler owns at most one pending callback. Arming always replaces the
//! previous callback, so a superseded session can never be torn down by a
//! stale timer. A deadline already in the past fires on the next tick, never
//! inside `arm` itself.

use crate::clock::{Clock, ManualClock};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

pub trait ExpiryScheduler {
    /// Fire `on_expire` once at `expires_at_millis`, replacing any pending callback
    fn arm(&self, expires_at_millis: i64, on_expire: Box<dyn FnOnce()>);

    /// Drop the pending callback, if any
    fn cancel(&self);

    fn is_armed(&self) -> bool;
}

struct Pending {
    deadline: i64,
    callback: Box<dyn FnOnce()>,
}

/// Scheduler driven by hand against a [`ManualClock`]
///
/// Nothing fires until [`ManualScheduler::tick`] (or
/// [`ManualScheduler::advance_to_deadline`]) is called. Clones share the
/// pending slot.
#[derive(Clone)]
pub struct ManualScheduler {
    clock: ManualClock,
    pending: Rc<RefCell<Option<Pending>>>,
    arms: Rc<Cell<usize>>,
}

impl ManualScheduler {
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            pending: Rc::default(),
            arms: Rc::default(),
        }
    }

    /// Deadline of the pending callback
    pub fn deadline(&self) -> Option<i64> {
        self.pending.borrow().as_ref().map(|p| p.deadline)
    }

    /// How many times `arm` has been called
    pub fn arm_count(&self) -> usize {
        self.arms.get()
    }

    /// Run the pending callback if its deadline has been reached
    pub fn tick(&self) -> bool {
        let now = self.clock.now_millis();
        let due = {
            let mut pending = self.pending.borrow_mut();
            match pending.as_ref() {
                Some(p) if p.deadline <= now => pending.take(),
                _ => None,
            }
        };

        // The slot borrow is released so the callback may re-arm
        match due {
            Some(pending) => {
                (pending.callback)();
                true
            }
            None => false,
        }
    }

    /// Move the clock to the pending deadline (if later than now) and tick
    pub fn advance_to_deadline(&self) -> bool {
        match self.deadline() {
            Some(deadline) => {
                if deadline > self.clock.now_millis() {
                    self.clock.set(deadline);
                }
                self.tick()
            }
            None => false,
        }
    }
}

impl ExpiryScheduler for ManualScheduler {
    fn arm(&self, expires_at_millis: i64, on_expire: Box<dyn FnOnce()>) {
        self.arms.set(self.arms.get() + 1);
        *self.pending.borrow_mut() = Some(Pending {
            deadline: expires_at_millis,
            callback: on_expire,
        });
    }

    fn cancel(&self) {
        self.pending.borrow_mut().take();
    }

    fn is_armed(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.clock.now_millis())
            .field("deadline", &self.deadline())
            .field("arms", &self.arms.get())
            .finish()
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserExpiryScheduler;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::ExpiryScheduler;
    use crate::clock::{Clock, SystemClock};
    use gloo::timers::callback::Timeout;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// `setTimeout` clamps anything above this to zero
    const MAX_TIMEOUT_MS: i64 = i32::MAX as i64;

    /// `setTimeout` backed scheduler
    ///
    /// Dropping it clears the pending timeout.
    #[derive(Debug, Default)]
    pub struct BrowserExpiryScheduler {
        slot: Rc<RefCell<Option<Timeout>>>,
    }

    impl BrowserExpiryScheduler {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl ExpiryScheduler for BrowserExpiryScheduler {
        fn arm(&self, expires_at_millis: i64, on_expire: Box<dyn FnOnce()>) {
            self.cancel();
            schedule(&self.slot, expires_at_millis, on_expire);
        }

        fn cancel(&self) {
            // Dropping a gloo `Timeout` clears it
            drop(self.slot.borrow_mut().take());
        }

        fn is_armed(&self) -> bool {
            self.slot.borrow().is_some()
        }
    }

    /// Arm one hop toward `expires_at`; long waits chain several hops
    fn schedule(
        slot: &Rc<RefCell<Option<Timeout>>>,
        expires_at: i64,
        on_expire: Box<dyn FnOnce()>,
    ) {
        let remaining = (expires_at - SystemClock.now_millis()).max(0);
        let hop = remaining.min(MAX_TIMEOUT_MS);
        let weak = Rc::downgrade(slot);

        let timeout = Timeout::new(u32::try_from(hop).unwrap_or(u32::MAX), move || {
            let Some(slot) = weak.upgrade() else {
                return;
            };
            // Detach the running timer so the callback is free to re-arm or cancel
            if let Some(running) = slot.borrow_mut().take() {
                let _ = running.forget();
            }
            if hop < remaining {
                schedule(&slot, expires_at, on_expire);
            } else {
                tracing::debug!("session expiry timer fired");
                on_expire();
            }
        });

        *slot.borrow_mut() = Some(timeout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() -> Box<dyn FnOnce()>) {
        let fired = Rc::new(Cell::new(0));
        let handle = fired.clone();
        (fired, move || -> Box<dyn FnOnce()> {
            let fired = handle.clone();
            Box::new(move || fired.set(fired.get() + 1))
        })
    }

    #[test]
    fn test_fires_once_at_deadline() {
        let clock = ManualClock::new(0);
        let scheduler = ManualScheduler::new(clock.clone());
        let (fired, callback) = counter();

        scheduler.arm(1_000, callback());
        clock.set(999);
        assert!(!scheduler.tick());

        clock.set(1_000);
        assert!(scheduler.tick());
        assert!(!scheduler.tick());
        assert_eq!(fired.get(), 1);
        assert!(!scheduler.is_armed());
    }

    #[test]
    fn test_past_deadline_waits_for_tick() {
        let clock = ManualClock::new(5_000);
        let scheduler = ManualScheduler::new(clock);
        let (fired, callback) = counter();

        scheduler.arm(1_000, callback());
        assert_eq!(fired.get(), 0);
        assert!(scheduler.is_armed());

        assert!(scheduler.tick());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_rearm_replaces_previous_callback() {
        let clock = ManualClock::new(0);
        let scheduler = ManualScheduler::new(clock.clone());
        let (first, first_cb) = counter();
        let (second, second_cb) = counter();

        scheduler.arm(1_000, first_cb());
        scheduler.arm(2_000, second_cb());
        assert_eq!(scheduler.deadline(), Some(2_000));

        clock.set(10_000);
        scheduler.tick();
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert_eq!(scheduler.arm_count(), 2);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let clock = ManualClock::new(0);
        let scheduler = ManualScheduler::new(clock);
        let (fired, callback) = counter();

        scheduler.arm(10, callback());
        scheduler.cancel();
        scheduler.cancel();

        assert!(!scheduler.is_armed());
        assert!(!scheduler.advance_to_deadline());
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_callback_may_rearm() {
        let clock = ManualClock::new(0);
        let scheduler = ManualScheduler::new(clock);
        let inner = scheduler.clone();

        scheduler.arm(
            10,
            Box::new(move || inner.arm(20, Box::new(|| {}))),
        );
        assert!(scheduler.advance_to_deadline());
        assert_eq!(scheduler.deadline(), Some(20));
    }
}
