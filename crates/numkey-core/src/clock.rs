//! Time source for press tracking and repeat timers.
//!
//! Widgets never call `Instant::now()` directly; they ask a `Clock`. Hosts
//! use `SystemClock`, tests drive a `TestClock` by hand so repeat counts are
//! deterministic.

use std::sync::Arc;

use parking_lot::Mutex;
use web_time::{Duration, Instant};

pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock you can drive deterministically. Clones share the same time.
#[derive(Clone, Debug)]
pub struct TestClock {
    t: Arc<Mutex<Instant>>,
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl TestClock {
    pub fn new(start: Instant) -> Self {
        Self {
            t: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, t: Instant) {
        *self.t.lock() = t;
    }

    pub fn advance(&self, d: Duration) {
        let mut t = self.t.lock();
        *t += d;
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        *self.t.lock()
    }
}
