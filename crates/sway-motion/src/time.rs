//! Timestamps and clocks.
//!
//! Sensor samples carry millisecond timestamps supplied by the host. Hosts do
//! not guarantee monotonic delivery, so every difference here saturates at
//! zero instead of underflowing.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Millisecond timestamp on the host's sensor timeline.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use sway_motion::Timestamp;
///
/// let earlier = Timestamp::from_millis(1_000);
/// let later = Timestamp::from_millis(1_150);
///
/// assert_eq!(later.saturating_since(earlier), Duration::from_millis(150));
/// // Out-of-order timestamps never underflow
/// assert_eq!(earlier.saturating_since(later), Duration::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The origin of the timeline.
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Time elapsed from `earlier` to `self`, or zero if `earlier` is later.
    pub fn saturating_since(self, earlier: Timestamp) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }

    /// Advances the timestamp, saturating at `u64::MAX` milliseconds.
    pub fn saturating_add(self, delta: Duration) -> Self {
        Self(self.0.saturating_add(duration_millis(delta)))
    }
}

impl From<u64> for Timestamp {
    fn from(ms: u64) -> Self {
        Self(ms)
    }
}

fn duration_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Source of "now" for the clock-reading callback forms.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Production clock: milliseconds since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Timestamp {
        Timestamp(duration_millis(self.origin.elapsed()))
    }
}

/// Manually driven clock.
///
/// Clones share the same underlying time, so a test (or a trace replayer)
/// can keep a handle after moving the clock into a controller.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use sway_motion::{Clock, ManualClock, Timestamp};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
///
/// handle.advance(Duration::from_millis(50));
/// assert_eq!(clock.now(), Timestamp::from_millis(50));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now: Timestamp) -> Self {
        Self {
            now_ms: Arc::new(AtomicU64::new(now.as_millis())),
        }
    }

    pub fn set(&self, now: Timestamp) {
        self.now_ms.store(now.as_millis(), Ordering::Relaxed);
    }

    pub fn advance(&self, delta: Duration) {
        let next = self.now().saturating_add(delta);
        self.set(next);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.now_ms.load(Ordering::Relaxed))
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_since_forward() {
        let a = Timestamp::from_millis(100);
        let b = Timestamp::from_millis(1100);
        assert_eq!(b.saturating_since(a), Duration::from_millis(1000));
    }

    #[test]
    fn test_saturating_since_backwards_is_zero() {
        let a = Timestamp::from_millis(100);
        let b = Timestamp::from_millis(50);
        assert_eq!(b.saturating_since(a), Duration::ZERO);
    }

    #[test]
    fn test_saturating_add_at_max() {
        let t = Timestamp::from_millis(u64::MAX - 1);
        assert_eq!(
            t.saturating_add(Duration::from_secs(10)),
            Timestamp::from_millis(u64::MAX)
        );
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::starting_at(Timestamp::from_millis(10));
        let handle = clock.clone();
        handle.set(Timestamp::from_millis(500));
        assert_eq!(clock.now(), Timestamp::from_millis(500));
    }

    #[test]
    fn test_monotonic_clock_does_not_go_backwards() {
        let clock = MonotonicClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_timestamp_serde_transparent() -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(&Timestamp::from_millis(42))?;
        assert_eq!(json, "42");
        let back: Timestamp = serde_json::from_str("42")?;
        assert_eq!(back, Timestamp::from_millis(42));
        Ok(())
    }
}
