//! Time-windowed acceleration history.

use std::collections::VecDeque;
use std::collections::vec_deque::Iter;
use std::iter::Skip;
use std::time::Duration;

use crate::sample::AccelSample;
use crate::time::Timestamp;

/// Rolling history of acceleration samples bounded by age, not count.
///
/// Samples are kept in arrival order. Eviction is decided by each sample's
/// recorded timestamp measured against the newest timestamp seen so far, so
/// a late sample stamped more than one window back is evicted on arrival.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use sway_motion::{AccelSample, SampleBuffer, Timestamp};
///
/// let mut buffer = SampleBuffer::new(Duration::from_millis(1000));
/// buffer.record(AccelSample::new(0.0, 0.0, 9.8, Timestamp::from_millis(0)));
/// buffer.record(AccelSample::new(0.0, 0.0, 9.8, Timestamp::from_millis(999)));
/// assert_eq!(buffer.len(), 2);
///
/// // At t=1000 the first sample is exactly one window old and is evicted
/// buffer.record(AccelSample::new(0.0, 0.0, 9.8, Timestamp::from_millis(1000)));
/// assert_eq!(buffer.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    window: Duration,
    samples: VecDeque<AccelSample>,
    newest_seen: Option<Timestamp>,
}

impl SampleBuffer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            samples: VecDeque::new(),
            newest_seen: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Append a sample and prune against the newest timestamp recorded so
    /// far. Time never moves backward for the window.
    pub fn record(&mut self, sample: AccelSample) {
        let now = self
            .newest_seen
            .map_or(sample.time, |newest| newest.max(sample.time));
        self.newest_seen = Some(now);
        self.samples.push_back(sample);
        self.prune(now);
    }

    /// Remove every sample with `now - time >= window`.
    pub fn prune(&mut self, now: Timestamp) {
        let window = self.window;
        self.samples
            .retain(|sample| now.saturating_since(sample.time) < window);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.newest_seen = None;
    }

    pub fn iter(&self) -> Iter<'_, AccelSample> {
        self.samples.iter()
    }

    /// The last `n` samples in arrival order (fewer if the buffer is short).
    pub fn latest(&self, n: usize) -> Skip<Iter<'_, AccelSample>> {
        let skip = self.samples.len().saturating_sub(n);
        self.samples.iter().skip(skip)
    }

    pub fn newest(&self) -> Option<&AccelSample> {
        self.samples.back()
    }
}
