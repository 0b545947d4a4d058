//! Motion intensity from per-axis standard deviation.

use serde::Serialize;

use crate::sample::AccelSample;

/// Population standard deviation of each acceleration axis over a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AxisDeviation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AxisDeviation {
    /// Euclidean norm of the three deviations.
    ///
    /// This is the single "how much shaking is happening now" scalar the
    /// classifier consumes.
    pub fn intensity(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Computes per-axis deviation once enough samples have accrued.
#[derive(Debug, Clone, Copy)]
pub struct VarianceEstimator {
    min_samples: usize,
}

impl VarianceEstimator {
    pub fn new(min_samples: usize) -> Self {
        Self {
            min_samples: min_samples.max(1),
        }
    }

    pub fn min_samples(&self) -> usize {
        self.min_samples
    }

    /// Estimate the deviation over `samples`.
    ///
    /// Returns `None` when fewer than `min_samples` are present. That is not
    /// an error: callers skip classification until more data arrives.
    ///
    /// # Examples
    ///
    /// ```
    /// use sway_motion::{AccelSample, Timestamp, VarianceEstimator};
    ///
    /// let estimator = VarianceEstimator::new(5);
    /// let flat: Vec<_> = (0..5)
    ///     .map(|i| AccelSample::new(1.0, 1.0, 1.0, Timestamp::from_millis(i * 50)))
    ///     .collect();
    ///
    /// assert!(estimator.estimate(&flat[..4]).is_none());
    ///
    /// let deviation = estimator.estimate(&flat).map(|d| d.intensity());
    /// assert_eq!(deviation, Some(0.0));
    /// ```
    pub fn estimate<'a, I>(&self, samples: I) -> Option<AxisDeviation>
    where
        I: IntoIterator<Item = &'a AccelSample>,
        I::IntoIter: Clone,
    {
        let iter = samples.into_iter();
        let count = iter.clone().count();
        if count < self.min_samples {
            return None;
        }

        Some(AxisDeviation {
            x: population_std_dev(iter.clone().map(|s| s.x), count),
            y: population_std_dev(iter.clone().map(|s| s.y), count),
            z: population_std_dev(iter.map(|s| s.z), count),
        })
    }
}

/// Population standard deviation (divides by N).
///
/// Values are shifted by the first element before averaging, which makes a
/// constant series come out as exactly zero and keeps precision when the
/// axis carries a large offset such as gravity.
fn population_std_dev<I>(values: I, count: usize) -> f32
where
    I: Iterator<Item = f32> + Clone,
{
    let mut shifted = values.clone();
    let Some(origin) = shifted.next() else {
        return 0.0;
    };

    let n = count as f32;
    let mean_offset = values.clone().map(|v| v - origin).sum::<f32>() / n;
    let variance = values
        .map(|v| {
            let dev = (v - origin) - mean_offset;
            dev * dev
        })
        .sum::<f32>()
        / n;

    variance.max(0.0).sqrt()
}
