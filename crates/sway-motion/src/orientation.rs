//! Orientation-driven force augmentation.
//!
//! Sharp changes in device tilt while moving are a cheap proxy for turns
//! (gamma) and braking or acceleration (beta).

use crate::config::OrientationTuning;
use crate::force::ForceVector;
use crate::sample::OrientSample;
use crate::time::Timestamp;

#[derive(Debug, Clone)]
pub struct OrientationAugmenter {
    change_threshold: f32,
    tuning: OrientationTuning,
    previous: OrientSample,
}

impl OrientationAugmenter {
    pub fn new(change_threshold: f32, tuning: OrientationTuning, init_time: Timestamp) -> Self {
        Self {
            change_threshold,
            tuning,
            previous: OrientSample::initial(init_time),
        }
    }

    pub fn previous(&self) -> OrientSample {
        self.previous
    }

    pub fn tuning(&self) -> &OrientationTuning {
        &self.tuning
    }

    /// Record `sample` and return the force delta it warrants, if any.
    ///
    /// The previous sample is replaced on every call; a delta is produced
    /// only while `moving` and when either axis changed by more than the
    /// threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use sway_motion::{OrientationAugmenter, OrientationTuning, OrientSample, Timestamp};
    ///
    /// let mut augmenter = OrientationAugmenter::new(0.5, OrientationTuning::default(), Timestamp::ZERO);
    ///
    /// // Settle on a baseline while stopped: nothing is produced
    /// let baseline = OrientSample::new(0.0, 0.0, Timestamp::from_millis(10));
    /// assert!(augmenter.observe(baseline, false).is_none());
    ///
    /// // Braking tilt while moving
    /// let brake = OrientSample::new(0.6, 0.0, Timestamp::from_millis(20));
    /// let delta = augmenter.observe(brake, true).unwrap_or_default();
    /// assert!((delta.t - 0.96).abs() < 1e-5);
    /// assert!(delta.w.abs() < f32::EPSILON);
    /// ```
    pub fn observe(&mut self, sample: OrientSample, moving: bool) -> Option<ForceVector> {
        let beta_change = sample.beta - self.previous.beta;
        let gamma_change = sample.gamma - self.previous.gamma;
        self.previous = sample;

        if !moving {
            return None;
        }
        if beta_change.abs() <= self.change_threshold && gamma_change.abs() <= self.change_threshold
        {
            return None;
        }

        let gain = self.tuning.sensitivity;
        Some(ForceVector::new(
            gamma_change * gain * self.tuning.lateral_gain,
            beta_change * gain * self.tuning.longitudinal_gain,
        ))
    }
}
