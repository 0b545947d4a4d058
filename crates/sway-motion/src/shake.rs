//! One-shot impulse from a strong device shake.

use crate::config::ShakeTuning;
use crate::force::ForceVector;

/// Converts a shake event into an absolute force.
///
/// The result replaces whatever force was set before and is not clipped:
/// a hard shake is allowed to throw the character well past the bounds the
/// other paths respect.
#[derive(Debug, Clone)]
pub struct ShakeTrigger {
    velocity_threshold: f32,
    tuning: ShakeTuning,
}

impl ShakeTrigger {
    pub fn new(velocity_threshold: f32, tuning: ShakeTuning) -> Self {
        Self {
            velocity_threshold,
            tuning,
        }
    }

    pub fn tuning(&self) -> &ShakeTuning {
        &self.tuning
    }

    /// Force to assign for a shake with the given velocity components, or
    /// `None` when the shake is too weak or not a finite reading.
    ///
    /// # Examples
    ///
    /// ```
    /// use sway_motion::{ShakeTrigger, ShakeTuning};
    ///
    /// let trigger = ShakeTrigger::new(1.5, ShakeTuning::default());
    /// assert!(trigger.evaluate(1.0, 0.0, 0.0).is_none());
    ///
    /// let force = trigger.evaluate(0.0, 5.0, 0.0).unwrap_or_default();
    /// assert!((force.w - 187.5).abs() < f32::EPSILON);
    /// ```
    pub fn evaluate(&self, x: f32, y: f32, z: f32) -> Option<ForceVector> {
        let total = (x * x + y * y + z * z).sqrt();
        if !total.is_finite() || total < self.velocity_threshold {
            return None;
        }

        let multiplier = (total * self.tuning.velocity_gain).min(self.tuning.max_multiplier);
        Some(ForceVector::new(
            y * multiplier * self.tuning.lateral_gain,
            x * multiplier * self.tuning.longitudinal_gain,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger() -> ShakeTrigger {
        ShakeTrigger::new(1.5, ShakeTuning::default())
    }

    #[test]
    fn test_below_threshold_ignored() {
        assert!(trigger().evaluate(0.5, -0.5, 0.49).is_none());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // total 1.5, multiplier 4.5
        let f = trigger().evaluate(1.5, 0.0, 0.0).unwrap_or_default();
        assert!((f.t - 1.5 * 4.5 * 0.3).abs() < 1e-5);
        assert!(f.w.abs() < f32::EPSILON);
    }

    #[test]
    fn test_multiplier_caps() {
        let f = trigger().evaluate(0.0, 5.0, 0.0).unwrap_or_default();
        assert!((f.w - 187.5).abs() < 1e-4);
        assert!(f.t.abs() < f32::EPSILON);
    }

    #[test]
    fn test_z_only_contributes_to_magnitude() {
        // Loud z shake: multiplier capped, but z drives neither channel
        let f = trigger().evaluate(0.1, 0.1, 10.0).unwrap_or_default();
        assert!((f.w - 0.1 * 15.0 * 2.5).abs() < 1e-4);
        assert!((f.t - 0.1 * 15.0 * 0.3).abs() < 1e-4);
    }

    #[test]
    fn test_sign_follows_components() {
        let f = trigger().evaluate(-2.0, -1.0, 0.0).unwrap_or_default();
        assert!(f.w < 0.0);
        assert!(f.t < 0.0);
    }

    #[test]
    fn test_non_finite_ignored() {
        assert!(trigger().evaluate(f32::NAN, 3.0, 0.0).is_none());
        assert!(trigger().evaluate(0.0, f32::INFINITY, 0.0).is_none());
    }

    #[test]
    fn test_custom_tuning_scales_force() {
        let tuning = ShakeTuning {
            lateral_gain: 1.0,
            ..ShakeTuning::default()
        };
        let trigger = ShakeTrigger::new(1.5, tuning.clone());
        assert_eq!(trigger.tuning(), &tuning);

        // Capped multiplier 15, lateral gain 1
        let f = trigger.evaluate(0.0, 5.0, 0.0).unwrap_or_default();
        assert!((f.w - 75.0).abs() < 1e-4);
    }
}
