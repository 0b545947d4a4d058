//! Moving/stopped hysteresis state machine.

use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::time::Timestamp;

/// Whether the vehicle carrying the device is considered in motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MotionState {
    #[default]
    Stopped,
    Moving {
        /// When the classifier entered `Moving`.
        since: Timestamp,
    },
}

impl MotionState {
    pub fn is_moving(&self) -> bool {
        matches!(self, MotionState::Moving { .. })
    }
}

/// A state change reported by [`MotionClassifier::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "transition", rename_all = "snake_case")]
pub enum MotionTransition {
    Started { at: Timestamp },
    Stopped { at: Timestamp, moving_for: Duration },
}

/// Two-threshold classifier over the motion intensity scalar.
///
/// Entering `Moving` needs `intensity > driving_threshold`; leaving it needs
/// `intensity < stopped_threshold`. Anything in between keeps the current
/// state, so noise around a single boundary cannot make the state flap.
///
/// # Examples
///
/// ```
/// use sway_motion::{MotionClassifier, MotionState, Timestamp};
///
/// let mut classifier = MotionClassifier::new(0.15, 0.08);
/// assert_eq!(classifier.state(), MotionState::Stopped);
///
/// classifier.update(0.2, Timestamp::from_millis(100));
/// assert!(classifier.is_moving());
///
/// // Dead zone: no change
/// classifier.update(0.1, Timestamp::from_millis(200));
/// assert!(classifier.is_moving());
///
/// classifier.update(0.05, Timestamp::from_millis(300));
/// assert!(!classifier.is_moving());
/// ```
#[derive(Debug, Clone)]
pub struct MotionClassifier {
    driving_threshold: f32,
    stopped_threshold: f32,
    state: MotionState,
}

impl MotionClassifier {
    pub fn new(driving_threshold: f32, stopped_threshold: f32) -> Self {
        Self {
            driving_threshold,
            stopped_threshold,
            state: MotionState::Stopped,
        }
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        self.state.is_moving()
    }

    /// Feed one intensity value observed at `now`.
    pub fn update(&mut self, intensity: f32, now: Timestamp) -> Option<MotionTransition> {
        match self.state {
            MotionState::Stopped if intensity > self.driving_threshold => {
                self.state = MotionState::Moving { since: now };
                info!("Motion started (intensity {intensity:.3})");
                Some(MotionTransition::Started { at: now })
            }
            MotionState::Moving { since } if intensity < self.stopped_threshold => {
                let moving_for = now.saturating_since(since);
                self.state = MotionState::Stopped;
                info!(
                    "Motion stopped after {:.1}s (intensity {intensity:.3})",
                    moving_for.as_secs_f32()
                );
                Some(MotionTransition::Stopped { at: now, moving_for })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> MotionClassifier {
        MotionClassifier::new(0.15, 0.08)
    }

    fn moving_classifier() -> MotionClassifier {
        let mut c = classifier();
        c.update(1.0, Timestamp::ZERO);
        c
    }

    #[test]
    fn test_starts_stopped() {
        assert_eq!(classifier().state(), MotionState::Stopped);
    }

    #[test]
    fn test_enters_moving_on_first_high_sample() {
        let mut c = classifier();
        let first = c.update(0.2, Timestamp::from_millis(100));
        assert_eq!(
            first,
            Some(MotionTransition::Started {
                at: Timestamp::from_millis(100)
            })
        );
        assert_eq!(
            c.state(),
            MotionState::Moving {
                since: Timestamp::from_millis(100)
            }
        );

        // Second high sample does not restart the moving clock
        assert_eq!(c.update(0.2, Timestamp::from_millis(200)), None);
        assert_eq!(
            c.state(),
            MotionState::Moving {
                since: Timestamp::from_millis(100)
            }
        );
    }

    #[test]
    fn test_leaves_moving_on_first_low_sample() {
        let mut c = classifier();
        c.update(0.2, Timestamp::from_millis(1_000));

        let t = c.update(0.05, Timestamp::from_millis(4_500));
        assert_eq!(
            t,
            Some(MotionTransition::Stopped {
                at: Timestamp::from_millis(4_500),
                moving_for: Duration::from_millis(3_500),
            })
        );
        assert_eq!(c.update(0.05, Timestamp::from_millis(4_600)), None);
        assert_eq!(c.state(), MotionState::Stopped);
    }

    #[test]
    fn test_dead_zone_from_stopped() {
        let mut c = classifier();
        assert_eq!(c.update(0.10, Timestamp::from_millis(1)), None);
        assert_eq!(c.update(0.10, Timestamp::from_millis(2)), None);
        assert!(!c.is_moving());
    }

    #[test]
    fn test_dead_zone_from_moving() {
        let mut c = moving_classifier();
        assert_eq!(c.update(0.10, Timestamp::from_millis(1)), None);
        assert_eq!(c.update(0.10, Timestamp::from_millis(2)), None);
        assert!(c.is_moving());
    }

    #[test]
    fn test_exact_thresholds_do_not_transition() {
        let mut c = classifier();
        assert_eq!(c.update(0.15, Timestamp::ZERO), None);

        let mut c = moving_classifier();
        assert_eq!(c.update(0.08, Timestamp::ZERO), None);
    }

    #[test]
    fn test_nan_intensity_never_transitions() {
        let mut c = classifier();
        assert_eq!(c.update(f32::NAN, Timestamp::ZERO), None);

        let mut c = moving_classifier();
        assert_eq!(c.update(f32::NAN, Timestamp::ZERO), None);
    }
}
