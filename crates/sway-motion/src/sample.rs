//! Sensor sample types.

use serde::{Deserialize, Serialize};

use crate::constants::INITIAL_ORIENTATION;
use crate::time::Timestamp;

/// One acceleration reading. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccelSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub time: Timestamp,
}

impl AccelSample {
    pub fn new(x: f32, y: f32, z: f32, time: Timestamp) -> Self {
        Self { x, y, z, time }
    }

    /// Whether every axis is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Most recent device orientation, in degrees.
///
/// `beta` is front-to-back tilt, `gamma` is left-to-right tilt. Alpha
/// (compass heading) is not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientSample {
    pub beta: f32,
    pub gamma: f32,
    pub time: Timestamp,
}

impl OrientSample {
    pub fn new(beta: f32, gamma: f32, time: Timestamp) -> Self {
        Self { beta, gamma, time }
    }

    /// The orientation assumed before any callback arrives: upright,
    /// rolled onto its side.
    pub fn initial(time: Timestamp) -> Self {
        let (beta, gamma) = INITIAL_ORIENTATION;
        Self { beta, gamma, time }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accel_sample_finite() {
        let s = AccelSample::new(0.1, -0.2, 9.8, Timestamp::ZERO);
        assert!(s.is_finite());

        let nan = AccelSample::new(f32::NAN, 0.0, 0.0, Timestamp::ZERO);
        assert!(!nan.is_finite());

        let inf = AccelSample::new(0.0, 0.0, f32::INFINITY, Timestamp::ZERO);
        assert!(!inf.is_finite());
    }

    #[test]
    fn test_initial_orientation() {
        let o = OrientSample::initial(Timestamp::from_millis(7));
        assert!(o.beta.abs() < f32::EPSILON);
        assert!((o.gamma + 90.0).abs() < f32::EPSILON);
        assert_eq!(o.time, Timestamp::from_millis(7));
    }
}
