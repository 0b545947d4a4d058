//! Target force channels and the sanctioned ways of writing them.
//!
//! The physics engine exposes two force channels: `w` (lateral swing) and
//! `t` (longitudinal tilt). Three input paths write into them with different
//! semantics:
//!
//! | Path        | Mode                  | Bound        |
//! |-------------|-----------------------|--------------|
//! | Excitation  | accumulate, then clip | ±25 / ±18    |
//! | Orientation | accumulate, then clip | ±30 / ±22    |
//! | Shake       | assign                | none         |
//!
//! [`ForceTarget`] is the only writer, so no caller can bypass the bound
//! that belongs to its path.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    EXCITATION_T_LIMIT, EXCITATION_W_LIMIT, ORIENTATION_T_LIMIT, ORIENTATION_W_LIMIT,
};
use crate::physics::ExternalPhysics;

/// A value on both force channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ForceVector {
    /// Lateral / swing force
    pub w: f32,
    /// Longitudinal / tilt force
    pub t: f32,
}

impl ForceVector {
    pub const ZERO: Self = Self { w: 0.0, t: 0.0 };

    pub const fn new(w: f32, t: f32) -> Self {
        Self { w, t }
    }
}

impl std::ops::Add for ForceVector {
    type Output = ForceVector;

    fn add(self, rhs: ForceVector) -> ForceVector {
        ForceVector::new(self.w + rhs.w, self.t + rhs.t)
    }
}

/// Partial update of the force channels; `None` leaves a channel untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForceUpdate {
    pub w: Option<f32>,
    pub t: Option<f32>,
}

impl ForceUpdate {
    pub fn both(force: ForceVector) -> Self {
        Self {
            w: Some(force.w),
            t: Some(force.t),
        }
    }
}

/// Symmetric per-channel limits.
///
/// # Examples
///
/// ```
/// use sway_motion::{ForceBounds, ForceVector};
///
/// let bounds = ForceBounds::EXCITATION;
/// let clipped = bounds.clamp(ForceVector::new(40.0, -30.0));
/// assert_eq!(clipped, ForceVector::new(25.0, -18.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceBounds {
    pub w_limit: f32,
    pub t_limit: f32,
}

impl ForceBounds {
    /// Bounds applied after an excitation firing.
    pub const EXCITATION: Self = Self {
        w_limit: EXCITATION_W_LIMIT,
        t_limit: EXCITATION_T_LIMIT,
    };

    /// Looser bounds applied after an orientation augmentation.
    pub const ORIENTATION: Self = Self {
        w_limit: ORIENTATION_W_LIMIT,
        t_limit: ORIENTATION_T_LIMIT,
    };

    pub const fn new(w_limit: f32, t_limit: f32) -> Self {
        Self { w_limit, t_limit }
    }

    /// Hard clip each channel. NaN channels collapse to zero.
    pub fn clamp(&self, force: ForceVector) -> ForceVector {
        ForceVector {
            w: clip(force.w, self.w_limit),
            t: clip(force.t, self.t_limit),
        }
    }

    pub fn contains(&self, force: ForceVector) -> bool {
        force.w.abs() <= self.w_limit && force.t.abs() <= self.t_limit
    }
}

#[inline]
fn clip(value: f32, limit: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-limit, limit)
    }
}

/// Write access to an attached physics engine's force channels.
///
/// Every write also makes sure the engine is running, so animation resumes
/// after any force injection.
#[derive(Debug)]
pub struct ForceTarget<'a, P: ExternalPhysics + ?Sized> {
    physics: &'a mut P,
}

impl<'a, P: ExternalPhysics + ?Sized> ForceTarget<'a, P> {
    pub(crate) fn new(physics: &'a mut P) -> Self {
        Self { physics }
    }

    pub fn current(&self) -> ForceVector {
        self.physics.state()
    }

    /// Add `delta` to the current force and clip the sum to `bounds`.
    ///
    /// Returns the force written.
    pub fn accumulate(&mut self, delta: ForceVector, bounds: &ForceBounds) -> ForceVector {
        let next = bounds.clamp(self.physics.state() + delta);
        self.physics.set_state(ForceUpdate::both(next));
        self.ensure_running();
        next
    }

    /// Overwrite both channels. No bound is applied.
    pub fn assign(&mut self, force: ForceVector) -> ForceVector {
        self.physics.set_state(ForceUpdate::both(force));
        self.ensure_running();
        force
    }

    fn ensure_running(&mut self) {
        if !self.physics.is_running() {
            debug!("Starting physics engine");
            self.physics.start();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::ForceStore;

    #[test]
    fn test_clamp_inside_bounds_is_identity() {
        let f = ForceVector::new(3.0, -4.0);
        assert_eq!(ForceBounds::EXCITATION.clamp(f), f);
    }

    #[test]
    fn test_clamp_clips_each_channel() {
        let f = ForceBounds::EXCITATION.clamp(ForceVector::new(-100.0, 100.0));
        assert_eq!(f, ForceVector::new(-25.0, 18.0));

        let f = ForceBounds::ORIENTATION.clamp(ForceVector::new(-100.0, 100.0));
        assert_eq!(f, ForceVector::new(-30.0, 22.0));
    }

    #[test]
    fn test_clamp_non_finite() {
        let f = ForceBounds::EXCITATION.clamp(ForceVector::new(f32::NAN, f32::NEG_INFINITY));
        assert_eq!(f, ForceVector::new(0.0, -18.0));
    }

    #[test]
    fn test_contains() {
        assert!(ForceBounds::EXCITATION.contains(ForceVector::new(25.0, -18.0)));
        assert!(!ForceBounds::EXCITATION.contains(ForceVector::new(25.1, 0.0)));
    }

    #[test]
    fn test_accumulate_adds_and_clips() {
        let mut store = ForceStore::with_force(ForceVector::new(20.0, 1.0));
        let mut target = ForceTarget::new(&mut store);
        assert_eq!(target.current(), ForceVector::new(20.0, 1.0));
        let written = target.accumulate(ForceVector::new(10.0, 1.0), &ForceBounds::EXCITATION);

        assert_eq!(written, ForceVector::new(25.0, 2.0));
        assert_eq!(target.current(), written);
        assert_eq!(store.force(), written);
        assert!(store.is_running());
        assert_eq!(store.start_count(), 1);
    }

    #[test]
    fn test_assign_overwrites_unclamped() {
        let mut store = ForceStore::with_force(ForceVector::new(5.0, 5.0));
        ForceTarget::new(&mut store).assign(ForceVector::new(187.5, 0.0));
        assert_eq!(store.force(), ForceVector::new(187.5, 0.0));
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut store = ForceStore::new();
        let mut target = ForceTarget::new(&mut store);
        target.assign(ForceVector::new(1.0, 1.0));
        target.accumulate(ForceVector::new(1.0, 1.0), &ForceBounds::EXCITATION);
        target.accumulate(ForceVector::new(1.0, 1.0), &ForceBounds::ORIENTATION);
        assert_eq!(store.start_count(), 1);
    }
}
