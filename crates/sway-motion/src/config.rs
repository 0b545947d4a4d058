//! Motion processing configuration.
//!
//! Defaults come from [`crate::constants`]. Every field is optional when
//! deserializing, so a config file only needs the values it overrides.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, ConfigResult};
use crate::force::ForceBounds;

/// Top-level configuration for a [`MotionController`](crate::MotionController).
///
/// # Examples
///
/// ```
/// use sway_motion::MotionConfig;
///
/// let config = MotionConfig::default();
/// assert!(config.validate().is_ok());
///
/// let broken = MotionConfig {
///     stopped_threshold: 0.5,
///     ..MotionConfig::default()
/// };
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    pub driving_threshold: f32,
    pub stopped_threshold: f32,
    pub excitation_interval_ms: u64,
    pub history_window_ms: u64,
    pub min_data_count: usize,
    pub shake_velocity_threshold: f32,
    pub orientation_change_threshold: f32,
    pub excitation: ExcitationTuning,
    pub orientation: OrientationTuning,
    pub shake: ShakeTuning,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            driving_threshold: DRIVING_THRESHOLD,
            stopped_threshold: STOPPED_THRESHOLD,
            excitation_interval_ms: EXCITATION_INTERVAL_MS,
            history_window_ms: HISTORY_WINDOW_MS,
            min_data_count: MIN_DATA_COUNT,
            shake_velocity_threshold: SHAKE_VELOCITY_THRESHOLD,
            orientation_change_threshold: ORIENTATION_CHANGE_THRESHOLD,
            excitation: ExcitationTuning::default(),
            orientation: OrientationTuning::default(),
            shake: ShakeTuning::default(),
        }
    }
}

impl MotionConfig {
    pub fn excitation_interval(&self) -> Duration {
        Duration::from_millis(self.excitation_interval_ms)
    }

    pub fn history_window(&self) -> Duration {
        Duration::from_millis(self.history_window_ms)
    }

    /// Check every field for values that would break classification.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> ConfigResult<()> {
        finite("driving_threshold", self.driving_threshold)?;
        finite("stopped_threshold", self.stopped_threshold)?;
        if self.stopped_threshold < 0.0 || self.stopped_threshold >= self.driving_threshold {
            return Err(ConfigError::InvalidThresholds {
                driving: self.driving_threshold,
                stopped: self.stopped_threshold,
            });
        }
        if self.excitation_interval_ms == 0 {
            return Err(ConfigError::ZeroDuration("excitation_interval_ms"));
        }
        if self.history_window_ms == 0 {
            return Err(ConfigError::ZeroDuration("history_window_ms"));
        }
        if self.min_data_count < 2 {
            return Err(ConfigError::MinDataCount(self.min_data_count));
        }
        non_negative("shake_velocity_threshold", self.shake_velocity_threshold)?;
        non_negative(
            "orientation_change_threshold",
            self.orientation_change_threshold,
        )?;

        self.excitation.validate()?;
        self.orientation.validate()?;
        self.shake.validate()
    }
}

/// Gains and bounds for periodic excitation while moving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExcitationTuning {
    /// Intensity-to-strength multiplier
    pub intensity_gain: f32,
    /// Cap on excitation strength
    pub max_strength: f32,
    /// Number of most recent samples used to estimate direction
    pub delta_window: usize,
    pub lateral_gain: f32,
    pub longitudinal_gain: f32,
    /// Jitter amplitude per unit of strength
    pub jitter_scale: f32,
    pub bounds: ForceBounds,
    /// Firings between sampled diagnostic log lines
    pub diagnostic_every: u64,
}

impl Default for ExcitationTuning {
    fn default() -> Self {
        Self {
            intensity_gain: EXCITATION_INTENSITY_GAIN,
            max_strength: EXCITATION_MAX_STRENGTH,
            delta_window: EXCITATION_DELTA_WINDOW,
            lateral_gain: EXCITATION_LATERAL_GAIN,
            longitudinal_gain: EXCITATION_LONGITUDINAL_GAIN,
            jitter_scale: EXCITATION_JITTER_SCALE,
            bounds: ForceBounds::EXCITATION,
            diagnostic_every: DIAGNOSTIC_SAMPLE_EVERY,
        }
    }
}

impl ExcitationTuning {
    fn validate(&self) -> ConfigResult<()> {
        finite("excitation.intensity_gain", self.intensity_gain)?;
        positive("excitation.max_strength", self.max_strength)?;
        finite("excitation.lateral_gain", self.lateral_gain)?;
        finite("excitation.longitudinal_gain", self.longitudinal_gain)?;
        non_negative("excitation.jitter_scale", self.jitter_scale)?;
        if self.delta_window < 2 {
            return Err(ConfigError::DeltaWindow(self.delta_window));
        }
        if self.diagnostic_every == 0 {
            return Err(ConfigError::ZeroDuration("excitation.diagnostic_every"));
        }
        bounds("excitation.bounds", &self.bounds)
    }
}

/// Gains and bounds for orientation-driven augmentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrientationTuning {
    pub sensitivity: f32,
    /// Applied to the gamma (left/right) delta, feeds `w`
    pub lateral_gain: f32,
    /// Applied to the beta (front/back) delta, feeds `t`
    pub longitudinal_gain: f32,
    pub bounds: ForceBounds,
}

impl Default for OrientationTuning {
    fn default() -> Self {
        Self {
            sensitivity: ORIENTATION_SENSITIVITY,
            lateral_gain: ORIENTATION_LATERAL_GAIN,
            longitudinal_gain: ORIENTATION_LONGITUDINAL_GAIN,
            bounds: ForceBounds::ORIENTATION,
        }
    }
}

impl OrientationTuning {
    fn validate(&self) -> ConfigResult<()> {
        finite("orientation.sensitivity", self.sensitivity)?;
        finite("orientation.lateral_gain", self.lateral_gain)?;
        finite("orientation.longitudinal_gain", self.longitudinal_gain)?;
        bounds("orientation.bounds", &self.bounds)
    }
}

/// Gains for the one-shot shake impulse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShakeTuning {
    pub velocity_gain: f32,
    pub max_multiplier: f32,
    /// Applied to the x component, feeds `t`
    pub longitudinal_gain: f32,
    /// Applied to the y component, feeds `w`
    pub lateral_gain: f32,
}

impl Default for ShakeTuning {
    fn default() -> Self {
        Self {
            velocity_gain: SHAKE_VELOCITY_GAIN,
            max_multiplier: SHAKE_MAX_MULTIPLIER,
            longitudinal_gain: SHAKE_LONGITUDINAL_GAIN,
            lateral_gain: SHAKE_LATERAL_GAIN,
        }
    }
}

impl ShakeTuning {
    fn validate(&self) -> ConfigResult<()> {
        finite("shake.velocity_gain", self.velocity_gain)?;
        positive("shake.max_multiplier", self.max_multiplier)?;
        finite("shake.longitudinal_gain", self.longitudinal_gain)?;
        finite("shake.lateral_gain", self.lateral_gain)
    }
}

fn finite(field: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> ConfigResult<()> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> ConfigResult<()> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}

fn bounds(field: &'static str, bounds: &ForceBounds) -> ConfigResult<()> {
    positive(field, bounds.w_limit)?;
    positive(field, bounds.t_limit)
}
