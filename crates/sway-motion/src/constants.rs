//! Tuning constants for motion classification and force synthesis.
//!
//! These are the defaults carried by [`MotionConfig`](crate::MotionConfig).
//! Every value has been tuned against real phone accelerometer streams; the
//! intensity values in particular have no physical unit.

/// Intensity above which a stopped vehicle is considered moving.
pub const DRIVING_THRESHOLD: f32 = 0.15;

/// Intensity below which a moving vehicle is considered stopped.
pub const STOPPED_THRESHOLD: f32 = 0.08;

/// Minimum spacing between two excitation firings, in milliseconds.
pub const EXCITATION_INTERVAL_MS: u64 = 150;

/// Age at which buffered acceleration samples are evicted, in milliseconds.
pub const HISTORY_WINDOW_MS: u64 = 1000;

/// Samples required before intensity is computed at all.
pub const MIN_DATA_COUNT: usize = 5;

/// Shake magnitude below which shake events are ignored.
pub const SHAKE_VELOCITY_THRESHOLD: f32 = 1.5;

/// Per-axis orientation delta (degrees) that counts as a turn or brake.
pub const ORIENTATION_CHANGE_THRESHOLD: f32 = 0.5;

/// Orientation assumed before the first orientation callback (beta, gamma).
pub const INITIAL_ORIENTATION: (f32, f32) = (0.0, -90.0);

/// Excitation firings between two sampled diagnostic log lines.
pub const DIAGNOSTIC_SAMPLE_EVERY: u64 = 20;

// Excitation synthesis
pub const EXCITATION_INTENSITY_GAIN: f32 = 15.0;
pub const EXCITATION_MAX_STRENGTH: f32 = 3.0;
pub const EXCITATION_DELTA_WINDOW: usize = 3;
pub const EXCITATION_LATERAL_GAIN: f32 = 8.0;
pub const EXCITATION_LONGITUDINAL_GAIN: f32 = 5.0;
pub const EXCITATION_JITTER_SCALE: f32 = 0.3;
pub const EXCITATION_W_LIMIT: f32 = 25.0;
pub const EXCITATION_T_LIMIT: f32 = 18.0;

// Orientation augmentation
pub const ORIENTATION_SENSITIVITY: f32 = 0.8;
pub const ORIENTATION_LATERAL_GAIN: f32 = 3.0;
pub const ORIENTATION_LONGITUDINAL_GAIN: f32 = 2.0;
pub const ORIENTATION_W_LIMIT: f32 = 30.0;
pub const ORIENTATION_T_LIMIT: f32 = 22.0;

// Shake impulse
pub const SHAKE_VELOCITY_GAIN: f32 = 3.0;
pub const SHAKE_MAX_MULTIPLIER: f32 = 15.0;
pub const SHAKE_LONGITUDINAL_GAIN: f32 = 0.3;
pub const SHAKE_LATERAL_GAIN: f32 = 2.5;
