//! Motion classification and sway force synthesis for sensor-driven characters
//!
//! This crate turns a live stream of device motion readings into forces on a
//! separately running pendulum simulation, so a hanging character sways
//! while the vehicle carrying the device moves and settles once it stops.
//!
//! # Overview
//!
//! - **Sample buffer**: rolling 1 s window of acceleration samples
//! - **Variance estimator**: per-axis population standard deviation, combined
//!   into a single intensity
//! - **Motion classifier**: hysteresis between `Stopped` and `Moving`
//! - **Excitation synthesizer**: rate-limited, jittered force kicks while moving
//! - **Orientation augmenter**: extra force from sharp tilt changes while moving
//! - **Shake trigger**: one-shot force assignment from a device shake
//!
//! All three force paths write through [`ForceTarget`], which carries the
//! combination rule and bound of each path.
//!
//! # Example
//!
//! ```
//! use sway_motion::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let clock = ManualClock::new();
//! let mut controller = MotionController::<ForceStore, _, _>::with_parts(
//!     MotionConfig::default(),
//!     StdRng::seed_from_u64(7),
//!     clock.clone(),
//! )?;
//! controller.attach(ForceStore::new());
//!
//! // Bumpy road: strongly alternating lateral acceleration every 50 ms
//! for i in 0..10 {
//!     let x = if i % 2 == 0 { 0.5 } else { -0.5 };
//!     controller.on_acceleration(x, 0.0, 9.8);
//!     clock.advance(std::time::Duration::from_millis(50));
//! }
//!
//! assert!(controller.is_moving());
//! assert!(controller.physics().is_some_and(|p| p.is_running()));
//! # Ok::<(), ConfigError>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_debug_implementations)]

pub mod buffer;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod excitation;
pub mod force;
pub mod orientation;
pub mod physics;
pub mod prelude;
pub mod sample;
pub mod shake;
pub mod synthetic;
pub mod time;
pub mod variance;

pub use buffer::SampleBuffer;
pub use classifier::{MotionClassifier, MotionState, MotionTransition};
pub use config::{ExcitationTuning, MotionConfig, OrientationTuning, ShakeTuning};
pub use controller::{AccelerationOutcome, MotionController, MotionSnapshot};
pub use error::{ConfigError, ConfigResult};
pub use excitation::{ExcitationSynthesizer, ExcitationTimer, mean_successive_delta};
pub use force::{ForceBounds, ForceTarget, ForceUpdate, ForceVector};
pub use orientation::OrientationAugmenter;
pub use physics::{ExternalPhysics, ForceStore};
pub use sample::{AccelSample, OrientSample};
pub use shake::ShakeTrigger;
pub use time::{Clock, ManualClock, MonotonicClock, Timestamp};
pub use variance::{AxisDeviation, VarianceEstimator};
