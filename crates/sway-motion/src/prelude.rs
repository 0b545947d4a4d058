//! Prelude for the motion crate.
//!
//! Re-exports what a host needs to wire sensor callbacks to a physics engine.
//!
//! # Example
//!
//! ```
//! use sway_motion::prelude::*;
//!
//! let mut controller: MotionController<ForceStore> = MotionController::new(MotionConfig::default())?;
//! controller.attach(ForceStore::new());
//! assert_eq!(controller.state(), MotionState::Stopped);
//! # Ok::<(), ConfigError>(())
//! ```

pub use crate::classifier::{MotionState, MotionTransition};
pub use crate::config::MotionConfig;
pub use crate::controller::{AccelerationOutcome, MotionController, MotionSnapshot};
pub use crate::error::ConfigError;
pub use crate::force::{ForceBounds, ForceUpdate, ForceVector};
pub use crate::physics::{ExternalPhysics, ForceStore};
pub use crate::time::{Clock, ManualClock, MonotonicClock, Timestamp};
