//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use sway_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_some, must_with};

#[cfg(feature = "fixtures")]
pub use crate::fixtures::{
    GRAVITY, constant_samples, driving_trace, idle_drive_idle, stationary_trace,
};

#[cfg(feature = "mock")]
pub use crate::mock::{MockPhysics, PhysicsCall};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
