//! Contract with the external physics engine.
//!
//! The engine owns the pendulum state and integrates it on its own frame
//! loop. This crate only reads and writes the two target force channels and
//! asks the engine to run.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::force::{ForceUpdate, ForceVector};

/// Force channels and lifecycle of a physics engine.
///
/// Implementations must make `start` safe to call while already running;
/// callers only call it after `is_running` returned `false`, but a frame loop
/// on the other side may have started in between.
pub trait ExternalPhysics {
    /// Current target force on both channels.
    fn state(&self) -> ForceVector;

    /// Write the channels present in `update`.
    fn set_state(&mut self, update: ForceUpdate);

    fn is_running(&self) -> bool;

    fn start(&mut self);
}

impl<P: ExternalPhysics + ?Sized> ExternalPhysics for &mut P {
    fn state(&self) -> ForceVector {
        (**self).state()
    }

    fn set_state(&mut self, update: ForceUpdate) {
        (**self).set_state(update);
    }

    fn is_running(&self) -> bool {
        (**self).is_running()
    }

    fn start(&mut self) {
        (**self).start();
    }
}

impl<P: ExternalPhysics + ?Sized> ExternalPhysics for Box<P> {
    fn state(&self) -> ForceVector {
        (**self).state()
    }

    fn set_state(&mut self, update: ForceUpdate) {
        (**self).set_state(update);
    }

    fn is_running(&self) -> bool {
        (**self).is_running()
    }

    fn start(&mut self) {
        (**self).start();
    }
}

/// Shared engine handle.
///
/// Lets a frame loop and the sensor callbacks hold the same engine. Each call
/// takes the lock once, so individual channel writes stay atomic while a
/// read-modify-write across calls may interleave with a frame.
impl<P: ExternalPhysics> ExternalPhysics for Arc<Mutex<P>> {
    fn state(&self) -> ForceVector {
        self.lock().state()
    }

    fn set_state(&mut self, update: ForceUpdate) {
        self.lock().set_state(update);
    }

    fn is_running(&self) -> bool {
        self.lock().is_running()
    }

    fn start(&mut self) {
        self.lock().start();
    }
}

/// Passive in-memory force channels.
///
/// Holds the target force without integrating anything. Useful for hosts
/// that poll the force each frame and feed their own renderer, and for trace
/// replay.
///
/// # Examples
///
/// ```
/// use sway_motion::{ExternalPhysics, ForceStore, ForceUpdate, ForceVector};
///
/// let mut store = ForceStore::new();
/// store.set_state(ForceUpdate { w: Some(2.0), t: None });
/// assert_eq!(store.force(), ForceVector::new(2.0, 0.0));
///
/// store.start();
/// store.start();
/// assert_eq!(store.start_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ForceStore {
    force: ForceVector,
    running: bool,
    starts: u64,
}

impl ForceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_force(force: ForceVector) -> Self {
        Self {
            force,
            ..Self::default()
        }
    }

    pub fn force(&self) -> ForceVector {
        self.force
    }

    /// Number of times the engine went from stopped to running.
    pub fn start_count(&self) -> u64 {
        self.starts
    }

    /// Mark the engine as come to rest, as a real engine does once its
    /// motion has damped out.
    pub fn stop(&mut self) {
        self.running = false;
    }
}

impl ExternalPhysics for ForceStore {
    fn state(&self) -> ForceVector {
        self.force
    }

    fn set_state(&mut self, update: ForceUpdate) {
        if let Some(w) = update.w {
            self.force.w = w;
        }
        if let Some(t) = update.t {
            self.force.t = t;
        }
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.starts = self.starts.saturating_add(1);
        }
    }
}
