//! Recording physics engine.

use sway_motion::{ExternalPhysics, ForceUpdate, ForceVector};

/// One call the controller made on the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicsCall {
    SetState(ForceUpdate),
    Start,
}

/// [`ExternalPhysics`] that records every write and start request.
///
/// Unlike `ForceStore`, `start` is recorded even when already running, so
/// tests can assert the controller only asks when the engine is stopped.
#[derive(Debug, Clone, Default)]
pub struct MockPhysics {
    pub force: ForceVector,
    pub running: bool,
    pub calls: Vec<PhysicsCall>,
}

impl MockPhysics {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine whose frame loop is already going.
    pub fn running() -> Self {
        Self {
            running: true,
            ..Self::default()
        }
    }

    pub fn with_force(force: ForceVector) -> Self {
        Self {
            force,
            ..Self::default()
        }
    }

    pub fn start_requests(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, PhysicsCall::Start))
            .count()
    }

    pub fn writes(&self) -> Vec<ForceUpdate> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PhysicsCall::SetState(update) => Some(*update),
                PhysicsCall::Start => None,
            })
            .collect()
    }

    pub fn last_write(&self) -> Option<ForceUpdate> {
        self.writes().last().copied()
    }

    /// Simulate the engine coming to rest.
    pub fn settle(&mut self) {
        self.running = false;
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl ExternalPhysics for MockPhysics {
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
        self.calls.push(PhysicsCall::SetState(update));
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn start(&mut self) {
        self.running = true;
        self.calls.push(PhysicsCall::Start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls_in_order() {
        let mut mock = MockPhysics::new();
        mock.set_state(ForceUpdate::both(ForceVector::new(1.0, 2.0)));
        mock.start();
        mock.start();

        assert_eq!(mock.start_requests(), 2);
        assert_eq!(mock.writes().len(), 1);
        assert_eq!(
            mock.calls.first(),
            Some(&PhysicsCall::SetState(ForceUpdate::both(ForceVector::new(
                1.0, 2.0
            ))))
        );
    }

    #[test]
    fn test_partial_write() {
        let mut mock = MockPhysics::with_force(ForceVector::new(5.0, 5.0));
        mock.set_state(ForceUpdate {
            w: Some(-1.0),
            t: None,
        });
        assert_eq!(mock.force, ForceVector::new(-1.0, 5.0));
    }

    #[test]
    fn test_settle_and_clear() {
        let mut mock = MockPhysics::running();
        mock.start();
        mock.settle();
        mock.clear();
        assert!(!mock.is_running());
        assert!(mock.calls.is_empty());
        assert_eq!(mock.last_write(), None);
    }
}
