//! Offline trace replay
//!
//! Feeds a recorded trace through a [`MotionController`] attached to a
//! passive [`ForceStore`], using each event's own timestamp, and summarizes
//! what the controller did.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use sway_motion::{
    ForceStore, ForceVector, ManualClock, MotionConfig, MotionController, MotionSnapshot,
    MotionState, MotionTransition, Timestamp,
};
use tracing::debug;

use crate::error::CliError;
use crate::trace::TraceEvent;

/// A force change caused by one event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub t_ms: u64,
    pub event: &'static str,
    pub state: MotionState,
    pub force: ForceVector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<MotionTransition>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub events: usize,
    pub acceleration_samples: usize,
    pub orientation_samples: usize,
    pub shakes: usize,
    pub transitions: Vec<MotionTransition>,
    pub excitations: u64,
    pub engine_starts: u64,
    pub final_force: ForceVector,
    /// Largest magnitude seen on each channel
    pub peak_force: ForceVector,
    pub snapshot: MotionSnapshot,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub timeline: Vec<TimelineEntry>,
}

/// Replay `events` in order. Every event that changes the force or the
/// motion state lands in the timeline when `timeline` is set.
pub fn replay(
    events: &[TraceEvent],
    config: MotionConfig,
    seed: u64,
    timeline: bool,
) -> Result<ReplayReport, CliError> {
    let clock = ManualClock::new();
    let mut controller = MotionController::<ForceStore, _, _>::with_parts(
        config,
        StdRng::seed_from_u64(seed),
        clock.clone(),
    )?;
    controller.attach(ForceStore::new());

    let mut report = ReplayReport {
        events: events.len(),
        acceleration_samples: 0,
        orientation_samples: 0,
        shakes: 0,
        transitions: Vec::new(),
        excitations: 0,
        engine_starts: 0,
        final_force: ForceVector::ZERO,
        peak_force: ForceVector::ZERO,
        snapshot: controller.snapshot(),
        timeline: Vec::new(),
    };

    for event in events {
        let now = event.time();
        clock.set(now);
        let before = force_of(&controller);

        let transition = match *event {
            TraceEvent::Acceleration { x, y, z, .. } => {
                report.acceleration_samples += 1;
                controller.on_acceleration_at(now, x, y, z).transition
            }
            TraceEvent::Orientation {
                alpha, beta, gamma, ..
            } => {
                report.orientation_samples += 1;
                controller.on_orientation_at(now, alpha, beta, gamma);
                None
            }
            TraceEvent::Shake { x, y, z, .. } => {
                report.shakes += 1;
                controller.on_shake_at(now, x, y, z);
                None
            }
        };

        let after = force_of(&controller);
        report.peak_force = ForceVector::new(
            report.peak_force.w.max(after.w.abs()),
            report.peak_force.t.max(after.t.abs()),
        );
        if let Some(t) = transition {
            report.transitions.push(t);
        }
        if timeline && (transition.is_some() || after != before) {
            report.timeline.push(TimelineEntry {
                t_ms: now.as_millis(),
                event: event.kind(),
                state: controller.state(),
                force: after,
                transition,
            });
        }
    }

    report.snapshot = controller.snapshot();
    report.excitations = report.snapshot.fire_count;
    report.final_force = force_of(&controller);
    report.engine_starts = controller.physics().map_or(0, ForceStore::start_count);
    debug!(
        "Replayed {} events up to {}ms",
        report.events,
        events.last().map_or(Timestamp::ZERO, TraceEvent::time).as_millis()
    );
    Ok(report)
}

fn force_of(controller: &MotionController<ForceStore, StdRng, ManualClock>) -> ForceVector {
    controller.physics().map_or(ForceVector::ZERO, ForceStore::force)
}
