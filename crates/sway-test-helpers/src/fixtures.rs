//! Seeded acceleration traces.
//!
//! Every trace is deterministic for a given seed. Timestamps start at
//! `start_ms` and are spaced evenly.

use rand::SeedableRng;
use rand::rngs::StdRng;
use sway_motion::synthetic::{driving_sample, rest_sample};
use sway_motion::{AccelSample, Timestamp};

pub use sway_motion::synthetic::{GRAVITY, REST_NOISE};

/// Evenly spaced samples with the same reading.
pub fn constant_samples(
    x: f32,
    y: f32,
    z: f32,
    start_ms: u64,
    spacing_ms: u64,
    count: usize,
) -> Vec<AccelSample> {
    timestamps(start_ms, spacing_ms, count)
        .map(|t| AccelSample::new(x, y, z, t))
        .collect()
}

/// A parked vehicle: gravity on z plus tiny sensor noise.
pub fn stationary_trace(seed: u64, start_ms: u64, spacing_ms: u64, count: usize) -> Vec<AccelSample> {
    let mut rng = StdRng::seed_from_u64(seed);
    timestamps(start_ms, spacing_ms, count)
        .map(|t| rest_sample(&mut rng, t))
        .collect()
}

/// A moving vehicle on a rough road.
///
/// Lateral acceleration alternates sign every sample on top of random road
/// noise, so any window of five or more samples classifies as moving.
pub fn driving_trace(seed: u64, start_ms: u64, spacing_ms: u64, count: usize) -> Vec<AccelSample> {
    let mut rng = StdRng::seed_from_u64(seed);
    timestamps(start_ms, spacing_ms, count)
        .zip(0u64..)
        .map(|(t, tick)| driving_sample(&mut rng, t, tick))
        .collect()
}

/// Parked, then driving, then parked again, at 50 ms spacing.
///
/// Returns the trace and the timestamp at which driving ends.
pub fn idle_drive_idle(seed: u64, idle: usize, drive: usize) -> (Vec<AccelSample>, Timestamp) {
    const SPACING_MS: u64 = 50;

    let mut trace = stationary_trace(seed, 0, SPACING_MS, idle);
    let drive_start = SPACING_MS * idle as u64;
    trace.extend(driving_trace(seed.wrapping_add(1), drive_start, SPACING_MS, drive));

    let idle_start = drive_start + SPACING_MS * drive as u64;
    trace.extend(stationary_trace(
        seed.wrapping_add(2),
        idle_start,
        SPACING_MS,
        idle,
    ));
    (trace, Timestamp::from_millis(idle_start))
}

fn timestamps(start_ms: u64, spacing_ms: u64, count: usize) -> impl Iterator<Item = Timestamp> {
    (0..count as u64).map(move |i| Timestamp::from_millis(start_ms + i * spacing_ms))
}
