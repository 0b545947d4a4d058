//! Synthetic accelerometer readings.
//!
//! Models a phone mounted in a vehicle: gravity on z, and either sensor
//! noise (parked) or alternating lateral jolts over road noise (driving).
//! Used to build test traces and demo recordings.

use rand::Rng;

use crate::sample::AccelSample;
use crate::time::Timestamp;

/// Standard gravity, m/s².
pub const GRAVITY: f32 = 9.81;

/// Sensor noise amplitude of a device lying still.
pub const REST_NOISE: f32 = 0.005;

/// Lateral jolt magnitude while driving; the sign alternates every sample.
pub const DRIVING_SWING: f32 = 0.5;

/// Road noise amplitudes while driving (x, y, z).
pub const ROAD_NOISE: (f32, f32, f32) = (0.1, 0.3, 0.2);

/// A parked reading at `time`.
pub fn rest_sample<R: Rng + ?Sized>(rng: &mut R, time: Timestamp) -> AccelSample {
    AccelSample::new(
        rng.random_range(-REST_NOISE..=REST_NOISE),
        rng.random_range(-REST_NOISE..=REST_NOISE),
        GRAVITY + rng.random_range(-REST_NOISE..=REST_NOISE),
        time,
    )
}

/// A driving reading at `time`. `tick` picks the jolt direction, so any run
/// of five or more consecutive ticks classifies as moving.
pub fn driving_sample<R: Rng + ?Sized>(rng: &mut R, time: Timestamp, tick: u64) -> AccelSample {
    let (nx, ny, nz) = ROAD_NOISE;
    let swing = if tick % 2 == 0 {
        DRIVING_SWING
    } else {
        -DRIVING_SWING
    };
    AccelSample::new(
        swing + rng.random_range(-nx..=nx),
        rng.random_range(-ny..=ny),
        GRAVITY + rng.random_range(-nz..=nz),
        time,
    )
}
