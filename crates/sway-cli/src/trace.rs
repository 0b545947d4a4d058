//! JSON-lines sensor traces
//!
//! One event per line:
//!
//! ```text
//! {"type":"acceleration","t_ms":0,"x":0.01,"y":-0.02,"z":9.81}
//! {"type":"orientation","t_ms":40,"alpha":0.0,"beta":1.5,"gamma":-3.0}
//! {"type":"shake","t_ms":900,"x":0.0,"y":5.0,"z":0.0}
//! ```
//!
//! Blank lines are ignored.

use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sway_motion::synthetic::{driving_sample, rest_sample};
use sway_motion::{AccelSample, Timestamp};

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEvent {
    Acceleration {
        t_ms: u64,
        x: f32,
        y: f32,
        z: f32,
    },
    Orientation {
        t_ms: u64,
        #[serde(default)]
        alpha: f32,
        beta: f32,
        gamma: f32,
    },
    Shake {
        t_ms: u64,
        x: f32,
        y: f32,
        z: f32,
    },
}

impl TraceEvent {
    pub fn time(&self) -> Timestamp {
        let t_ms = match self {
            TraceEvent::Acceleration { t_ms, .. }
            | TraceEvent::Orientation { t_ms, .. }
            | TraceEvent::Shake { t_ms, .. } => *t_ms,
        };
        Timestamp::from_millis(t_ms)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TraceEvent::Acceleration { .. } => "acceleration",
            TraceEvent::Orientation { .. } => "orientation",
            TraceEvent::Shake { .. } => "shake",
        }
    }
}

impl From<AccelSample> for TraceEvent {
    fn from(sample: AccelSample) -> Self {
        TraceEvent::Acceleration {
            t_ms: sample.time.as_millis(),
            x: sample.x,
            y: sample.y,
            z: sample.z,
        }
    }
}

/// Parse a whole trace, reporting the 1-based line of the first bad event.
pub fn read_trace<R: BufRead>(reader: R) -> Result<Vec<TraceEvent>, CliError> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event = serde_json::from_str(&line).map_err(|source| CliError::TraceParse {
            line: index + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

pub fn write_trace<W: Write>(mut writer: W, events: &[TraceEvent]) -> Result<(), CliError> {
    for event in events {
        serde_json::to_writer(&mut writer, event)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Parameters for a synthetic parked → driving → parked trace.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    pub idle_ms: u64,
    pub drive_ms: u64,
    pub rate_hz: u32,
    pub seed: u64,
}

/// Orientation is reported at a fifth of the acceleration rate.
const ORIENTATION_EVERY: u64 = 5;

/// Build a synthetic trace. Deterministic for a given seed.
///
/// Acceleration arrives at `rate_hz` throughout. While driving, lateral
/// acceleration swings with road bumps and the device tilts through slow
/// turns, with a short braking dip in the middle of the drive.
pub fn generate(options: &GenerateOptions) -> Result<Vec<TraceEvent>, CliError> {
    if options.rate_hz == 0 || options.rate_hz > 1000 {
        return Err(CliError::InvalidArgument(format!(
            "rate must be between 1 and 1000 Hz, got {}",
            options.rate_hz
        )));
    }

    let mut rng = StdRng::seed_from_u64(options.seed);
    let step_ms = 1000 / u64::from(options.rate_hz);
    let drive_start = options.idle_ms;
    let drive_end = drive_start.saturating_add(options.drive_ms);
    let total = drive_end.saturating_add(options.idle_ms);
    let brake_at = drive_start + options.drive_ms / 2;

    let mut events = Vec::new();
    let mut tick = 0u64;
    let mut t_ms = 0u64;
    while t_ms < total {
        let driving = (drive_start..drive_end).contains(&t_ms);
        let time = Timestamp::from_millis(t_ms);
        let sample = if driving {
            driving_sample(&mut rng, time, tick)
        } else {
            rest_sample(&mut rng, time)
        };
        events.push(TraceEvent::from(sample));

        if tick % ORIENTATION_EVERY == 0 {
            let (beta, gamma) = if driving {
                let phase = (t_ms - drive_start) as f32 / 2000.0;
                let braking = t_ms.abs_diff(brake_at) < 300;
                (
                    if braking { 12.0 } else { 2.0 },
                    20.0 * (phase * std::f32::consts::TAU).sin(),
                )
            } else {
                (rng.random_range(-0.05..=0.05), rng.random_range(-0.05..=0.05))
            };
            events.push(TraceEvent::Orientation {
                t_ms,
                alpha: 0.0,
                beta,
                gamma,
            });
        }

        tick += 1;
        t_ms += step_ms;
    }

    Ok(events)
}
