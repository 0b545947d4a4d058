//! Periodic excitation while the vehicle is moving.
//!
//! A damped pendulum left alone settles within a second or two. While the
//! vehicle keeps moving, the synthesizer nudges it every interval with a
//! force derived from the most recent acceleration trend plus a small random
//! jitter, so the sway keeps going and looks organic rather than periodic.

use std::time::Duration;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::config::ExcitationTuning;
use crate::force::ForceVector;
use crate::sample::AccelSample;
use crate::time::Timestamp;

/// Firing bookkeeping. `fire_count` only ever grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExcitationTimer {
    pub last_fire: Option<Timestamp>,
    pub fire_count: u64,
}

/// Rate-limited excitation force generator.
#[derive(Debug, Clone)]
pub struct ExcitationSynthesizer {
    interval: Duration,
    tuning: ExcitationTuning,
    timer: ExcitationTimer,
}

impl ExcitationSynthesizer {
    pub fn new(interval: Duration, tuning: ExcitationTuning) -> Self {
        Self {
            interval,
            tuning,
            timer: ExcitationTimer::default(),
        }
    }

    pub fn timer(&self) -> ExcitationTimer {
        self.timer
    }

    pub fn tuning(&self) -> &ExcitationTuning {
        &self.tuning
    }

    /// Whether more than one interval has passed since the last firing.
    /// The first firing is always due.
    pub fn is_due(&self, now: Timestamp) -> bool {
        match self.timer.last_fire {
            None => true,
            Some(last) => now.saturating_since(last) > self.interval,
        }
    }

    /// Excitation strength for an intensity, capped at `max_strength`.
    pub fn strength(&self, intensity: f32) -> f32 {
        (intensity * self.tuning.intensity_gain).min(self.tuning.max_strength)
    }

    /// Fire if due, returning the force delta to accumulate.
    ///
    /// `history` must be in arrival order; only its last `delta_window`
    /// samples are used. The timer advances on every firing, even when the
    /// resulting delta is zero.
    pub fn fire<'a, I, R>(
        &mut self,
        now: Timestamp,
        intensity: f32,
        history: I,
        rng: &mut R,
    ) -> Option<ForceVector>
    where
        I: IntoIterator<Item = &'a AccelSample>,
        I::IntoIter: ExactSizeIterator,
        R: Rng,
    {
        if !self.is_due(now) {
            return None;
        }
        self.timer.last_fire = Some(now);

        let strength = self.strength(intensity);
        let history = history.into_iter();
        let skip = history.len().saturating_sub(self.tuning.delta_window);
        let (avg_dx, avg_dy) = mean_successive_delta(history.skip(skip));

        let lateral = avg_dx * strength * self.tuning.lateral_gain;
        let longitudinal = avg_dy * strength * self.tuning.longitudinal_gain;

        let jitter = self.tuning.jitter_scale * strength;
        let random_w = rng.random_range(-0.5f32..=0.5) * jitter;
        let random_t = rng.random_range(-0.5f32..=0.5) * jitter;

        let delta = ForceVector::new(lateral + random_w, longitudinal + random_t);

        self.timer.fire_count = self.timer.fire_count.saturating_add(1);
        if self.timer.fire_count.is_multiple_of(self.tuning.diagnostic_every) {
            debug!(
                "Excitation #{} strength={strength:.2} dx={avg_dx:.3} dy={avg_dy:.3} delta=({:.2}, {:.2})",
                self.timer.fire_count, delta.w, delta.t
            );
        }

        Some(delta)
    }
}

/// Mean x/y change across consecutive pairs; zero with fewer than two samples.
pub fn mean_successive_delta<'a, I>(samples: I) -> (f32, f32)
where
    I: IntoIterator<Item = &'a AccelSample>,
{
    let mut iter = samples.into_iter();
    let Some(first) = iter.next() else {
        return (0.0, 0.0);
    };

    let (sum_dx, sum_dy, pairs, _) = iter.fold(
        (0.0f32, 0.0f32, 0u32, first),
        |(sx, sy, n, prev), sample| {
            (
                sx + (sample.x - prev.x),
                sy + (sample.y - prev.y),
                n.saturating_add(1),
                sample,
            )
        },
    );

    if pairs == 0 {
        return (0.0, 0.0);
    }
    let pairs = pairs as f32;
    (sum_dx / pairs, sum_dy / pairs)
}
