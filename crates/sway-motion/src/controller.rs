//! Sensor callback entry points.
//!
//! [`MotionController`] owns every piece of per-stream state (sample
//! history, classifier state, excitation timer, previous orientation) and
//! routes each callback through the matching pipeline:
//!
//! ```text
//! acceleration -> SampleBuffer -> VarianceEstimator -> MotionClassifier
//!                                                        |
//!                                     (Moving) ExcitationSynthesizer -> accumulate, clip ±25/±18
//! orientation  -> OrientationAugmenter (Moving only)  -> accumulate, clip ±30/±22
//! shake        -> ShakeTrigger                        -> assign, unclipped
//! ```
//!
//! Callbacks are expected on a single event context, one at a time; none of
//! them block or fail.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, trace};

use crate::buffer::SampleBuffer;
use crate::classifier::{MotionClassifier, MotionState, MotionTransition};
use crate::config::MotionConfig;
use crate::error::ConfigResult;
use crate::excitation::ExcitationSynthesizer;
use crate::force::{ForceTarget, ForceVector};
use crate::orientation::OrientationAugmenter;
use crate::physics::ExternalPhysics;
use crate::sample::{AccelSample, OrientSample};
use crate::shake::ShakeTrigger;
use crate::time::{Clock, MonotonicClock, Timestamp};
use crate::variance::VarianceEstimator;

/// What a single acceleration callback did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AccelerationOutcome {
    /// Motion intensity, or `None` while the window holds too few samples.
    pub intensity: Option<f32>,
    pub transition: Option<MotionTransition>,
    /// Excitation delta accumulated into the force channels, if one fired.
    pub excitation: Option<ForceVector>,
}

/// Point-in-time diagnostics for a controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionSnapshot {
    pub state: MotionState,
    pub last_intensity: Option<f32>,
    pub buffered_samples: usize,
    pub fire_count: u64,
    pub last_fire: Option<Timestamp>,
    pub last_orientation: OrientSample,
    pub physics_attached: bool,
}

/// Turns sensor callbacks into forces on an [`ExternalPhysics`] engine.
///
/// `R` is the jitter source and `C` supplies "now" for the clock-reading
/// callback forms. Both default to their production implementations; tests
/// and replay inject a seeded [`StdRng`] and a
/// [`ManualClock`](crate::ManualClock).
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sway_motion::{ForceStore, ManualClock, MotionConfig, MotionController, Timestamp};
///
/// let mut controller = MotionController::<ForceStore, _, _>::with_parts(
///     MotionConfig::default(),
///     StdRng::seed_from_u64(1),
///     ManualClock::new(),
/// )?;
/// controller.attach(ForceStore::new());
///
/// let force = controller.on_shake_at(Timestamp::from_millis(10), 0.0, 5.0, 0.0);
/// assert!(force.is_some_and(|f| (f.w - 187.5).abs() < f32::EPSILON));
/// # Ok::<(), sway_motion::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct MotionController<P, R = StdRng, C = MonotonicClock> {
    config: MotionConfig,
    buffer: SampleBuffer,
    estimator: VarianceEstimator,
    classifier: MotionClassifier,
    synthesizer: ExcitationSynthesizer,
    augmenter: OrientationAugmenter,
    shake: ShakeTrigger,
    physics: Option<P>,
    rng: R,
    clock: C,
    last_intensity: Option<f32>,
}

impl<P: ExternalPhysics> MotionController<P> {
    /// Production controller: OS-seeded jitter, monotonic clock, no physics
    /// attached yet.
    ///
    /// # Errors
    ///
    /// Returns the first problem [`MotionConfig::validate`] finds.
    pub fn new(config: MotionConfig) -> ConfigResult<Self> {
        let rng = StdRng::from_rng(&mut rand::rng());
        Self::with_parts(config, rng, MonotonicClock::new())
    }
}

impl<P, R, C> MotionController<P, R, C>
where
    P: ExternalPhysics,
    R: Rng,
    C: Clock,
{
    /// Build a controller with an explicit jitter source and clock.
    ///
    /// # Errors
    ///
    /// Returns the first problem [`MotionConfig::validate`] finds.
    pub fn with_parts(config: MotionConfig, rng: R, clock: C) -> ConfigResult<Self> {
        config.validate()?;

        let now = clock.now();
        Ok(Self {
            buffer: SampleBuffer::new(config.history_window()),
            estimator: VarianceEstimator::new(config.min_data_count),
            classifier: MotionClassifier::new(config.driving_threshold, config.stopped_threshold),
            synthesizer: ExcitationSynthesizer::new(
                config.excitation_interval(),
                config.excitation.clone(),
            ),
            augmenter: OrientationAugmenter::new(
                config.orientation_change_threshold,
                config.orientation.clone(),
                now,
            ),
            shake: ShakeTrigger::new(config.shake_velocity_threshold, config.shake.clone()),
            physics: None,
            rng,
            clock,
            last_intensity: None,
            config,
        })
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn state(&self) -> MotionState {
        self.classifier.state()
    }

    pub fn is_moving(&self) -> bool {
        self.classifier.is_moving()
    }

    /// Attach the physics engine, returning any previously attached one.
    pub fn attach(&mut self, physics: P) -> Option<P> {
        self.physics.replace(physics)
    }

    /// Detach the physics engine. Force paths become no-ops until the next
    /// [`attach`](Self::attach).
    pub fn detach(&mut self) -> Option<P> {
        self.physics.take()
    }

    pub fn physics(&self) -> Option<&P> {
        self.physics.as_ref()
    }

    pub fn physics_mut(&mut self) -> Option<&mut P> {
        self.physics.as_mut()
    }

    pub fn snapshot(&self) -> MotionSnapshot {
        let timer = self.synthesizer.timer();
        MotionSnapshot {
            state: self.classifier.state(),
            last_intensity: self.last_intensity,
            buffered_samples: self.buffer.len(),
            fire_count: timer.fire_count,
            last_fire: timer.last_fire,
            last_orientation: self.augmenter.previous(),
            physics_attached: self.physics.is_some(),
        }
    }

    pub fn on_acceleration(&mut self, x: f32, y: f32, z: f32) -> AccelerationOutcome {
        let now = self.clock.now();
        self.on_acceleration_at(now, x, y, z)
    }

    /// Record an acceleration sample taken at `now`, re-classify, and fire
    /// an excitation if moving and due.
    ///
    /// Classification is skipped entirely while the window holds fewer than
    /// `min_data_count` samples.
    pub fn on_acceleration_at(
        &mut self,
        now: Timestamp,
        x: f32,
        y: f32,
        z: f32,
    ) -> AccelerationOutcome {
        let sample = AccelSample::new(x, y, z, now);
        if !sample.is_finite() {
            trace!("Dropping non-finite acceleration sample ({x}, {y}, {z})");
            return AccelerationOutcome::default();
        }

        self.buffer.record(sample);
        let Some(deviation) = self.estimator.estimate(self.buffer.iter()) else {
            return AccelerationOutcome::default();
        };

        let intensity = deviation.intensity();
        self.last_intensity = Some(intensity);
        let transition = self.classifier.update(intensity, now);

        let excitation = if self.classifier.is_moving() {
            self.excite(now, intensity)
        } else {
            None
        };

        AccelerationOutcome {
            intensity: Some(intensity),
            transition,
            excitation,
        }
    }

    fn excite(&mut self, now: Timestamp, intensity: f32) -> Option<ForceVector> {
        let Some(physics) = self.physics.as_mut() else {
            trace!("No physics attached, skipping excitation");
            return None;
        };

        let delta = self
            .synthesizer
            .fire(now, intensity, self.buffer.iter(), &mut self.rng)?;
        ForceTarget::new(physics).accumulate(delta, &self.config.excitation.bounds);
        Some(delta)
    }

    pub fn on_orientation(&mut self, alpha: f32, beta: f32, gamma: f32) -> Option<ForceVector> {
        let now = self.clock.now();
        self.on_orientation_at(now, alpha, beta, gamma)
    }

    /// Track the device orientation and, while moving, turn sharp tilt
    /// changes into an extra force delta. `alpha` is ignored.
    ///
    /// Returns the injected delta.
    pub fn on_orientation_at(
        &mut self,
        now: Timestamp,
        _alpha: f32,
        beta: f32,
        gamma: f32,
    ) -> Option<ForceVector> {
        if !beta.is_finite() || !gamma.is_finite() {
            trace!("Dropping non-finite orientation sample ({beta}, {gamma})");
            return None;
        }

        let moving = self.classifier.is_moving();
        let delta = self
            .augmenter
            .observe(OrientSample::new(beta, gamma, now), moving)?;

        let Some(physics) = self.physics.as_mut() else {
            trace!("No physics attached, skipping orientation force");
            return None;
        };
        ForceTarget::new(physics).accumulate(delta, &self.config.orientation.bounds);
        Some(delta)
    }

    pub fn on_shake(&mut self, x: f32, y: f32, z: f32) -> Option<ForceVector> {
        let now = self.clock.now();
        self.on_shake_at(now, x, y, z)
    }

    /// Overwrite the force channels with a shake impulse.
    ///
    /// Returns the force assigned. Works in either motion state.
    pub fn on_shake_at(&mut self, now: Timestamp, x: f32, y: f32, z: f32) -> Option<ForceVector> {
        let force = self.shake.evaluate(x, y, z)?;

        let Some(physics) = self.physics.as_mut() else {
            trace!("No physics attached, skipping shake");
            return None;
        };
        debug!(
            "Shake at {}ms: force=({:.2}, {:.2})",
            now.as_millis(),
            force.w,
            force.t
        );
        Some(ForceTarget::new(physics).assign(force))
    }
}
