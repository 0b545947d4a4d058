//! Property-based tests for the motion pipeline.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use sway_motion::*;

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn finite_axis() -> impl Strategy<Value = f32> {
        -50.0f32..50.0f32
    }

    proptest! {
        #[test]
        fn buffer_holds_only_window_samples(
            times in proptest::collection::vec(0u64..10_000, 1..200),
            now in 0u64..12_000,
        ) {
            let mut buffer = SampleBuffer::new(Duration::from_millis(1000));
            for t in &times {
                buffer.record(AccelSample::new(0.0, 0.0, 0.0, Timestamp::from_millis(*t)));
            }
            let now = Timestamp::from_millis(now);
            buffer.prune(now);

            for sample in buffer.iter() {
                prop_assert!(now.saturating_since(sample.time) < Duration::from_millis(1000));
            }
        }

        #[test]
        fn buffer_window_follows_newest_timestamp(
            times in proptest::collection::vec(0u64..10_000, 1..200),
        ) {
            let mut buffer = SampleBuffer::new(Duration::from_millis(1000));
            for t in &times {
                buffer.record(AccelSample::new(0.0, 0.0, 0.0, Timestamp::from_millis(*t)));
            }
            let newest = Timestamp::from_millis(times.iter().copied().max().unwrap_or(0));

            prop_assert!(!buffer.is_empty());
            for sample in buffer.iter() {
                prop_assert!(newest.saturating_since(sample.time) < Duration::from_millis(1000));
            }
        }

        #[test]
        fn estimator_needs_min_samples(
            samples in proptest::collection::vec((finite_axis(), finite_axis(), finite_axis()), 0..5),
        ) {
            let samples: Vec<AccelSample> = samples
                .into_iter()
                .map(|(x, y, z)| AccelSample::new(x, y, z, Timestamp::ZERO))
                .collect();
            prop_assert!(VarianceEstimator::new(5).estimate(&samples).is_none());
        }

        #[test]
        fn constant_series_has_zero_intensity(
            x in finite_axis(), y in finite_axis(), z in finite_axis(), n in 5usize..60,
        ) {
            let samples = vec![AccelSample::new(x, y, z, Timestamp::ZERO); n];
            let intensity = VarianceEstimator::new(5).estimate(&samples).map(|d| d.intensity());
            prop_assert!(intensity.is_some_and(|i| i.abs() < f32::EPSILON));
        }

        #[test]
        fn intensity_is_non_negative(
            samples in proptest::collection::vec((finite_axis(), finite_axis(), finite_axis()), 5..50),
        ) {
            let samples: Vec<AccelSample> = samples
                .into_iter()
                .map(|(x, y, z)| AccelSample::new(x, y, z, Timestamp::ZERO))
                .collect();
            let intensity = VarianceEstimator::new(5).estimate(&samples).map(|d| d.intensity());
            prop_assert!(intensity.is_some_and(|i| i >= 0.0 && i.is_finite()));
        }

        #[test]
        fn dead_zone_never_transitions(
            intensities in proptest::collection::vec(0.08f32..=0.15, 1..50),
            start_moving in any::<bool>(),
        ) {
            let mut classifier = MotionClassifier::new(0.15, 0.08);
            if start_moving {
                classifier.update(1.0, Timestamp::ZERO);
            }
            let before = classifier.state();
            for (i, intensity) in intensities.into_iter().enumerate() {
                let t = Timestamp::from_millis(i as u64 * 10 + 1);
                prop_assert!(classifier.update(intensity, t).is_none());
            }
            prop_assert_eq!(classifier.state(), before);
        }

        #[test]
        fn excitation_keeps_force_in_bounds(
            seed in any::<u64>(),
            steps in proptest::collection::vec(
                (finite_axis(), finite_axis(), 0.0f32..5.0), 1..60,
            ),
        ) {
            let mut synth = ExcitationSynthesizer::new(
                Duration::from_millis(150),
                ExcitationTuning::default(),
            );
            let mut rng = StdRng::seed_from_u64(seed);
            let mut store = ForceStore::new();
            let mut history = Vec::new();

            for (i, (x, y, intensity)) in steps.into_iter().enumerate() {
                let now = Timestamp::from_millis(i as u64 * 200);
                history.push(AccelSample::new(x, y, 0.0, now));
                if let Some(delta) = synth.fire(now, intensity, &history, &mut rng) {
                    let next = ForceBounds::EXCITATION.clamp(store.force() + delta);
                    store.set_state(ForceUpdate::both(next));
                }
                prop_assert!(ForceBounds::EXCITATION.contains(store.force()));
            }
        }

        #[test]
        fn controller_excitation_stays_bounded(
            seed in any::<u64>(),
            readings in proptest::collection::vec(
                (finite_axis(), finite_axis(), finite_axis()), 5..120,
            ),
        ) {
            let mut controller = MotionController::<ForceStore, _, _>::with_parts(
                MotionConfig::default(),
                StdRng::seed_from_u64(seed),
                ManualClock::new(),
            ).map_err(|e| TestCaseError::fail(e.to_string()))?;
            controller.attach(ForceStore::new());

            for (i, (x, y, z)) in readings.into_iter().enumerate() {
                let outcome = controller.on_acceleration_at(Timestamp::from_millis(i as u64 * 20), x, y, z);
                if outcome.excitation.is_some() {
                    let force = controller.physics().map_or(ForceVector::ZERO, ForceStore::force);
                    prop_assert!(ForceBounds::EXCITATION.contains(force));
                }
            }
        }

        #[test]
        fn orientation_keeps_force_in_wide_bounds(
            tilts in proptest::collection::vec((-180.0f32..180.0, -90.0f32..90.0), 1..60),
            start_w in -30.0f32..=30.0,
            start_t in -22.0f32..=22.0,
        ) {
            let mut augmenter = OrientationAugmenter::new(
                0.5,
                OrientationTuning::default(),
                Timestamp::ZERO,
            );
            let mut force = ForceVector::new(start_w, start_t);
            for (i, (beta, gamma)) in tilts.into_iter().enumerate() {
                let sample = OrientSample::new(beta, gamma, Timestamp::from_millis(i as u64));
                if let Some(delta) = augmenter.observe(sample, true) {
                    force = ForceBounds::ORIENTATION.clamp(force + delta);
                }
                prop_assert!(ForceBounds::ORIENTATION.contains(force));
            }
        }
    }
}

#[cfg(test)]
mod quickcheck_tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};
    use quickcheck_macros::quickcheck;

    #[derive(Debug, Clone)]
    struct FiniteF32(f32);

    impl Arbitrary for FiniteF32 {
        fn arbitrary(g: &mut Gen) -> Self {
            let value = f32::arbitrary(g);
            FiniteF32(if value.is_finite() { value } else { 0.0 })
        }
    }

    fn prop_clamp_is_within_bounds(w: f32, t: f32) -> TestResult {
        let clipped = ForceBounds::EXCITATION.clamp(ForceVector::new(w, t));
        // NaN and infinities included: every output is a real, bounded force
        TestResult::from_bool(clipped.w.is_finite() && ForceBounds::EXCITATION.contains(clipped))
    }

    #[test]
    fn quickcheck_clamp_is_within_bounds() {
        QuickCheck::new()
            .tests(1000)
            .quickcheck(prop_clamp_is_within_bounds as fn(f32, f32) -> TestResult);
    }

    fn prop_rate_limit(seed: u64, step_ms: u8) -> TestResult {
        let step = u64::from(step_ms.max(1));
        let mut synth =
            ExcitationSynthesizer::new(Duration::from_millis(150), ExcitationTuning::default());
        let mut rng = StdRng::seed_from_u64(seed);

        let mut last: Option<u64> = None;
        for i in 0..200u64 {
            let now = i * step;
            if synth
                .fire(Timestamp::from_millis(now), 0.5, &[], &mut rng)
                .is_some()
            {
                if let Some(prev) = last {
                    if now - prev <= 150 {
                        return TestResult::failed();
                    }
                }
                last = Some(now);
            }
        }
        TestResult::passed()
    }

    #[test]
    fn quickcheck_rate_limit() {
        QuickCheck::new()
            .tests(300)
            .quickcheck(prop_rate_limit as fn(u64, u8) -> TestResult);
    }

    #[quickcheck]
    fn shake_below_threshold_is_ignored(x: FiniteF32, y: FiniteF32, z: FiniteF32) -> bool {
        let trigger = ShakeTrigger::new(1.5, ShakeTuning::default());
        let (x, y, z) = (x.0 % 0.8, y.0 % 0.8, z.0 % 0.8);
        // |v| < sqrt(3) * 0.8 < 1.5
        trigger.evaluate(x, y, z).is_none()
    }

    #[quickcheck]
    fn shake_force_matches_formula(y: FiniteF32) -> TestResult {
        let y = y.0 % 100.0;
        if y.abs() < 1.5 {
            return TestResult::discard();
        }
        let trigger = ShakeTrigger::new(1.5, ShakeTuning::default());
        let force = trigger.evaluate(0.0, y, 0.0).unwrap_or_default();
        let expected = y * (y.abs() * 3.0).min(15.0) * 2.5;
        TestResult::from_bool((force.w - expected).abs() <= expected.abs() * 1e-5 && force.t.abs() < f32::EPSILON)
    }
}
