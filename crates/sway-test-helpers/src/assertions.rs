//! Assertion macros for float-heavy motion tests.

/// Assert that two floating-point values are approximately equal.
///
/// ```rust
/// use sway_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(0.96f32, 0.6f32 * 0.8 * 2.0, 1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if diff.is_nan() || diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if diff.is_nan() || diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that a value falls within a range.
///
/// ```rust
/// use sway_test_helpers::assert_in_range;
///
/// assert_in_range!(0.1f32, 0.08..=0.15);
/// ```
#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $range:expr $(,)?) => {
        let value = $value;
        let range = $range;
        if !range.contains(&value) {
            panic!("assertion failed: value {:?} is not in range {:?}", value, range);
        }
    };
    ($value:expr, $range:expr, $($arg:tt)+) => {
        let value = $value;
        let range = $range;
        if !range.contains(&value) {
            panic!(
                "assertion failed: value {:?} is not in range {:?}: {}",
                value, range, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that a force `{ w, t }` lies inside symmetric per-channel limits.
///
/// ```rust
/// use sway_test_helpers::assert_force_within;
///
/// struct Force { w: f32, t: f32 }
/// assert_force_within!(Force { w: -25.0, t: 3.0 }, 25.0, 18.0);
/// ```
#[macro_export]
macro_rules! assert_force_within {
    ($force:expr, $w_limit:expr, $t_limit:expr $(,)?) => {
        let force = $force;
        let (w_limit, t_limit) = ($w_limit, $t_limit);
        let inside = force.w.abs() <= w_limit && force.t.abs() <= t_limit;
        if !inside {
            panic!(
                "assertion failed: force (w={:?}, t={:?}) outside ±{:?} / ±{:?}",
                force.w, force.t, w_limit, t_limit
            );
        }
    };
}
