//! Assertion utilities for testing.
//!
//! Floating-point and color comparisons with explicit tolerances.

#![allow(dead_code)]

use pestviz::{ColorGradient, Rgba};

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two colors agree channel by channel within `epsilon`.
pub fn assert_color_approx_eq(actual: &Rgba, expected: &Rgba, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = actual.max_channel_diff(expected);

    assert!(
        diff <= epsilon,
        "Colors not approximately equal: actual = {:?}, expected = {:?}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two gradients sample to the same colors on a regular grid.
pub fn assert_gradients_approx_eq(
    actual: &ColorGradient,
    expected: &ColorGradient,
    samples: usize,
    epsilon: Option<f64>,
) {
    for (i, (a, e)) in actual
        .colors(samples)
        .iter()
        .zip(expected.colors(samples).iter())
        .enumerate()
    {
        let diff = a.max_channel_diff(e);
        let eps = epsilon.unwrap_or(DEFAULT_EPSILON);

        assert!(
            diff <= eps,
            "Gradients differ at sample {}: actual = {:?}, expected = {:?}, diff = {}, epsilon = {}",
            i,
            a,
            e,
            diff,
            eps
        );
    }
}

/// Assert that a result is within expected bounds (inclusive).
pub fn assert_in_range(actual: f64, min: f64, max: f64) {
    assert!(
        actual >= min && actual <= max,
        "Value not in range: actual = {}, min = {}, max = {}",
        actual,
        min,
        max
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(1.0, 1.0 + 1e-12, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_assert_in_range() {
        assert_in_range(5.0, 0.0, 10.0);
        assert_in_range(0.0, 0.0, 10.0);
        assert_in_range(10.0, 0.0, 10.0);
    }
}
