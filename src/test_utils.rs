// SPDX-License-Identifier: MPL-2.0
//! Test helpers for comparing scroll offsets.
//!
//! Offsets are sums of slide widths and gaps, so tests compare them with a
//! tolerance through the `approx` macros rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for scroll offsets, in logical pixels.
pub const OFFSET_EPSILON: f32 = 1e-3;

/// Asserts that two offset lists have the same length and matching entries.
#[track_caller]
pub fn assert_offsets_eq(actual: &[f32], expected: &[f32]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "offset count differs: {actual:?} vs {expected:?}"
    );
    for (got, want) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(*got, *want, epsilon = OFFSET_EPSILON);
    }
}
