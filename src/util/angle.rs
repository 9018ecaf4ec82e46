//! Angle wrapping helpers.
//!
//! Internal camera state stores angles in radians; degrees appear only at
//! the UI-widget boundary. Both units get a wrap-to-one-turn helper so yaw
//! never goes negative or accumulates full revolutions.

use std::f32::consts::TAU;

/// Wrap an angle in radians into `[0, 2π)`.
///
/// Negative inputs wrap to the equivalent positive angle; the result is
/// congruent to the input modulo `2π`.
#[must_use]
pub fn wrap_tau(radians: f32) -> f32 {
    let wrapped = radians.rem_euclid(TAU);
    // rem_euclid can return exactly TAU when the input is a tiny negative
    // number, which would violate the half-open range.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
#[must_use]
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{PI, TAU};

    use super::{wrap_degrees, wrap_tau};

    #[test]
    fn wrap_tau_leaves_in_range_values_untouched() {
        assert_eq!(wrap_tau(0.0), 0.0);
        assert_eq!(wrap_tau(PI), PI);
        assert_eq!(wrap_tau(1.5), 1.5);
    }

    #[test]
    fn wrap_tau_is_never_negative() {
        for raw in [-0.001, -PI, -TAU, -10.0 * TAU - 1.0] {
            let wrapped = wrap_tau(raw);
            assert!((0.0..TAU).contains(&wrapped), "wrap_tau({raw}) = {wrapped}");
        }
    }

    #[test]
    fn wrap_tau_is_congruent_modulo_tau() {
        for raw in [-3.0 * TAU + 0.25, -1.0, 0.5, TAU + 0.5, 7.5 * TAU + 2.0] {
            let wrapped = wrap_tau(raw);
            let diff = (raw - wrapped) / TAU;
            assert!(
                (diff - diff.round()).abs() < 1e-4,
                "wrap_tau({raw}) = {wrapped} is not congruent mod 2π"
            );
        }
    }

    #[test]
    fn wrap_degrees_handles_negative_and_overflow() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(359.0), 359.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(720.0 + 45.0), 45.0);
    }
}
