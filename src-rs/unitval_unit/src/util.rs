//! Utility functions for floating point comparison

const TOLERANCE: f64 = 1e-10;

/// Checks if two floating point numbers are close to each other.
///
/// This function uses the `Strong` comparison method defined in the
/// `is_close` crate as reference. See
/// <https://github.com/PM4Rs/is_close/blob/8475cd292946b6e5461375a41160153ce32e31c6/src/lib.rs#L183>
/// for more details.
///
/// The tolerance is fixed at 1e-10.
#[must_use]
pub const fn is_close(a: f64, b: f64) -> bool {
    #[expect(
        clippy::float_cmp,
        reason = "this is a part of implementing better floating point comparison"
    )]
    if a == b {
        return true;
    }

    if a.is_infinite() || b.is_infinite() {
        return false;
    }

    if a.is_nan() || b.is_nan() {
        return false;
    }

    let difference = (a - b).abs();
    let relative_tolerance = TOLERANCE * f64::min(a.abs(), b.abs());
    let absolute_tolerance = TOLERANCE;

    difference <= relative_tolerance || difference <= absolute_tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_values_are_close() {
        assert!(is_close(1.5, 1.5));
        assert!(is_close(0.0, -0.0));
    }

    #[test]
    fn relative_tolerance_scales_with_magnitude() {
        assert!(is_close(1.0e20, 1.0e20 + 1.0e9));
        assert!(!is_close(1.0e20, 1.0e20 * 1.001));
    }

    #[test]
    fn non_finite_values_are_never_close() {
        assert!(!is_close(f64::NAN, f64::NAN));
        assert!(!is_close(f64::INFINITY, f64::MAX));
        assert!(is_close(f64::INFINITY, f64::INFINITY));
    }
}
