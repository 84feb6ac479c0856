#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Converts an angle from radians to degrees.
pub fn to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Converts an angle from degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Normalizes an angle in degrees to the range [0, 360).
///
/// Computed as `360 * (x/360 - floor(x/360))`, with a single correction if
/// rounding leaves the result outside the range. Angles already in range are
/// returned unchanged, so normalizing twice yields the same bits.
///
/// # Arguments
///
/// * `degrees` - The angle in degrees to normalize
///
/// # Returns
///
/// The normalized angle in degrees, in the range [0, 360)
///
/// # Example
///
/// ```
/// use solar_part_of_day::normalize_degrees_360;
///
/// assert_eq!(normalize_degrees_360(-90.0), 270.0);
/// assert_eq!(normalize_degrees_360(540.0), 180.0);
/// assert!((normalize_degrees_360(370.0) - 10.0).abs() < 1e-9);
/// ```
pub fn normalize_degrees_360(degrees: f64) -> f64 {
    if (0.0..360.0).contains(&degrees) {
        return degrees;
    }
    let turns = degrees / 360.0;
    let mut limited = 360.0 * (turns - turns.floor());
    if limited < 0.0 {
        limited += 360.0;
    }
    // x/360 - floor(x/360) can round up to 1.0 for tiny negative x
    if limited >= 360.0 {
        limited -= 360.0;
    }
    limited
}

/// Evaluate a cubic polynomial at `x`.
///
/// Interprets the arguments as coefficients of
/// \(a x^3 + b x^2 + c x + d\), evaluated with Horner's method in the
/// operation order of the reference algorithm.
pub fn eval_cubic(a: f64, b: f64, c: f64, d: f64, x: f64) -> f64 {
    ((a * x + b) * x + c) * x + d
}

/// Evaluates a polynomial with Horner's method.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
pub(crate) fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = coeff + x * result;
    }
    result
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn normalizes_negative_and_large_angles() {
        assert_eq!(normalize_degrees_360(0.0), 0.0);
        assert_eq!(normalize_degrees_360(360.0), 0.0);
        assert_eq!(normalize_degrees_360(-360.0), 0.0);
        assert_abs_diff_eq!(normalize_degrees_360(725.5), 5.5, epsilon = 1e-9);
        assert_abs_diff_eq!(normalize_degrees_360(-10.25), 349.75, epsilon = 1e-9);
    }

    #[test]
    fn one_turn_past_keeps_division_rounding() {
        // 370/360 is not exact in binary, so the remainder lands just below 10
        let wrapped = normalize_degrees_360(370.0);
        assert_ne!(wrapped, 10.0);
        assert_abs_diff_eq!(wrapped, 10.0, epsilon = 1e-9);
        assert_eq!(normalize_degrees_360(-90.0), 270.0);
        assert_eq!(normalize_degrees_360(540.0), 180.0);
    }

    #[test]
    fn cubic_uses_highest_power_first() {
        // 2x^3 - x^2 + 3x + 4 at x = 2
        assert_eq!(eval_cubic(2.0, -1.0, 3.0, 4.0, 2.0), 22.0);
    }

    #[test]
    fn polynomial_matches_nested_form() {
        let u = 0.0037;
        let nested = 1.0 + u * (2.0 + u * (3.0 + u * 4.0));
        assert_eq!(polynomial(&[1.0, 2.0, 3.0, 4.0], u), nested);
        assert_eq!(polynomial(&[], u), 0.0);
    }

    #[test]
    fn degree_radian_conversions() {
        assert_abs_diff_eq!(to_radians(180.0), core::f64::consts::PI, epsilon = 1e-15);
        assert_abs_diff_eq!(to_degrees(core::f64::consts::FRAC_PI_2), 90.0, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(x in -1.0e7_f64..1.0e7_f64) {
            let once = normalize_degrees_360(x);
            prop_assert!((0.0..360.0).contains(&once));
            prop_assert_eq!(normalize_degrees_360(once), once);
        }
    }
}
