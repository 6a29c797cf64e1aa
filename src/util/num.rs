/// Rounds `value` to `places` decimal places, sending ties toward positive
/// infinity.
///
/// `2.25` becomes `2.3` and `-2.25` becomes `-2.2`. Non-finite values are
/// returned unchanged, and so are values too large to carry any digit at
/// `places`.
///
/// ## Parameters
/// - `value`: The number to round.
/// - `places`: How many digits to keep after the decimal point.
///
/// ## Example
/// ```
/// use infix::util::num::round_half_up;
///
/// assert_eq!(round_half_up(1.0 / 3.0, 1), 0.3);
/// assert_eq!(round_half_up(-2.25, 1), -2.2);
/// assert_eq!(round_half_up(2.675, 0), 3.0);
/// ```
#[must_use]
pub fn round_half_up(value: f64, places: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10_f64.powi(i32::from(places));
    // Past 2^52 an f64 has no fractional bits left.
    let scaled = value.abs() * factor;
    if !scaled.is_finite() || scaled >= 2_f64.powi(52) {
        return value;
    }
    value.mul_add(factor, 0.5).floor() / factor
}

/// Formats a result the way calculator clients expect it.
///
/// Finite values always carry a fractional part (`11.0`, `0.5`); infinities
/// are spelled out (`Infinity`, `-Infinity`) and not-a-number is `NaN`.
///
/// ## Example
/// ```
/// use infix::util::num::format_number;
///
/// assert_eq!(format_number(11.0), "11.0");
/// assert_eq!(format_number(-0.25), "-0.25");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        String::from(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        format!("{value:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_keeps_requested_places() {
        assert_eq!(round_half_up(3.14159, 2), 3.14);
        assert_eq!(round_half_up(3.14159, 0), 3.0);
        assert_eq!(round_half_up(2.25, 1), 2.3);
        assert_eq!(round_half_up(-1.05, 0), -1.0);
    }

    #[test]
    fn rounding_ignores_non_finite_values() {
        assert!(round_half_up(f64::NAN, 1).is_nan());
        assert_eq!(round_half_up(f64::INFINITY, 1), f64::INFINITY);
    }

    #[test]
    fn rounding_never_overflows_large_values() {
        assert_eq!(round_half_up(1e300, 20), 1e300);
        assert_eq!(round_half_up(-1e300, 20), -1e300);
        assert_eq!(round_half_up(1e60 + 1.0, 255), 1e60);
        assert_eq!(round_half_up(f64::MAX, 1), f64::MAX);
        assert_eq!(round_half_up(1e-10, 255), 1e-10);
    }

    #[test]
    fn formatting_matches_client_expectations() {
        assert_eq!(format_number(64.0), "64.0");
        assert_eq!(format_number(-7.0), "-7.0");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
    }
}
