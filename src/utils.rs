use std::cmp::Ordering;

// Past these bounds every f64 is already a fixed point (or rounds to zero).
const MAX_FLOAT_PRECISION: i32 = 323;
const MIN_FLOAT_PRECISION: i32 = -308;

// 10^20 exceeds twice any i64, so coarser roundings always give zero.
const MAX_INT_SCALE_DIGITS: u32 = 20;

/// Round `value` to `precision` decimal digits, breaking exact ties to even.
///
/// Ties are decided on the exact binary value, so `2.675` (stored slightly
/// below the tie) rounds to `2.67` while `0.125` (an exact tie) rounds to `0.12`.
pub(crate) fn round_f64(value: f64, precision: i32) -> f64 {
    if !value.is_finite() || precision > MAX_FLOAT_PRECISION {
        return value;
    }
    if precision < MIN_FLOAT_PRECISION {
        return 0.0 * value;
    }

    if precision >= 0 {
        // Fixed-precision formatting is exact and rounds half to even.
        let formatted = format!("{:.*}", precision as usize, value);
        return formatted.parse().unwrap_or(value);
    }

    let scale = 10f64.powi(-precision);
    let rounded = (value / scale).round_ties_even() * scale;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Round an integer to a multiple of `10^-precision`, breaking ties to even.
///
/// Non-negative precisions leave integers untouched. The result is widened
/// to `i128` because rounding near `i64::MAX` can step past it.
pub(crate) fn round_i64(value: i64, precision: i32) -> i128 {
    if precision >= 0 {
        return value as i128;
    }
    let digits = precision.unsigned_abs();
    if digits >= MAX_INT_SCALE_DIGITS {
        return 0;
    }

    let scale = 10i128.pow(digits);
    let value = value as i128;
    let quotient = value.div_euclid(scale);
    let remainder = value.rem_euclid(scale);
    let quotient = match (2 * remainder).cmp(&scale) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => quotient + quotient.rem_euclid(2),
    };
    quotient * scale
}
