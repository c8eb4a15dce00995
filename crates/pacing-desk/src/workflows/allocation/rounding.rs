//! Presentation rounding and overflow-checked count arithmetic. Ties go to
//! the even neighbour throughout.

use super::domain::AllocationError;

/// Rounds to a whole count.
pub fn round_count(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Rounds to one decimal place.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Like [`round_count`], but rejects values outside the `i64` range
/// instead of saturating.
pub fn checked_round_count(figure: &'static str, value: f64) -> Result<i64, AllocationError> {
    let rounded = value.round_ties_even();
    if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
        Ok(rounded as i64)
    } else {
        Err(AllocationError::ArithmeticOverflow { figure })
    }
}

/// Adds two counts, naming the derived `figure` when the sum overflows.
pub fn add_counts(figure: &'static str, lhs: i64, rhs: i64) -> Result<i64, AllocationError> {
    lhs.checked_add(rhs)
        .ok_or(AllocationError::ArithmeticOverflow { figure })
}

pub fn sub_counts(figure: &'static str, lhs: i64, rhs: i64) -> Result<i64, AllocationError> {
    lhs.checked_sub(rhs)
        .ok_or(AllocationError::ArithmeticOverflow { figure })
}

/// `numerator / denominator` rounded to one decimal place.
pub fn per_head(numerator: i64, denominator: u32) -> f64 {
    round_tenth(numerator as f64 / f64::from(denominator))
}
