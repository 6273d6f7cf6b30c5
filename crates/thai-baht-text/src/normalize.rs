//! Amount scaling, rounding and range validation

use tracing::debug;

use crate::{BahtTextError, FormatOptions, Result};

/// Largest amount that can be written out
pub const MAX_VALUE: f64 = 999_999_999_999.99;

/// Smallest amount that can be written out
pub const MIN_VALUE: f64 = -999_999_999_999.99;

/// A scaled, rounded amount with its sign split off
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NormalizedAmount {
    pub negative: bool,
    /// Magnitude in fixed-point notation with exactly `decimal_places` digits
    pub text: String,
}

impl NormalizedAmount {
    /// True if the amount rounded away to nothing
    pub fn is_zero(&self) -> bool {
        self.text.bytes().all(|b| b == b'0' || b == b'.')
    }
}

/// Round to `places` decimal places, ties away from zero
///
/// # Examples
/// ```
/// use thai_baht_text::round_half_away_from_zero;
/// assert_eq!(round_half_away_from_zero(0.055, 2), 0.06);
/// assert_eq!(round_half_away_from_zero(-0.055, 2), -0.06);
/// assert_eq!(round_half_away_from_zero(2.5, 0), 3.0);
/// ```
pub fn round_half_away_from_zero(value: f64, places: u32) -> f64 {
    let multiplier = 10_f64.powi(places as i32);
    if value >= 0.0 {
        (value * multiplier + 0.5).floor() / multiplier
    } else {
        (value * multiplier - 0.5).ceil() / multiplier
    }
}

/// Scale by the unit, round and range-check a nonzero amount
pub(crate) fn normalize(amount: f64, options: &FormatOptions) -> Result<NormalizedAmount> {
    let places = options.resolved_decimal_places();
    let scaled = amount / options.unit.scale();
    let rounded = round_half_away_from_zero(scaled, places);

    // NaN fails `contains` as well
    if !(MIN_VALUE..=MAX_VALUE).contains(&rounded) {
        debug!(amount, unit = %options.unit, "amount out of supported range");
        return Err(BahtTextError::OutOfRange(amount));
    }

    let negative = rounded < 0.0;
    // abs() also drops the sign of a negative zero
    let text = format!("{:.*}", places as usize, rounded.abs());

    Ok(NormalizedAmount { negative, text })
}
