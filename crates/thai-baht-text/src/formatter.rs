//! Thai baht text assembly

use tracing::trace;

use crate::decompose::{decompose, DecomposedGroups};
use crate::normalize::{self, normalize};
use crate::speak::{speak_group, speak_period};
use crate::{FormatOptions, Result};

const THAI_MILLION: &str = "ล้าน";
const THAI_BAHT: &str = "บาท";
const THAI_SATANG: &str = "สตางค์";
const THAI_NEGATION: &str = "ลบ";
const THAI_ONLY: &str = "ถ้วน";

/// Thai baht text formatting utilities
pub struct ThaiBahtText;

impl ThaiBahtText {
    /// Largest amount that can be written out
    pub const MAX_VALUE: f64 = normalize::MAX_VALUE;

    /// Smallest amount that can be written out
    pub const MIN_VALUE: f64 = normalize::MIN_VALUE;

    /// Write out an amount using fully specified options
    ///
    /// `None` is read as zero. Fails with [`BahtTextError::OutOfRange`] when
    /// the scaled, rounded amount lies outside
    /// [`MIN_VALUE`](Self::MIN_VALUE)..=[`MAX_VALUE`](Self::MAX_VALUE).
    ///
    /// A nonzero amount that rounds to zero at the resolved precision reads as
    /// the unit's zero phrase (`0.001` gives "ศูนย์บาทถ้วน", not a bare "ถ้วน").
    /// No "ลบ" is prefixed then, so `-0.001` and `0.001` read the same.
    ///
    /// [`BahtTextError::OutOfRange`]: crate::BahtTextError::OutOfRange
    pub fn format(amount: impl Into<Option<f64>>, options: &FormatOptions) -> Result<String> {
        let amount = amount.into().unwrap_or(0.0);
        if amount == 0.0 {
            return Ok(zero_text(options));
        }

        let normalized = normalize(amount, options)?;
        if normalized.is_zero() {
            return Ok(zero_text(options));
        }

        let groups = decompose(&normalized.text);
        trace!(?groups, negative = normalized.negative, "decomposed amount");

        Ok(assemble(normalized.negative, &groups, options))
    }
}

/// Write out an amount in baht and satang, ending in "ถ้วน" when whole
///
/// # Examples
/// ```
/// use thai_baht_text::thai_baht_text;
/// assert_eq!(thai_baht_text(121.50).unwrap(), "หนึ่งร้อยยี่สิบเอ็ดบาทห้าสิบสตางค์");
/// assert_eq!(thai_baht_text(None::<f64>).unwrap(), "ศูนย์บาทถ้วน");
/// ```
pub fn thai_baht_text(amount: impl Into<Option<f64>>) -> Result<String> {
    ThaiBahtText::format(amount, &FormatOptions::default())
}

/// Write out an amount with custom options
///
/// Accepts a [`FormatOptions`], a bare [`Unit`](crate::Unit), or the
/// positional tuple `(unit, decimal_places, append_exactly_suffix)`.
///
/// # Examples
/// ```
/// use thai_baht_text::{thai_baht_text_with, Unit};
/// assert_eq!(
///     thai_baht_text_with(12_345_600.0, (Unit::Million, 2, false)).unwrap(),
///     "สิบสองจุดสามห้าล้านบาท"
/// );
/// ```
pub fn thai_baht_text_with(
    amount: impl Into<Option<f64>>,
    options: impl Into<FormatOptions>,
) -> Result<String> {
    ThaiBahtText::format(amount, &options.into())
}

fn zero_text(options: &FormatOptions) -> String {
    let mut result = options.unit.zero_text().to_string();
    if options.append_exactly_suffix {
        result.push_str(THAI_ONLY);
    }
    result
}

fn assemble(negative: bool, groups: &DecomposedGroups<'_>, options: &FormatOptions) -> String {
    let unit = options.unit;
    let mut result = String::new();

    if negative {
        result.push_str(THAI_NEGATION);
    }

    for millions in [groups.high_millions, groups.low_millions] {
        if !millions.is_empty() {
            result.push_str(&speak_group(millions));
            result.push_str(THAI_MILLION);
        }
    }

    if !groups.baht.is_empty() {
        result.push_str(&speak_group(groups.baht));
    }
    if unit.is_baht() && (!groups.baht.is_empty() || groups.has_millions()) {
        result.push_str(THAI_BAHT);
    }

    if groups.fraction.is_empty() {
        result.push_str(unit.suffix());
        if options.append_exactly_suffix {
            result.push_str(THAI_ONLY);
        }
    } else if unit.is_baht() {
        result.push_str(&speak_group(groups.fraction));
        result.push_str(THAI_SATANG);
    } else {
        result.push_str(&speak_period(groups.fraction));
        result.push_str(unit.suffix());
    }

    result
}
