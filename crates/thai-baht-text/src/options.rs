//! Formatting options

use serde::{Deserialize, Serialize};

use crate::{BahtTextError, Result, Unit};

/// Decimal places used for baht/satang and for out-of-range requests
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Largest number of decimal places a scaled unit can be read with
pub const MAX_DECIMAL_PLACES: u32 = 6;

/// Options controlling how an amount is written out
///
/// Deserializes from a partial record; missing keys take their defaults.
///
/// ```
/// use thai_baht_text::{FormatOptions, Unit};
///
/// let options = FormatOptions::from_json(r#"{"unit": "million", "appendBahtOnly": false}"#).unwrap();
/// assert_eq!(options.unit, Unit::Million);
/// assert_eq!(options.decimal_places, 2);
/// assert!(!options.append_exactly_suffix);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FormatOptions {
    /// Unit the amount is spoken in
    pub unit: Unit,
    /// Fractional digits for scaled units (0-6). Ignored for `Unit::Baht`.
    pub decimal_places: u32,
    /// Append "ถ้วน" when there is no fractional reading
    #[serde(alias = "appendBahtOnly")]
    pub append_exactly_suffix: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            unit: Unit::Baht,
            decimal_places: DEFAULT_DECIMAL_PLACES,
            append_exactly_suffix: true,
        }
    }
}

impl FormatOptions {
    /// Parse options from a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BahtTextError::InvalidOptions(e.to_string()))
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    pub fn with_exactly_suffix(mut self, append: bool) -> Self {
        self.append_exactly_suffix = append;
        self
    }

    /// Decimal places actually used for rounding
    ///
    /// Baht always reads two places (satang). Scaled units fall back to two
    /// places when the request is outside 0-6.
    pub fn resolved_decimal_places(&self) -> u32 {
        if self.unit.is_baht() || self.decimal_places > MAX_DECIMAL_PLACES {
            DEFAULT_DECIMAL_PLACES
        } else {
            self.decimal_places
        }
    }
}

impl From<Unit> for FormatOptions {
    fn from(unit: Unit) -> Self {
        Self::default().with_unit(unit)
    }
}

/// Positional call shape: `(unit, decimal_places, append_exactly_suffix)`
impl From<(Unit, u32, bool)> for FormatOptions {
    fn from((unit, decimal_places, append_exactly_suffix): (Unit, u32, bool)) -> Self {
        Self {
            unit,
            decimal_places,
            append_exactly_suffix,
        }
    }
}

impl From<(Unit, u32)> for FormatOptions {
    fn from((unit, decimal_places): (Unit, u32)) -> Self {
        Self::default()
            .with_unit(unit)
            .with_decimal_places(decimal_places)
    }
}

impl From<&FormatOptions> for FormatOptions {
    fn from(options: &FormatOptions) -> Self {
        *options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let options = FormatOptions::default();
        assert_eq!(options.unit, Unit::Baht);
        assert_eq!(options.decimal_places, 2);
        assert!(options.append_exactly_suffix);
    }

    #[test]
    fn test_baht_forces_two_places() {
        let options = FormatOptions::default().with_decimal_places(5);
        assert_eq!(options.resolved_decimal_places(), 2);
        let options = FormatOptions::default().with_decimal_places(0);
        assert_eq!(options.resolved_decimal_places(), 2);
    }

    #[test]
    fn test_scaled_unit_decimal_places() {
        for places in 0..=6 {
            let options = FormatOptions::from((Unit::Million, places));
            assert_eq!(options.resolved_decimal_places(), places);
        }
        let options = FormatOptions::from((Unit::Billion, 7));
        assert_eq!(options.resolved_decimal_places(), 2);
    }

    #[test]
    fn test_positional_shape() {
        let options = FormatOptions::from((Unit::Trillion, 4, false));
        assert_eq!(
            options,
            FormatOptions {
                unit: Unit::Trillion,
                decimal_places: 4,
                append_exactly_suffix: false,
            }
        );
    }

    #[test]
    fn test_from_json_partial() {
        let options = FormatOptions::from_json(r#"{"decimalPlaces": 4}"#).unwrap();
        assert_eq!(options, FormatOptions::default().with_decimal_places(4));

        let options = FormatOptions::from_json("{}").unwrap();
        assert_eq!(options, FormatOptions::default());
    }

    #[test]
    fn test_from_json_both_suffix_keys() {
        let legacy = FormatOptions::from_json(r#"{"appendBahtOnly": false}"#).unwrap();
        let named = FormatOptions::from_json(r#"{"appendExactlySuffix": false}"#).unwrap();
        assert_eq!(legacy, named);
        assert!(!legacy.append_exactly_suffix);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            FormatOptions::from_json(r#"{"unit": "rupee"}"#),
            Err(BahtTextError::InvalidOptions(_))
        ));
        assert!(FormatOptions::from_json(r#"{"colour": "red"}"#).is_err());
        assert!(FormatOptions::from_json("not json").is_err());
    }
}
