//! Output units for baht text

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::BahtTextError;

/// Unit the amount is spoken in
///
/// `Baht` reads the amount as whole baht and satang. The scaled units divide
/// the amount first and read the remainder as a decimal ("จุด") before the
/// unit word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Baht,
    Million,
    Billion,
    Trillion,
}

impl Unit {
    /// Divisor applied to the amount before rendering
    pub fn scale(self) -> f64 {
        match self {
            Unit::Baht => 1.0,
            Unit::Million => 1_000_000.0,
            Unit::Billion => 1_000_000_000.0,
            Unit::Trillion => 1_000_000_000_000.0,
        }
    }

    /// Compound unit word placed after a scaled reading (empty for `Baht`)
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Baht => "",
            Unit::Million => "ล้านบาท",
            Unit::Billion => "พันล้านบาท",
            Unit::Trillion => "ล้านล้านบาท",
        }
    }

    /// Fixed phrase for a zero amount, without the exactly suffix
    pub fn zero_text(self) -> &'static str {
        match self {
            Unit::Baht => "ศูนย์บาท",
            Unit::Million => "ศูนย์ล้านบาท",
            Unit::Billion => "ศูนย์พันล้านบาท",
            Unit::Trillion => "ศูนย์ล้านล้านบาท",
        }
    }

    pub fn is_baht(self) -> bool {
        self == Unit::Baht
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Baht => "baht",
            Unit::Million => "million",
            Unit::Billion => "billion",
            Unit::Trillion => "trillion",
        };
        f.write_str(name)
    }
}

impl FromStr for Unit {
    type Err = BahtTextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baht" => Ok(Unit::Baht),
            "million" => Ok(Unit::Million),
            "billion" => Ok(Unit::Billion),
            "trillion" => Ok(Unit::Trillion),
            other => Err(BahtTextError::InvalidOptions(format!(
                "unknown unit: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        assert_eq!(Unit::Baht.scale(), 1.0);
        assert_eq!(Unit::Million.scale(), 1e6);
        assert_eq!(Unit::Billion.scale(), 1e9);
        assert_eq!(Unit::Trillion.scale(), 1e12);
    }

    #[test]
    fn test_zero_text_carries_unit_word() {
        assert_eq!(Unit::Baht.zero_text(), "ศูนย์บาท");
        for unit in [Unit::Million, Unit::Billion, Unit::Trillion] {
            assert_eq!(unit.zero_text(), format!("ศูนย์{}", unit.suffix()));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Million".parse::<Unit>().unwrap(), Unit::Million);
        assert_eq!(" trillion ".parse::<Unit>().unwrap(), Unit::Trillion);
        assert!("crore".parse::<Unit>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for unit in [Unit::Baht, Unit::Million, Unit::Billion, Unit::Trillion] {
            assert_eq!(unit.to_string().parse::<Unit>().unwrap(), unit);
        }
    }
}
