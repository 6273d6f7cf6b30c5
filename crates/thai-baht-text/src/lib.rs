//! Thai Baht Text - amounts of money written out in Thai
//!
//! This crate provides:
//! - Baht and satang text (หนึ่งร้อยบาทห้าสิบสตางค์, สิบเอ็ดบาทถ้วน)
//! - Scaled readings in million, billion and trillion baht (สิบสองจุดสามห้าล้านบาท)
//! - Rounding half away from zero to the requested precision
//! - Method-call syntax on numbers via [`ThaiBahtTextExt`]
//!
//! # Example
//!
//! ```
//! use thai_baht_text::{thai_baht_text, thai_baht_text_with, FormatOptions, Unit};
//!
//! assert_eq!(thai_baht_text(11.0)?, "สิบเอ็ดบาทถ้วน");
//! assert_eq!(thai_baht_text(-550.25)?, "ลบห้าร้อยห้าสิบบาทยี่สิบห้าสตางค์");
//!
//! let options = FormatOptions::default()
//!     .with_unit(Unit::Billion)
//!     .with_exactly_suffix(false);
//! assert_eq!(thai_baht_text_with(8_500_000_000.0, options)?, "แปดจุดห้าพันล้านบาท");
//! # Ok::<(), thai_baht_text::BahtTextError>(())
//! ```

mod decompose;
mod ext;
mod formatter;
mod normalize;
mod options;
mod speak;
mod unit;

pub use ext::ThaiBahtTextExt;
pub use formatter::{thai_baht_text, thai_baht_text_with, ThaiBahtText};
pub use normalize::{round_half_away_from_zero, MAX_VALUE, MIN_VALUE};
pub use options::{FormatOptions, DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES};
pub use unit::Unit;

use thiserror::Error;

/// Errors that can occur during baht text formatting
#[derive(Debug, Error)]
pub enum BahtTextError {
    #[error("Amount out of supported range: {0}")]
    OutOfRange(f64),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

/// Result type for baht text operations
pub type Result<T> = std::result::Result<T, BahtTextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thai_baht_text() {
        assert_eq!(thai_baht_text(0.0).unwrap(), "ศูนย์บาทถ้วน");
        assert_eq!(thai_baht_text(1.0).unwrap(), "หนึ่งบาทถ้วน");
        assert_eq!(thai_baht_text(0.50).unwrap(), "ห้าสิบสตางค์");
    }

    #[test]
    fn test_bounds_are_shared() {
        assert_eq!(ThaiBahtText::MAX_VALUE, MAX_VALUE);
        assert_eq!(ThaiBahtText::MIN_VALUE, -MAX_VALUE);
    }

    #[test]
    fn test_error_message() {
        let err = thai_baht_text(1e13).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Amount out of supported range: 10000000000000"
        );
    }
}
