//! Method-call syntax for numbers

use crate::{FormatOptions, Result, ThaiBahtText};

/// Write a number out as Thai baht text
///
/// Bring the trait into scope to call it on numeric values:
///
/// ```
/// use thai_baht_text::{ThaiBahtTextExt, Unit};
///
/// assert_eq!(121.50_f64.thai_baht_text().unwrap(), "หนึ่งร้อยยี่สิบเอ็ดบาทห้าสิบสตางค์");
/// assert_eq!(9_000_000_i64.thai_baht_text_with(Unit::Million).unwrap(), "เก้าล้านบาทถ้วน");
/// ```
pub trait ThaiBahtTextExt {
    /// Write out with default options
    fn thai_baht_text(&self) -> Result<String> {
        self.thai_baht_text_with(FormatOptions::default())
    }

    /// Write out with custom options
    fn thai_baht_text_with(&self, options: impl Into<FormatOptions>) -> Result<String>;
}

macro_rules! impl_thai_baht_text_ext {
    ($($t:ty),* $(,)?) => {
        $(
            impl ThaiBahtTextExt for $t {
                fn thai_baht_text_with(&self, options: impl Into<FormatOptions>) -> Result<String> {
                    ThaiBahtText::format(*self as f64, &options.into())
                }
            }
        )*
    };
}

impl_thai_baht_text_ext!(f64, f32, i32, i64, u32, u64);

impl ThaiBahtTextExt for Option<f64> {
    fn thai_baht_text_with(&self, options: impl Into<FormatOptions>) -> Result<String> {
        ThaiBahtText::format(*self, &options.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_float() {
        assert_eq!(11.50_f64.thai_baht_text().unwrap(), "สิบเอ็ดบาทห้าสิบสตางค์");
    }

    #[test]
    fn test_integers() {
        assert_eq!(501_i32.thai_baht_text().unwrap(), "ห้าร้อยหนึ่งบาทถ้วน");
        assert_eq!((-11i64).thai_baht_text().unwrap(), "ลบสิบเอ็ดบาทถ้วน");
        assert_eq!(10u32.thai_baht_text().unwrap(), "สิบบาทถ้วน");
        assert_eq!(
            25_000_000_000u64.thai_baht_text().unwrap(),
            "สองหมื่นห้าพันล้านบาทถ้วน"
        );
    }

    #[test]
    fn test_option() {
        assert_eq!(None::<f64>.thai_baht_text().unwrap(), "ศูนย์บาทถ้วน");
        assert_eq!(Some(1.0_f64).thai_baht_text().unwrap(), "หนึ่งบาทถ้วน");
    }

    #[test]
    fn test_with_options() {
        assert_eq!(
            8_500_000_000i64
                .thai_baht_text_with((Unit::Billion, 2, false))
                .unwrap(),
            "แปดจุดห้าพันล้านบาท"
        );
    }

    #[test]
    fn test_out_of_range() {
        assert!(1_000_000_000_000i64.thai_baht_text().is_err());
        assert!(u64::MAX.thai_baht_text().is_err());
    }
}
