//! Splitting a fixed-point amount into million-scale groups

/// Digits per group; everything above is counted in ล้าน
const GROUP_DIGITS: usize = 6;

/// Digit groups of a fixed-point amount, most significant first
///
/// Each group is either empty or a digit string as it appeared in the input,
/// so inner zeros (e.g. `"000123"`) keep their place value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct DecomposedGroups<'a> {
    /// Millions of millions
    pub high_millions: &'a str,
    /// Millions
    pub low_millions: &'a str,
    /// Units below a million; empty when all zeros
    pub baht: &'a str,
    /// Digits after the decimal point; empty when all zeros
    pub fraction: &'a str,
}

impl DecomposedGroups<'_> {
    pub fn has_millions(&self) -> bool {
        !self.high_millions.is_empty() || !self.low_millions.is_empty()
    }
}

/// Split off the last `n` characters of an ASCII digit string
fn split_tail(digits: &str, n: usize) -> (&str, &str) {
    if digits.len() > n {
        digits.split_at(digits.len() - n)
    } else {
        ("", digits)
    }
}

fn is_all_zeros(digits: &str) -> bool {
    digits.bytes().all(|b| b == b'0')
}

/// Decompose a non-negative fixed-point string such as `"12345678.00"`
pub(crate) fn decompose(text: &str) -> DecomposedGroups<'_> {
    let (integer, fraction) = text.split_once('.').unwrap_or((text, ""));

    let (millions, baht) = split_tail(integer, GROUP_DIGITS);
    let (high_millions, low_millions) = split_tail(millions, GROUP_DIGITS);

    DecomposedGroups {
        high_millions,
        low_millions,
        baht: if is_all_zeros(baht) { "" } else { baht },
        fraction: if is_all_zeros(fraction) { "" } else { fraction },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_small_amount() {
        assert_eq!(
            decompose("560.83"),
            DecomposedGroups {
                baht: "560",
                fraction: "83",
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_zero_fraction_is_cleared() {
        assert_eq!(decompose("11.00").fraction, "");
        assert_eq!(decompose("9.0000").fraction, "");
        assert_eq!(decompose("0.0050").fraction, "0050");
    }

    #[test]
    fn test_without_decimal_point() {
        assert_eq!(
            decompose("12"),
            DecomposedGroups {
                baht: "12",
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_millions_split() {
        let groups = decompose("675001333111.00");
        assert_eq!(groups.high_millions, "");
        assert_eq!(groups.low_millions, "675001");
        assert_eq!(groups.baht, "333111");
        assert_eq!(groups.fraction, "");
        assert!(groups.has_millions());
    }

    #[test]
    fn test_zero_baht_group_is_cleared() {
        let groups = decompose("5001000000.11");
        assert_eq!(groups.low_millions, "5001");
        assert_eq!(groups.baht, "");
        assert_eq!(groups.fraction, "11");
    }

    #[test]
    fn test_inner_zeros_preserved() {
        let groups = decompose("11000111.00");
        assert_eq!(groups.low_millions, "11");
        assert_eq!(groups.baht, "000111");
    }

    #[test]
    fn test_high_millions_split() {
        let groups = decompose("1000002000003.5");
        assert_eq!(groups.high_millions, "1");
        assert_eq!(groups.low_millions, "000002");
        assert_eq!(groups.baht, "000003");
        assert_eq!(groups.fraction, "5");
    }

    #[test]
    fn test_fraction_only() {
        let groups = decompose("0.05");
        assert!(!groups.has_millions());
        assert_eq!(groups.baht, "");
        assert_eq!(groups.fraction, "05");
    }
}
