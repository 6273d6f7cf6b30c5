//! Reading digit groups aloud in Thai

/// Thai number names (0-9)
const NUMBER_NAMES: [&str; 10] = [
    "ศูนย์",
    "หนึ่ง",
    "สอง",
    "สาม",
    "สี่",
    "ห้า",
    "หก",
    "เจ็ด",
    "แปด",
    "เก้า",
];

/// Thai place names, indexed by position from the right
const PLACE_NAMES: [&str; 6] = ["", "สิบ", "ร้อย", "พัน", "หมื่น", "แสน"];

const THAI_ONE: &str = "หนึ่ง";
const THAI_ET: &str = "เอ็ด";
const THAI_TEN: &str = "สิบ";
const THAI_TWENTY: &str = "ยี่สิบ";
const THAI_POINT: &str = "จุด";

fn digit_value(b: u8) -> usize {
    debug_assert!(b.is_ascii_digit(), "not a digit: {b}");
    (b - b'0') as usize
}

/// Read a group of at most six digits
///
/// Zero digits are silent, so a group of zeros reads as an empty string.
/// Callers pass decomposer output only: unsigned ASCII digits, at most six.
pub(crate) fn speak_group(digits: &str) -> String {
    debug_assert!(digits.len() <= PLACE_NAMES.len(), "group too long: {digits}");

    let len = digits.len();
    let mut result = String::new();
    let mut last: Option<usize> = None;

    for (i, b) in digits.bytes().enumerate() {
        let digit = digit_value(b);
        let place = len - 1 - i;

        match (place, digit) {
            // เอ็ด only follows a nonzero tens digit
            (0, 1) => {
                let word = match last {
                    None | Some(0) => THAI_ONE,
                    Some(_) => THAI_ET,
                };
                result.push_str(word);
            }
            (1, 2) => result.push_str(THAI_TWENTY),
            (1, 1) => result.push_str(THAI_TEN),
            (_, 0) => {}
            (_, d) => {
                result.push_str(NUMBER_NAMES[d]);
                result.push_str(PLACE_NAMES[place]);
            }
        }

        last = Some(digit);
    }

    result
}

/// Read decimal digits one by one after "จุด"
///
/// Trailing zeros are dropped; an all-zero input reads as a single ศูนย์.
pub(crate) fn speak_period(digits: &str) -> String {
    let trimmed = match digits.trim_end_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };

    let mut result = String::from(THAI_POINT);
    for b in trimmed.bytes() {
        result.push_str(NUMBER_NAMES[digit_value(b)]);
    }
    result
}
