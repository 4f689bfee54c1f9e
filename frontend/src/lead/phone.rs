//! Brazilian phone mask applied while the visitor types.

pub const MAX_PHONE_DIGITS: usize = 11;

pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Re-masks `raw` from its digits:
///
/// * 11 digits: `(DD) DDDDD-DDDD`
/// * 6 to 10 digits: `(DD) DDDD-` plus the rest
/// * 3 to 5 digits: `(DD) ` plus the rest
/// * fewer: `(` plus the digits
///
/// Anything past the eleventh digit is dropped.
pub fn format_phone_as_typed(raw: &str) -> String {
    let mut digits = digits_only(raw);
    // ascii only, so byte and char counts agree
    digits.truncate(MAX_PHONE_DIGITS);

    match digits.len() {
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        6..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        3..=5 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}", digits),
    }
}
