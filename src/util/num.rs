use crate::error::LexError;

/// Parses a run of decimal digits into an `i64`.
///
/// Signs are not accepted: the configuration language has no signed
/// literals, negative values only arise from arithmetic.
///
/// ## Errors
/// - `LexError::MissingDigits` for an empty string.
/// - `LexError::InvalidDigit` for any non-digit character.
/// - `LexError::LiteralTooLarge` if the value exceeds `i64::MAX`.
///
/// ## Example
/// ```
/// use conflang::{error::LexError, util::num::parse_decimal};
///
/// assert_eq!(parse_decimal("8080"), Ok(8080));
/// assert_eq!(parse_decimal("-1"), Err(LexError::InvalidDigit { found: '-' }));
/// assert_eq!(parse_decimal("9223372036854775808"), Err(LexError::LiteralTooLarge));
/// ```
pub fn parse_decimal(digits: &str) -> Result<i64, LexError> {
    parse_radix(digits, 10)
}

/// Parses a hexadecimal literal including its `0x`/`0X` prefix.
///
/// Any number of digits is accepted as long as the value fits in an `i64`,
/// so leading zeros never cause an overflow.
///
/// ## Errors
/// - `LexError::MissingDigits` if nothing follows the prefix.
/// - `LexError::InvalidDigit` for a non-hexadecimal character.
/// - `LexError::LiteralTooLarge` if the value exceeds `i64::MAX`.
///
/// ## Example
/// ```
/// use conflang::{error::LexError, util::num::parse_hex};
///
/// assert_eq!(parse_hex("0x0A"), Ok(10));
/// assert_eq!(parse_hex("0XABCD"), Ok(43981));
/// assert_eq!(parse_hex("0x00000000000000000000ff"), Ok(255));
/// assert_eq!(parse_hex("0x"), Err(LexError::MissingDigits));
/// ```
pub fn parse_hex(literal: &str) -> Result<i64, LexError> {
    parse_radix(literal.get(2..).unwrap_or_default(), 16)
}

fn parse_radix(digits: &str, radix: u32) -> Result<i64, LexError> {
    if digits.is_empty() {
        return Err(LexError::MissingDigits);
    }

    digits.chars().try_fold(0_i64, |acc, c| {
                      let digit = c.to_digit(radix)
                                   .ok_or(LexError::InvalidDigit { found: c })?;
                      acc.checked_mul(i64::from(radix))
                         .and_then(|v| v.checked_add(i64::from(digit)))
                         .ok_or(LexError::LiteralTooLarge)
                  })
}

/// Divides two integers, rounding the quotient toward negative infinity.
///
/// Returns `None` when `divisor` is zero or the quotient overflows
/// (`i64::MIN / -1`).
///
/// ## Example
/// ```
/// use conflang::util::num::floor_div;
///
/// assert_eq!(floor_div(7, 2), Some(3));
/// assert_eq!(floor_div(-7, 2), Some(-4));
/// assert_eq!(floor_div(7, -2), Some(-4));
/// assert_eq!(floor_div(-8, 2), Some(-4));
/// assert_eq!(floor_div(1, 0), None);
/// assert_eq!(floor_div(i64::MIN, -1), None);
/// ```
#[must_use]
pub const fn floor_div(dividend: i64, divisor: i64) -> Option<i64> {
    let Some(quotient) = dividend.checked_div(divisor) else {
        return None;
    };

    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}
