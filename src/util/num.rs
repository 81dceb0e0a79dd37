/// Largest value a Roman numeral may evaluate to.
pub const MAX_VALUE: u32 = 3999;

/// Returns the leading decimal digit of `value`.
///
/// Every symbol value is a power of ten or five times one, so for the numeral
/// alphabet this is always `1` or `5`. Zero has no leading digit.
///
/// ## Example
/// ```
/// use numerus::util::num::leading_digit;
///
/// assert_eq!(leading_digit(1000), Some(1));
/// assert_eq!(leading_digit(50), Some(5));
/// assert_eq!(leading_digit(0), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn leading_digit(mut value: u32) -> Option<u8> {
    if value == 0 {
        return None;
    }
    while value >= 10 {
        value /= 10;
    }
    Some(value as u8)
}

/// Narrows a finished total to the public result type.
///
/// ## Errors
/// Returns `Err(error)` if `total` is zero or above [`MAX_VALUE`].
///
/// ## Example
/// ```
/// use numerus::util::num::{MAX_VALUE, total_to_u16_checked};
///
/// assert_eq!(total_to_u16_checked(1666, "too big"), Ok(1666));
/// assert_eq!(total_to_u16_checked(MAX_VALUE + 1, "too big"), Err("too big"));
/// ```
pub fn total_to_u16_checked<E>(total: u32, error: E) -> Result<u16, E> {
    if total == 0 || total > MAX_VALUE {
        return Err(error);
    }
    u16::try_from(total).map_err(|_| error)
}
