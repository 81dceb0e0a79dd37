/// Conversion errors.
///
/// Defines every way a conversion can fail: a missing or empty input, an
/// unrecognized character, a violation of the numeral grammar, a value above
/// the representable maximum, a nonstandard (strict mode) form, or an internal
/// fault in the classifier itself.
pub mod convert_error;

pub use convert_error::{ConvertError, ConvertResult, ErrorKind};
