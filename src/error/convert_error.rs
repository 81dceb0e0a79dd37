use thiserror::Error;

/// Result type used by every stage of the conversion pipeline.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while converting a Roman numeral.
pub enum ConvertError {
    /// No input was supplied at all.
    #[error("null is not allowed as an input, only I, V, X, L, C, D, M are allowed")]
    NullInput,
    /// The input was the empty string.
    #[error("an empty string is not allowed")]
    EmptyInput,
    /// A character outside of `I`, `V`, `X`, `L`, `C`, `D`, `M` was found.
    #[error("only I, V, X, L, C, D, M are allowed, found '{symbol}' at position {position} in '{input}'")]
    UnknownSymbol {
        /// The offending character.
        symbol:   char,
        /// Character (not byte) offset of `symbol` in `input`.
        position: usize,
        /// The numeral being converted.
        input:    String,
    },
    /// `I`, `X`, `C` or `M` appeared more than three times in a row.
    #[error("Roman numerals cannot repeat more than three times: '{input}'")]
    TooManyRepeats {
        /// The numeral being converted.
        input: String,
    },
    /// `V`, `L` or `D` appeared twice in a row.
    #[error("Roman numerals V, L, and D can not be repeated: '{input}'")]
    RepeatedHalfStep {
        /// The numeral being converted.
        input: String,
    },
    /// `V`, `L` or `D` preceded a larger symbol.
    #[error("Invalid Roman numeral subtraction: '{input}'")]
    IllegalSubtract {
        /// The numeral being converted.
        input: String,
    },
    /// The numeral is well formed but evaluates above 3999.
    #[error("Numeric value is above maximum allowed: 3999, '{input}' evaluates to {value}")]
    MaximumExceeded {
        /// The value the numeral evaluated to.
        value: u32,
        /// The numeral being converted.
        input: String,
    },
    /// Accepted by the grammar, but not a historically attested form. Only
    /// produced in strict mode.
    #[error("'{input}' is not a standard Roman numeral: {reason}")]
    NonstandardForm {
        /// Which rule of the standard form was broken.
        reason: String,
        /// The numeral being converted.
        input:  String,
    },
    /// The classifier reached a state outside its decision table. This is
    /// always a bug in this crate, never a problem with the input.
    #[error("internal fault while converting '{input}': {details}, please report this bug")]
    InternalFault {
        /// Description of the state that could not be classified.
        details: String,
        /// The numeral being converted.
        input:   String,
    },
}

/// Fieldless mirror of [`ConvertError`], handy for matching in tests and for
/// structured log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NullInput,
    EmptyInput,
    UnknownSymbol,
    TooManyRepeats,
    RepeatedHalfStep,
    IllegalSubtract,
    MaximumExceeded,
    NonstandardForm,
    InternalFault,
}

impl ConvertError {
    /// Returns the kind of this error without its payload.
    ///
    /// # Example
    /// ```
    /// use numerus::{convert, error::ErrorKind};
    ///
    /// let err = convert("VV").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::RepeatedHalfStep);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NullInput => ErrorKind::NullInput,
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::UnknownSymbol { .. } => ErrorKind::UnknownSymbol,
            Self::TooManyRepeats { .. } => ErrorKind::TooManyRepeats,
            Self::RepeatedHalfStep { .. } => ErrorKind::RepeatedHalfStep,
            Self::IllegalSubtract { .. } => ErrorKind::IllegalSubtract,
            Self::MaximumExceeded { .. } => ErrorKind::MaximumExceeded,
            Self::NonstandardForm { .. } => ErrorKind::NonstandardForm,
            Self::InternalFault { .. } => ErrorKind::InternalFault,
        }
    }

    /// `true` when the error points at a defect in the converter rather than
    /// at bad input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::InternalFault { .. })
    }
}
