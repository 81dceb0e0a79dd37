//! # numerus
//!
//! numerus converts Roman numerals to integers and refuses anything that is
//! not a well formed numeral. Beyond checking that every character is one of
//! `I`, `V`, `X`, `L`, `C`, `D`, `M`, it enforces bounded repetition, legal
//! subtractive pairs and a maximum value of 3999.
//!
//! ```
//! use numerus::{Converter, convert, error::ErrorKind};
//!
//! assert_eq!(convert("MCMXCIV"), Ok(1994));
//! assert_eq!(convert("IIII").unwrap_err().kind(), ErrorKind::TooManyRepeats);
//!
//! // "IC" is grammatical, but nobody ever wrote 99 that way.
//! assert_eq!(convert("IC"), Ok(99));
//! assert_eq!(Converter::strict().convert("IC").unwrap_err().kind(),
//!            ErrorKind::NonstandardForm);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::cargo_common_metadata)]

use crate::{
    error::{ConvertError, ConvertResult},
    numeral::{lexer::lex, reducer, strict},
};

/// Provides the error type for conversions.
///
/// This module defines every failure a conversion can report, from missing
/// input to grammar violations and internal faults. Each error carries the
/// original numeral so that callers can report it without keeping their own
/// copy.
///
/// # Responsibilities
/// - Defines `ConvertError` and its fieldless `ErrorKind` mirror.
/// - Separates defects in the converter (`InternalFault`) from bad input.
pub mod error;
/// The numeral evaluation pipeline.
///
/// Lexing comes first, then classification and reduction of the symbol
/// stream, then the optional strict pass.
///
/// # Responsibilities
/// - Maps characters to symbols.
/// - Classifies every adjacent pair of symbols exactly once.
/// - Reduces the classified steps into a total and checks it against 3999.
pub mod numeral;
/// General numeric helpers.
pub mod util;

/// Which rules a numeral must satisfy to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Grammar {
    /// Bounded repetition, legal subtractive pairs and the 3999 maximum.
    #[default]
    Minimal,
    /// Everything in `Minimal`, and the numeral must also be written in the
    /// standard historical form.
    Strict,
}

/// A reusable, stateless converter.
///
/// `Converter` only holds configuration, so a single value can be shared
/// freely between threads and calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Converter {
    grammar: Grammar,
}

impl Converter {
    /// Creates a converter for the given grammar.
    #[must_use]
    pub const fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }

    /// Creates a converter that also rejects nonstandard forms.
    #[must_use]
    pub const fn strict() -> Self {
        Self::new(Grammar::Strict)
    }

    /// The grammar this converter enforces.
    #[must_use]
    pub const fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// Converts a Roman numeral to its integer value.
    ///
    /// `None` stands for an absent input and is rejected with `NullInput`;
    /// the empty string is rejected with `EmptyInput`. Both checks happen
    /// before lexing.
    ///
    /// # Errors
    /// Returns the first violation found. Nothing is retried and no partial
    /// result is returned.
    ///
    /// # Examples
    /// ```
    /// use numerus::{Converter, Grammar, error::ErrorKind};
    ///
    /// let converter = Converter::new(Grammar::Minimal);
    /// assert_eq!(converter.convert("XLII"), Ok(42));
    /// assert_eq!(converter.convert(None).unwrap_err().kind(), ErrorKind::NullInput);
    /// assert_eq!(converter.convert("").unwrap_err().kind(), ErrorKind::EmptyInput);
    /// ```
    #[tracing::instrument(level = "debug",
                          skip_all,
                          fields(input = tracing::field::Empty, grammar = ?self.grammar))]
    pub fn convert<'a>(&self, input: impl Into<Option<&'a str>>) -> ConvertResult<u16> {
        let Some(input) = input.into() else {
            return Err(ConvertError::NullInput);
        };
        tracing::Span::current().record("input", input);

        if input.is_empty() {
            return Err(ConvertError::EmptyInput);
        }

        let result = self.evaluate(input);
        match &result {
            Ok(value) => tracing::debug!(value, "converted"),
            Err(e) => tracing::debug!(kind = ?e.kind(), "rejected"),
        }

        result
    }

    fn evaluate(self, input: &str) -> ConvertResult<u16> {
        let symbols = lex(input)?;
        let reduction = reducer::reduce(&symbols, input)?;
        let value = reducer::finalize(&reduction, input)?;

        if self.grammar == Grammar::Strict {
            strict::check(&reduction.groups, input)?;
        }

        Ok(value)
    }
}

/// Converts a Roman numeral using the minimal grammar.
///
/// Shorthand for `Converter::default().convert(input)`.
///
/// # Errors
/// See [`Converter::convert`].
///
/// # Examples
/// ```
/// use numerus::{convert, error::ErrorKind};
///
/// assert_eq!(convert("MMMCMXCIX"), Ok(3999));
/// assert_eq!(convert("MMMCMXCIXI").unwrap_err().kind(), ErrorKind::MaximumExceeded);
/// assert_eq!(convert("mcmxciv").unwrap_err().kind(), ErrorKind::UnknownSymbol);
/// ```
pub fn convert<'a>(input: impl Into<Option<&'a str>>) -> ConvertResult<u16> {
    Converter::default().convert(input)
}
