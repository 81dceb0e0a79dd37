/// The lexer turns a numeral string into symbols.
///
/// Each input character is looked up in the fixed seven-symbol table. The
/// first character that is not `I`, `V`, `X`, `L`, `C`, `D` or `M` stops
/// lexing with an `UnknownSymbol` error.
pub mod lexer;
/// The classifier decides what happens at each step of the scan.
///
/// Every adjacent pair of symbols is reduced to a small tuple (repetition
/// count, leading-digit class of both symbols, sign of their difference) and
/// matched against a table of mutually exclusive predicates.
///
/// # Responsibilities
/// - Defines the `Step` tuple and the `Decision` outcomes.
/// - Guarantees that a step matching zero or several predicates is reported
///   as `Unclassified` instead of silently picking one.
pub mod classifier;
/// The reducer drives the scan and accumulates the total.
///
/// It walks the symbols as a window of `(previous, next)` pairs, applies the
/// classifier's decision to the pending group, closes groups into the running
/// total, and finally checks the total against the 3999 maximum.
pub mod reducer;
/// Optional strict validation of accepted numerals.
pub mod strict;
