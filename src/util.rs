/// Numeric helpers.
///
/// This module provides the small amount of integer arithmetic the evaluator
/// needs outside the decision table itself: extracting the leading decimal
/// digit of a symbol value, and narrowing a running total to the public
/// result type once it is known to be in range.
pub mod num;
