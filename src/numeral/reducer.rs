use std::iter;

use crate::{
    error::{ConvertError, ConvertResult},
    numeral::{
        classifier::{Decision, Step, decide},
        lexer::Symbol,
    },
    util::num::{MAX_VALUE, total_to_u16_checked},
};

/// A closed run of the scan: the symbols that were folded together before a
/// differing symbol closed it, and the value they contribute to the total.
///
/// A plain run such as `XXX` is one group, and so is a subtractive pair such
/// as `IX`. Oddities that the minimal grammar still admits, like `IIV` or
/// `IXX`, are single groups too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    value:   u32,
    symbols: Vec<Symbol>,
}

impl Group {
    fn open(symbol: Symbol) -> Self {
        Self { value:   symbol.value(),
               symbols: vec![symbol], }
    }

    fn repeat(&mut self, symbol: Symbol) {
        self.value += symbol.value();
        self.symbols.push(symbol);
    }

    fn subtract_from(&mut self, minuend: Symbol) -> Option<()> {
        self.value = minuend.value().checked_sub(self.value)?;
        self.symbols.push(minuend);
        Some(())
    }

    /// The value this group adds to the total.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// The symbols folded into this group, in input order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

/// Outcome of a successful scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// Sum of all group values. Not yet checked against the maximum.
    pub total:  u32,
    /// Every group, in the order they were closed.
    pub groups: Vec<Group>,
}

/// Walks `symbols` as a sliding window of `(previous, next)` pairs, classifies
/// each pair and reduces it into a running total.
///
/// The window starts with `(None, first)` and ends with `(last, None)`.
/// `input` is only used for error reporting. The scan stops at the first
/// violation; no partial total is returned.
///
/// # Errors
/// - `TooManyRepeats`, `RepeatedHalfStep`, `IllegalSubtract` for grammar
///   violations.
/// - `InternalFault` if a step cannot be classified, which includes an empty
///   symbol sequence.
///
/// # Example
/// ```
/// use numerus::numeral::{lexer::lex, reducer::reduce};
///
/// let symbols = lex("XIV").unwrap();
/// let reduction = reduce(&symbols, "XIV").unwrap();
/// assert_eq!(reduction.total, 14);
/// assert_eq!(reduction.groups.len(), 2);
/// ```
pub fn reduce(symbols: &[Symbol], input: &str) -> ConvertResult<Reduction> {
    let previous = iter::once(None).chain(symbols.iter().copied().map(Some));
    let next = symbols.iter().copied().map(Some).chain(iter::once(None));

    let mut groups = Vec::new();
    let mut pending: Option<Group> = None;
    let mut repetition = 0_u8;
    let mut total = 0_u32;

    for (a, b) in previous.zip(next) {
        let step = Step::new(repetition, a, b);
        let decision = decide(&step);
        tracing::trace!(%step, ?a, ?b, ?decision, "classified step");

        match decision {
            Decision::End => {
                let group = pending.take().ok_or_else(|| fault(step, "no pending group", input))?;
                total = total.saturating_add(group.value());
                groups.push(group);
                return Ok(Reduction { total, groups });
            },
            Decision::FirstIteration => {
                let symbol = b.ok_or_else(|| fault(step, "missing next symbol", input))?;
                pending = Some(Group::open(symbol));
                repetition = 1;
            },
            Decision::LargerPrecedesSmaller => {
                let symbol = b.ok_or_else(|| fault(step, "missing next symbol", input))?;
                let group = pending.replace(Group::open(symbol))
                                   .ok_or_else(|| fault(step, "no pending group", input))?;
                total = total.saturating_add(group.value());
                groups.push(group);
                repetition = 1;
            },
            Decision::AddRepeat => {
                let symbol = b.ok_or_else(|| fault(step, "missing next symbol", input))?;
                pending.as_mut()
                       .ok_or_else(|| fault(step, "no pending group", input))?
                       .repeat(symbol);
                repetition += 1;
            },
            Decision::Subtract => {
                let symbol = b.ok_or_else(|| fault(step, "missing next symbol", input))?;
                pending.as_mut()
                       .and_then(|group| group.subtract_from(symbol))
                       .ok_or_else(|| fault(step, "subtraction underflow", input))?;
                repetition = 1;
            },
            Decision::TooManyRepeats => {
                return Err(ConvertError::TooManyRepeats { input: input.to_string() });
            },
            Decision::RepeatedHalfStep => {
                return Err(ConvertError::RepeatedHalfStep { input: input.to_string() });
            },
            Decision::IllegalSubtract => {
                return Err(ConvertError::IllegalSubtract { input: input.to_string() });
            },
            Decision::Unclassified => {
                return Err(fault(step, "no unique decision", input));
            },
        }
    }

    Err(ConvertError::InternalFault { details: "scan ended without a final step".to_string(),
                                      input:   input.to_string(), })
}

/// Checks a finished reduction against the maximum and narrows it.
///
/// # Errors
/// `MaximumExceeded` when the total is above 3999.
///
/// # Example
/// ```
/// use numerus::numeral::{lexer::lex, reducer::{finalize, reduce}};
///
/// let reduction = reduce(&lex("MMMCMXCIX").unwrap(), "MMMCMXCIX").unwrap();
/// assert_eq!(finalize(&reduction, "MMMCMXCIX").unwrap(), 3999);
///
/// let reduction = reduce(&lex("MMMCMXCIXI").unwrap(), "MMMCMXCIXI").unwrap();
/// assert!(finalize(&reduction, "MMMCMXCIXI").is_err());
/// ```
pub fn finalize(reduction: &Reduction, input: &str) -> ConvertResult<u16> {
    let total = reduction.total;
    if total > MAX_VALUE {
        return Err(ConvertError::MaximumExceeded { value: total,
                                                   input: input.to_string(), });
    }

    let out_of_range = ConvertError::InternalFault { details: format!("total {total} is not a \
                                                                       numeral value"),
                                                     input:   input.to_string(), };
    total_to_u16_checked(total, out_of_range)
}

fn fault(step: Step, reason: &str, input: &str) -> ConvertError {
    let details = format!("{reason} at step ({step})");
    tracing::error!(%input, %details, "classifier reached an undocumented state");
    ConvertError::InternalFault { details,
                                  input: input.to_string() }
}
