use std::cmp::Ordering;

use crate::{numeral::lexer::Symbol, util::num::leading_digit};

/// Leading-digit class of a symbol value.
///
/// Behaviour in the grammar is decided by this class, not by the raw
/// magnitude: unit symbols may repeat and may be subtracted, half-step symbols
/// may do neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lead {
    /// Leading digit `1`: `I`, `X`, `C`, `M`.
    Unit     = 1,
    /// Leading digit `5`: `V`, `L`, `D`.
    HalfStep = 5,
}

impl Lead {
    /// Classifies a value by its leading decimal digit. Values whose leading
    /// digit is neither `1` nor `5` have no class.
    #[must_use]
    pub const fn of(value: u32) -> Option<Self> {
        match leading_digit(value) {
            Some(1) => Some(Self::Unit),
            Some(5) => Some(Self::HalfStep),
            _ => None,
        }
    }
}

/// The tuple classified at every step of the scan.
///
/// `a` is the previously consumed symbol (absent before the first one) and
/// `b` is the next symbol (absent after the last one). `cmp` is the sign of
/// `a - b`, with an absent operand counting as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Number of equal symbols folded into the pending group so far.
    pub repetition: u8,
    /// Class of `a`.
    pub lead_a:     Option<Lead>,
    /// Class of `b`.
    pub lead_b:     Option<Lead>,
    /// Sign of `a - b`.
    pub cmp:        Ordering,
}

impl Step {
    /// Builds the step for the symbol pair `(a, b)`.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use numerus::numeral::{
    ///     classifier::{Lead, Step},
    ///     lexer::Symbol,
    /// };
    ///
    /// let step = Step::new(1, Some(Symbol::I), Some(Symbol::X));
    /// assert_eq!(step.lead_a, Some(Lead::Unit));
    /// assert_eq!(step.cmp, Ordering::Less);
    /// ```
    #[must_use]
    pub fn new(repetition: u8, a: Option<Symbol>, b: Option<Symbol>) -> Self {
        let value_a = a.map_or(0, Symbol::value);
        let value_b = b.map_or(0, Symbol::value);

        Self { repetition,
               lead_a: a.map(Symbol::lead),
               lead_b: b.map(Symbol::lead),
               cmp: value_a.cmp(&value_b) }
    }

    /// `a` present, `b` absent: the scan is over.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.lead_a.is_some() && self.lead_b.is_none()
    }

    /// `a` absent, `b` present: nothing consumed yet.
    #[must_use]
    pub const fn is_first_iteration(&self) -> bool {
        self.lead_a.is_none() && self.lead_b.is_some()
    }

    /// Both present and `a > b`.
    #[must_use]
    pub fn is_larger_precedes_smaller(&self) -> bool {
        self.lead_a.is_some() && self.lead_b.is_some() && self.cmp == Ordering::Greater
    }

    /// Equal unit symbols with fewer than three folded so far.
    #[must_use]
    pub fn is_add_repeat(&self) -> bool {
        self.both(Lead::Unit) && self.cmp == Ordering::Equal && self.repetition < 3
    }

    /// Equal unit symbols with three already folded.
    #[must_use]
    pub fn is_too_many_repeats(&self) -> bool {
        self.both(Lead::Unit) && self.cmp == Ordering::Equal && self.repetition >= 3
    }

    /// Equal half-step symbols.
    #[must_use]
    pub fn is_repeated_half_step(&self) -> bool {
        self.both(Lead::HalfStep) && self.cmp == Ordering::Equal
    }

    /// A unit symbol before a larger one.
    #[must_use]
    pub fn is_subtract(&self) -> bool {
        self.lead_a == Some(Lead::Unit) && self.lead_b.is_some() && self.cmp == Ordering::Less
    }

    /// A half-step symbol before a larger one.
    #[must_use]
    pub fn is_illegal_subtract(&self) -> bool {
        self.lead_a == Some(Lead::HalfStep) && self.lead_b.is_some() && self.cmp == Ordering::Less
    }

    /// Returns every decision whose predicate holds for this step, in table
    /// order. A well-formed table yields exactly one.
    #[must_use]
    pub fn matching(&self) -> Vec<Decision> {
        PREDICATES.iter()
                  .filter(|(_, holds)| holds(self))
                  .map(|(decision, _)| *decision)
                  .collect()
    }

    fn both(self, lead: Lead) -> bool {
        self.lead_a == Some(lead) && self.lead_b == Some(lead)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lead = |l: Option<Lead>| l.map_or_else(|| "none".to_string(), |l| (l as u8).to_string());
        write!(f,
               "rep={}, a={}, b={}, cmp={:?}",
               self.repetition,
               lead(self.lead_a),
               lead(self.lead_b),
               self.cmp)
    }
}

/// The outcome of classifying one [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Last symbol consumed: fold the pending group into the total.
    End,
    /// No symbol consumed yet: open the first pending group.
    FirstIteration,
    /// Close the pending group and open a new one for the smaller symbol.
    LargerPrecedesSmaller,
    /// Fold another equal unit symbol into the pending group.
    AddRepeat,
    /// A fourth equal unit symbol.
    TooManyRepeats,
    /// Two equal half-step symbols.
    RepeatedHalfStep,
    /// A unit symbol before a larger one: subtract the pending group.
    Subtract,
    /// A half-step symbol before a larger one.
    IllegalSubtract,
    /// No predicate, or more than one, held. Never produced by a correct
    /// table.
    Unclassified,
}

/// A row of the decision table.
pub type Predicate = fn(&Step) -> bool;

/// The decision table, one predicate per outcome, in the order the rows are
/// usually written down. [`decide`] does not depend on this order.
pub const PREDICATES: [(Decision, Predicate); 8] =
    [(Decision::End, Step::is_end),
     (Decision::FirstIteration, Step::is_first_iteration),
     (Decision::LargerPrecedesSmaller, Step::is_larger_precedes_smaller),
     (Decision::AddRepeat, Step::is_add_repeat),
     (Decision::TooManyRepeats, Step::is_too_many_repeats),
     (Decision::RepeatedHalfStep, Step::is_repeated_half_step),
     (Decision::Subtract, Step::is_subtract),
     (Decision::IllegalSubtract, Step::is_illegal_subtract)];

/// Classifies a step.
///
/// The predicates are mutually exclusive, so the answer does not depend on
/// the order they are tried in. If a step ever matches zero or several of
/// them the result is [`Decision::Unclassified`] rather than whichever
/// happened to be tried first.
///
/// # Example
/// ```
/// use numerus::numeral::{
///     classifier::{Decision, Step, decide},
///     lexer::Symbol,
/// };
///
/// assert_eq!(decide(&Step::new(1, Some(Symbol::I), Some(Symbol::V))), Decision::Subtract);
/// assert_eq!(decide(&Step::new(3, Some(Symbol::X), Some(Symbol::X))),
///            Decision::TooManyRepeats);
/// assert_eq!(decide(&Step::new(1, Some(Symbol::V), Some(Symbol::X))),
///            Decision::IllegalSubtract);
/// ```
#[must_use]
pub fn decide(step: &Step) -> Decision {
    match step.matching().as_slice() {
        [decision] => *decision,
        _ => Decision::Unclassified,
    }
}
