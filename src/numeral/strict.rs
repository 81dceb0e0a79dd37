use crate::{
    error::{ConvertError, ConvertResult},
    numeral::{classifier::Lead, lexer::Symbol, reducer::Group},
};

/// The standard shape of a group, together with the decimal place it
/// occupies (`1` for units, `10` for tens, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// One to three equal unit symbols: `I`, `XX`, `CCC`.
    Run(u32),
    /// A single `V`, `L` or `D`.
    HalfStep(u32),
    /// A unit symbol subtracted from five or ten times itself: `IV`, `XC`.
    Pair(u32),
}

impl Shape {
    const fn place(self) -> u32 {
        match self {
            Self::Run(place) | Self::HalfStep(place) | Self::Pair(place) => place,
        }
    }

    /// Whether `self` may directly follow `previous`.
    ///
    /// Decimal places must strictly descend, except that a half-step may be
    /// topped up by units of its own place (`VI`, `LXX`).
    const fn may_follow(self, previous: Self) -> bool {
        match (previous, self) {
            (Self::HalfStep(above), Self::Run(below)) => below <= above,
            _ => self.place() < previous.place(),
        }
    }
}

/// Rejects numerals the minimal grammar accepts but that are not written the
/// historical way, such as `IC`, `IIV` or `IVIVIV`.
///
/// Runs over the groups of an already accepted numeral.
///
/// # Errors
/// `NonstandardForm` naming the first offending group.
///
/// # Example
/// ```
/// use numerus::numeral::{lexer::lex, reducer::reduce, strict::check};
///
/// let accept = |s: &str| check(&reduce(&lex(s).unwrap(), s).unwrap().groups, s);
/// assert!(accept("MCMXCIV").is_ok());
/// assert!(accept("IC").is_err());
/// assert!(accept("IVIV").is_err());
/// ```
pub fn check(groups: &[Group], input: &str) -> ConvertResult<()> {
    let nonstandard = |reason: String| {
        tracing::debug!(%input, %reason, "nonstandard numeral");
        ConvertError::NonstandardForm { reason,
                                        input: input.to_string() }
    };

    let mut previous: Option<(Shape, &Group)> = None;
    for group in groups {
        let current = shape(group).map_err(nonstandard)?;

        if let Some((before, before_group)) = previous
           && !current.may_follow(before)
        {
            return Err(nonstandard(format!("'{}' cannot follow '{}'",
                                           spell(group.symbols()),
                                           spell(before_group.symbols()))));
        }

        previous = Some((current, group));
    }

    Ok(())
}

fn shape(group: &Group) -> Result<Shape, String> {
    match group.symbols() {
        [half] if half.lead() == Lead::HalfStep => Ok(Shape::HalfStep(half.value() / 5)),
        [unit, rest @ ..]
            if unit.lead() == Lead::Unit && rest.len() <= 2 && rest.iter().all(|s| s == unit) =>
        {
            Ok(Shape::Run(unit.value()))
        },
        [unit, minuend] if unit.lead() == Lead::Unit => {
            let ratio = minuend.value() / unit.value();
            if ratio == 5 || ratio == 10 {
                Ok(Shape::Pair(unit.value()))
            } else {
                Err(format!("{unit} may only be subtracted from the next two larger symbols, \
                             not from {minuend}"))
            }
        },
        symbols => Err(format!("'{}' mixes repetition and subtraction", spell(symbols))),
    }
}

fn spell(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.as_char()).collect()
}
