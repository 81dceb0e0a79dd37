use logos::Logos;

use crate::{
    error::{ConvertError, ConvertResult},
    numeral::classifier::Lead,
};

/// One of the seven classical Latin numeral symbols.
///
/// The symbol table is this enum: each variant maps to a fixed value through
/// [`Symbol::value`], so there is no mutable global lookup to initialize.
/// Only the uppercase ASCII letters are recognized; anything else, including
/// lowercase letters, whitespace and Unicode look-alikes such as `Ⅴ`, is a
/// lexing error.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// `I` = 1
    #[token("I")]
    I,
    /// `V` = 5
    #[token("V")]
    V,
    /// `X` = 10
    #[token("X")]
    X,
    /// `L` = 50
    #[token("L")]
    L,
    /// `C` = 100
    #[token("C")]
    C,
    /// `D` = 500
    #[token("D")]
    D,
    /// `M` = 1000
    #[token("M")]
    M,
}

impl Symbol {
    /// Every symbol, in ascending order of value.
    pub const ALL: [Self; 7] = [Self::I, Self::V, Self::X, Self::L, Self::C, Self::D, Self::M];

    /// Returns the integer value of the symbol.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::I => 1,
            Self::V => 5,
            Self::X => 10,
            Self::L => 50,
            Self::C => 100,
            Self::D => 500,
            Self::M => 1000,
        }
    }

    /// Returns whether the symbol is unit-class (`I`, `X`, `C`, `M`) or
    /// half-step (`V`, `L`, `D`). Agrees with [`Lead::of`] applied to
    /// [`Symbol::value`].
    #[must_use]
    pub const fn lead(self) -> Lead {
        match self {
            Self::I | Self::X | Self::C | Self::M => Lead::Unit,
            Self::V | Self::L | Self::D => Lead::HalfStep,
        }
    }

    /// The symbol's letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::I => 'I',
            Self::V => 'V',
            Self::X => 'X',
            Self::L => 'L',
            Self::C => 'C',
            Self::D => 'D',
            Self::M => 'M',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Lexes a numeral into its symbols, preserving order.
///
/// Input must already be known to be non-empty; the emptiness check belongs
/// to the caller.
///
/// # Errors
/// `UnknownSymbol` for the first character that is not one of the seven
/// recognized uppercase letters.
///
/// # Example
/// ```
/// use numerus::numeral::lexer::{Symbol, lex};
///
/// assert_eq!(lex("XIV").unwrap(), vec![Symbol::X, Symbol::I, Symbol::V]);
/// assert!(lex("XIV!").is_err());
/// ```
pub fn lex(source: &str) -> ConvertResult<Vec<Symbol>> {
    let mut symbols = Vec::with_capacity(source.len());
    let mut lexer = Symbol::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(symbol) = token {
            symbols.push(symbol);
        } else {
            let start = lexer.span().start;
            return Err(unknown_symbol(source, start));
        }
    }

    Ok(symbols)
}

/// Builds an `UnknownSymbol` error for the character starting at byte
/// offset `start`.
fn unknown_symbol(source: &str, start: usize) -> ConvertError {
    let (position, symbol) =
        source.char_indices()
              .enumerate()
              .find(|(_, (offset, _))| *offset >= start)
              .map_or((0, char::REPLACEMENT_CHARACTER), |(position, (_, c))| (position, c));

    ConvertError::UnknownSymbol { symbol,
                                  position,
                                  input: source.to_string() }
}
