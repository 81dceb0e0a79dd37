use numerus::{Converter, convert, error::ErrorKind, numeral::lexer::Symbol};
use proptest::prelude::*;

const MAX_LENGTH: usize = 6;

/// Every string of length `1..=max_length` over the seven symbols.
fn all_numerals(max_length: usize) -> Vec<String> {
    let mut numerals = Vec::new();
    let mut frontier = vec![String::new()];

    for _ in 0..max_length {
        frontier = frontier.iter()
                           .flat_map(|prefix| {
                               Symbol::ALL.iter().map(move |s| format!("{prefix}{}", s.as_char()))
                           })
                           .collect();
        numerals.extend(frontier.iter().cloned());
    }

    numerals
}

#[test]
fn brute_force_never_hits_an_internal_fault() {
    let numerals = all_numerals(MAX_LENGTH);
    assert_eq!(numerals.len(), (1..=MAX_LENGTH as u32).map(|n| 7_usize.pow(n)).sum::<usize>());

    let mut accepted = 0;
    for numeral in &numerals {
        match convert(numeral.as_str()) {
            Ok(value) => {
                assert!((1..=3999).contains(&value), "{numeral} -> {value}");
                accepted += 1;
            },
            Err(e) => {
                assert!(!e.is_internal(), "{numeral}: {e}");
                assert!(matches!(e.kind(),
                                 ErrorKind::TooManyRepeats
                                 | ErrorKind::RepeatedHalfStep
                                 | ErrorKind::IllegalSubtract
                                 | ErrorKind::MaximumExceeded),
                        "{numeral}: unexpected {e}");
            },
        }
    }

    assert!(accepted > 0);
}

#[test]
fn strict_acceptance_implies_minimal_acceptance() {
    let strict = Converter::strict();

    for numeral in all_numerals(5) {
        if let Ok(value) = strict.convert(numeral.as_str()) {
            assert_eq!(convert(numeral.as_str()), Ok(value), "{numeral}");
        }
    }
}

#[test]
fn strict_form_is_unique_per_value() {
    // Within the brute-force space no value may be spelled two standard ways.
    let strict = Converter::strict();
    let mut seen = std::collections::HashMap::new();

    for numeral in all_numerals(MAX_LENGTH) {
        if let Ok(value) = strict.convert(numeral.as_str())
           && let Some(other) = seen.insert(value, numeral.clone())
        {
            panic!("{value} is written both as {other} and {numeral}");
        }
    }
}

fn symbol() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['I', 'V', 'X', 'L', 'C', 'D', 'M'])
}

proptest! {
    #[test]
    fn symbol_strings_never_fault(numeral in prop::collection::vec(symbol(), 1..32)) {
        let numeral: String = numeral.into_iter().collect();
        match convert(numeral.as_str()) {
            Ok(value) => {
                prop_assert!((1..=3999).contains(&value));
            },
            Err(e) => {
                prop_assert!(!e.is_internal(), "{}: {}", numeral, e);
            },
        }
    }

    #[test]
    fn foreign_character_is_unknown_symbol(
        prefix in prop::collection::vec(symbol(), 0..8),
        foreign in any::<char>().prop_filter("not a numeral symbol", |c| !"IVXLCDM".contains(*c)),
        suffix in prop::collection::vec(symbol(), 0..8),
    ) {
        let numeral: String = prefix.iter().chain(std::iter::once(&foreign)).chain(&suffix).collect();
        let err = convert(numeral.as_str()).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::UnknownSymbol);
    }

    #[test]
    fn strict_agrees_with_minimal(numeral in prop::collection::vec(symbol(), 1..16)) {
        let numeral: String = numeral.into_iter().collect();
        if let Ok(value) = Converter::strict().convert(numeral.as_str()) {
            prop_assert_eq!(convert(numeral.as_str()), Ok(value));
        }
    }
}
