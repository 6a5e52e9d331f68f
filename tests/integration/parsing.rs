//! Integration tests for lexer + parser pipeline
//! Tests component interactions at the parsing boundary

use romint::{Parser, RomanError, Span, Symbol, parse};
use romint_lexer::Lexer;

#[test]
fn test_lexer_parser_symbol_stream() {
    let parser = Parser::new("xiv").unwrap();
    let lexed = Lexer::new("XIV").tokenize().unwrap();

    assert_eq!(parser.symbols(), lexed.as_slice());
    assert_eq!(parser.parse().unwrap(), 14);
}

#[test]
fn test_single_symbol_symmetry() {
    for symbol in romint_symbols::SYMBOLS {
        assert_eq!(parse(&symbol.to_string()).unwrap(), symbol.value());
    }
}

#[test]
fn test_subtractive_correctness() {
    assert_eq!(parse("IV").unwrap(), 4);
    assert_eq!(parse("IX").unwrap(), 9);
    assert_eq!(parse("XL").unwrap(), 40);
    assert_eq!(parse("CM").unwrap(), 900);
    assert_eq!(parse("XIV").unwrap(), 14);
}

#[test]
fn test_rejections() {
    assert_eq!(parse(""), Err(RomanError::EmptyInput));
    assert!(matches!(
        parse("IIII"),
        Err(RomanError::InvalidRepetition { .. })
    ));
    assert!(matches!(
        parse("VV"),
        Err(RomanError::InvalidRepetition { .. })
    ));
    assert!(matches!(
        parse("IL"),
        Err(RomanError::InvalidSubtractivePair { .. })
    ));
    assert!(matches!(
        parse("XIZ"),
        Err(RomanError::InvalidCharacter { character: 'Z', .. })
    ));
}

#[test]
fn test_error_locations() {
    let err = parse("  MCMIL ").unwrap_err();
    assert_eq!(err.span(), Some(Span::new(3, 5)));
    assert_eq!(
        err.to_string(),
        "ERR_SUBTRACTIVE_PAIR:4: invalid subtractive pair 'IL'"
    );

    let err = parse("MDD").unwrap_err();
    assert_eq!(err.span(), Some(Span::new(1, 3)));
    assert_eq!(err.to_string(), "ERR_REPETITION:2: invalid repetition 'DD'");
}

#[test]
fn test_every_illegal_ascending_pair_rejected() {
    let symbols = romint_symbols::SYMBOLS;
    for first in symbols {
        for second in symbols {
            if first.value() >= second.value() || first.can_precede(second) {
                continue;
            }
            let input = format!("{first}{second}");
            assert!(
                matches!(parse(&input), Err(RomanError::InvalidSubtractivePair { .. })),
                "{input}"
            );
        }
    }
    assert!(Symbol::I.can_precede(Symbol::X));
}
