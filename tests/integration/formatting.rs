//! Integration tests for the formatter boundary

use romint::{Numeral, RomanError, format, format_str};

#[test]
fn test_boundaries() {
    assert_eq!(format(1).unwrap(), "I");
    assert_eq!(format(3999).unwrap(), "MMMCMXCIX");
    assert!(matches!(format(0), Err(RomanError::OutOfRange { .. })));
    assert!(matches!(format(4000), Err(RomanError::OutOfRange { .. })));
}

#[test]
fn test_not_an_integer() {
    assert_eq!(
        format_str("ABC"),
        Err(RomanError::OutOfRange {
            input: "ABC".to_string()
        })
    );
}

#[test]
fn test_canonical_minimality() {
    for number in 1..=3999 {
        let numeral = format(number).unwrap();
        for run in ["IIII", "XXXX", "CCCC", "MMMM", "VV", "LL", "DD"] {
            assert!(!numeral.contains(run), "{number} -> {numeral}");
        }
    }
}

#[test]
fn test_numeral_chaining() {
    let numeral: Numeral = "mmxxiv".parse().unwrap();
    let next = Numeral::try_from(i64::from(numeral.value()) + 1).unwrap();
    assert_eq!(next.to_string(), "MMXXV");
}
