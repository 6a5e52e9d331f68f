//! Round trips between the parser and the formatter

use proptest::prelude::*;
use romint::{MAX_VALUE, MIN_VALUE, format, parse};

#[test]
fn test_round_trip_full_range() {
    for number in MIN_VALUE..=MAX_VALUE {
        let numeral = format(i64::from(number)).unwrap();
        assert_eq!(parse(&numeral).unwrap(), number, "{numeral}");
    }
}

#[test]
fn test_lowercase_round_trip() {
    for number in [4, 49, 944, 1666, 3888] {
        let numeral = format(number).unwrap().to_lowercase();
        assert_eq!(i64::from(parse(&numeral).unwrap()), number);
    }
}

proptest! {
    #[test]
    fn canonical_numerals_reformat_identically(input in "[IVXLCDM]{1,12}") {
        if let Ok(value) = parse(&input) {
            let canonical = format(i64::from(value)).unwrap();
            prop_assert_eq!(parse(&canonical).unwrap(), value);
        }
    }
}
