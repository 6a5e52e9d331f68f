//! Integer to Roman numeral formatting for Romint
//!
//! Greedy descent over the canonical numeral ladder. The ladder is regular,
//! so taking the largest entry that fits always yields the shortest numeral.

use romint_symbols::{MAX_VALUE, MIN_VALUE, NUMERAL_LADDER, RomanError};
use tracing::debug;

/// Format an integer as a canonical Roman numeral
///
/// # Errors
///
/// Returns `RomanError::OutOfRange` if `number` is outside 1..=3999
pub fn format(number: i64) -> Result<String, RomanError> {
    let mut remaining = u16::try_from(number)
        .ok()
        .filter(|n| (MIN_VALUE..=MAX_VALUE).contains(n))
        .ok_or_else(|| RomanError::out_of_range(number))?;

    let mut numeral = String::new();
    for (value, symbols) in NUMERAL_LADDER {
        while remaining >= value {
            numeral.push_str(symbols);
            remaining -= value;
        }
    }

    debug!(number, %numeral, "formatted integer");
    Ok(numeral)
}

/// Format decimal text as a canonical Roman numeral
///
/// Surrounding whitespace is ignored. Text that is not an integer at all is a
/// range error, like an integer outside 1..=3999.
///
/// # Errors
///
/// Returns `RomanError::OutOfRange` if `text` is not an integer in 1..=3999
pub fn format_str(text: &str) -> Result<String, RomanError> {
    let trimmed = text.trim();
    let number = trimmed
        .parse::<i64>()
        .map_err(|_| RomanError::out_of_range(trimmed))?;
    format(number)
}
