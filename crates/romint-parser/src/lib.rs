//! Roman numeral parser for Romint
//!
//! Validates a numeral and converts it to an integer in a single
//! left-to-right pass. Validation always precedes conversion, so malformed
//! numerals such as `IIII` or `VX` are rejected instead of being converted.

use romint_lexer::{Lexer, SpannedSymbol};
use romint_symbols::{MAX_VALUE, RomanError, Span};
use tracing::{debug, trace};

// Run-length rules
pub mod validation;

pub struct Parser {
    input: String,
    symbols: Vec<SpannedSymbol>,
}

impl Parser {
    /// Create a parser for the given input
    ///
    /// The input is trimmed and ASCII letters are folded to uppercase before
    /// lexing; other characters reach the lexer unchanged.
    ///
    /// # Errors
    ///
    /// Returns `RomanError::EmptyInput` for blank input, or
    /// `RomanError::InvalidCharacter` for the first non-Roman character
    pub fn new(input: &str) -> Result<Self, RomanError> {
        let input = input.trim().to_ascii_uppercase();
        if input.is_empty() {
            return Err(RomanError::EmptyInput);
        }

        let symbols = Lexer::new(&input).tokenize()?;

        Ok(Self { input, symbols })
    }

    /// Validate the numeral and compute its value
    ///
    /// # Errors
    ///
    /// Returns `RomanError::InvalidRepetition` for over-long runs,
    /// `RomanError::InvalidSubtractivePair` for an ascending pair outside the
    /// subtractive table, or `RomanError::OutOfRange` if the value exceeds 3999
    pub fn parse(&self) -> Result<u16, RomanError> {
        validation::check_repetitions(&self.symbols)?;

        let mut total: u32 = 0;
        let mut idx = 0;
        while idx < self.symbols.len() {
            let current = self.symbols[idx];
            match self.symbols.get(idx + 1) {
                Some(next) if current.symbol.value() < next.symbol.value() => {
                    if !current.symbol.can_precede(next.symbol) {
                        return Err(RomanError::invalid_subtractive_pair(
                            current.symbol,
                            next.symbol,
                            Span::new(current.span.start, next.span.end),
                        ));
                    }
                    total += u32::from(next.symbol.value() - current.symbol.value());
                    idx += 2;
                }
                _ => {
                    total += u32::from(current.symbol.value());
                    idx += 1;
                }
            }
            trace!(idx, total, "scan step");

            if total > u32::from(MAX_VALUE) {
                return Err(RomanError::out_of_range(&self.input));
            }
        }

        debug!(input = %self.input, value = total, "parsed numeral");
        // Bounded by MAX_VALUE above
        u16::try_from(total).map_err(|_| RomanError::out_of_range(&self.input))
    }

    /// Get access to the normalized input
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Get access to the symbols (useful for debugging)
    #[must_use]
    pub fn symbols(&self) -> &[SpannedSymbol] {
        &self.symbols
    }
}

/// Parse a Roman numeral into its integer value
///
/// # Errors
///
/// Returns the first validation failure, see [`Parser::new`] and [`Parser::parse`]
pub fn parse(input: &str) -> Result<u16, RomanError> {
    let result = Parser::new(input).and_then(|parser| parser.parse());
    if let Err(err) = &result {
        debug!(input, error = %err, "rejected numeral");
    }
    result
}
