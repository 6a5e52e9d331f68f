//! Romint: strict conversion between Roman numerals and integers
//!
//! ```
//! let value = romint::parse("MCMXCIV").unwrap();
//! assert_eq!(value, 1994);
//! assert_eq!(romint::format(i64::from(value)).unwrap(), "MCMXCIV");
//! ```

use std::fmt;
use std::str::FromStr;

pub use romint_formatter::{format, format_str};
pub use romint_parser::{Parser, parse};
pub use romint_symbols::{MAX_VALUE, MIN_VALUE, RomanError, Span, Symbol};

/// A value known to be representable as a Roman numeral (1..=3999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeral(u16);

impl Numeral {
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl FromStr for Numeral {
    type Err = RomanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self)
    }
}

impl TryFrom<i64> for Numeral {
    type Error = RomanError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .ok()
            .filter(|v| (MIN_VALUE..=MAX_VALUE).contains(v))
            .map(Self)
            .ok_or_else(|| RomanError::out_of_range(value))
    }
}

impl From<Numeral> for u16 {
    fn from(numeral: Numeral) -> Self {
        numeral.0
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // In range by construction
        let numeral = format(i64::from(self.0)).map_err(|_| fmt::Error)?;
        f.write_str(&numeral)
    }
}
