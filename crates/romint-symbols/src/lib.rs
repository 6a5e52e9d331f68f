//! Shared symbol tables and error types for Romint
//!
//! Every error raised while reading a numeral preserves location information
//! for reporting.

use std::fmt;

/// Smallest value representable as a Roman numeral
pub const MIN_VALUE: u16 = 1;

/// Largest value representable as a Roman numeral
pub const MAX_VALUE: u16 = 3999;

/// One of the seven canonical Roman letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

/// All symbols in ascending order of value
pub const SYMBOLS: [Symbol; 7] = [
    Symbol::I,
    Symbol::V,
    Symbol::X,
    Symbol::L,
    Symbol::C,
    Symbol::D,
    Symbol::M,
];

/// Legal subtractive pairs: a minuend and the two symbols it may precede.
///
/// Only powers of ten below 1000 act as minuends.
pub const SUBTRACTIVE_PAIRS: [(Symbol, [Symbol; 2]); 3] = [
    (Symbol::I, [Symbol::V, Symbol::X]),
    (Symbol::X, [Symbol::L, Symbol::C]),
    (Symbol::C, [Symbol::D, Symbol::M]),
];

/// Canonical value ladder used for integer to numeral conversion,
/// strictly descending by value
pub const NUMERAL_LADDER: [(u16, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

impl Symbol {
    #[must_use]
    pub const fn value(self) -> u16 {
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

    #[must_use]
    pub const fn letter(self) -> char {
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

    /// Look up an uppercase letter
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'I' => Some(Self::I),
            'V' => Some(Self::V),
            'X' => Some(Self::X),
            'L' => Some(Self::L),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'M' => Some(Self::M),
            _ => None,
        }
    }

    /// Longest run of this symbol allowed in a numeral
    #[must_use]
    pub const fn max_run(self) -> usize {
        match self {
            Self::I | Self::X | Self::C | Self::M => 3,
            Self::V | Self::L | Self::D => 1,
        }
    }

    /// Whether `self` followed by `next` forms a legal subtractive pair
    #[must_use]
    pub fn can_precede(self, next: Self) -> bool {
        SUBTRACTIVE_PAIRS
            .iter()
            .any(|(minuend, successors)| *minuend == self && successors.contains(&next))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// 1-based column of the first character
    #[must_use]
    pub const fn column(&self) -> usize {
        self.start + 1
    }
}

/// Conversion errors with location information
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RomanError {
    #[error("ERR_EMPTY: input is empty")]
    EmptyInput,

    #[error("ERR_INVALID_CHAR:{column}: invalid character '{character}'")]
    InvalidCharacter {
        character: char,
        span: Span,
        column: usize,
    },

    #[error("ERR_REPETITION:{column}: invalid repetition '{run}'")]
    InvalidRepetition {
        run: String,
        span: Span,
        column: usize,
    },

    #[error("ERR_SUBTRACTIVE_PAIR:{column}: invalid subtractive pair '{pair}'")]
    InvalidSubtractivePair {
        pair: String,
        span: Span,
        column: usize,
    },

    #[error("ERR_RANGE: expected an integer between 1 and 3999, got '{input}'")]
    OutOfRange { input: String },
}

impl RomanError {
    #[must_use]
    pub const fn invalid_character(character: char, span: Span) -> Self {
        Self::InvalidCharacter {
            character,
            span,
            column: span.column(),
        }
    }

    #[must_use]
    pub fn invalid_repetition(run: String, span: Span) -> Self {
        Self::InvalidRepetition {
            run,
            span,
            column: span.column(),
        }
    }

    #[must_use]
    pub fn invalid_subtractive_pair(first: Symbol, second: Symbol, span: Span) -> Self {
        Self::InvalidSubtractivePair {
            pair: format!("{first}{second}"),
            span,
            column: span.column(),
        }
    }

    #[must_use]
    pub fn out_of_range(input: impl fmt::Display) -> Self {
        Self::OutOfRange {
            input: input.to_string(),
        }
    }

    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::InvalidCharacter { span, .. }
            | Self::InvalidRepetition { span, .. }
            | Self::InvalidSubtractivePair { span, .. } => Some(*span),
            Self::EmptyInput | Self::OutOfRange { .. } => None,
        }
    }
}
