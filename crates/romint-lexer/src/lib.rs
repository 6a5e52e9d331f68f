//! Lexical analysis for Romint
//!
//! Splits a normalized (trimmed, uppercase) numeral into symbol tokens using
//! logos. Anything that is not one of the seven letters is a lexer error.

use logos::Logos;
use romint_symbols::{RomanError, Span, Symbol};

/// Numeral tokens
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    #[token("I")]
    One,

    #[token("V")]
    Five,

    #[token("X")]
    Ten,

    #[token("L")]
    Fifty,

    #[token("C")]
    Hundred,

    #[token("D")]
    FiveHundred,

    #[token("M")]
    Thousand,
}

impl Token {
    #[must_use]
    pub const fn symbol(self) -> Symbol {
        match self {
            Self::One => Symbol::I,
            Self::Five => Symbol::V,
            Self::Ten => Symbol::X,
            Self::Fifty => Symbol::L,
            Self::Hundred => Symbol::C,
            Self::FiveHundred => Symbol::D,
            Self::Thousand => Symbol::M,
        }
    }
}

/// Symbol with location information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpannedSymbol {
    pub symbol: Symbol,
    pub span: Span,
}

/// Lexer that produces symbols with spans
pub struct Lexer<'input> {
    lexer: logos::Lexer<'input, Token>,
    input: &'input str,
}

impl<'input> Lexer<'input> {
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            lexer: Token::lexer(input),
            input,
        }
    }

    /// Get the next symbol, `None` at end of input
    ///
    /// # Errors
    ///
    /// Returns `RomanError::InvalidCharacter` for the first character that is
    /// not a Roman letter
    pub fn next_symbol(&mut self) -> Option<Result<SpannedSymbol, RomanError>> {
        let token = self.lexer.next()?;
        let start = self.lexer.span().start;
        Some(match token {
            Ok(token) => Ok(SpannedSymbol {
                symbol: token.symbol(),
                span: Span::new(start, start + 1),
            }),
            Err(()) => {
                let character = self
                    .input
                    .get(start..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                let span = Span::new(start, start + character.len_utf8());
                Err(RomanError::invalid_character(character, span))
            }
        })
    }

    /// Tokenize the entire input, stopping at the first invalid character
    ///
    /// # Errors
    ///
    /// Returns `RomanError::InvalidCharacter` if any character is not a Roman letter
    pub fn tokenize(&mut self) -> Result<Vec<SpannedSymbol>, RomanError> {
        let mut symbols = Vec::new();
        while let Some(symbol) = self.next_symbol() {
            symbols.push(symbol?);
        }
        Ok(symbols)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<SpannedSymbol, RomanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_symbol()
    }
}
