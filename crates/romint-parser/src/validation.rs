//! Repetition rules for Roman numerals
//!
//! I, X, C and M may appear at most three times in a row; V, L and D never
//! appear twice in a row.

use romint_lexer::SpannedSymbol;
use romint_symbols::{RomanError, Span, Symbol};

/// A maximal run of one symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub symbol: Symbol,
    pub len: usize,
    pub span: Span,
}

/// Group consecutive identical symbols into runs
pub fn runs(symbols: &[SpannedSymbol]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for spanned in symbols {
        match runs.last_mut() {
            Some(run) if run.symbol == spanned.symbol => {
                run.len += 1;
                run.span.end = spanned.span.end;
            }
            _ => runs.push(Run {
                symbol: spanned.symbol,
                len: 1,
                span: spanned.span,
            }),
        }
    }
    runs
}

/// Reject the first run longer than its symbol allows
///
/// # Errors
///
/// Returns `RomanError::InvalidRepetition` carrying the whole offending run
pub fn check_repetitions(symbols: &[SpannedSymbol]) -> Result<(), RomanError> {
    match runs(symbols)
        .into_iter()
        .find(|run| run.len > run.symbol.max_run())
    {
        Some(run) => Err(RomanError::invalid_repetition(
            run.symbol.letter().to_string().repeat(run.len),
            run.span,
        )),
        None => Ok(()),
    }
}
