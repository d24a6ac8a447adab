//! Tokenizers used to align at token granularity.
//!
//! A [`Tokenizer`](crate::Tokenizer) is chosen once, when the options are
//! built: a regular expression ([`RegexTokenizer`]), an arbitrary closure
//! ([`FnTokenizer`]), or either of them behind diacritic folding
//! ([`NormalizedTokenizer`]).

use std::fmt::{Display, Error, Formatter};

use crate::{Token, Tokenizer};

mod normalized;
mod regexp;

pub use normalized::NormalizedTokenizer;
pub use regexp::RegexTokenizer;

//------------------------------------------------------------------------------
/// Tokenizer backed by a closure returning owned tokens
pub struct FnTokenizer<F> {
    func: F,
}

impl<F> FnTokenizer<F>
where
    F: Fn(&str) -> Vec<Token<'static>> + Send + Sync,
{
    /// Wraps `func`
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Tokenizer for FnTokenizer<F>
where
    F: Fn(&str) -> Vec<Token<'static>> + Send + Sync,
{
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        (self.func)(text)
    }
}

impl<F> Display for FnTokenizer<F> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Fn)")
    }
}
