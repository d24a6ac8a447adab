use std::fmt::{Display, Error, Formatter};

use regex::Regex;

use crate::{Token, Tokenizer};

//------------------------------------------------------------------------------
// Regular expression tokenizer
/// Every non-overlapping match of a regular expression is a token
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    pattern: Regex,
}

impl RegexTokenizer {
    /// Compiles `pattern`
    pub fn new(pattern: &str) -> Result<Self, crate::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Word tokens, `\w+`
    pub fn words() -> Self {
        Self::from(Regex::new(r"\w+").expect("word pattern is valid"))
    }
}

impl From<Regex> for RegexTokenizer {
    fn from(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        self.pattern
            .find_iter(text)
            .filter(|mat| !mat.is_empty())
            .map(|mat| Token::new(mat.as_str(), mat.start()))
            .collect()
    }
}

impl Display for RegexTokenizer {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Regex: {})", self.pattern.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        let tokens = RegexTokenizer::words().tokenize("!HELLO, world!");
        assert_eq!(tokens, vec![Token::new("HELLO", 1), Token::new("world", 8)]);
    }

    #[test]
    fn test_empty_matches_are_skipped() {
        let tokens = RegexTokenizer::new("a*").unwrap().tokenize("baab");
        assert_eq!(tokens, vec![Token::new("aa", 1)]);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(RegexTokenizer::new("("), Err(crate::Error::InvalidPattern(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(RegexTokenizer::words().to_string(), r"(Regex: \w+)");
    }
}
