//! Tokenizer wrapper that folds diacritics before tokenizing.
//!
//! The inner tokenizer sees the normalized text; token extents are mapped
//! back to the original bytes, so `café` and `cafe` produce equal tokens
//! that still highlight the right part of each input.

use std::fmt::{Display, Error, Formatter};

use crate::engine::util::{map_byte_range_to_original, normalize_with_byte_mapping};
use crate::{Token, Tokenizer};

/// Tokenizer that normalizes text before handing it to another one
pub struct NormalizedTokenizer {
    inner: Box<dyn Tokenizer>,
}

impl NormalizedTokenizer {
    /// Wraps `inner`
    pub fn new(inner: impl Tokenizer + 'static) -> Self {
        Self { inner: Box::new(inner) }
    }
}

impl Tokenizer for NormalizedTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let (normalized, byte_mapping) = normalize_with_byte_mapping(text);
        self.inner
            .tokenize(&normalized)
            .into_iter()
            .map(|token| {
                let (start, end) =
                    map_byte_range_to_original(token.offset, token.offset + token.len, &byte_mapping, text);
                Token::with_len(token.text.into_owned(), start, end - start)
            })
            .collect()
    }
}

impl Display for NormalizedTokenizer {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Normalized: {})", self.inner)
    }
}
