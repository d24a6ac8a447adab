//! Quickblast is an exact multi-string local alignment library.
//!
//! Given two or more strings it finds every maximal run of identical content
//! (bytes, or caller-defined tokens) that holds across all of them, in the
//! spirit of a simplified BLAST: seed windows are indexed, extended along
//! their diagonal, chained across the inputs, and ranked. The results can be
//! rendered back onto the original text with nested highlight markers.
//!
//! # Examples
//!
//! ```
//! use quickblast::prelude::*;
//!
//! let results = align(&["ABC", "BC"], 1, &AlignOptions::default());
//! assert_eq!(results, vec![Tuple::new(2, vec![1, 0])]);
//!
//! let html = render_highlights("hello", 0, &[Tuple::new(1, vec![1])], &HighlightOptions::default());
//! assert_eq!(html, "h<em>e</em>llo");
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

use std::borrow::Cow;
use std::fmt::Display;

use serde::ser::{Serialize, SerializeSeq, Serializer};

pub use crate::aligner::Aligner;
pub use crate::error::Error;
pub use crate::highlight::{Trim, render_highlights, truncate};
pub use crate::options::{AlignOptions, AlignOptionsBuilder, HighlightOptions, HighlightOptionsBuilder};

mod aligner;
mod engine;
mod error;
pub mod highlight;
pub mod options;
pub mod prelude;
pub mod tokenizer;
pub mod util;

//------------------------------------------------------------------------------
// Results

/// Length of a match, per column when the matched byte extents differ.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Length {
    /// Same length in every column
    Scalar(usize),
    /// One length per column, in column order
    PerColumn(Vec<usize>),
}

impl Length {
    /// The longest of the column lengths
    #[must_use]
    pub fn max(&self) -> usize {
        match self {
            Length::Scalar(len) => *len,
            Length::PerColumn(lens) => lens.iter().copied().max().unwrap_or(0),
        }
    }

    /// The length that applies to `column`
    #[must_use]
    pub fn for_column(&self, column: usize) -> usize {
        match self {
            Length::Scalar(len) => *len,
            Length::PerColumn(lens) => lens.get(column).copied().unwrap_or(0),
        }
    }
}

impl From<usize> for Length {
    fn from(len: usize) -> Self {
        Length::Scalar(len)
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Length::Scalar(len) => serializer.serialize_u64(*len as u64),
            Length::PerColumn(lens) => lens.serialize(serializer),
        }
    }
}

/// A match that holds across every input string at once.
///
/// `positions[c]` is where the match starts in input `c`. Positions and
/// lengths are byte offsets, also in token mode.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Tuple {
    /// Extent of the match
    pub length: Length,
    /// Start of the match in each input, in input order
    pub positions: Vec<usize>,
}

impl Tuple {
    /// Creates a tuple whose length is the same in every column
    pub fn new(length: usize, positions: Vec<usize>) -> Self {
        Self {
            length: Length::Scalar(length),
            positions,
        }
    }

    /// Number of columns (input strings) covered by this tuple
    #[must_use]
    pub fn columns(&self) -> usize {
        self.positions.len()
    }

    /// Byte range covered in `column`, if the tuple has that column
    #[must_use]
    pub fn span(&self, column: usize) -> Option<(usize, usize)> {
        let start = *self.positions.get(column)?;
        Some((start, start + self.length.for_column(column)))
    }

    /// Flattens the tuple into `[length, pos_1, ..., pos_k]`, using the
    /// longest column length for per-column lengths
    #[must_use]
    pub fn to_row(&self) -> Vec<usize> {
        std::iter::once(self.length.max())
            .chain(self.positions.iter().copied())
            .collect()
    }
}

impl Serialize for Tuple {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.positions.len() + 1))?;
        seq.serialize_element(&self.length)?;
        for pos in &self.positions {
            seq.serialize_element(pos)?;
        }
        seq.end()
    }
}

//==============================================================================
// Tokenizers turn text into the units that get aligned

/// A token produced by a [`Tokenizer`]
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Token<'a> {
    /// The token text used for comparison (lowercased before hashing)
    pub text: Cow<'a, str>,
    /// Byte offset of the token in the tokenized text
    pub offset: usize,
    /// Byte length of the token in the tokenized text
    pub len: usize,
}

impl<'a> Token<'a> {
    /// Creates a token whose source extent is the length of its text
    pub fn new(text: impl Into<Cow<'a, str>>, offset: usize) -> Self {
        let text = text.into();
        let len = text.len();
        Self { text, offset, len }
    }

    /// Creates a token whose source extent differs from its text
    pub fn with_len(text: impl Into<Cow<'a, str>>, offset: usize, len: usize) -> Self {
        Self {
            text: text.into(),
            offset,
            len,
        }
    }

    /// Detaches the token from the text it was borrowed from
    pub fn into_owned(self) -> Token<'static> {
        Token {
            text: Cow::Owned(self.text.into_owned()),
            offset: self.offset,
            len: self.len,
        }
    }
}

/// Splits text into tokens, each with its byte offset.
pub trait Tokenizer: Send + Sync + Display {
    /// Tokenizes `text`; offsets are relative to `text`
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        (**self).tokenize(text)
    }
}

//==============================================================================

/// Aligns `strings`, returning every exact match of at least `min_len` units
/// that holds across all of them.
///
/// Returns an empty list if `min_len` is 0, if fewer than two strings are
/// given, if any string is shorter than `min_len` units, or if nothing aligns.
pub fn align<S: AsRef<str>>(strings: &[S], min_len: usize, options: &AlignOptions) -> Vec<Tuple> {
    Aligner::new(min_len, options).align(strings)
}
