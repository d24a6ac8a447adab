//! Turns input strings into sequences of matchable units.
//!
//! Byte mode uses one unit per byte. Token mode uses one unit per token, the
//! unit being a 64-bit code of the token text, plus a [`TokenMap`] to get
//! back to byte offsets once matching is done.

use std::ops::Range;
use std::sync::Arc;

use crate::Tokenizer;
use crate::engine::util::token_code;

/// One matchable unit of a sequence.
#[derive(Debug, Copy, Clone, Hash)]
pub enum Unit {
    /// A byte value or a token code
    Code(u64),
    /// A split point or masked unit; never equal to anything, itself included
    Boundary,
}

impl Unit {
    pub fn code(&self) -> Option<u64> {
        match self {
            Unit::Code(code) => Some(*code),
            Unit::Boundary => None,
        }
    }

    pub fn is_boundary(&self) -> bool {
        matches!(self, Unit::Boundary)
    }

    pub fn same(&self, other: &Unit) -> bool {
        matches!((self, other), (Unit::Code(a), Unit::Code(b)) if a == b)
    }
}

impl From<u8> for Unit {
    fn from(byte: u8) -> Self {
        Unit::Code(u64::from(byte))
    }
}

/// Source extent of one token-mode unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpan {
    pub offset: usize,
    pub len: usize,
}

/// Token-mode units back to byte coordinates, index-aligned with the sequence.
#[derive(Debug, Clone, Default)]
pub struct TokenMap(Vec<TokenSpan>);

impl TokenMap {
    /// Byte `(offset, length)` of the units `pos..pos + len`.
    pub fn byte_range(&self, pos: usize, len: usize) -> (usize, usize) {
        let Some(first) = self.0.get(pos) else {
            return (0, 0);
        };
        let end = len
            .checked_sub(1)
            .and_then(|last| self.0.get(pos + last))
            .map_or(first.offset, |last| last.offset + last.len);
        (first.offset, end.saturating_sub(first.offset))
    }
}

/// An encoded input string.
#[derive(Debug, Clone)]
pub struct Sequence {
    pub units: Vec<Unit>,
    /// Unit ranges between split points, only filled in when splitting on a delimiter
    pub segments: Vec<Range<usize>>,
    pub token_map: Option<TokenMap>,
}

impl Sequence {
    pub fn len(&self) -> usize {
        self.units.len()
    }
}

//------------------------------------------------------------------------------
/// Builds sequences according to the alignment options.
#[derive(Clone, Default)]
pub struct Encoder {
    tokenizer: Option<Arc<dyn Tokenizer>>,
    delimiter: Option<String>,
}

impl Encoder {
    pub fn new(tokenizer: Option<Arc<dyn Tokenizer>>, delimiter: Option<String>) -> Self {
        Self {
            tokenizer,
            delimiter: delimiter.filter(|d| !d.is_empty()),
        }
    }

    pub fn is_tokenized(&self) -> bool {
        self.tokenizer.is_some()
    }

    pub fn encode(&self, text: &str) -> Sequence {
        match &self.tokenizer {
            Some(tokenizer) => self.encode_tokens(text, tokenizer.as_ref()),
            None => self.encode_bytes(text),
        }
    }

    /// Byte ranges of the delimiter occurrences in `text`.
    fn split_points(&self, text: &str) -> Vec<Range<usize>> {
        match &self.delimiter {
            Some(delimiter) => text
                .match_indices(delimiter.as_str())
                .map(|(start, d)| start..start + d.len())
                .collect(),
            None => Vec::new(),
        }
    }

    fn encode_bytes(&self, text: &str) -> Sequence {
        let mut units: Vec<Unit> = text.bytes().map(Unit::from).collect();
        let mut segments = Vec::new();
        if self.delimiter.is_some() {
            let mut start = 0;
            for split in self.split_points(text) {
                units[split.clone()].fill(Unit::Boundary);
                if split.start > start {
                    segments.push(start..split.start);
                }
                start = split.end;
            }
            if start < units.len() {
                segments.push(start..units.len());
            }
        }

        Sequence {
            units,
            segments,
            token_map: None,
        }
    }

    fn encode_tokens(&self, text: &str, tokenizer: &dyn Tokenizer) -> Sequence {
        let mut units = Vec::new();
        let mut spans = Vec::new();
        let mut segments = Vec::new();

        // each segment paired with the split point that follows it
        let splits = self.split_points(text);
        let mut pieces = Vec::with_capacity(splits.len() + 1);
        let mut start = 0;
        for split in splits {
            pieces.push((start..split.start, Some(split.clone())));
            start = split.end;
        }
        pieces.push((start..text.len(), None));

        for (segment, split) in pieces {
            let first = units.len();
            for token in tokenizer.tokenize(&text[segment.clone()]) {
                units.push(Unit::Code(token_code(&token.text)));
                spans.push(TokenSpan {
                    offset: segment.start + token.offset,
                    len: token.len,
                });
            }
            if self.delimiter.is_some() && units.len() > first {
                segments.push(first..units.len());
            }
            if let Some(split) = split {
                units.push(Unit::Boundary);
                spans.push(TokenSpan {
                    offset: split.start,
                    len: split.len(),
                });
            }
        }

        trace!("encoded {} bytes into {} tokens", text.len(), units.len());
        Sequence {
            units,
            segments,
            token_map: Some(TokenMap(spans)),
        }
    }
}
