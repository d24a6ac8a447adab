//! Configuration options for alignment and highlighting.
//!
//! Both option structs come with a builder, e.g.
//!
//! ```
//! use quickblast::options::{AlignOptionsBuilder, HighlightOptionsBuilder};
//! use quickblast::tokenizer::RegexTokenizer;
//!
//! let align = AlignOptionsBuilder::default()
//!     .tokenizer(RegexTokenizer::words())
//!     .delimiter("\n")
//!     .unique_substrings(true)
//!     .build()
//!     .unwrap();
//! assert!(align.tokenizer.is_some());
//!
//! let highlight = HighlightOptionsBuilder::default()
//!     .context_length(8)
//!     .markers([("<b>", "</b>"), ("<i>", "</i>")])
//!     .build()
//!     .unwrap();
//! assert_eq!(highlight.markers.len(), 2);
//! ```

use std::fmt;
use std::sync::Arc;

use derive_builder::Builder;

use crate::Tokenizer;

/// Options recognized by [`crate::align`]
#[derive(Builder, Clone, Default)]
#[builder(default)]
pub struct AlignOptions {
    /// Align tokens produced by this tokenizer instead of raw bytes
    #[builder(setter(custom))]
    pub tokenizer: Option<Arc<dyn Tokenizer>>,

    /// Split every input on this string first; matches never cross a split point
    #[builder(setter(into, strip_option))]
    pub delimiter: Option<String>,

    /// Report each run of the first two inputs in at most one match
    pub unique_substrings: bool,
}

impl AlignOptionsBuilder {
    /// Sets the tokenizer, switching the alignment to token mode
    pub fn tokenizer(&mut self, tokenizer: impl Tokenizer + 'static) -> &mut Self {
        self.tokenizer = Some(Some(Arc::new(tokenizer)));
        self
    }

    /// Sets an already shared tokenizer
    pub fn shared_tokenizer(&mut self, tokenizer: Arc<dyn Tokenizer>) -> &mut Self {
        self.tokenizer = Some(Some(tokenizer));
        self
    }
}

impl fmt::Debug for AlignOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignOptions")
            .field("tokenizer", &self.tokenizer.as_ref().map(|t| t.to_string()))
            .field("delimiter", &self.delimiter)
            .field("unique_substrings", &self.unique_substrings)
            .finish()
    }
}

//------------------------------------------------------------------------------

/// Options recognized by [`crate::render_highlights`]
#[derive(Builder, Clone, Debug, PartialEq, Eq)]
#[builder(default, build_fn(validate = "Self::validate"))]
pub struct HighlightOptions {
    /// Number of characters of plain text kept on each side of a highlight
    pub context_length: usize,

    /// `(open, close)` marker pairs, outermost first.
    ///
    /// A span that overlaps `n` earlier spans uses pair `n` (or the last one).
    #[builder(setter(custom))]
    pub markers: Vec<(String, String)>,

    /// Text that replaces truncated plain text
    #[builder(setter(into))]
    pub ellipsis: String,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            context_length: 16,
            markers: vec![(String::from("<em>"), String::from("</em>"))],
            ellipsis: String::from(".."),
        }
    }
}

impl HighlightOptionsBuilder {
    /// Sets the marker pairs, outermost first
    pub fn markers<I, O, C>(&mut self, markers: I) -> &mut Self
    where
        I: IntoIterator<Item = (O, C)>,
        O: Into<String>,
        C: Into<String>,
    {
        self.markers = Some(
            markers
                .into_iter()
                .map(|(open, close)| (open.into(), close.into()))
                .collect(),
        );
        self
    }

    fn validate(&self) -> Result<(), String> {
        match &self.markers {
            Some(markers) if markers.is_empty() => Err(String::from("at least one marker pair is required")),
            _ => Ok(()),
        }
    }
}
