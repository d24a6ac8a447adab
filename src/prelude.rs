//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import all the commonly used
//! quickblast types and traits with a single `use quickblast::prelude::*;` statement.

pub use crate::options::{AlignOptions, AlignOptionsBuilder, HighlightOptions, HighlightOptionsBuilder};
pub use crate::tokenizer::{FnTokenizer, NormalizedTokenizer, RegexTokenizer};
pub use crate::{Aligner, Error, Length, Token, Tokenizer, Trim, Tuple, align, render_highlights, truncate};
pub use std::sync::Arc;
