//! Renders alignment results back onto one of the aligned strings.
//!
//! Every tuple gives a span of the text. A span that overlaps `n` spans
//! placed before it gets the `n`-th marker pair, so deeper overlaps get
//! deeper markers. Markers are kept properly nested: when a span ends while
//! spans opened after it are still open, those are closed first and
//! reopened right after. Plain text around the highlights is shortened to
//! the configured context.

use std::borrow::Cow;

use crate::{HighlightOptions, Tuple};

/// Which part of a plain text segment [`truncate`] keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trim {
    /// Keep the end (text leading up to the first highlight)
    Leading,
    /// Keep the start (text following the last highlight)
    Trailing,
    /// Keep both ends (text between two highlights)
    Center,
}

/// Shortens `text` to `context` characters per kept side, joined to the
/// ellipsis. Text of at most `2 * context` characters is returned as is.
///
/// ```
/// use quickblast::{Trim, truncate};
///
/// assert_eq!(truncate("1asd ", 2, Trim::Leading, ".."), "..d ");
/// assert_eq!(truncate(" asd1", 2, Trim::Trailing, ".."), " a..");
/// assert_eq!(truncate("abcdefg", 2, Trim::Center, ".."), "ab..fg");
/// assert_eq!(truncate("abcd", 2, Trim::Center, ".."), "abcd");
/// ```
pub fn truncate<'a>(text: &'a str, context: usize, trim: Trim, ellipsis: &str) -> Cow<'a, str> {
    let count = text.chars().count();
    if count <= context.saturating_mul(2) {
        return Cow::Borrowed(text);
    }

    let head: String = text.chars().take(context).collect();
    let tail: String = text.chars().skip(count - context).collect();
    Cow::Owned(match trim {
        Trim::Leading => format!("{ellipsis}{tail}"),
        Trim::Trailing => format!("{head}{ellipsis}"),
        Trim::Center => format!("{head}{ellipsis}{tail}"),
    })
}

//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    end: usize,
    level: usize,
}

/// Widens `start..end` to the characters it touches.
fn snap_to_chars(text: &str, mut start: usize, mut end: usize) -> (usize, usize) {
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    while !text.is_char_boundary(end) {
        end += 1;
    }
    (start, end)
}

/// Collects the spans of `column`, in result order, with their marker level.
/// Spans inside an already placed span are skipped.
fn place_spans(text: &str, column: usize, results: &[Tuple], levels: usize) -> Vec<Span> {
    let mut placed: Vec<Span> = Vec::with_capacity(results.len());
    for (start, end) in results.iter().filter_map(|tuple| tuple.span(column)) {
        let end = end.min(text.len());
        if start >= end {
            continue;
        }
        let (start, end) = snap_to_chars(text, start, end);
        if placed.iter().any(|s| s.start <= start && end <= s.end) {
            continue;
        }
        let depth = placed.iter().filter(|s| s.start < end && start < s.end).count();
        placed.push(Span {
            start,
            end,
            level: depth.min(levels.saturating_sub(1)),
        });
    }
    placed
}

enum Piece<'a> {
    Plain(&'a str),
    Marked(&'a str),
    Open(usize),
    Close(usize),
}

/// Lays out the text as balanced marker events around text chunks.
fn layout<'a>(text: &'a str, spans: &[Span]) -> Vec<Piece<'a>> {
    let mut bounds: Vec<usize> = spans.iter().flat_map(|s| [s.start, s.end]).collect();
    bounds.extend([0, text.len()]);
    bounds.sort_unstable();
    bounds.dedup();

    let mut by_start: Vec<usize> = (0..spans.len()).collect();
    by_start.sort_by_key(|&idx| (spans[idx].start, spans[idx].level, idx));
    let mut next_open = by_start.iter().peekable();

    let mut pieces = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    for (k, &pos) in bounds.iter().enumerate() {
        // close everything down to the outermost span ending here, reopen the rest
        if let Some(lowest) = stack.iter().position(|&idx| spans[idx].end == pos) {
            let above = stack.split_off(lowest);
            pieces.extend(above.iter().rev().map(|&idx| Piece::Close(spans[idx].level)));
            for idx in above.into_iter().filter(|&idx| spans[idx].end != pos) {
                pieces.push(Piece::Open(spans[idx].level));
                stack.push(idx);
            }
        }

        while let Some(&&idx) = next_open.peek() {
            if spans[idx].start != pos {
                break;
            }
            pieces.push(Piece::Open(spans[idx].level));
            stack.push(idx);
            next_open.next();
        }

        if let Some(&next) = bounds.get(k + 1) {
            let chunk = &text[pos..next];
            pieces.push(if stack.is_empty() {
                Piece::Plain(chunk)
            } else {
                Piece::Marked(chunk)
            });
        }
    }
    pieces
}

/// Renders `text` with the spans that `results` give for `column`.
///
/// Returns an empty string when no result yields a non-empty span. Results
/// without `column` are ignored.
///
/// ```
/// use quickblast::prelude::*;
///
/// let opts = HighlightOptionsBuilder::default()
///     .markers([("<u>", "</u>"), ("<b>", "</b>"), ("<s>", "</s>")])
///     .build()
///     .unwrap();
/// let results = [Tuple::new(3, vec![0]), Tuple::new(3, vec![1]), Tuple::new(3, vec![2])];
/// assert_eq!(
///     render_highlights("hello", 0, &results, &opts),
///     "<u>h<b>e<s>l</s></b></u><b><s>l</s></b><s>o</s>"
/// );
/// ```
pub fn render_highlights(text: &str, column: usize, results: &[Tuple], options: &HighlightOptions) -> String {
    let spans = place_spans(text, column, results, options.markers.len());
    if spans.is_empty() || options.markers.is_empty() {
        return String::new();
    }
    trace!("highlighting {} spans in column {}", spans.len(), column);

    let pieces = layout(text, &spans);
    let first_open = pieces.iter().position(|p| matches!(p, Piece::Open(_)));
    let last_close = pieces.iter().rposition(|p| matches!(p, Piece::Close(_)));

    let mut out = String::with_capacity(text.len() + spans.len() * 16);
    for (idx, piece) in pieces.iter().enumerate() {
        match piece {
            Piece::Open(level) => out.push_str(&options.markers[*level].0),
            Piece::Close(level) => out.push_str(&options.markers[*level].1),
            Piece::Marked(chunk) => out.push_str(chunk),
            Piece::Plain(chunk) => {
                let trim = if first_open.is_some_and(|first| idx < first) {
                    Trim::Leading
                } else if last_close.is_some_and(|last| idx > last) {
                    Trim::Trailing
                } else {
                    Trim::Center
                };
                out.push_str(&truncate(chunk, options.context_length, trim, &options.ellipsis));
            }
        }
    }
    out
}
