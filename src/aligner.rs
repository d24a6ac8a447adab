//! This module contains the alignment pipeline
use rayon::prelude::*;

use crate::engine::chain::{self, Chain};
use crate::engine::diagonal::diagonals;
use crate::engine::encode::{Encoder, Sequence};
use crate::engine::rank::rank;
use crate::{AlignOptions, Tuple};

//==============================================================================
/// Aligns groups of strings with a fixed configuration.
///
/// ```
/// use quickblast::prelude::*;
///
/// let aligner = Aligner::new(1, &AlignOptions::default());
/// let rows: Vec<Vec<usize>> = aligner.align(&["A", "BA A", "BA"]).iter().map(Tuple::to_row).collect();
/// assert_eq!(rows, vec![vec![1, 0, 1, 1], vec![1, 0, 3, 1]]);
/// ```
#[derive(Clone)]
pub struct Aligner {
    min_len: usize,
    encoder: Encoder,
    unique_substrings: bool,
}

impl Aligner {
    /// Creates an aligner reporting matches of at least `min_len` units.
    pub fn new(min_len: usize, options: &AlignOptions) -> Self {
        Self {
            min_len,
            encoder: Encoder::new(options.tokenizer.clone(), options.delimiter.clone()),
            unique_substrings: options.unique_substrings,
        }
    }

    /// Returns the minimum match length, in units.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Aligns `strings`; see [`crate::align`].
    pub fn align<S: AsRef<str>>(&self, strings: &[S]) -> Vec<Tuple> {
        if self.min_len == 0 || strings.len() < 2 {
            return Vec::new();
        }

        let sequences: Vec<Sequence> = strings.iter().map(|s| self.encoder.encode(s.as_ref())).collect();
        if sequences.iter().any(|seq| seq.len() < self.min_len) {
            debug!("an input is shorter than {} units", self.min_len);
            return Vec::new();
        }

        let mut chains: Option<Vec<Chain>> = None;
        for pair in sequences.windows(2) {
            let runs = diagonals(&pair[0], &pair[1], self.min_len);
            debug!("{} runs between adjacent inputs", runs.len());
            let next = match chains {
                None => runs.into_iter().map(Chain::from).collect(),
                Some(chains) => chain::merge(chains, &runs, self.min_len),
            };
            if next.is_empty() {
                return Vec::new();
            }
            chains = Some(next);
        }

        let results = rank(chains.unwrap_or_default(), &sequences, self.unique_substrings);
        debug!(
            "{} matches across {} inputs (token mode: {})",
            results.len(),
            strings.len(),
            self.encoder.is_tokenized()
        );
        results
    }

    /// Aligns independent groups of strings in parallel, one result per
    /// group in input order.
    pub fn align_many<S: AsRef<str> + Sync>(&self, groups: &[Vec<S>]) -> Vec<Vec<Tuple>> {
        trace!("aligning {} groups", groups.len());
        groups.par_iter().map(|group| self.align(group)).collect()
    }
}
