//! Final filtering, coordinate translation and ordering of chained matches.

use std::cmp::Ordering;

use rustc_hash::FxHashSet;

use crate::engine::chain::Chain;
use crate::engine::encode::Sequence;
use crate::engine::remove_dominated;
use crate::{Length, Tuple};

/// Longest first, then by ascending positions.
pub fn compare(a: &Tuple, b: &Tuple) -> Ordering {
    b.length
        .max()
        .cmp(&a.length.max())
        .then_with(|| a.positions.cmp(&b.positions))
}

/// Translates a chain from encoded units to bytes.
fn to_tuple(chain: Chain, sequences: &[Sequence]) -> Tuple {
    let mut lengths = Vec::with_capacity(chain.positions.len());
    let mut positions = Vec::with_capacity(chain.positions.len());
    for (column, &pos) in chain.positions.iter().enumerate() {
        match sequences.get(column).and_then(|seq| seq.token_map.as_ref()) {
            Some(map) => {
                let (offset, len) = map.byte_range(pos, chain.length);
                positions.push(offset);
                lengths.push(len);
            }
            None => {
                positions.push(pos);
                lengths.push(chain.length);
            }
        }
    }

    let length = match lengths.first() {
        Some(&first) if lengths.iter().all(|&len| len == first) => Length::Scalar(first),
        Some(_) => Length::PerColumn(lengths),
        None => Length::Scalar(chain.length),
    };
    Tuple { length, positions }
}

/// Keeps a tuple only if neither its first nor its second column run was
/// already reported.
fn unique_substrings(tuples: Vec<Tuple>) -> Vec<Tuple> {
    let mut seen: [FxHashSet<(usize, usize)>; 2] = Default::default();
    tuples
        .into_iter()
        .filter(|tuple| {
            let signatures: Vec<(usize, usize)> = (0..2)
                .filter_map(|column| tuple.span(column))
                .map(|(start, end)| (end - start, start))
                .collect();
            if signatures.iter().zip(&seen).any(|(sig, seen)| seen.contains(sig)) {
                return false;
            }
            for (sig, seen) in signatures.into_iter().zip(seen.iter_mut()) {
                seen.insert(sig);
            }
            true
        })
        .collect()
}

/// Turns chained matches into the final, ordered result set.
pub fn rank(chains: Vec<Chain>, sequences: &[Sequence], unique: bool) -> Vec<Tuple> {
    let mut tuples: Vec<Tuple> = remove_dominated(chains)
        .into_iter()
        .map(|chain| to_tuple(chain, sequences))
        .collect();
    tuples.sort_by(compare);
    tuples.dedup();

    if unique {
        let before = tuples.len();
        tuples = unique_substrings(tuples);
        debug!("unique filter kept {} of {} matches", tuples.len(), before);
    }
    tuples
}
