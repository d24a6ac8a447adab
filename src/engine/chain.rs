//! Chains pairwise runs `(1,2), (2,3), ...` into matches across all inputs.

use crate::engine::Extent;
use crate::engine::diagonal::DiagonalRun;

/// A run that holds across the first `positions.len()` inputs, in encoded units.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Chain {
    pub length: usize,
    pub positions: Vec<usize>,
}

impl From<DiagonalRun> for Chain {
    fn from(run: DiagonalRun) -> Self {
        Self {
            length: run.length,
            positions: run.pos.to_vec(),
        }
    }
}

impl Extent for Chain {
    fn length(&self) -> usize {
        self.length
    }

    fn starts(&self) -> &[usize] {
        &self.positions
    }
}

/// Extends `chains` by one column using the runs between their last input
/// and the next one.
///
/// A chain and a run combine where the chain's last column overlaps the
/// run's first side; the result keeps only the overlap. Chains without an
/// overlapping run are dropped, as are results shorter than `min_len`.
pub fn merge(chains: Vec<Chain>, runs: &[DiagonalRun], min_len: usize) -> Vec<Chain> {
    let mut runs = runs.to_vec();
    runs.sort_by_key(|run| run.pos[0]);

    let mut merged = Vec::new();
    for chain in &chains {
        let Some(&last) = chain.positions.last() else {
            continue;
        };
        let chain_end = last + chain.length;
        // only runs starting before the chain ends can overlap it
        let candidates = runs.partition_point(|run| run.pos[0] < chain_end);
        for run in &runs[..candidates] {
            let start = last.max(run.pos[0]);
            let end = chain_end.min(run.pos[0] + run.length);
            if end <= start || end - start < min_len {
                continue;
            }
            let shift = start - last;
            let mut positions: Vec<usize> = chain.positions.iter().map(|p| p + shift).collect();
            positions.push(run.pos[1] + (start - run.pos[0]));
            merged.push(Chain {
                length: end - start,
                positions,
            });
        }
    }

    merged.sort();
    merged.dedup();
    debug!(
        "chained {} x {} into {} matches over {} inputs",
        chains.len(),
        runs.len(),
        merged.len(),
        chains.first().map_or(0, |c| c.positions.len() + 1)
    );
    merged
}
