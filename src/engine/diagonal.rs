//! Pairwise diagonal matcher.
//!
//! Finds every maximal exact run of at least `m` units shared by two
//! sequences. Windows of `m` units of one side are indexed by a rolling
//! hash; each window of the other side is looked up to get its candidate
//! seeds, and seeds are then chained along their diagonal, consuming the
//! seeds they absorb so that a diagonal yields one run per maximal stretch.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::engine::encode::{Sequence, Unit};
use crate::engine::util::{same_units, slice_hash, window_hashes};
use crate::engine::{Extent, remove_dominated};

/// A maximal exact match between two sequences, in encoded units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagonalRun {
    pub length: usize,
    /// Start in the first and second sequence
    pub pos: [usize; 2],
}

impl DiagonalRun {
    pub fn new(length: usize, pos_a: usize, pos_b: usize) -> Self {
        Self {
            length,
            pos: [pos_a, pos_b],
        }
    }
}

impl Extent for DiagonalRun {
    fn length(&self) -> usize {
        self.length
    }

    fn starts(&self) -> &[usize] {
        &self.pos
    }
}

//------------------------------------------------------------------------------
/// Working state of one pairwise comparison. Owns copies of both unit
/// buffers since whole-segment matches are masked out in place.
struct PairScan<'a> {
    short: Vec<Unit>,
    long: Vec<Unit>,
    short_segments: &'a [std::ops::Range<usize>],
    long_segments: &'a [std::ops::Range<usize>],
    swapped: bool,
    m: usize,
}

impl<'a> PairScan<'a> {
    fn new(a: &'a Sequence, b: &'a Sequence, m: usize) -> Self {
        // index the longer side, scan the shorter one
        let swapped = a.len() > b.len();
        let (short, long) = if swapped { (b, a) } else { (a, b) };
        Self {
            short: short.units.clone(),
            long: long.units.clone(),
            short_segments: &short.segments,
            long_segments: &long.segments,
            swapped,
            m,
        }
    }

    /// Records segments that are identical on both sides, then masks them.
    fn whole_segments(&mut self) -> Vec<DiagonalRun> {
        let mut runs = Vec::new();
        if self.short_segments.is_empty() || self.long_segments.is_empty() {
            return runs;
        }

        let mut by_hash: FxHashMap<u64, Vec<usize>> = FxHashMap::default();
        for (idx, seg) in self.long_segments.iter().enumerate() {
            if seg.len() >= self.m {
                by_hash.entry(slice_hash(&self.long[seg.clone()])).or_default().push(idx);
            }
        }

        let mut masked_long = FxHashSet::default();
        let mut masked_short = Vec::new();
        for seg in self.short_segments.iter().filter(|seg| seg.len() >= self.m) {
            let units = &self.short[seg.clone()];
            let Some(candidates) = by_hash.get(&slice_hash(units)) else {
                continue;
            };
            let mut found = false;
            for &idx in candidates {
                let other = &self.long_segments[idx];
                if same_units(units, &self.long[other.clone()]) {
                    runs.push(DiagonalRun::new(seg.len(), seg.start, other.start));
                    masked_long.insert(idx);
                    found = true;
                }
            }
            if found {
                masked_short.push(seg.clone());
            }
        }

        for seg in masked_short {
            self.short[seg].fill(Unit::Boundary);
        }
        for idx in masked_long {
            self.long[self.long_segments[idx].clone()].fill(Unit::Boundary);
        }

        if !runs.is_empty() {
            debug!("{} whole segments matched", runs.len());
        }
        runs
    }

    /// Candidate seeds: for every offset of the short side, the offsets of the
    /// long side whose window is equal.
    fn project(&self) -> Vec<FxHashSet<usize>> {
        let mut index: FxHashMap<u64, Vec<usize>> = FxHashMap::default();
        for (start, hash) in window_hashes(&self.long, self.m).into_iter().enumerate() {
            if let Some(hash) = hash {
                index.entry(hash).or_default().push(start);
            }
        }

        let mut projection = vec![FxHashSet::default(); self.short.len()];
        for (i, hash) in window_hashes(&self.short, self.m).into_iter().enumerate() {
            let Some(starts) = hash.and_then(|hash| index.get(&hash)) else {
                continue;
            };
            let window = &self.short[i..i + self.m];
            projection[i].extend(
                starts
                    .iter()
                    .copied()
                    .filter(|&j| same_units(window, &self.long[j..j + self.m])),
            );
        }
        projection
    }

    /// Extends every remaining seed along its diagonal.
    fn extend(&self, mut projection: Vec<FxHashSet<usize>>) -> Vec<DiagonalRun> {
        let mut runs = Vec::new();
        for i in 0..projection.len() {
            if projection[i].is_empty() {
                continue;
            }
            let mut seeds: Vec<usize> = projection[i].drain().collect();
            seeds.sort_unstable();
            for j in seeds {
                let mut k = 1;
                while i + k < projection.len() && projection[i + k].remove(&(j + k)) {
                    k += 1;
                }
                trace!("seed ({i}, {j}) extended over {k} windows");
                runs.push(DiagonalRun::new(k - 1 + self.m, i, j));
            }
        }
        runs
    }

    fn run(mut self) -> Vec<DiagonalRun> {
        let mut runs = self.whole_segments();
        let projection = self.project();
        runs.extend(self.extend(projection));

        let mut runs = remove_dominated(runs);
        if self.swapped {
            for run in runs.iter_mut() {
                run.pos.swap(0, 1);
            }
        }
        runs
    }
}

/// All maximal exact runs of at least `m` units between `a` and `b`, none of
/// them contained by another on both sides.
pub fn diagonals(a: &Sequence, b: &Sequence, m: usize) -> Vec<DiagonalRun> {
    if m == 0 || a.len() < m || b.len() < m {
        return Vec::new();
    }
    PairScan::new(a, b, m).run()
}
