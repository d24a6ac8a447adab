//! The alignment pipeline: encode, match pairs, chain, rank.

pub mod chain;
pub mod diagonal;
pub mod encode;
pub mod rank;
pub mod util;

/// A match with one start per column and a common length, in encoded units.
pub trait Extent {
    fn length(&self) -> usize;
    fn starts(&self) -> &[usize];

    /// Whether `other` lies inside `self` in every column.
    fn contains(&self, other: &Self) -> bool {
        let (len, other_len) = (self.length(), other.length());
        self.starts().len() == other.starts().len()
            && self
                .starts()
                .iter()
                .zip(other.starts())
                .all(|(&s, &o)| s <= o && o + other_len <= s + len)
    }
}

/// Drops every item contained, in every column, by another one.
///
/// Identical items collapse to the first of them. Survivors keep their
/// relative order.
pub fn remove_dominated<T: Extent>(items: Vec<T>) -> Vec<T> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| items[b].length().cmp(&items[a].length()).then(a.cmp(&b)));

    // a dominator is at least as long, so it is always visited first
    let mut kept: Vec<usize> = Vec::with_capacity(items.len());
    for idx in order {
        if !kept.iter().any(|&k| items[k].contains(&items[idx])) {
            kept.push(idx);
        }
    }
    kept.sort_unstable();

    let mut keep = vec![false; items.len()];
    for idx in kept {
        keep[idx] = true;
    }
    items
        .into_iter()
        .zip(keep)
        .filter_map(|(item, keep)| keep.then_some(item))
        .collect()
}
