use std::hash::Hasher;

use rustc_hash::FxHasher;
use unicode_normalization::UnicodeNormalization;

use crate::engine::encode::Unit;

const WINDOW_BASE: u64 = 257;

/// Code of a token: a 64-bit Fx hash of its lowercased text.
pub fn token_code(text: &str) -> u64 {
    let mut hasher = FxHasher::default();
    for ch in text.chars().flat_map(char::to_lowercase) {
        hasher.write_u32(ch as u32);
    }
    hasher.finish()
}

/// Hash of a whole run of units, used to bucket identical segments.
pub fn slice_hash(units: &[Unit]) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write_usize(units.len());
    for unit in units {
        hasher.write_u64(unit.code().unwrap_or(u64::MAX));
    }
    hasher.finish()
}

/// Rolling polynomial hash of every `m`-unit window of `units`.
///
/// `result[i]` hashes `units[i..i + m]`, or is `None` when that window holds a
/// boundary. Arithmetic wraps, so equal hashes must still be verified.
pub fn window_hashes(units: &[Unit], m: usize) -> Vec<Option<u64>> {
    if m == 0 || units.len() < m {
        return Vec::new();
    }

    let mut prefix = Vec::with_capacity(units.len() + 1);
    let mut boundaries = Vec::with_capacity(units.len() + 1);
    prefix.push(0u64);
    boundaries.push(0usize);
    for unit in units {
        let last = prefix.last().copied().unwrap_or_default();
        let code = unit.code().unwrap_or_default();
        prefix.push(last.wrapping_mul(WINDOW_BASE).wrapping_add(code));
        let seen = boundaries.last().copied().unwrap_or_default();
        boundaries.push(seen + usize::from(unit.is_boundary()));
    }

    let mut power = 1u64;
    for _ in 0..m {
        power = power.wrapping_mul(WINDOW_BASE);
    }

    (0..=units.len() - m)
        .map(|start| {
            let end = start + m;
            if boundaries[end] != boundaries[start] {
                None
            } else {
                Some(prefix[end].wrapping_sub(prefix[start].wrapping_mul(power)))
            }
        })
        .collect()
}

/// Whether two runs of units are equal; boundaries never equal anything.
pub fn same_units(a: &[Unit], b: &[Unit]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same(y))
}

/// Normalize a string and return a mapping from normalized byte positions to original byte positions.
///
/// Characters are NFD-decomposed and combining marks dropped, so `é` becomes `e`.
/// `byte_mapping[i]` gives the original byte position of the i-th normalized byte.
pub fn normalize_with_byte_mapping(s: &str) -> (String, Vec<usize>) {
    let mut normalized = String::with_capacity(s.len());
    let mut byte_mapping = Vec::with_capacity(s.len());

    for (orig_byte_pos, orig_char) in s.char_indices() {
        for decomposed_char in orig_char.nfd() {
            if !unicode_normalization::char::is_combining_mark(decomposed_char) {
                let char_start = normalized.len();
                normalized.push(decomposed_char);
                byte_mapping.extend(std::iter::repeat_n(orig_byte_pos, normalized.len() - char_start));
            }
        }
    }

    (normalized, byte_mapping)
}

/// Map a byte range of a normalized string back to the original string.
pub fn map_byte_range_to_original(
    normalized_start: usize,
    normalized_end: usize,
    byte_mapping: &[usize],
    original_str: &str,
) -> (usize, usize) {
    if byte_mapping.is_empty() || normalized_start >= byte_mapping.len() {
        return (original_str.len(), original_str.len());
    }

    let orig_start = byte_mapping[normalized_start];

    // the end is the end of the original character holding the last normalized byte
    let orig_end = if normalized_end > normalized_start && normalized_end <= byte_mapping.len() {
        let last_byte_orig_pos = byte_mapping[normalized_end - 1];
        original_str[last_byte_orig_pos..]
            .chars()
            .next()
            .map(|c| last_byte_orig_pos + c.len_utf8())
            .unwrap_or(original_str.len())
    } else if normalized_end > byte_mapping.len() {
        original_str.len()
    } else {
        orig_start
    };

    (orig_start, orig_end)
}
