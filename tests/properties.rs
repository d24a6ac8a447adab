//! Randomized checks of the alignment against a brute force search.

use std::collections::BTreeSet;

use rand::RngExt;

use quickblast::prelude::*;

const ROUNDS: usize = 300;

fn random_string(rng: &mut impl RngExt, alphabet: &[u8], max_len: usize) -> String {
    let len = rng.random_range(1..=max_len);
    (0..len)
        .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
        .collect()
}

fn rows(strings: &[&str], min_len: usize) -> BTreeSet<Vec<usize>> {
    align(strings, min_len, &AlignOptions::default())
        .iter()
        .map(Tuple::to_row)
        .collect()
}

/// Every maximal diagonal stretch of at least `m` equal bytes that no other
/// stretch contains on both sides.
fn brute_force(a: &[u8], b: &[u8], m: usize) -> BTreeSet<Vec<usize>> {
    let mut stretches = Vec::new();
    for i in 0..a.len() {
        for j in 0..b.len() {
            if a[i] != b[j] || (i > 0 && j > 0 && a[i - 1] == b[j - 1]) {
                continue;
            }
            let mut len = 0;
            while i + len < a.len() && j + len < b.len() && a[i + len] == b[j + len] {
                len += 1;
            }
            if len >= m {
                stretches.push([len, i, j]);
            }
        }
    }

    let contains = |outer: &[usize; 3], inner: &[usize; 3]| {
        outer != inner
            && outer[1] <= inner[1]
            && inner[1] + inner[0] <= outer[1] + outer[0]
            && outer[2] <= inner[2]
            && inner[2] + inner[0] <= outer[2] + outer[0]
    };
    stretches
        .iter()
        .filter(|inner| !stretches.iter().any(|outer| contains(outer, inner)))
        .map(|s| s.to_vec())
        .collect()
}

/// Whether the byte before the match is the same in every column.
fn extends_left(texts: &[String], tuple: &Tuple) -> bool {
    let before: Option<Vec<u8>> = texts
        .iter()
        .zip(&tuple.positions)
        .map(|(text, &pos)| pos.checked_sub(1).map(|prev| text.as_bytes()[prev]))
        .collect();
    before.is_some_and(|bytes| bytes.windows(2).all(|w| w[0] == w[1]))
}

/// Whether the byte after the match is the same in every column.
fn extends_right(texts: &[String], tuple: &Tuple) -> bool {
    let len = tuple.length.max();
    let after: Option<Vec<u8>> = texts
        .iter()
        .zip(&tuple.positions)
        .map(|(text, &pos)| text.as_bytes().get(pos + len).copied())
        .collect();
    after.is_some_and(|bytes| bytes.windows(2).all(|w| w[0] == w[1]))
}

/// Whether `inner` lies inside `outer` in every column.
fn contains(outer: &Tuple, inner: &Tuple) -> bool {
    let (outer_len, inner_len) = (outer.length.max(), inner.length.max());
    outer
        .positions
        .iter()
        .zip(&inner.positions)
        .all(|(&o, &i)| o <= i && i + inner_len <= o + outer_len)
}

#[test]
fn test_pairs_match_brute_force() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let a = random_string(&mut rng, b"ab", 12);
        let b = random_string(&mut rng, b"ab", 12);
        let m = rng.random_range(1..=3);
        assert_eq!(
            rows(&[a.as_str(), b.as_str()], m),
            brute_force(a.as_bytes(), b.as_bytes(), m),
            "{a:?} {b:?} m={m}"
        );
    }
}

#[test]
fn test_pairs_are_symmetric() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let a = random_string(&mut rng, b"abc", 16);
        let b = random_string(&mut rng, b"abc", 16);
        let m = rng.random_range(1..=3);
        let swapped: BTreeSet<Vec<usize>> = rows(&[b.as_str(), a.as_str()], m)
            .into_iter()
            .map(|row| vec![row[0], row[2], row[1]])
            .collect();
        assert_eq!(rows(&[a.as_str(), b.as_str()], m), swapped, "{a:?} {b:?} m={m}");
    }
}

#[test]
fn test_raising_min_len_only_drops_short_matches() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let a = random_string(&mut rng, b"ab", 16);
        let b = random_string(&mut rng, b"ab", 16);
        let m = rng.random_range(1..=3);
        let longer: BTreeSet<Vec<usize>> = rows(&[a.as_str(), b.as_str()], m).into_iter().filter(|row| row[0] > m).collect();
        assert_eq!(rows(&[a.as_str(), b.as_str()], m + 1), longer, "{a:?} {b:?} m={m}");
    }
}

#[test]
fn test_every_column_holds_a_maximal_run() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let count = rng.random_range(2..=4);
        let texts: Vec<String> = (0..count).map(|_| random_string(&mut rng, b"ab", 10)).collect();
        let m = rng.random_range(1..=2);
        let results = align(&texts, m, &AlignOptions::default());
        for tuple in &results {
            assert_eq!(tuple.columns(), count);
            assert!(tuple.length.max() >= m);
            let pieces: Vec<&str> = texts
                .iter()
                .enumerate()
                .map(|(column, text)| {
                    let (start, end) = tuple.span(column).unwrap();
                    &text[start..end]
                })
                .collect();
            assert!(pieces.windows(2).all(|w| w[0] == w[1]), "{texts:?} {tuple:?}");
            assert!(!extends_left(&texts, tuple), "{texts:?} {tuple:?}");
            assert!(!extends_right(&texts, tuple), "{texts:?} {tuple:?}");
        }
        for (idx, inner) in results.iter().enumerate() {
            let dominated = results
                .iter()
                .enumerate()
                .any(|(other, outer)| other != idx && contains(outer, inner));
            assert!(!dominated, "{texts:?} {inner:?}");
        }
        let mut sorted = results.clone();
        sorted.sort_by(|x, y| y.length.max().cmp(&x.length.max()).then_with(|| x.positions.cmp(&y.positions)));
        sorted.dedup();
        assert_eq!(results, sorted, "{texts:?}");
    }
}
