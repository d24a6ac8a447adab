use quickblast::prelude::*;

fn rows(strings: &[&str], min_len: usize) -> Vec<Vec<usize>> {
    rows_with(strings, min_len, &AlignOptions::default())
}

fn rows_with(strings: &[&str], min_len: usize, options: &AlignOptions) -> Vec<Vec<usize>> {
    align(strings, min_len, options).iter().map(Tuple::to_row).collect()
}

fn words() -> AlignOptions {
    AlignOptionsBuilder::default()
        .tokenizer(RegexTokenizer::words())
        .build()
        .unwrap()
}

#[test]
fn test_two_strings() {
    assert_eq!(rows(&["ABC", "BC"], 1), vec![vec![2, 1, 0]]);
    assert_eq!(rows(&["BC", "ABC"], 1), vec![vec![2, 0, 1]]);
    assert_eq!(rows(&["BC", "ABC"], 2), vec![vec![2, 0, 1]]);
    assert_eq!(rows(&["BC", "ABC"], 3), Vec::<Vec<usize>>::new());
}

#[test]
fn test_longest_first() {
    assert_eq!(
        rows(&["ABCDE", "-ABC---ABCD----"], 3),
        vec![vec![4, 0, 7], vec![3, 0, 1]]
    );
}

#[test]
fn test_repeated_occurrences() {
    assert_eq!(rows(&["E", "-E-E-"], 1), vec![vec![1, 0, 1], vec![1, 0, 3]]);
    assert_eq!(rows(&["-E-E-", "E"], 1), vec![vec![1, 1, 0], vec![1, 3, 0]]);
}

#[test]
fn test_three_strings() {
    assert_eq!(rows(&["A", "A", "A"], 1), vec![vec![1, 0, 0, 0]]);
    assert_eq!(rows(&["A-", "-A", "A"], 1), vec![vec![1, 0, 1, 0]]);
    assert_eq!(rows(&["AB", "AB", "A"], 1), vec![vec![1, 0, 0, 0]]);
    assert_eq!(rows(&["A", "AB", "AB"], 1), vec![vec![1, 0, 0, 0]]);
    assert_eq!(rows(&["BA", "BA", "A"], 1), vec![vec![1, 1, 1, 0]]);
    assert_eq!(rows(&["A", "BA", "BA"], 1), vec![vec![1, 0, 1, 1]]);
    assert_eq!(rows(&["A", "BA A", "BA"], 1), vec![vec![1, 0, 1, 1], vec![1, 0, 3, 1]]);
}

#[test]
fn test_chain_breaks_when_a_link_is_missing() {
    assert!(rows(&["AB", "AB", "CD"], 1).is_empty());
    assert!(rows(&["AB", "XY", "AB"], 1).is_empty());
}

#[test]
fn test_degenerate_inputs() {
    assert!(rows(&["ABC", "ABC"], 0).is_empty());
    assert!(rows(&["ABC"], 1).is_empty());
    assert!(rows(&[], 1).is_empty());
    assert!(rows(&["", "ABC"], 1).is_empty());
    assert!(rows(&["AB", "ABC"], 3).is_empty());
}

#[test]
fn test_identical_strings() {
    assert_eq!(rows(&["hello", "hello"], 1), vec![vec![5, 0, 0]]);
}

#[test]
fn test_tokens() {
    assert_eq!(rows_with(&["hello", "!HELLO!"], 1, &words()), vec![vec![5, 0, 1]]);
}

#[test]
fn test_tokens_with_different_byte_lengths() {
    let res = align(&["a bb", "A  BB"], 2, &words());
    assert_eq!(
        res,
        vec![Tuple {
            length: Length::PerColumn(vec![4, 5]),
            positions: vec![0, 0],
        }]
    );
    assert_eq!(res[0].to_row(), vec![5, 0, 0]);
}

#[test]
fn test_tokens_respect_min_len_in_tokens() {
    assert!(rows_with(&["one two", "two one"], 2, &words()).is_empty());
    assert_eq!(rows_with(&["one two", "x one two"], 2, &words()), vec![vec![7, 0, 2]]);
}

#[test]
fn test_delimiter_stops_runs() {
    let opts = AlignOptionsBuilder::default().delimiter("|").build().unwrap();
    assert_eq!(rows(&["ab|cd", "ab|cd"], 2), vec![vec![5, 0, 0]]);
    assert_eq!(rows_with(&["ab|cd", "ab|cd"], 2, &opts), vec![vec![2, 0, 0], vec![2, 3, 3]]);
}

#[test]
fn test_delimiter_moved_segments() {
    let opts = AlignOptionsBuilder::default().delimiter("\n").build().unwrap();
    assert_eq!(
        rows_with(&["first\nsecond", "second\nfirst"], 3, &opts),
        vec![vec![6, 6, 0], vec![5, 0, 7]]
    );
}

#[test]
fn test_unique_substrings() {
    let opts = AlignOptionsBuilder::default().unique_substrings(true).build().unwrap();
    assert_eq!(rows_with(&["E", "-E-E-"], 1, &opts), vec![vec![1, 0, 1]]);
    assert_eq!(rows_with(&["-E-E-", "E"], 1, &opts), vec![vec![1, 1, 0]]);
}

#[test]
fn test_aligner_is_reusable() {
    let aligner = Aligner::new(1, &AlignOptions::default());
    assert_eq!(aligner.min_len(), 1);
    let first = aligner.align(&["ABC", "BC"]);
    let second = aligner.align(&["ABC", "BC"]);
    assert_eq!(first, second);
}

#[test]
fn test_align_many() {
    let aligner = Aligner::new(1, &AlignOptions::default());
    let groups = vec![vec!["ABC", "BC"], vec!["A", "A", "A"], vec!["x", "y"]];
    assert_eq!(
        aligner.align_many(&groups),
        vec![
            vec![Tuple::new(2, vec![1, 0])],
            vec![Tuple::new(1, vec![0, 0, 0])],
            vec![],
        ]
    );
}

#[test]
fn test_json() {
    let res = align(&["ABCDE", "-ABC---ABCD----"], 3, &AlignOptions::default());
    assert_eq!(serde_json::to_string(&res).unwrap(), "[[4,0,7],[3,0,1]]");

    let res = align(&["a bb", "A  BB"], 2, &words());
    assert_eq!(serde_json::to_string(&res).unwrap(), "[[[4,5],0,0]]");
}
