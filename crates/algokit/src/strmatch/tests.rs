use super::*;
use crate::error::InvalidInput;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Straight from the definition: longest proper border of `s[..=i]`.
fn naive_prefix_function(s: &[u8]) -> Vec<usize> {
    (0..s.len())
        .map(|i| {
            (0..=i)
                .rev()
                .find(|&k| s[..k] == s[i + 1 - k..=i])
                .unwrap_or(0)
        })
        .collect()
}

fn naive_occurrences(pattern: &[u8], text: &[u8]) -> Vec<usize> {
    if pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&o| &text[o..o + pattern.len()] == pattern)
        .collect()
}

#[test]
fn prefix_function_known_values() {
    assert_eq!(
        prefix_function(b"abacaba"),
        vec![0, 0, 1, 0, 1, 2, 3]
    );
    assert_eq!(prefix_function(b"aaaa"), vec![0, 1, 2, 3]);
    assert_eq!(prefix_function(b"abcd"), vec![0, 0, 0, 0]);
    assert_eq!(prefix_function(b"x"), vec![0]);
}

#[test]
fn prefix_function_empty_input() {
    let empty: [u8; 0] = [];
    assert!(prefix_function(&empty).is_empty());
}

#[test]
fn prefix_function_matches_definition_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let len = rng.gen_range(1..40);
        let s: Vec<u8> = (0..len).map(|_| b'a' + rng.gen_range(0..3)).collect();
        assert_eq!(prefix_function(&s), naive_prefix_function(&s), "s={s:?}");
    }
}

#[test]
fn occurrences_of_repeated_pair() {
    assert_eq!(find_occurrences_str("ab", "ababab").unwrap(), vec![0, 2, 4]);
}

#[test]
fn occurrences_overlap() {
    assert_eq!(find_occurrences_str("aa", "aaaa").unwrap(), vec![0, 1, 2]);
}

#[test]
fn occurrences_absent() {
    assert!(find_occurrences_str("x", "abc").unwrap().is_empty());
}

#[test]
fn occurrences_pattern_longer_than_text() {
    assert!(find_occurrences_str("abcd", "abc").unwrap().is_empty());
    assert!(find_occurrences_str("a", "").unwrap().is_empty());
}

#[test]
fn occurrences_whole_text() {
    assert_eq!(find_occurrences_str("abc", "abc").unwrap(), vec![0]);
}

#[test]
fn separator_symbol_cannot_collide() {
    // Spaces are ordinary symbols; the separator is out of band.
    assert_eq!(find_occurrences_str("a b", "a ba b").unwrap(), vec![0, 3]);
}

#[test]
fn empty_pattern_is_rejected() {
    assert_eq!(
        find_occurrences_str("", "abc"),
        Err(InvalidInput::EmptyPattern)
    );
    assert!(matches!(
        Matcher::<u8>::new(Vec::new()),
        Err(InvalidInput::EmptyPattern)
    ));
}

#[test]
fn working_table_is_bounded_by_pattern_len() {
    let pattern = b"aab";
    let work: Vec<Option<&u8>> = pattern
        .iter()
        .map(Some)
        .chain(std::iter::once(None))
        .chain(b"aabaabaaab".iter().map(Some))
        .collect();
    let table = prefix_function(&work);
    for (i, &k) in table.iter().enumerate() {
        assert!(k <= i);
        assert!(k <= pattern.len());
    }
}

#[test]
fn matcher_streams_over_chars() {
    let m = Matcher::new("ana".chars().collect()).unwrap();
    let hits: Vec<usize> = m.find_iter("bananas".chars()).collect();
    assert_eq!(hits, vec![1, 3]);
    assert_eq!(m.count("ananana".chars()), 3);
    assert_eq!(m.pattern(), &['a', 'n', 'a']);
}

#[test]
fn matcher_agrees_with_working_string_search_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let plen = rng.gen_range(1..5);
        let tlen = rng.gen_range(0..60);
        let p: Vec<u8> = (0..plen).map(|_| b'a' + rng.gen_range(0..2)).collect();
        let t: Vec<u8> = (0..tlen).map(|_| b'a' + rng.gen_range(0..2)).collect();
        let m = Matcher::new(p.clone()).unwrap();
        let streamed: Vec<usize> = m.find_iter(t.iter().copied()).collect();
        assert_eq!(streamed, find_occurrences(&p, &t).unwrap(), "p={p:?} t={t:?}");
    }
}

proptest! {
    #[test]
    fn prop_occurrences_sound_and_complete(
        pattern in prop::collection::vec(0u8..3, 1..5),
        text in prop::collection::vec(0u8..3, 0..80),
    ) {
        let got = find_occurrences(&pattern, &text).unwrap();
        for &o in &got {
            prop_assert_eq!(&text[o..o + pattern.len()], pattern.as_slice());
        }
        prop_assert_eq!(got, naive_occurrences(&pattern, &text));
    }

    #[test]
    fn prop_offsets_strictly_ascending(
        pattern in "[ab]{1,3}",
        text in "[ab]{0,64}",
    ) {
        let got = find_occurrences_str(&pattern, &text).unwrap();
        prop_assert!(got.windows(2).all(|w| w[0] < w[1]));
    }
}
