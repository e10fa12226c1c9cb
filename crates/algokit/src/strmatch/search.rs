use std::iter;

use super::prefix::prefix_function;
use crate::error::InvalidInput;

/// All start offsets of `pattern` in `text`, ascending, overlaps included.
///
/// The working string is `pattern + separator + text` over `Option<&T>`, with
/// `None` as the separator: it never equals a real symbol, so no match can
/// straddle the boundary and every table entry stays `<= pattern.len()`.
/// A full-length entry at index `i` ends a match starting at `i - 2 * m` in
/// `text`.
pub fn find_occurrences<T: PartialEq>(
    pattern: &[T],
    text: &[T],
) -> Result<Vec<usize>, InvalidInput> {
    if pattern.is_empty() {
        return Err(InvalidInput::EmptyPattern);
    }
    let m = pattern.len();
    let work: Vec<Option<&T>> = pattern
        .iter()
        .map(Some)
        .chain(iter::once(None))
        .chain(text.iter().map(Some))
        .collect();
    let table = prefix_function(&work);
    Ok(table
        .iter()
        .enumerate()
        .filter(|&(_, &k)| k == m)
        .map(|(i, _)| i - 2 * m)
        .collect())
}

/// `find_occurrences` over the chars of two strings; offsets count chars.
pub fn find_occurrences_str(pattern: &str, text: &str) -> Result<Vec<usize>, InvalidInput> {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();
    find_occurrences(&p, &t)
}

/// Streaming matcher: failure table of the pattern, reusable across texts.
#[derive(Clone, Debug)]
pub struct Matcher<T> {
    pattern: Vec<T>,
    fail: Vec<usize>,
}

impl<T: PartialEq> Matcher<T> {
    pub fn new(pattern: Vec<T>) -> Result<Self, InvalidInput> {
        if pattern.is_empty() {
            return Err(InvalidInput::EmptyPattern);
        }
        let fail = prefix_function(&pattern);
        Ok(Self { pattern, fail })
    }

    #[inline]
    pub fn pattern(&self) -> &[T] {
        &self.pattern
    }

    /// Lazily yield start offsets of the pattern in `text`, ascending.
    pub fn find_iter<'a, I>(&'a self, text: I) -> impl Iterator<Item = usize> + 'a
    where
        I: IntoIterator<Item = T> + 'a,
        I::IntoIter: 'a,
        T: 'a,
    {
        let m = self.pattern.len();
        let mut j = 0usize;
        text.into_iter().enumerate().filter_map(move |(i, c)| {
            // j == m: last symbol completed a match, resume from its border.
            while j == m || (j > 0 && self.pattern[j] != c) {
                j = self.fail[j - 1];
            }
            if self.pattern[j] == c {
                j += 1;
            }
            (j == m).then(|| i + 1 - m)
        })
    }

    pub fn count<I>(&self, text: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        self.find_iter(text).count()
    }
}
