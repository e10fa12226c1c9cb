//! Prefix-function string matching.
//!
//! Purpose
//! - `prefix_function`: the classic linear-time failure table.
//! - `find_occurrences`: all (overlapping) start offsets of a pattern, derived
//!   from the table of `pattern + separator + text`.
//! - `Matcher`: the same search as a lazy pass over any symbol iterator, with
//!   the failure table of the pattern precomputed once.
//!
//! Code cross-refs: `InvalidInput::EmptyPattern`

mod prefix;
mod search;

pub use prefix::prefix_function;
pub use search::{find_occurrences, find_occurrences_str, Matcher};

#[cfg(test)]
mod tests;
