//! Whitespace-token input for the `find` and `hull` subcommands.

use algokit::geom2::Vec2i;
use anyhow::{anyhow, Context, Result};
use std::io::Read;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

/// Read all of `path`, or all of stdin when no path is given.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => {
            std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

/// Whitespace-separated tokens with a running index for error messages.
pub struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    index: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            inner: src.split_whitespace(),
            index: 0,
        }
    }

    pub fn next_str(&mut self, what: &str) -> Result<&'a str> {
        let tok = self
            .inner
            .next()
            .ok_or_else(|| anyhow!("missing token #{} ({what})", self.index))?;
        self.index += 1;
        Ok(tok)
    }

    pub fn next_value<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let at = self.index;
        let tok = self.next_str(what)?;
        tok.parse::<T>()
            .with_context(|| format!("token #{at} ({what}): cannot parse {tok:?}"))
    }
}

/// `text` then `pattern`.
#[derive(Debug, PartialEq, Eq)]
pub struct FindInput<'a> {
    pub text: &'a str,
    pub pattern: &'a str,
}

pub fn parse_find_input(src: &str) -> Result<FindInput<'_>> {
    let mut toks = Tokens::new(src);
    let text = toks.next_str("text")?;
    let pattern = toks.next_str("pattern")?;
    Ok(FindInput { text, pattern })
}

/// `n` followed by `n` pairs `x y`.
pub fn parse_hull_input(src: &str) -> Result<Vec<Vec2i>> {
    let mut toks = Tokens::new(src);
    let n: usize = toks.next_value("point count")?;
    let mut points = Vec::with_capacity(n.min(1 << 20));
    for i in 0..n {
        let x: i64 = toks
            .next_value("x")
            .with_context(|| format!("point {i} of {n}"))?;
        let y: i64 = toks
            .next_value("y")
            .with_context(|| format!("point {i} of {n}"))?;
        points.push(Vec2i::new(x, y));
    }
    Ok(points)
}
