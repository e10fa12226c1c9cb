//! Plain-text and JSON renderings of subcommand results.

use algokit::geom2::{Area, Vec2i};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// Result of `cli find`.
#[derive(Debug, Serialize)]
pub struct FindReport {
    pub pattern: String,
    pub text_len: usize,
    pub offsets: Vec<usize>,
}

impl FindReport {
    /// One offset per line, no summary.
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        for o in &self.offsets {
            writeln!(out, "{o}")?;
        }
        Ok(())
    }
}

/// Result of `cli hull`.
#[derive(Debug, Serialize)]
pub struct HullReport {
    pub vertices: Vec<[i64; 2]>,
    pub doubled_area: u64,
    pub area: String,
}

impl HullReport {
    pub fn new(hull: &[Vec2i], area: Area) -> Self {
        Self {
            vertices: hull.iter().map(|p| [p.x, p.y]).collect(),
            doubled_area: area.doubled(),
            area: area.to_string(),
        }
    }

    /// Vertex count, one `x y` line per vertex, then the area.
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.vertices.len())?;
        for [x, y] in &self.vertices {
            writeln!(out, "{x} {y}")?;
        }
        writeln!(out, "{}", self.area)?;
        Ok(())
    }
}

pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// A point cloud in `cli hull` input format.
pub fn write_cloud<W: Write>(out: &mut W, points: &[Vec2i]) -> Result<()> {
    writeln!(out, "{}", points.len())?;
    for p in points {
        writeln!(out, "{} {}", p.x, p.y)?;
    }
    Ok(())
}
