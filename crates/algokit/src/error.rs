//! Input validation errors shared by the string and geometry kits.

use thiserror::Error;

/// Inputs the algorithms refuse to work on.
///
/// Both kits assume well-formed input; anything outside the documented
/// preconditions is reported here instead of producing garbage offsets or a
/// broken polygon.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// Searching for the empty pattern has no useful answer.
    #[error("pattern must not be empty")]
    EmptyPattern,

    /// A hull needs at least three input points.
    #[error("convex hull needs at least 3 points, got {got}")]
    TooFewPoints { got: usize },

    /// A coordinate lies beyond `geom2::MAX_COORD`; products would overflow `i64`.
    #[error("point {index} ({x}, {y}) is outside [-{limit}, {limit}]")]
    CoordOutOfRange {
        index: usize,
        x: i64,
        y: i64,
        limit: i64,
    },

    /// All input points are coincident or collinear.
    #[error("points do not span a polygon (hull has {vertices} vertices)")]
    Degenerate { vertices: usize },
}
