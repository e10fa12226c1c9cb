use std::cmp::Ordering;
use std::fmt;

use super::vector::{cross, sq_norm, Vec2i};
use crate::error::InvalidInput;

/// Largest accepted absolute coordinate.
pub const MAX_COORD: i64 = 1_000_000_000;

/// Graham scan convex hull.
///
/// Pre: `points.len() >= 3`, not all collinear, `|x|, |y| <= MAX_COORD`.
/// The input is not reordered; the scan sorts a local copy.
/// Post: vertices start at the lowest-(x, y) point and run clockwise, with no
/// duplicates and no collinear boundary points.
pub fn convex_hull(points: &[Vec2i]) -> Result<Vec<Vec2i>, InvalidInput> {
    if points.len() < 3 {
        return Err(InvalidInput::TooFewPoints { got: points.len() });
    }
    if let Some((index, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| p.x.unsigned_abs().max(p.y.unsigned_abs()) > MAX_COORD as u64)
    {
        return Err(InvalidInput::CoordOutOfRange {
            index,
            x: p.x,
            y: p.y,
            limit: MAX_COORD,
        });
    }
    let mut pts = points.to_vec();
    pts.sort_by_key(|p| (p.x, p.y));
    let anchor = pts[0];
    // Clockwise by angle; along one ray the closer point comes first.
    pts[1..].sort_by(|&p, &q| {
        let (dp, dq) = (p - anchor, q - anchor);
        match cross(dp, dq).cmp(&0) {
            Ordering::Equal => sq_norm(dp).cmp(&sq_norm(dq)),
            o => o,
        }
    });

    let mut poly: Vec<Vec2i> = Vec::with_capacity(pts.len() + 1);
    poly.push(pts[0]);
    poly.push(pts[1]);
    // Walk pts[2..] and close back on the anchor.
    pts.rotate_left(1);
    for &p in &pts[1..] {
        while poly.len() > 1 {
            let n = poly.len();
            if cross(poly[n - 2] - poly[n - 1], poly[n - 1] - p) < 0 {
                break;
            }
            poly.pop();
        }
        poly.push(p);
    }
    // Last push is the anchor again.
    poly.pop();

    if poly.len() < 3 {
        return Err(InvalidInput::Degenerate {
            vertices: poly.len(),
        });
    }
    Ok(poly)
}

/// Twice the area of a simple polygon (shoelace fan from `poly[0]`).
///
/// Exact for integer vertices. Fewer than 3 vertices give 0. Overflow-free for
/// convex polygons within `MAX_COORD`, such as `convex_hull` output.
pub fn doubled_area(poly: &[Vec2i]) -> i64 {
    if poly.len() < 3 {
        return 0;
    }
    let o = poly[0];
    let d: i64 = poly
        .windows(2)
        .skip(1)
        .map(|w| cross(w[0] - o, w[1] - w[0]))
        .sum();
    d.abs()
}

/// Polygon area stored as its doubled integer value.
///
/// `Display` prints `doubled / 2` with a `.5` suffix for odd values and `.0`
/// otherwise, so no float rounding is involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Area(u64);

impl Area {
    #[inline]
    pub fn from_doubled(doubled: i64) -> Self {
        Self(doubled.unsigned_abs())
    }
    #[inline]
    pub fn of_polygon(poly: &[Vec2i]) -> Self {
        Self::from_doubled(doubled_area(poly))
    }
    #[inline]
    pub fn doubled(self) -> u64 {
        self.0
    }
    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 2.0
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let half = if self.0 % 2 == 1 { ".5" } else { ".0" };
        write!(f, "{}{}", self.0 / 2, half)
    }
}
