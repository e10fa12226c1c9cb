//! Vector primitives on `nalgebra::Vector2<i64>`.
//!
//! Addition, subtraction, negation and scaling by a scalar come from
//! nalgebra's operators. Products are named functions.

use nalgebra::Vector2;

/// Integer point / displacement in the plane.
pub type Vec2i = Vector2<i64>;

/// Scalar product `a.x*b.x + a.y*b.y`.
#[inline]
pub fn dot(a: Vec2i, b: Vec2i) -> i64 {
    a.dot(&b)
}

/// 2D cross product `a.x*b.y - a.y*b.x`.
/// Positive for a→b counterclockwise, negative for clockwise, zero if parallel.
#[inline]
pub fn cross(a: Vec2i, b: Vec2i) -> i64 {
    a.x * b.y - a.y * b.x
}

/// Squared length.
#[inline]
pub fn sq_norm(a: Vec2i) -> i64 {
    dot(a, a)
}
