//! Integer 2D geometry: convex hull and exact polygon area.
//!
//! Purpose
//! - `convex_hull`: Graham scan around the lowest-(x, y) anchor, clockwise,
//!   with collinear boundary points dropped.
//! - `doubled_area` / `Area`: shoelace sum kept as an exact integer and
//!   printed with a `.0` or `.5` suffix.
//! - `rand`: seeded integer point clouds for tests, benches, and the CLI.
//!
//! All arithmetic is on `i64`. `convex_hull` rejects coordinates beyond
//! `MAX_COORD`: differences then stay within ±2e9 and every cross product,
//! squared norm and doubled convex area stays below 8e18.

mod hull;
pub mod rand;
mod vector;

pub use hull::{convex_hull, doubled_area, Area, MAX_COORD};
pub use vector::{cross, dot, sq_norm, Vec2i};
