//! Two small algorithm kits.
//!
//! - `strmatch`: prefix-function (failure-function) substring search.
//! - `geom2`: integer convex hull (Graham scan) and exact doubled area.
//!
//! The two modules share nothing except the `InvalidInput` error type.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; the CLI
//!   crate is the only consumer.

pub mod error;
pub mod geom2;
pub mod strmatch;

pub use error::InvalidInput;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::InvalidInput;
    pub use crate::geom2::rand::{sample_cloud, Bounds2, CloudCfg};
    pub use crate::geom2::{convex_hull, cross, doubled_area, dot, sq_norm, Area, Vec2i};
    pub use crate::strmatch::{find_occurrences, find_occurrences_str, prefix_function, Matcher};
}
