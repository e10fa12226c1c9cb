//! Example: hull of a seeded random cloud.
//! Run: cargo run -p algokit --example random_hull -- [count] [seed]

use algokit::geom2::rand::{sample_cloud, Bounds2, CloudCfg};
use algokit::geom2::{convex_hull, Area};

fn main() {
    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(1000);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    let cfg = CloudCfg {
        count,
        bounds: Bounds2::symmetric(10_000),
    };
    let cloud = sample_cloud(cfg, seed);
    match convex_hull(&cloud) {
        Ok(hull) => {
            println!("points={} hull_vertices={}", cloud.len(), hull.len());
            for p in &hull {
                println!("  ({}, {})", p.x, p.y);
            }
            println!("area={}", Area::of_polygon(&hull));
        }
        Err(e) => eprintln!("no hull: {e}"),
    }
}
