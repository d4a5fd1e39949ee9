//! Print the hull of a seeded random disk cloud.
//!
//! Usage:
//!   cargo run -p graham --example random_hull -- 10000 7
//!
//! Arguments are the point count (default 1000) and the seed (default 42).

use std::time::Instant;

use graham::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(1_000);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let cfg = CloudCfg {
        count,
        ..CloudCfg::default()
    };
    let cloud = draw_cloud(cfg, ReplayToken { seed, index: 0 });

    let t0 = Instant::now();
    let hull = compute_hull_with(
        &cloud,
        HullCfg {
            dedup: Dedup::SortCompact,
        },
    );
    let elapsed = t0.elapsed();

    match hull {
        Some(h) => {
            println!(
                "n={count} seed={seed} hull={} area={:.6} time={elapsed:.2?}",
                h.len(),
                h.area()
            );
            for p in h.points() {
                println!("{} {}", p.x, p.y);
            }
        }
        None => eprintln!("fewer than {MIN_POINTS} unique points"),
    }
}
