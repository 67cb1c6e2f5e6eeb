//! Polykern debug harness — exercises the kernel the way the interactive
//! presentation layer would, without a canvas.
//!
//! Usage:
//! ```text
//! cargo run --example debug              # two random convex polygons
//! cargo run --example debug -- <seed>    # reproducible draw
//! ```

use polykern::hull::compute_random;
use polykern::intersect::convex_intersect;
use polykern::math::Tolerance;
use polykern::polygon::Polygon;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn describe(poly: &Polygon) -> String {
    poly.iter()
        .map(|pt| format!("({:.1}, {:.1})", pt.x, pt.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> polykern::Result<()> {
    // Default: INFO for the demo. Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(7);
    let mut rng = StdRng::seed_from_u64(seed);

    let tol = Tolerance::default();
    let p = compute_random(tol, &mut rng, 0.0, 0.0, 512.0, 512.0);
    let q = compute_random(tol, &mut rng, 128.0, 128.0, 640.0, 640.0);

    info!(seed, "p: {} (area {:.1})", describe(&p), p.signed_area());
    info!(seed, "q: {} (area {:.1})", describe(&q), q.signed_area());

    match convex_intersect(tol, &p, &q)? {
        Some(region) => info!(
            "intersection: {} (area {:.1})",
            describe(&region),
            region.signed_area()
        ),
        None => info!("no intersection"),
    }
    Ok(())
}
