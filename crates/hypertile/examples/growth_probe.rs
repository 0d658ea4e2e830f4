//! Growth probe: how fast do layers and polygon counts grow?
//!
//! Prints graph layer sizes for a handful of {p,q} and, for {6,4}, the number
//! of polygons the reflection closure emits at decreasing cutoffs together
//! with wall-clock timings.
//!
//! Run: `cargo run -p hypertile --example growth_probe --release`

use std::time::Instant;

use hypertile::graph::TessellationGraph;
use hypertile::tessellation::{HyperbolicTessellation, TessellationConfig};

fn main() {
    for (p, q) in [(6, 4), (4, 5), (5, 4), (3, 7), (7, 3)] {
        let config = TessellationConfig::new(p, q).expect("hyperbolic configuration");
        match TessellationGraph::new(config, 4) {
            Ok(graph) => println!("{config}: layer sizes {:?}", graph.layer_sizes()),
            Err(err) => println!("{config}: {err}"),
        }
    }

    let config = TessellationConfig::new(6, 4).expect("hyperbolic configuration");
    for min_area in [1e-1, 1e-2, 1e-3, 1e-4] {
        let start = Instant::now();
        let tiling = HyperbolicTessellation::new(config, min_area).expect("tessellation");
        let elapsed = start.elapsed().as_secs_f64() * 1e3;
        println!(
            "{config} min_area={min_area:e}: {} polygons in {elapsed:.2} ms",
            tiling.len()
        );
    }
}
