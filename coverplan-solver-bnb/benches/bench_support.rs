//! Benchmark support utilities for the branch-and-bound solver.
//!
//! Provides deterministic random geometric graphs so that benchmark inputs
//! are reproducible across runs.

use coverplan_core::Graph;
use coverplan_core::test_support::graph_from_edges;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Side length of the integer lattice vertices are scattered on.
const AREA_SIZE: u32 = 100;

/// Squared lattice distance under which two vertices are joined.
const LINK_RANGE_SQUARED: u32 = 400;

/// Generate a random geometric graph with `count` vertices.
///
/// Vertices get random lattice positions; pairs closer than the link range
/// become edges. Uses a seeded RNG for reproducibility.
#[must_use]
pub fn generate_geometric_graph(count: usize, seed: u64) -> Graph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let positions: Vec<(u32, u32)> = (0..count)
        .map(|_| (rng.gen_range(0..AREA_SIZE), rng.gen_range(0..AREA_SIZE)))
        .collect();

    let mut edges = Vec::new();
    for (a, &(ax, ay)) in positions.iter().enumerate() {
        for (b, &(bx, by)) in positions.iter().enumerate().skip(a + 1) {
            let dx = ax.abs_diff(bx);
            let dy = ay.abs_diff(by);
            if dx * dx + dy * dy <= LINK_RANGE_SQUARED {
                edges.push((a, b));
            }
        }
    }
    graph_from_edges(count, &edges)
}
