//! The executor: walks the graph, counts orbits and corrects the counts.

pub use aggregate::{aggregate, Census, Gdv, GDV_LEN};
pub use counts::OrbitCounts;

mod aggregate;
mod counts;
mod walk;

use crate::graph::Graph;
use rayon::prelude::*;

/// Splits per worker of the rayon pool. Each split folds into its own
/// [`OrbitCounts`], so this bounds the accumulators allocated per worker.
pub const SPLITS_PER_WORKER: usize = 4;

/// Counts the raw orbits of `graph` on the current rayon pool.
///
/// Start vertices are sharded across workers in about
/// [`SPLITS_PER_WORKER`] runs each; every run folds into its own
/// [`OrbitCounts`] and the partial counts are summed at the end.
pub fn count_orbits(graph: &Graph) -> OrbitCounts {
    let num_vertices = graph.num_vertices();
    let min_len = num_vertices / (SPLITS_PER_WORKER * rayon::current_num_threads());
    let vertices = graph.vertices();
    (*vertices.start()..*vertices.end() + 1)
        .into_par_iter()
        .with_min_len(min_len.max(1))
        .fold(
            || OrbitCounts::new(num_vertices),
            |mut counts, a| {
                walk::walk_from(graph, a, &mut counts);
                counts
            },
        )
        .reduce_with(OrbitCounts::merge)
        .unwrap_or_else(|| OrbitCounts::new(num_vertices))
}

/// Counts the raw orbits of `graph` on the calling thread.
pub fn count_orbits_serial(graph: &Graph) -> OrbitCounts {
    let mut counts = OrbitCounts::new(graph.num_vertices());
    for a in graph.vertices() {
        walk::walk_from(graph, a, &mut counts);
    }
    counts
}
