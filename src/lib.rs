//! Graphlet degree vectors.
//!
//! For every vertex of an undirected simple graph, counts how often the
//! vertex plays each of the 72 orbits of the 29 connected graphlets on three
//! to five vertices.
//!
//! ```no_run
//! # fn main() -> gdv::error::Result<()> {
//! for (v, gdv) in gdv::graphlet_degree_vectors("graph.txt")?.iter().enumerate() {
//!     println!("{}: degree {}", v + 1, gdv[0]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod executor;
pub mod front_end;
pub mod graph;
pub mod graphlet;
pub mod task;
pub mod types;

use crate::{error::Result, executor::Gdv, graph::Graph, task::Task};
use std::path::Path;

/// Reads the edge list at `path` and returns the vector of each vertex
/// `1..=num_vertices`, in order.
pub fn graphlet_degree_vectors<P: AsRef<Path>>(path: P) -> Result<Vec<Gdv>> {
    let edge_list = front_end::read_edge_list(path)?;
    let graph = Graph::from_edge_list(&edge_list)?;
    Ok(Task::new(&graph).run()?.into_gdvs())
}
