//! The undirected input graph.

pub use adjacency::AdjacencyMatrix;
pub use graph::Graph;
pub use info::GraphInfo;

mod adjacency;
mod graph;
mod info;
