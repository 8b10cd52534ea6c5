use crate::{
    error::{Error, Result},
    front_end::EdgeList,
    graph::{AdjacencyMatrix, GraphInfo},
    types::VId,
};
use log::{info, trace, warn};

/// An undirected simple graph on the vertices `1..=num_vertices`.
///
/// Pairwise connectivity is answered by a dense bit matrix; traversal uses
/// the compressed neighbor lists.
///
/// ```text
/// offsets:   | 0 | 0 | d(1) | d(1)+d(2) | ... |
/// neighbors: | N(1) ... | N(2) ... | ... |
/// ```
pub struct Graph {
    adjacency: AdjacencyMatrix,
    offsets: Vec<usize>,
    neighbors: Vec<VId>,
}

impl Graph {
    /// Builds the graph from raw `(src, dst)` pairs.
    ///
    /// Self-loops and edges already seen, in either direction, are dropped;
    /// the first occurrence wins. Ids must lie in `1..=num_vertices`.
    pub fn new<E>(num_vertices: usize, edges: E) -> Result<Self>
    where
        E: IntoIterator<Item = (i64, i64)>,
    {
        let num_rows = num_vertices
            .checked_add(1)
            .ok_or(Error::GraphTooLarge { num_vertices })?;
        warn_if_too_large(num_rows);
        let mut adjacency = AdjacencyMatrix::new(num_rows)?;
        let mut degrees = vec![0; num_vertices + 1];
        let mut kept = vec![];
        let mut num_dropped = 0;
        for (edge, (src, dst)) in edges.into_iter().enumerate() {
            let (src, dst) = (
                check_id(edge, src, num_vertices)?,
                check_id(edge, dst, num_vertices)?,
            );
            // The diagonal is set, so this also catches self-loops.
            if adjacency.connected(src, dst) {
                trace!("dropping edge {}: ({}, {})", edge, src, dst);
                num_dropped += 1;
                continue;
            }
            adjacency.connect(src, dst);
            degrees[src] += 1;
            degrees[dst] += 1;
            kept.push((src, dst));
        }
        let mut offsets = Vec::with_capacity(num_vertices + 2);
        let mut total = 0;
        offsets.push(total);
        for &degree in &degrees {
            total += degree;
            offsets.push(total);
        }
        let mut neighbors = vec![0; 2 * kept.len()];
        let mut next = offsets.clone();
        for (src, dst) in kept {
            neighbors[next[src]] = dst;
            next[src] += 1;
            neighbors[next[dst]] = src;
            next[dst] += 1;
        }
        let graph = Self {
            adjacency,
            offsets,
            neighbors,
        };
        info!(
            "graph: {} vertices, {} edges, {} dropped",
            num_vertices,
            graph.num_edges(),
            num_dropped
        );
        Ok(graph)
    }

    pub fn from_edge_list(edge_list: &EdgeList) -> Result<Self> {
        Self::new(
            edge_list.num_vertices(),
            edge_list.edges().iter().copied(),
        )
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.num_rows() - 1
    }

    pub fn num_edges(&self) -> usize {
        self.neighbors.len() / 2
    }

    /// All vertex ids, in order.
    pub fn vertices(&self) -> std::ops::RangeInclusive<VId> {
        1..=self.num_vertices()
    }

    #[inline]
    pub fn neighbors(&self, v: VId) -> &[VId] {
        &self.neighbors[self.offsets[v]..self.offsets[v + 1]]
    }

    #[inline]
    pub fn degree(&self, v: VId) -> usize {
        self.offsets[v + 1] - self.offsets[v]
    }

    /// Whether `u` and `v` are adjacent. Always `true` when `u == v`.
    #[inline]
    pub fn connected(&self, u: VId, v: VId) -> bool {
        self.adjacency.connected(u, v)
    }

    pub fn adjacency(&self) -> &AdjacencyMatrix {
        &self.adjacency
    }

    pub fn info(&self) -> GraphInfo {
        GraphInfo::new(self.num_vertices(), self.num_edges())
    }
}

fn check_id(edge: usize, id: i64, num_vertices: usize) -> Result<VId> {
    if id < 0 {
        Err(Error::NegativeId { edge, id })
    } else if id == 0 || id as u64 > num_vertices as u64 {
        Err(Error::IdOutOfRange {
            edge,
            id,
            num_vertices,
        })
    } else {
        Ok(id as VId)
    }
}

fn warn_if_too_large(num_rows: usize) {
    let size = match AdjacencyMatrix::size_of(num_rows) {
        Some(size) => size,
        None => return,
    };
    if let Ok(mem) = sys_info::mem_info() {
        if size as u64 > mem.avail.saturating_mul(1024) {
            warn!(
                "adjacency matrix needs {}M, only {}M available",
                size / 1024 / 1024,
                mem.avail / 1024
            );
        }
    }
}
