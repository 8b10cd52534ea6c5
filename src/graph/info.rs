use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "{} {}", num_vertices, num_edges)]
pub struct GraphInfo {
    num_vertices: usize,
    num_edges: usize,
}

impl GraphInfo {
    pub fn new(num_vertices: usize, num_edges: usize) -> Self {
        Self {
            num_vertices,
            num_edges,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }
}
