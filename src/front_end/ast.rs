/// The edge list as written in the input: a node count and raw id pairs.
///
/// Ids are kept signed and unchecked; range validation happens when the
/// graph is built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgeList {
    num_vertices: usize,
    edges: Vec<(i64, i64)>,
}

impl EdgeList {
    pub fn new(num_vertices: usize, edges: Vec<(i64, i64)>) -> Self {
        Self {
            num_vertices,
            edges,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn edges(&self) -> &[(i64, i64)] {
        &self.edges
    }
}
