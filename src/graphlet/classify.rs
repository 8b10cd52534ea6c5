use crate::{
    graph::AdjacencyMatrix,
    graphlet::{Graphlet, Orbit},
    types::VId,
};
use itertools::Itertools;

/// The degree signature of a five-vertex instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    degrees: [u8; 5],
    extended: [u8; 5],
}

impl Signature {
    pub fn new(adjacency: &AdjacencyMatrix, vs: &[VId; 5]) -> Self {
        let mut prefix = [0; 4];
        for i in 0..4 {
            for j in i + 1..4 {
                let x = adjacency.bit(vs[i], vs[j]);
                prefix[i] += x;
                prefix[j] += x;
            }
        }
        Self::extend(adjacency, vs, prefix)
    }

    /// Builds the signature from the within-instance degrees of `vs[..4]`,
    /// adding `vs[4]`.
    #[inline]
    pub fn extend(adjacency: &AdjacencyMatrix, vs: &[VId; 5], prefix: [u8; 4]) -> Self {
        let mut degrees = [prefix[0], prefix[1], prefix[2], prefix[3], 0];
        for i in 0..4 {
            let x = adjacency.bit(vs[4], vs[i]);
            degrees[i] += x;
            degrees[4] += x;
        }
        let mut extended = degrees;
        for i in 0..5 {
            for j in i + 1..5 {
                if adjacency.connected(vs[i], vs[j]) {
                    extended[i] += degrees[j];
                    extended[j] += degrees[i];
                }
            }
        }
        Self { degrees, extended }
    }

    pub fn degrees(&self) -> &[u8; 5] {
        &self.degrees
    }

    pub fn extended(&self) -> &[u8; 5] {
        &self.extended
    }

    pub fn num_edges(&self) -> u8 {
        self.degrees.iter().sum::<u8>() / 2
    }

    /// The sum of the extended degrees, each taken modulo 4.
    pub fn hash(&self) -> u8 {
        self.extended.iter().map(|d| d % 4).sum()
    }

    /// Classifies the instance `vs` this signature was computed for.
    ///
    /// # Panics
    ///
    /// Panics if the signature matches no graphlet or orbit; this only
    /// happens if `vs` is not a connected instance reached by a walk.
    #[inline]
    pub fn classify(&self, adjacency: &AdjacencyMatrix, vs: &[VId; 5]) -> (Graphlet, [Orbit; 5]) {
        let graphlet = Graphlet::of_five(self.num_edges(), self.hash(), self.extended[0])
            .unwrap_or_else(|| self.unclassifiable(adjacency, vs));
        let mut orbits = [Orbit::K5; 5];
        for (orbit, &extended) in orbits.iter_mut().zip(&self.extended) {
            *orbit = Orbit::of(graphlet, extended)
                .unwrap_or_else(|| self.unclassifiable(adjacency, vs));
        }
        (graphlet, orbits)
    }

    #[cold]
    fn unclassifiable(&self, adjacency: &AdjacencyMatrix, vs: &[VId; 5]) -> ! {
        let rows = vs
            .iter()
            .map(|&u| vs.iter().map(|&v| adjacency.bit(u, v)).join(""))
            .join(" ");
        panic!(
            "unclassifiable instance {:?}: adjacency {}, degrees {:?}, extended {:?}, \
             edges {}, hash {}",
            vs,
            rows,
            self.degrees,
            self.extended,
            self.num_edges(),
            self.hash()
        )
    }
}
