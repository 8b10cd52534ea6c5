use crate::{
    executor::OrbitCounts,
    graph::Graph,
    graphlet::{Graphlet, Orbit, NUM_GRAPHLETS, NUM_ORBITS},
    types::{Count, VId},
};
use itertools::Itertools;
use std::fmt;

/// Entries per graphlet degree vector: the degree, then one per orbit.
pub const GDV_LEN: usize = 1 + NUM_ORBITS;

/// `[degree, orbit 0, ..., orbit 71]` of one vertex.
pub type Gdv = [Count; GDV_LEN];

/// The graphlet degree vectors of every vertex, plus the number of induced
/// instances of each graphlet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Census {
    gdvs: Vec<Gdv>,
    graphlets: [Count; NUM_GRAPHLETS],
}

impl Census {
    pub fn num_vertices(&self) -> usize {
        self.gdvs.len()
    }

    /// The vectors of vertices `1..=num_vertices`, in order.
    pub fn gdvs(&self) -> &[Gdv] {
        &self.gdvs
    }

    pub fn into_gdvs(self) -> Vec<Gdv> {
        self.gdvs
    }

    pub fn gdv(&self, v: VId) -> &Gdv {
        &self.gdvs[v - 1]
    }

    pub fn degree(&self, v: VId) -> Count {
        self.gdv(v)[0]
    }

    pub fn orbit(&self, v: VId, orbit: Orbit) -> Count {
        self.gdv(v)[1 + orbit.id()]
    }

    /// Number of induced instances of `graphlet`.
    pub fn graphlet_count(&self, graphlet: Graphlet) -> Count {
        self.graphlets[graphlet.id()]
    }
}

/// One line per vertex: its id followed by its vector.
impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.gdvs
                .iter()
                .enumerate()
                .map(|(i, gdv)| format!("{} {}", i + 1, gdv.iter().join(" ")))
                .join("\n")
        )
    }
}

/// Divides the raw counts by each graphlet's overcount and prefixes the
/// degrees.
pub fn aggregate(graph: &Graph, counts: &OrbitCounts) -> Census {
    let gdvs = graph
        .vertices()
        .map(|v| {
            let mut gdv = [0; GDV_LEN];
            gdv[0] = graph.degree(v) as Count;
            for orbit in Orbit::all() {
                gdv[1 + orbit.id()] = counts.orbit(v, orbit) / orbit.graphlet().overcount();
            }
            gdv
        })
        .collect();
    let mut graphlets = [0; NUM_GRAPHLETS];
    for graphlet in Graphlet::all() {
        graphlets[graphlet.id()] = counts.graphlet(graphlet) / graphlet.overcount();
    }
    Census { gdvs, graphlets }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate() {
        let graph = Graph::new(3, vec![(1, 2), (2, 3)]).unwrap();
        let mut counts = OrbitCounts::new(3);
        for &(a, c) in &[(1, 3), (3, 1)] {
            counts.record(
                Graphlet::P3,
                &[(a, Orbit::P3_END), (2, Orbit::P3_MIDDLE), (c, Orbit::P3_END)],
            );
        }
        let census = aggregate(&graph, &counts);
        assert_eq!(census.num_vertices(), 3);
        assert_eq!(census.degree(2), 2);
        assert_eq!(census.orbit(1, Orbit::P3_END), 1);
        assert_eq!(census.orbit(2, Orbit::P3_MIDDLE), 1);
        assert_eq!(census.orbit(2, Orbit::P3_END), 0);
        assert_eq!(census.graphlet_count(Graphlet::P3), 1);
        assert_eq!(census.gdv(3)[..3], [1, 1, 0]);
    }

    #[test]
    fn test_display() {
        let graph = Graph::new(2, vec![(1, 2)]).unwrap();
        let census = aggregate(&graph, &OrbitCounts::new(2));
        let zeros = vec!["0"; NUM_ORBITS].join(" ");
        assert_eq!(
            census.to_string(),
            format!("1 1 {}\n2 1 {}", zeros, zeros)
        );
        assert_eq!(census.into_gdvs().len(), 2);
    }
}
