use crate::{
    graphlet::{Graphlet, Orbit, NUM_GRAPHLETS, NUM_ORBITS},
    types::{Count, VId},
};

/// Raw orbit and graphlet counts, before dividing out the overcount.
///
/// Each worker fills its own `OrbitCounts`; partial counts are summed with
/// [`OrbitCounts::merge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbitCounts {
    orbits: Vec<[Count; NUM_ORBITS]>,
    graphlets: [Count; NUM_GRAPHLETS],
}

impl OrbitCounts {
    /// Zeroed counts for the vertices `0..=num_vertices`.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            orbits: vec![[0; NUM_ORBITS]; num_vertices + 1],
            graphlets: [0; NUM_GRAPHLETS],
        }
    }

    /// The number of bytes `OrbitCounts::new(num_vertices)` occupies, or
    /// `None` if that overflows `usize`.
    pub fn size_of(num_vertices: usize) -> Option<usize> {
        num_vertices
            .checked_add(1)?
            .checked_mul(std::mem::size_of::<[Count; NUM_ORBITS]>())?
            .checked_add(std::mem::size_of::<Self>())
    }

    /// Counts one discovery of `graphlet` with each vertex in its role.
    #[inline]
    pub fn record(&mut self, graphlet: Graphlet, roles: &[(VId, Orbit)]) {
        self.graphlets[graphlet.id()] += 1;
        for &(v, orbit) in roles {
            self.orbits[v][orbit.id()] += 1;
        }
    }

    pub fn merge(mut self, other: Self) -> Self {
        for (row, other_row) in self.orbits.iter_mut().zip(&other.orbits) {
            for (x, y) in row.iter_mut().zip(other_row) {
                *x += y;
            }
        }
        for (x, y) in self.graphlets.iter_mut().zip(&other.graphlets) {
            *x += y;
        }
        self
    }

    pub fn num_vertices(&self) -> usize {
        self.orbits.len() - 1
    }

    pub fn orbit(&self, v: VId, orbit: Orbit) -> Count {
        self.orbits[v][orbit.id()]
    }

    pub fn orbits(&self, v: VId) -> &[Count; NUM_ORBITS] {
        &self.orbits[v]
    }

    pub fn graphlet(&self, graphlet: Graphlet) -> Count {
        self.graphlets[graphlet.id()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_merge() {
        let mut x = OrbitCounts::new(3);
        x.record(
            Graphlet::P3,
            &[(1, Orbit::P3_END), (2, Orbit::P3_MIDDLE), (3, Orbit::P3_END)],
        );
        let mut y = OrbitCounts::new(3);
        y.record(
            Graphlet::P3,
            &[(3, Orbit::P3_END), (2, Orbit::P3_MIDDLE), (1, Orbit::P3_END)],
        );
        y.record(
            Graphlet::TRIANGLE,
            &[(1, Orbit::TRIANGLE), (2, Orbit::TRIANGLE), (3, Orbit::TRIANGLE)],
        );
        let z = x.merge(y);
        assert_eq!(z.num_vertices(), 3);
        assert_eq!(z.graphlet(Graphlet::P3), 2);
        assert_eq!(z.graphlet(Graphlet::TRIANGLE), 1);
        assert_eq!(z.orbit(1, Orbit::P3_END), 2);
        assert_eq!(z.orbit(2, Orbit::P3_MIDDLE), 2);
        assert_eq!(z.orbit(2, Orbit::P3_END), 0);
        assert_eq!(z.orbit(3, Orbit::TRIANGLE), 1);
        assert_eq!(z.orbits(0).iter().sum::<Count>(), 0);
    }

    #[test]
    fn test_size_of() {
        let base = std::mem::size_of::<OrbitCounts>();
        assert_eq!(OrbitCounts::size_of(0), Some(base + 8 * NUM_ORBITS));
        assert_eq!(OrbitCounts::size_of(9), Some(base + 80 * NUM_ORBITS));
        assert_eq!(OrbitCounts::size_of(usize::MAX), None);
        assert_eq!(OrbitCounts::size_of(usize::MAX / 8), None);
    }
}
