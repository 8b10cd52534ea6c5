//! Graphlets and the orbits (roles) their vertices play.
//!
//! There are 29 connected graphs on three to five vertices up to isomorphism,
//! and 72 orbits among their vertices. Ids follow the usual numbering of
//! graphlet degree vectors: graphlets `0..2` have three vertices, `2..8`
//! four, `8..29` five.

pub use classify::Signature;

use derive_more::Display;
use tables::{
    GRAPHLET_NAMES, GRAPHLET_TABLE, ORBIT_GRAPHLET, ORBIT_MULTIPLICITY, ORBIT_NAMES, ORBIT_TABLE,
    OVERCOUNT,
};

mod classify;
mod tables;

pub const NUM_GRAPHLETS: usize = 29;

pub const NUM_ORBITS: usize = 72;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "{}", _0)]
pub struct Graphlet(u8);

impl Graphlet {
    pub const P3: Graphlet = Graphlet(0);
    pub const TRIANGLE: Graphlet = Graphlet(1);
    pub const P4: Graphlet = Graphlet(2);
    pub const CLAW: Graphlet = Graphlet(3);
    pub const C4: Graphlet = Graphlet(4);
    pub const PAW: Graphlet = Graphlet(5);
    pub const DIAMOND: Graphlet = Graphlet(6);
    pub const K4: Graphlet = Graphlet(7);
    pub const P5: Graphlet = Graphlet(8);
    pub const CHAIR: Graphlet = Graphlet(9);
    pub const STAR: Graphlet = Graphlet(10);
    pub const CRICKET: Graphlet = Graphlet(13);
    pub const C5: Graphlet = Graphlet(14);
    pub const HOUSE: Graphlet = Graphlet(20);
    pub const K5: Graphlet = Graphlet(28);

    pub fn new(id: usize) -> Option<Self> {
        if id < NUM_GRAPHLETS {
            Some(Graphlet(id as u8))
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Graphlet> {
        (0..NUM_GRAPHLETS as u8).map(Graphlet)
    }

    pub fn id(self) -> usize {
        self.0 as usize
    }

    pub fn name(self) -> &'static str {
        GRAPHLET_NAMES[self.id()]
    }

    pub fn num_vertices(self) -> usize {
        match self.0 {
            0..=1 => 3,
            2..=7 => 4,
            _ => 5,
        }
    }

    /// The number of walks that discover one instance of this graphlet.
    pub fn overcount(self) -> u64 {
        OVERCOUNT[self.id()]
    }

    pub fn orbits(self) -> impl Iterator<Item = Orbit> {
        Orbit::all().filter(move |orbit| orbit.graphlet() == self)
    }

    /// Looks up the five-vertex graphlet with `num_edges` edges and the given
    /// extended-degree `hash`. `first` is the extended degree of the vertex
    /// the walk started from; it separates the two graphlets sharing the key
    /// `(7, 6)`.
    pub fn of_five(num_edges: u8, hash: u8, first: u8) -> Option<Graphlet> {
        if num_edges == 7 && hash == 6 {
            return Some(if first > 12 || first == 5 {
                Graphlet(22)
            } else {
                Graphlet(24)
            });
        }
        let id = *GRAPHLET_TABLE
            .get((num_edges as usize).checked_sub(4)?)?
            .get(hash as usize / 2)?;
        if id >= Graphlet::P5.0 as i8 {
            Some(Graphlet(id as u8))
        } else {
            None
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "{}", _0)]
pub struct Orbit(u8);

impl Orbit {
    pub const P3_END: Orbit = Orbit(0);
    pub const P3_MIDDLE: Orbit = Orbit(1);
    pub const TRIANGLE: Orbit = Orbit(2);
    pub const P4_END: Orbit = Orbit(3);
    pub const P4_MIDDLE: Orbit = Orbit(4);
    pub const CLAW_LEAF: Orbit = Orbit(5);
    pub const CLAW_CENTER: Orbit = Orbit(6);
    pub const C4: Orbit = Orbit(7);
    pub const PAW_TAIL: Orbit = Orbit(8);
    pub const PAW_RIM: Orbit = Orbit(9);
    pub const PAW_CENTER: Orbit = Orbit(10);
    pub const DIAMOND_RIM: Orbit = Orbit(11);
    pub const DIAMOND_HUB: Orbit = Orbit(12);
    pub const K4: Orbit = Orbit(13);
    /// The end of the long arm.
    pub const CHAIR_TAIL: Orbit = Orbit(17);
    pub const CHAIR_LEAF: Orbit = Orbit(18);
    pub const CHAIR_NECK: Orbit = Orbit(19);
    pub const CHAIR_CENTER: Orbit = Orbit(20);
    pub const STAR_LEAF: Orbit = Orbit(21);
    pub const STAR_CENTER: Orbit = Orbit(22);
    pub const CRICKET_LEAF: Orbit = Orbit(30);
    pub const CRICKET_RIM: Orbit = Orbit(31);
    pub const CRICKET_CENTER: Orbit = Orbit(32);
    pub const C5: Orbit = Orbit(33);
    pub const K5: Orbit = Orbit(71);

    pub fn new(id: usize) -> Option<Self> {
        if id < NUM_ORBITS {
            Some(Orbit(id as u8))
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Orbit> {
        (0..NUM_ORBITS as u8).map(Orbit)
    }

    pub fn id(self) -> usize {
        self.0 as usize
    }

    pub fn name(self) -> &'static str {
        ORBIT_NAMES[self.id()]
    }

    pub fn graphlet(self) -> Graphlet {
        Graphlet(ORBIT_GRAPHLET[self.id()])
    }

    /// The number of vertices of one instance of [`Orbit::graphlet`] that
    /// play this orbit.
    pub fn multiplicity(self) -> u64 {
        ORBIT_MULTIPLICITY[self.id()] as u64
    }

    /// Looks up the orbit of a vertex with the given extended degree.
    pub fn of(graphlet: Graphlet, extended_degree: u8) -> Option<Orbit> {
        match ORBIT_TABLE[graphlet.id()].get(extended_degree as usize) {
            Some(&id) if id >= 0 => Some(Orbit(id as u8)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbits_partition() {
        let mut next = 0;
        for graphlet in Graphlet::all() {
            let orbits: Vec<_> = graphlet.orbits().map(Orbit::id).collect();
            assert!(!orbits.is_empty());
            assert_eq!(orbits, (next..next + orbits.len()).collect::<Vec<_>>());
            next += orbits.len();
            assert_eq!(
                graphlet
                    .orbits()
                    .map(Orbit::multiplicity)
                    .sum::<u64>(),
                graphlet.num_vertices() as u64
            );
        }
        assert_eq!(next, NUM_ORBITS);
    }

    #[test]
    fn test_orbit_table_matches_graphlets() {
        let mut seen = [false; NUM_ORBITS];
        for graphlet in Graphlet::all() {
            for degree in 0..=20 {
                if let Some(orbit) = Orbit::of(graphlet, degree) {
                    assert_eq!(orbit.graphlet(), graphlet);
                    assert!(!seen[orbit.id()]);
                    seen[orbit.id()] = true;
                }
            }
        }
        assert!(seen.iter().all(|&x| x));
    }

    #[test]
    fn test_orbit_of_small_graphlets() {
        // Extended degree of a P3 end: 1 + 2.
        assert_eq!(Orbit::of(Graphlet::P3, 3), Some(Orbit::P3_END));
        assert_eq!(Orbit::of(Graphlet::P3, 4), Some(Orbit::P3_MIDDLE));
        assert_eq!(Orbit::of(Graphlet::TRIANGLE, 6), Some(Orbit::TRIANGLE));
        assert_eq!(Orbit::of(Graphlet::CLAW, 4), Some(Orbit::CLAW_LEAF));
        assert_eq!(Orbit::of(Graphlet::CLAW, 6), Some(Orbit::CLAW_CENTER));
        assert_eq!(Orbit::of(Graphlet::DIAMOND, 8), Some(Orbit::DIAMOND_RIM));
        assert_eq!(Orbit::of(Graphlet::DIAMOND, 10), Some(Orbit::DIAMOND_HUB));
        assert_eq!(Orbit::of(Graphlet::K4, 12), Some(Orbit::K4));
        assert_eq!(Orbit::of(Graphlet::K5, 20), Some(Orbit::K5));
        assert_eq!(Orbit::of(Graphlet::K5, 19), None);
        assert_eq!(Orbit::of(Graphlet::K5, 21), None);
    }

    #[test]
    fn test_overcount() {
        assert_eq!(Graphlet::P3.overcount(), 2);
        assert_eq!(Graphlet::TRIANGLE.overcount(), 6);
        assert_eq!(Graphlet::CLAW.overcount(), 6);
        assert_eq!(Graphlet::STAR.overcount(), 24);
        assert_eq!(Graphlet::C5.overcount(), 10);
        assert_eq!(Graphlet::K5.overcount(), 120);
    }

    #[test]
    fn test_names() {
        assert_eq!(Graphlet::K4.name(), "K4");
        assert_eq!(Graphlet::HOUSE.name(), "house");
        assert_eq!(Orbit::CLAW_CENTER.name(), "claw center");
        assert_eq!(Orbit::C5.name(), "C5");
        assert_eq!(Orbit::C5.graphlet(), Graphlet::C5);
        assert_eq!(Orbit::STAR_CENTER.graphlet(), Graphlet::STAR);
        assert_eq!(Orbit::CRICKET_LEAF.graphlet(), Graphlet::CRICKET);
        assert_eq!(Orbit::CHAIR_TAIL.graphlet(), Graphlet::CHAIR);
        assert_eq!(Graphlet::new(29), None);
        assert_eq!(Orbit::new(72), None);
        assert_eq!(Orbit::new(71), Some(Orbit::K5));
    }
}
