//! Lookup tables for graphlets on three to five vertices.
//!
//! A vertex's *extended degree* inside a five-vertex instance is its degree
//! within the instance plus the within-instance degrees of its neighbors.
//! The tables are indexed by extended degrees and edge counts.

use super::{NUM_GRAPHLETS, NUM_ORBITS};

/// Five-vertex graphlets by `[num_edges - 4][hash / 2]`, where `hash` is the
/// sum of every vertex's extended degree modulo 4.
///
/// `-1` marks keys that no connected five-vertex graph produces. The key
/// `(7, 6)` is shared by two graphlets and resolved separately.
#[rustfmt::skip]
pub(super) const GRAPHLET_TABLE: [[i8; 8]; 7] = [
    [-1, -1, 10, -1, -1, 8, -1, -1],
    [-1, 11, -1, -1, 15, 14, 12, -1],
    [17, 19, -1, 16, 18, 20, -1, -1],
    [-1, -1, 23, 24, -1, 21, -1, -1],
    [-1, -1, 26, 25, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, 27, -1],
    [28, -1, -1, -1, -1, -1, -1, -1],
];

/// Orbits by `[graphlet][extended degree]`.
#[rustfmt::skip]
pub(super) const ORBIT_TABLE: [[i8; 21]; NUM_GRAPHLETS] = [
    [-1, -1, -1, 0, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, 3, -1, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, 5, -1, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, 8, -1, -1, 9, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, 11, -1, 12, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 13, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, 14, -1, 15, 16, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, 17, 18, -1, 19, 20, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, 21, -1, -1, 22, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, 23, -1, -1, -1, 24, 25, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, 26, -1, -1, 27, 28, -1, 29, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, 30, -1, -1, 31, -1, 32, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, 33, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, 34, -1, 35, 36, 37, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, 38, -1, -1, -1, 39, -1, 40, 41, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, 42, -1, -1, -1, 43, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, 44, -1, -1, -1, 45, -1, 46, 47, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, 48, 49, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, 50, 51, -1, 52, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 53, -1, -1, -1, 54, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, 55, -1, -1, -1, -1, -1, -1, -1, 56, 57, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, 58, -1, -1, 59, -1, 60, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, 61, -1, -1, 62, 63, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 64, -1, -1, -1, 65, -1, 66, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 67, -1, -1, 68, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 69, -1, -1, 70, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 71],
];
/// How many walks discover one instance of each graphlet.
pub(super) const OVERCOUNT: [u64; NUM_GRAPHLETS] = [
    2, 6, 2, 6, 8, 4, 12, 24, 2, 2, 24, 2, 4, 4, 10, 4, 4, 8, 8, 12, 14, 12, 12, 20, 28, 36, 48,
    72, 120,
];

/// The graphlet of each orbit.
pub(super) const ORBIT_GRAPHLET: [u8; NUM_ORBITS] = [
    0, 0, 1, 2, 2, 3, 3, 4, 5, 5, 5, 6, 6, 7, 8, 8, 8, 9, 9, 9, 9, 10, 10, 11, 11, 11, 12, 12, 12,
    12, 13, 13, 13, 14, 15, 15, 15, 15, 16, 16, 16, 16, 17, 17, 18, 18, 18, 18, 19, 19, 20, 20,
    20, 21, 21, 22, 22, 22, 23, 23, 23, 24, 24, 24, 25, 25, 25, 26, 26, 27, 27, 28,
];

/// The number of vertices of one graphlet instance that play each orbit.
pub(super) const ORBIT_MULTIPLICITY: [u8; NUM_ORBITS] = [
    2, 1, 3, 2, 2, 3, 1, 4, 1, 2, 1, 2, 2, 4, 2, 2, 1, 1, 2, 1, 1, 4, 1, 2, 1, 2, 1, 1, 2, 1, 2,
    2, 1, 5, 1, 1, 2, 1, 1, 2, 1, 1, 4, 1, 1, 1, 1, 2, 3, 2, 2, 1, 2, 3, 2, 1, 3, 1, 2, 2, 1, 1,
    2, 2, 1, 2, 2, 4, 1, 2, 3, 5,
];

pub(super) const GRAPHLET_NAMES: [&str; NUM_GRAPHLETS] = [
    "P3", "C3", "P4", "claw", "C4", "paw", "diamond", "K4", "P5", "chair", "star", "bull",
    "tadpole", "cricket", "C5", "banner", "G16", "bowtie", "G18", "K2,3", "house", "book", "G22",
    "G23", "G24", "G25", "wheel", "K5-e", "K5",
];

pub(super) const ORBIT_NAMES: [&str; NUM_ORBITS] = [
    "P3 end", "P3 middle", "C3", "P4 end", "P4 middle", "claw leaf", "claw center", "C4",
    "paw tail", "paw rim", "paw center", "diamond rim", "diamond hub", "K4", "P5 a", "P5 b",
    "P5 c", "chair a", "chair b", "chair c", "chair d", "star a", "star b", "bull a", "bull b",
    "bull c", "tadpole a", "tadpole b", "tadpole c", "tadpole d", "cricket a", "cricket b",
    "cricket c", "C5", "banner a", "banner b", "banner c", "banner d", "G16 a", "G16 b", "G16 c",
    "G16 d", "bowtie a", "bowtie b", "G18 a", "G18 b", "G18 c", "G18 d", "K2,3 a", "K2,3 b",
    "house a", "house b", "house c", "book a", "book b", "G22 a", "G22 b", "G22 c", "G23 a",
    "G23 b", "G23 c", "G24 a", "G24 b", "G24 c", "G25 a", "G25 b", "G25 c", "wheel a", "wheel b",
    "K5-e a", "K5-e b", "K5",
];
