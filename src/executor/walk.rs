//! The walk that discovers graphlet instances.
//!
//! From every start vertex `a`, the walk visits each sequence of distinct
//! vertices `a → b → c → d → e` where consecutive vertices are adjacent, and
//! classifies the three-, four- and five-vertex prefixes as it reaches them.
//! One instance is discovered once per walk that spans it; the counts are
//! corrected by [`Graphlet::overcount`] afterwards.
//!
//! Graphlets without a spanning path are found by side branches at `b`:
//! claws and stars from an induced `a-b-c`, chairs from an induced
//! `a-b-c-d`, and crickets from a paw centered at `b`.

use crate::{
    executor::OrbitCounts,
    graph::Graph,
    graphlet::{Graphlet, Orbit, Signature},
    types::VId,
};

pub fn walk_from(graph: &Graph, a: VId, counts: &mut OrbitCounts) {
    let adjacency = graph.adjacency();
    for &b in graph.neighbors(a) {
        for &c in graph.neighbors(b) {
            if c == a {
                continue;
            }
            // a-b and b-c are walk edges.
            let ac = adjacency.bit(a, c);
            let deg3 = [1 + ac, 2, 1 + ac];
            if ac == 0 {
                counts.record(
                    Graphlet::P3,
                    &[(a, Orbit::P3_END), (b, Orbit::P3_MIDDLE), (c, Orbit::P3_END)],
                );
                find_claws(graph, a, b, c, counts);
            } else {
                counts.record(
                    Graphlet::TRIANGLE,
                    &[(a, Orbit::TRIANGLE), (b, Orbit::TRIANGLE), (c, Orbit::TRIANGLE)],
                );
            }
            for &d in graph.neighbors(c) {
                if d == a || d == b {
                    continue;
                }
                let (ad, bd) = (adjacency.bit(a, d), adjacency.bit(b, d));
                let deg4 = [deg3[0] + ad, deg3[1] + bd, deg3[2] + 1, ad + bd + 1];
                classify4(graph, [a, b, c, d], deg4, counts);
                for &e in graph.neighbors(d) {
                    if e == a || e == b || e == c {
                        continue;
                    }
                    let vs = [a, b, c, d, e];
                    let (graphlet, orbits) =
                        Signature::extend(adjacency, &vs, deg4).classify(adjacency, &vs);
                    counts.record(
                        graphlet,
                        &[
                            (a, orbits[0]),
                            (b, orbits[1]),
                            (c, orbits[2]),
                            (d, orbits[3]),
                            (e, orbits[4]),
                        ],
                    );
                }
            }
        }
    }
}

/// Classifies the walk `a-b-c-d` given each vertex's degree among the four.
fn classify4(graph: &Graph, vs: [VId; 4], deg4: [u8; 4], counts: &mut OrbitCounts) {
    let [a, b, c, d] = vs;
    match deg4.iter().sum::<u8>() {
        6 => {
            counts.record(
                Graphlet::P4,
                &[
                    (a, Orbit::P4_END),
                    (b, Orbit::P4_MIDDLE),
                    (c, Orbit::P4_MIDDLE),
                    (d, Orbit::P4_END),
                ],
            );
            find_chairs(graph, vs, counts);
        }
        8 if deg4[1] == 3 => {
            counts.record(
                Graphlet::PAW,
                &[
                    (a, Orbit::PAW_TAIL),
                    (b, Orbit::PAW_CENTER),
                    (c, Orbit::PAW_RIM),
                    (d, Orbit::PAW_RIM),
                ],
            );
            find_crickets(graph, vs, counts);
        }
        8 if deg4[2] == 3 => {
            counts.record(
                Graphlet::PAW,
                &[
                    (a, Orbit::PAW_RIM),
                    (b, Orbit::PAW_RIM),
                    (c, Orbit::PAW_CENTER),
                    (d, Orbit::PAW_TAIL),
                ],
            );
        }
        8 => {
            counts.record(
                Graphlet::C4,
                &[(a, Orbit::C4), (b, Orbit::C4), (c, Orbit::C4), (d, Orbit::C4)],
            );
        }
        10 => {
            let role = |degree| {
                if degree == 3 {
                    Orbit::DIAMOND_HUB
                } else {
                    Orbit::DIAMOND_RIM
                }
            };
            counts.record(
                Graphlet::DIAMOND,
                &[
                    (a, role(deg4[0])),
                    (b, role(deg4[1])),
                    (c, role(deg4[2])),
                    (d, role(deg4[3])),
                ],
            );
        }
        12 => {
            counts.record(
                Graphlet::K4,
                &[(a, Orbit::K4), (b, Orbit::K4), (c, Orbit::K4), (d, Orbit::K4)],
            );
        }
        sum => unreachable!("walk {:?} has degree sum {}", vs, sum),
    }
}

/// Counts the claws, and the stars around them, centered at `b` of the
/// induced path `a-b-c`.
fn find_claws(graph: &Graph, a: VId, b: VId, c: VId, counts: &mut OrbitCounts) {
    if graph.degree(b) < 3 {
        return;
    }
    // Connectivity is reflexive, so these tests also skip `a` and `c`.
    let isolated = |v: VId, others: &[VId]| others.iter().all(|&u| !graph.connected(u, v));
    for &d in graph.neighbors(b) {
        if !isolated(d, &[a, c]) {
            continue;
        }
        if graph.degree(b) > 3 {
            for &e in graph.neighbors(b) {
                if isolated(e, &[a, c, d]) {
                    counts.record(
                        Graphlet::STAR,
                        &[
                            (a, Orbit::STAR_LEAF),
                            (b, Orbit::STAR_CENTER),
                            (c, Orbit::STAR_LEAF),
                            (d, Orbit::STAR_LEAF),
                            (e, Orbit::STAR_LEAF),
                        ],
                    );
                }
            }
        }
        counts.record(
            Graphlet::CLAW,
            &[
                (a, Orbit::CLAW_LEAF),
                (b, Orbit::CLAW_CENTER),
                (c, Orbit::CLAW_LEAF),
                (d, Orbit::CLAW_LEAF),
            ],
        );
    }
}

/// Counts the chairs formed by a leaf `e` on `b` of the induced path `a-b-c-d`.
fn find_chairs(graph: &Graph, vs: [VId; 4], counts: &mut OrbitCounts) {
    let [a, b, c, d] = vs;
    for &e in graph.neighbors(b) {
        if !graph.connected(a, e) && !graph.connected(c, e) && !graph.connected(d, e) {
            counts.record(
                Graphlet::CHAIR,
                &[
                    (a, Orbit::CHAIR_LEAF),
                    (b, Orbit::CHAIR_CENTER),
                    (c, Orbit::CHAIR_NECK),
                    (d, Orbit::CHAIR_TAIL),
                    (e, Orbit::CHAIR_LEAF),
                ],
            );
        }
    }
}

/// Counts the crickets formed by a second tail `e` on the center `b` of the
/// paw with tail `a` and triangle `b-c-d`.
fn find_crickets(graph: &Graph, vs: [VId; 4], counts: &mut OrbitCounts) {
    let [a, b, c, d] = vs;
    for &e in graph.neighbors(b) {
        if !graph.connected(a, e) && !graph.connected(c, e) && !graph.connected(d, e) {
            counts.record(
                Graphlet::CRICKET,
                &[
                    (a, Orbit::CRICKET_LEAF),
                    (b, Orbit::CRICKET_CENTER),
                    (c, Orbit::CRICKET_RIM),
                    (d, Orbit::CRICKET_RIM),
                    (e, Orbit::CRICKET_LEAF),
                ],
            );
        }
    }
}
