//! Various types related to graphlet counting.

/// The vertex id type.
///
/// Vertices are numbered from `1` to the node count; `0` is a sentinel row
/// that never carries edges.
pub type VId = usize;

/// The counter type for orbit and graphlet occurrences.
pub type Count = u64;
