//! Data types for the rotation-penalized search.
//!
//! Kept small and explicit to make the runner in `ucs` easy to read.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use crate::graph::{DirectedEdge, Vertex};

/// Result of a search: a contiguous directed walk plus its total cost.
///
/// Invariant: `path[i].target == path[i+1].source` for every adjacent pair;
/// the walk starts at the search's start vertex and ends at the satisfying
/// goal. Owned by the caller; each search call produces a fresh one.
#[derive(Clone, Debug, PartialEq)]
pub struct PathInfo {
    pub path: Vec<DirectedEdge>,
    pub cost: f64,
}

/// Failures surfaced by the search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SearchError {
    /// The frontier emptied before any goal was satisfied. Expected in
    /// disconnected topologies; no partial path is returned.
    NoPathFound,
    /// A frontier vertex has no coordinate mapping, so its travel
    /// directions cannot be derived.
    NotFound(Vertex),
    /// The caller-supplied initial heading has zero length.
    DegenerateHeading,
    /// An edge's endpoints share a coordinate, so its direction has zero
    /// length.
    DegenerateEdge(DirectedEdge),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoPathFound => write!(f, "no path to any goal"),
            SearchError::NotFound(v) => write!(f, "no coordinate mapped for {v}"),
            SearchError::DegenerateHeading => {
                write!(f, "initial heading is a zero-length vector")
            }
            SearchError::DegenerateEdge(e) => {
                write!(f, "edge {e} has coincident endpoint coordinates")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Goal specification: the two variants of the same algorithm.
#[derive(Clone, Copy, Debug)]
pub(super) enum Goal<'a> {
    /// Satisfied when the popped frontier edge's *target* is in the set.
    Vertices(&'a HashSet<Vertex>),
    /// Satisfied when the popped frontier edge itself is in the set.
    Edges(&'a HashSet<DirectedEdge>),
}

impl Goal<'_> {
    #[inline]
    pub(super) fn satisfied_by(&self, e: DirectedEdge) -> bool {
        match self {
            Goal::Vertices(vs) => vs.contains(&e.target),
            Goal::Edges(es) => es.contains(&e),
        }
    }
}

/// Frontier entry: the edge just traversed and its accumulated total cost.
///
/// Ordering is reversed for `BinaryHeap` (lowest cost pops first); equal
/// costs break ties by insertion sequence, earliest first, so results are
/// reproducible. Costs are finite by contract, hence `total_cmp`.
#[derive(Clone, Copy, Debug)]
pub(super) struct FrontierEntry {
    pub cost: f64,
    pub seq: u64,
    pub edge: DirectedEdge,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
