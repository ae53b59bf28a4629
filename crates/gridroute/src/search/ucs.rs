//! Uniform-cost expansion with rotation penalties.
//!
//! The frontier state is the *edge just traversed*, not the vertex reached:
//! the rotation penalty of the next step depends on the direction of the
//! last step, so vertex identity alone is insufficient state. Every additive
//! cost term (table cost, angle term) is non-negative, so popping entries in
//! non-decreasing total cost makes the first satisfying pop globally minimal
//! — the classical uniform-cost argument, and it covers the edge-goal
//! variant where the popped edge itself must match.

use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::coord::Coordinate;
use crate::graph::{DirectedEdge, Vertex};
use crate::grid::{GridError, GridWorkspace};

use super::types::{FrontierEntry, Goal, PathInfo, SearchError};

/// Least-cost walk from `start` to the nearest member of a goal vertex set.
///
/// Cost of a walk: the sum of `costs[edge]` over its edges, plus
/// `rotation_penalty` times the turning angle at every step; the first
/// step turns relative to `initial_heading`. Edges absent from `costs` are
/// treated as untraversable. `rotation_penalty` must be non-negative and
/// all table costs finite and non-negative, or the optimality guarantee is
/// void. A start vertex already in the goal set yields an empty walk with
/// cost zero.
pub fn search_to_vertices(
    workspace: &GridWorkspace,
    initial_heading: Coordinate,
    start: Vertex,
    goals: &HashSet<Vertex>,
    costs: &HashMap<DirectedEdge, f64>,
    rotation_penalty: f64,
) -> Result<PathInfo, SearchError> {
    if goals.contains(&start) {
        return Ok(PathInfo {
            path: Vec::new(),
            cost: 0.0,
        });
    }
    SearchRunner::new(workspace, costs, rotation_penalty).run(
        initial_heading,
        start,
        Goal::Vertices(goals),
    )
}

/// Least-cost walk from `start` that traverses some member of a goal edge
/// set. Terminates on traversing the goal edge itself, even when its target
/// vertex is reachable more cheaply via a different edge.
pub fn search_to_edges(
    workspace: &GridWorkspace,
    initial_heading: Coordinate,
    start: Vertex,
    goals: &HashSet<DirectedEdge>,
    costs: &HashMap<DirectedEdge, f64>,
    rotation_penalty: f64,
) -> Result<PathInfo, SearchError> {
    SearchRunner::new(workspace, costs, rotation_penalty).run(
        initial_heading,
        start,
        Goal::Edges(goals),
    )
}

/// Search context: inputs plus the frontier bookkeeping.
struct SearchRunner<'a> {
    ws: &'a GridWorkspace,
    costs: &'a HashMap<DirectedEdge, f64>,
    rotation_penalty: f64,
    frontier: BinaryHeap<FrontierEntry>,
    /// Cheapest cost pushed so far per edge; gates pushes and parent updates.
    best: HashMap<DirectedEdge, f64>,
    /// Predecessor links for path reconstruction. Seed edges have no entry.
    parents: HashMap<DirectedEdge, DirectedEdge>,
    /// Edges already popped; their recorded cost is final.
    settled: HashSet<DirectedEdge>,
    seq: u64,
}

impl<'a> SearchRunner<'a> {
    fn new(
        ws: &'a GridWorkspace,
        costs: &'a HashMap<DirectedEdge, f64>,
        rotation_penalty: f64,
    ) -> Self {
        Self {
            ws,
            costs,
            rotation_penalty,
            frontier: BinaryHeap::new(),
            best: HashMap::new(),
            parents: HashMap::new(),
            settled: HashSet::new(),
            seq: 0,
        }
    }

    fn run(
        mut self,
        initial_heading: Coordinate,
        start: Vertex,
        goal: Goal<'_>,
    ) -> Result<PathInfo, SearchError> {
        let heading = initial_heading
            .normalized()
            .map_err(|_| SearchError::DegenerateHeading)?;
        // Seed: the start's outgoing edges turn relative to the caller's
        // heading instead of a prior edge's direction.
        for e in self.sorted_out_edges(start) {
            let Some(edge_cost) = self.costs.get(&e).copied() else {
                continue;
            };
            let dir = self.direction_of(e)?;
            let turn = angle_between(heading, dir);
            self.push(e, edge_cost + self.rotation_penalty * turn, None);
        }
        while let Some(entry) = self.frontier.pop() {
            if !self.settled.insert(entry.edge) {
                continue;
            }
            if goal.satisfied_by(entry.edge) {
                return Ok(self.reconstruct(entry));
            }
            let dir = self.direction_of(entry.edge)?;
            for next in self.sorted_out_edges(entry.edge.target) {
                if self.settled.contains(&next) {
                    continue;
                }
                let Some(edge_cost) = self.costs.get(&next).copied() else {
                    continue;
                };
                let next_dir = self.direction_of(next)?;
                let turn = angle_between(dir, next_dir);
                let cost = entry.cost + edge_cost + self.rotation_penalty * turn;
                self.push(next, cost, Some(entry.edge));
            }
        }
        Err(SearchError::NoPathFound)
    }

    /// Pushes `edge` at `cost` if that improves on every earlier push,
    /// recording the parent link that produced the improvement.
    fn push(&mut self, edge: DirectedEdge, cost: f64, parent: Option<DirectedEdge>) {
        let known = self.best.get(&edge).copied().unwrap_or(f64::INFINITY);
        if cost >= known {
            return;
        }
        self.best.insert(edge, cost);
        match parent {
            Some(p) => {
                self.parents.insert(edge, p);
            }
            None => {
                self.parents.remove(&edge);
            }
        }
        self.frontier.push(FrontierEntry {
            cost,
            seq: self.seq,
            edge,
        });
        self.seq += 1;
    }

    /// Out-edges in their `Ord` order, so pushes (and hence tie-breaking
    /// sequence numbers) do not depend on hash-set iteration order.
    fn sorted_out_edges(&self, v: Vertex) -> Vec<DirectedEdge> {
        let mut es: Vec<_> = self.ws.graph().out_edges(v).collect();
        es.sort_unstable();
        es
    }

    /// Unit travel direction of `e`, derived from its endpoint coordinates.
    fn direction_of(&self, e: DirectedEdge) -> Result<Coordinate, SearchError> {
        let src = self.lookup(e.source)?;
        let tgt = self.lookup(e.target)?;
        src.direction_to(tgt)
            .normalized()
            .map_err(|_| SearchError::DegenerateEdge(e))
    }

    fn lookup(&self, v: Vertex) -> Result<Coordinate, SearchError> {
        self.ws.coordinate_of(v).map_err(|err| match err {
            GridError::VertexNotFound(v) => SearchError::NotFound(v),
            GridError::CoordinateNotFound(_) => unreachable!("lookup is keyed by vertex"),
        })
    }

    /// Retraces parent links from the satisfying entry back to a seed edge.
    fn reconstruct(&self, winner: FrontierEntry) -> PathInfo {
        let mut path = vec![winner.edge];
        let mut cur = winner.edge;
        while let Some(&p) = self.parents.get(&cur) {
            path.push(p);
            cur = p;
        }
        path.reverse();
        PathInfo {
            path,
            cost: winner.cost,
        }
    }
}

/// Turning angle between two unit directions.
///
/// Both operands are already normalized, so the only failure mode of
/// `angle_to` (a zero-length operand) cannot occur.
#[inline]
fn angle_between(a: Coordinate, b: Coordinate) -> f64 {
    a.angle_to(b).unwrap_or(0.0)
}
