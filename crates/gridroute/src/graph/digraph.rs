//! Directed graph container with paired adjacency and incidence indices.
//!
//! Four derived indices are maintained in lockstep with the vertex and edge
//! sets: forward adjacency, inverse adjacency, outgoing-incident edges and
//! incoming-incident edges. Every mutating operation updates all of them
//! before returning; the maps are never handed out mutably, so no caller can
//! observe or create a partially updated state.
//!
//! Queries on unknown vertices return empty sets rather than errors: asking
//! for the successors of a vertex the graph has never seen is an ordinary
//! question with an ordinary answer.

use std::collections::{HashMap, HashSet};

use super::types::{DirectedEdge, Vertex};

/// Directed graph over caller-assigned vertex ids.
///
/// Invariant: every edge's endpoints are members of the vertex set at
/// insertion time, and each edge appears in exactly the four index buckets
/// its endpoints imply. `remove_vertex` relaxes the first clause for
/// incoming edges; see its docs.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: HashSet<Vertex>,
    edges: HashSet<DirectedEdge>,
    successors: HashMap<Vertex, HashSet<Vertex>>,
    predecessors: HashMap<Vertex, HashSet<Vertex>>,
    out_edges: HashMap<Vertex, HashSet<DirectedEdge>>,
    in_edges: HashMap<Vertex, HashSet<DirectedEdge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains_vertex(&self, v: Vertex) -> bool {
        self.vertices.contains(&v)
    }

    #[inline]
    pub fn contains_edge(&self, e: DirectedEdge) -> bool {
        self.edges.contains(&e)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds a vertex. Idempotent; touches the vertex set only.
    pub fn insert_vertex(&mut self, v: Vertex) {
        self.vertices.insert(v);
    }

    /// Adds an edge, inserting either endpoint if absent, and updates all
    /// four indices. Idempotent.
    pub fn insert_edge(&mut self, e: DirectedEdge) {
        self.vertices.insert(e.source);
        self.vertices.insert(e.target);
        self.edges.insert(e);
        self.successors.entry(e.source).or_default().insert(e.target);
        self.predecessors.entry(e.target).or_default().insert(e.source);
        self.out_edges.entry(e.source).or_default().insert(e);
        self.in_edges.entry(e.target).or_default().insert(e);
    }

    /// Removes an edge from the edge set and all four indices. Removing an
    /// absent edge is a no-op. Endpoints stay in the vertex set.
    pub fn remove_edge(&mut self, e: DirectedEdge) {
        if !self.edges.remove(&e) {
            return;
        }
        if let Some(s) = self.successors.get_mut(&e.source) {
            s.remove(&e.target);
        }
        if let Some(p) = self.predecessors.get_mut(&e.target) {
            p.remove(&e.source);
        }
        if let Some(o) = self.out_edges.get_mut(&e.source) {
            o.remove(&e);
        }
        if let Some(i) = self.in_edges.get_mut(&e.target) {
            i.remove(&e);
        }
    }

    /// Removes a vertex and every edge it is the *source* of.
    ///
    /// Policy: outgoing edges are fully cleaned up (edge set, the target's
    /// incoming bucket, the target's predecessor link), and all four of the
    /// vertex's own index buckets are dropped. Edges where the vertex is
    /// only a *target* are left in the edge set and in their source's
    /// buckets — they now point at an absent vertex and the caller
    /// reconciles them, typically with `remove_edge`. Removing an unknown
    /// vertex is a no-op.
    pub fn remove_vertex(&mut self, v: Vertex) {
        if !self.vertices.remove(&v) {
            return;
        }
        if let Some(outgoing) = self.out_edges.remove(&v) {
            for e in outgoing {
                self.edges.remove(&e);
                if let Some(i) = self.in_edges.get_mut(&e.target) {
                    i.remove(&e);
                }
                if let Some(p) = self.predecessors.get_mut(&e.target) {
                    p.remove(&v);
                }
            }
        }
        self.successors.remove(&v);
        self.predecessors.remove(&v);
        self.in_edges.remove(&v);
    }

    /// Vertices reachable from `v` by exactly one outgoing edge. Empty for
    /// unknown vertices.
    pub fn successors(&self, v: Vertex) -> HashSet<Vertex> {
        self.successors.get(&v).cloned().unwrap_or_default()
    }

    /// Vertices with an edge into `v`. Empty for unknown vertices.
    pub fn predecessors(&self, v: Vertex) -> HashSet<Vertex> {
        self.predecessors.get(&v).cloned().unwrap_or_default()
    }

    /// Edges with `v` as source. The search expands over this bucket, so it
    /// is exposed by reference; complexity is the out-degree of `v`.
    pub fn out_edges(&self, v: Vertex) -> impl Iterator<Item = DirectedEdge> + '_ {
        self.out_edges.get(&v).into_iter().flatten().copied()
    }

    /// Edges with `v` as target.
    pub fn in_edges(&self, v: Vertex) -> impl Iterator<Item = DirectedEdge> + '_ {
        self.in_edges.get(&v).into_iter().flatten().copied()
    }

    /// Iterates the vertex set in arbitrary order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().copied()
    }

    /// Iterates the edge set in arbitrary order.
    pub fn edges(&self) -> impl Iterator<Item = DirectedEdge> + '_ {
        self.edges.iter().copied()
    }
}
