//! Rectangular 4-connected grid workspaces.
//!
//! Purpose
//! - Instantiate a `Graph` over a rows × cols grid and keep the bijective
//!   vertex ↔ coordinate map the search needs to turn edges into travel
//!   directions.
//!
//! Vertex id formula
//! - Cell `(i, j)` gets id `i * cols + j`, which is injective over the whole
//!   `rows × cols` index space. (The row-major stride must be `cols`; using
//!   `rows` as the stride aliases distinct cells whenever rows ≠ cols.)
//!
//! Boundary handling
//! - Wiring edges probes each cell's four neighbors through the coordinate
//!   map; a miss means "grid boundary" and is skipped inline. Missing
//!   neighbors are expected, not exceptional, so the probe is an `Option`
//!   and never an error.
//!
//! Coordinates as map keys
//! - The coordinate→vertex map compares keys with exact floating equality
//!   (see `coord`). Construction only produces integer-valued coordinates,
//!   which are exact; callers updating the mapping must keep their keys
//!   exactly representable or lookups will miss.

use std::collections::HashMap;
use std::fmt;

use crate::coord::Coordinate;
use crate::graph::{DirectedEdge, Graph, Vertex};

/// Lookup failure in the vertex ↔ coordinate bijection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridError {
    /// No coordinate registered for this vertex.
    VertexNotFound(Vertex),
    /// No vertex registered at this coordinate.
    CoordinateNotFound(Coordinate),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::VertexNotFound(v) => write!(f, "no coordinate mapped for {v}"),
            GridError::CoordinateNotFound(c) => write!(f, "no vertex mapped at {c}"),
        }
    }
}

impl std::error::Error for GridError {}

/// A grid-shaped graph plus the coordinate metadata of its vertices.
///
/// `grid_length` is caller-visible metadata (physical cell size); the
/// coordinates themselves are plain cell indices `(i, j)` and do not scale
/// with it.
#[derive(Clone, Debug)]
pub struct GridWorkspace {
    graph: Graph,
    coords: HashMap<Vertex, Coordinate>,
    vertices: HashMap<Coordinate, Vertex>,
    grid_length: f64,
}

/// Neighbor offsets: up, down, left, right in index space.
const NEIGHBOR_OFFSETS: [(f64, f64); 4] = [(-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0)];

impl GridWorkspace {
    /// Builds the full rows × cols grid: all vertices, both map directions,
    /// and a directed edge for every ordered pair of adjacent cells.
    pub fn build(rows: u32, cols: u32, grid_length: f64) -> Self {
        let mut ws = Self {
            graph: Graph::new(),
            coords: HashMap::with_capacity((rows * cols) as usize),
            vertices: HashMap::with_capacity((rows * cols) as usize),
            grid_length,
        };
        for i in 0..rows {
            for j in 0..cols {
                let v = Vertex(i * cols + j);
                ws.graph.insert_vertex(v);
                ws.set_mapping(v, Coordinate::new(i as f64, j as f64));
            }
        }
        for (&v, &c) in &ws.coords {
            for (di, dj) in NEIGHBOR_OFFSETS {
                let probe = Coordinate::new(c.x + di, c.y + dj);
                // Boundary cells simply have no neighbor there.
                let Some(&n) = ws.vertices.get(&probe) else {
                    continue;
                };
                ws.graph.insert_edge(DirectedEdge::new(v, n));
            }
        }
        ws
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    #[inline]
    pub fn grid_length(&self) -> f64 {
        self.grid_length
    }

    /// Coordinate registered for `v`.
    pub fn coordinate_of(&self, v: Vertex) -> Result<Coordinate, GridError> {
        self.coords
            .get(&v)
            .copied()
            .ok_or(GridError::VertexNotFound(v))
    }

    /// Vertex registered at `c`. Exact-equality lookup; see module docs.
    pub fn vertex_at(&self, c: Coordinate) -> Result<Vertex, GridError> {
        self.vertices
            .get(&c)
            .copied()
            .ok_or(GridError::CoordinateNotFound(c))
    }

    /// Registers `v ↔ c`, overwriting either side. Stale reverse entries of
    /// the overwritten keys are dropped so the map stays a bijection.
    pub fn set_mapping(&mut self, v: Vertex, c: Coordinate) {
        if let Some(old_c) = self.coords.insert(v, c) {
            if old_c != c {
                self.vertices.remove(&old_c);
            }
        }
        if let Some(old_v) = self.vertices.insert(c, v) {
            if old_v != v {
                self.coords.remove(&old_v);
            }
        }
    }
}
