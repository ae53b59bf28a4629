//! Grid pathfinding with rotation penalties.
//!
//! A directed-graph container plus a rotation-aware shortest-path search:
//! routes a single agent across a rectangular 4-connected grid from a start
//! vertex to the nearest of several candidate goals, where a path pays its
//! per-edge costs plus a penalty proportional to how much the agent turns
//! at each step.
//!
//! Layout
//! - `coord`: planar points/vectors with exact-equality map-key semantics.
//! - `graph`: vertex/edge value types and the indexed directed graph.
//! - `grid`: rows × cols workspaces with a vertex ↔ coordinate bijection.
//! - `search`: the uniform-cost, edge-state frontier search.

pub mod coord;
pub mod graph;
pub mod grid;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::coord::{Coordinate, DegenerateVector};
    pub use crate::graph::{DirectedEdge, Graph, Vertex};
    pub use crate::grid::{GridError, GridWorkspace};
    pub use crate::search::{search_to_edges, search_to_vertices, PathInfo, SearchError};
}
