//! Directed multigraph: vertex/edge value types and the indexed container.
//!
//! Purpose
//! - Hold the topology the path search runs over, with O(degree) queries in
//!   both directions instead of scans over the whole edge set.
//!
//! Concurrency
//! - No interior mutability. Shared `&Graph` reads are safe from any number
//!   of threads; mutation requires `&mut Graph`, so the single-writer
//!   discipline is enforced by the borrow checker rather than by locks.

mod digraph;
mod types;

pub use digraph::Graph;
pub use types::{DirectedEdge, Vertex};
