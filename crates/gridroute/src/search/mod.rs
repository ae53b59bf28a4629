//! Rotation-penalized least-cost path search.
//!
//! Purpose
//! - Route a single agent over a `GridWorkspace`-backed graph from a start
//!   vertex to the nearest of several candidate goals, where turning costs
//!   extra: total cost is the sum of per-edge table costs plus a penalty
//!   coefficient times the turning angle at every step.
//!
//! Two goal variants share one runner: goal *vertices* (stop when a popped
//! edge's target is a goal) and goal *edges* (stop when the popped edge
//! itself is a goal).
//!
//! The core is synchronous with no suspension points; bounded search time,
//! if needed, must be layered on top by the caller.

mod types;
mod ucs;

pub use types::{PathInfo, SearchError};
pub use ucs::{search_to_edges, search_to_vertices};

#[cfg(test)]
mod tests;
