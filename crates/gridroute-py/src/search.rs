//! Search entry points: the two goal-set overloads.

use std::collections::{HashMap, HashSet};

use pyo3::prelude::*;

use gridroute::graph::{DirectedEdge, Vertex};
use gridroute::search;

use crate::map_search_err;
use crate::types::{PyCoordinate, PyGridWorkspace, PyPathInfo, PyVertex};

/// Cost tables cross the boundary as `{(source_id, target_id): cost}`.
fn cost_table(raw: HashMap<(u32, u32), f64>) -> HashMap<DirectedEdge, f64> {
    raw.into_iter()
        .map(|((s, t), c)| (DirectedEdge::new(Vertex(s), Vertex(t)), c))
        .collect()
}

/// Least-cost walk to the nearest of a set of goal vertices.
///
/// Raises ValueError when no goal is reachable or a direction degenerates,
/// KeyError when a frontier vertex has no coordinate mapping.
#[pyfunction]
pub fn search_to_vertices(
    workspace: &PyGridWorkspace,
    initial_heading: &PyCoordinate,
    start: &PyVertex,
    goals: Vec<PyVertex>,
    costs: HashMap<(u32, u32), f64>,
    rotation_penalty: f64,
) -> PyResult<PyPathInfo> {
    let goal_set: HashSet<Vertex> = goals.into_iter().map(|v| v.inner).collect();
    search::search_to_vertices(
        &workspace.inner,
        initial_heading.inner,
        start.inner,
        &goal_set,
        &cost_table(costs),
        rotation_penalty,
    )
    .map(|info| PyPathInfo { inner: info })
    .map_err(map_search_err)
}

/// Least-cost walk that traverses one of a set of goal edges.
#[pyfunction]
pub fn search_to_edges(
    workspace: &PyGridWorkspace,
    initial_heading: &PyCoordinate,
    start: &PyVertex,
    goals: Vec<(u32, u32)>,
    costs: HashMap<(u32, u32), f64>,
    rotation_penalty: f64,
) -> PyResult<PyPathInfo> {
    let goal_set: HashSet<DirectedEdge> = goals
        .into_iter()
        .map(|(s, t)| DirectedEdge::new(Vertex(s), Vertex(t)))
        .collect();
    search::search_to_edges(
        &workspace.inner,
        initial_heading.inner,
        start.inner,
        &goal_set,
        &cost_table(costs),
        rotation_penalty,
    )
    .map(|info| PyPathInfo { inner: info })
    .map_err(map_search_err)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(search_to_vertices, m)?)?;
    m.add_function(wrap_pyfunction!(search_to_edges, m)?)?;
    Ok(())
}
