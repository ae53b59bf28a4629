//! Python-visible wrappers for the core value types and the workspace.
//!
//! Wrappers stay thin: each holds the core value and forwards to it, and
//! `__repr__` reuses the core `Display` renderings so diagnostics look the
//! same on both sides of the boundary.

use pyo3::exceptions::PyKeyError;
use pyo3::prelude::*;

use gridroute::coord::Coordinate;
use gridroute::graph::{DirectedEdge, Vertex};
use gridroute::grid::GridWorkspace;
use gridroute::search::PathInfo;

use crate::map_degenerate;

#[pyclass(name = "Coordinate")]
#[derive(Clone)]
pub struct PyCoordinate {
    pub inner: Coordinate,
}

#[pymethods]
impl PyCoordinate {
    #[new]
    fn new(x: f64, y: f64) -> Self {
        Self {
            inner: Coordinate::new(x, y),
        }
    }

    #[getter]
    fn x(&self) -> f64 {
        self.inner.x
    }

    #[getter]
    fn y(&self) -> f64 {
        self.inner.y
    }

    /// Unit vector with the same direction; raises ValueError on a
    /// zero-length vector.
    fn normalized(&self) -> PyResult<PyCoordinate> {
        let unit = self.inner.normalized().map_err(map_degenerate)?;
        Ok(PyCoordinate { inner: unit })
    }

    /// Angle in [0, π] between self and other, both taken as vectors.
    fn angle_to(&self, other: &PyCoordinate) -> PyResult<f64> {
        self.inner.angle_to(other.inner).map_err(map_degenerate)
    }

    fn __add__(&self, other: &PyCoordinate) -> PyCoordinate {
        PyCoordinate {
            inner: self.inner + other.inner,
        }
    }

    fn __sub__(&self, other: &PyCoordinate) -> PyCoordinate {
        PyCoordinate {
            inner: self.inner - other.inner,
        }
    }

    fn __eq__(&self, other: &PyCoordinate) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

#[pyclass(name = "Vertex")]
#[derive(Clone)]
pub struct PyVertex {
    pub inner: Vertex,
}

#[pymethods]
impl PyVertex {
    #[new]
    fn new(id: u32) -> Self {
        Self { inner: Vertex(id) }
    }

    #[getter]
    fn id(&self) -> u32 {
        self.inner.id()
    }

    fn __eq__(&self, other: &PyVertex) -> bool {
        self.inner == other.inner
    }

    fn __hash__(&self) -> u64 {
        self.inner.id() as u64
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

#[pyclass(name = "DirectedEdge")]
#[derive(Clone)]
pub struct PyDirectedEdge {
    pub inner: DirectedEdge,
}

#[pymethods]
impl PyDirectedEdge {
    #[new]
    fn new(source: PyVertex, target: PyVertex) -> Self {
        Self {
            inner: DirectedEdge::new(source.inner, target.inner),
        }
    }

    #[getter]
    fn source(&self) -> PyVertex {
        PyVertex {
            inner: self.inner.source,
        }
    }

    #[getter]
    fn target(&self) -> PyVertex {
        PyVertex {
            inner: self.inner.target,
        }
    }

    fn __eq__(&self, other: &PyDirectedEdge) -> bool {
        self.inner == other.inner
    }

    fn __hash__(&self) -> u64 {
        ((self.inner.source.id() as u64) << 32) | self.inner.target.id() as u64
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

#[pyclass(name = "GridWorkspace")]
pub struct PyGridWorkspace {
    pub inner: GridWorkspace,
}

#[pymethods]
impl PyGridWorkspace {
    #[new]
    fn new(rows: u32, cols: u32, grid_length: f64) -> Self {
        Self {
            inner: GridWorkspace::build(rows, cols, grid_length),
        }
    }

    #[getter]
    fn grid_length(&self) -> f64 {
        self.inner.grid_length()
    }

    fn vertex_count(&self) -> usize {
        self.inner.graph().vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.inner.graph().edge_count()
    }

    /// Vertex registered at a coordinate; raises KeyError on a miss.
    fn vertex_at(&self, coordinate: &PyCoordinate) -> PyResult<PyVertex> {
        self.inner
            .vertex_at(coordinate.inner)
            .map(|v| PyVertex { inner: v })
            .map_err(|err| PyKeyError::new_err(err.to_string()))
    }

    /// Coordinate registered for a vertex; raises KeyError on a miss.
    fn coordinate_of(&self, vertex: &PyVertex) -> PyResult<PyCoordinate> {
        self.inner
            .coordinate_of(vertex.inner)
            .map(|c| PyCoordinate { inner: c })
            .map_err(|err| PyKeyError::new_err(err.to_string()))
    }

    /// Registers vertex ↔ coordinate, overwriting either side.
    fn set_mapping(&mut self, vertex: &PyVertex, coordinate: &PyCoordinate) {
        self.inner.set_mapping(vertex.inner, coordinate.inner);
    }
}

#[pyclass(name = "PathInfo")]
pub struct PyPathInfo {
    pub inner: PathInfo,
}

#[pymethods]
impl PyPathInfo {
    #[getter]
    fn path(&self) -> Vec<PyDirectedEdge> {
        self.inner
            .path
            .iter()
            .map(|&e| PyDirectedEdge { inner: e })
            .collect()
    }

    #[getter]
    fn cost(&self) -> f64 {
        self.inner.cost
    }

    fn __repr__(&self) -> String {
        format!("<PathInfo: {} edges, cost {}>", self.inner.path.len(), self.inner.cost)
    }
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<PyCoordinate>()?;
    m.add_class::<PyVertex>()?;
    m.add_class::<PyDirectedEdge>()?;
    m.add_class::<PyGridWorkspace>()?;
    m.add_class::<PyPathInfo>()?;
    Ok(())
}
