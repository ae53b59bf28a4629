//! PyO3 bindings for the `gridroute` crate.
//!
//! Notes
//! - Keep bindings thin and predictable; values cross the boundary as
//!   simple tuples and dicts, classes wrap the core types one-to-one.
//! - All core failures become Python exceptions (KeyError for missing
//!   lookups, ValueError otherwise); none terminate the process.

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;

use gridroute::coord::DegenerateVector;
use gridroute::search::SearchError;

mod search;
mod types;

pub(crate) fn map_degenerate(err: DegenerateVector) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub(crate) fn map_search_err(err: SearchError) -> PyErr {
    match err {
        SearchError::NotFound(_) => PyKeyError::new_err(err.to_string()),
        SearchError::NoPathFound
        | SearchError::DegenerateHeading
        | SearchError::DegenerateEdge(_) => PyValueError::new_err(err.to_string()),
    }
}

#[pymodule]
fn gridroute_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", gridroute::VERSION)?;
    types::register(m)?;
    search::register(m)?;
    Ok(())
}
