//! Vertex and edge value types.
//!
//! Kept small and explicit so the container in `digraph` stays easy to read.

use std::fmt;

/// Opaque vertex identity. Ids are caller-assigned; the library never
/// generates them and never checks uniqueness beyond set semantics.
///
/// Equality, ordering and hashing all derive from the id alone. Hashing is
/// structural, so the full `u32` range is usable (an earlier packed-word
/// edge hash required ids to fit 31 bits; that constraint is gone).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex(pub u32);

impl Vertex {
    #[inline]
    pub fn id(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Vertex: {}>", self.0)
    }
}

/// Ordered connection from `source` to `target`.
///
/// Direction matters: `(a, b) != (b, a)`. The derived ordering is
/// source-major, then target, matching the field order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectedEdge {
    pub source: Vertex,
    pub target: Vertex,
}

impl DirectedEdge {
    #[inline]
    pub fn new(source: Vertex, target: Vertex) -> Self {
        Self { source, target }
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<DirectedEdge: {}, {}>", self.source.0, self.target.0)
    }
}
