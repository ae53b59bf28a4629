//! Planar coordinates and direction math.
//!
//! Purpose
//! - Provide the single 2D value type used for grid cell positions and for
//!   travel directions (unit vectors between cell centers).
//!
//! Equality and hashing (read before using `Coordinate` as a map key)
//! - Equality is exact floating comparison, no epsilon. This is deliberate:
//!   the grid workspace keys its coordinate→vertex map on `Coordinate`, and
//!   grids are built from integer-valued coordinates, which compare exactly.
//!   Any transformation that introduces rounding makes map lookups miss.
//! - `-0.0` is canonicalized to `0.0` for hashing and ordering so the
//!   `Eq`/`Hash`/`Ord` contracts stay consistent with `==`.
//! - Non-finite components are outside the contract; constructors do not
//!   reject them, callers must not produce them.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use nalgebra::Vector2;

/// Error from normalizing a zero-length vector.
///
/// A grid with coincident vertex coordinates, or a zero initial heading,
/// produces this; callers decide the fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DegenerateVector;

impl fmt::Display for DegenerateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot normalize a zero-length vector")
    }
}

impl std::error::Error for DegenerateVector {}

/// A 2D point or vector with exact-equality semantics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

/// Maps `-0.0` to `0.0` so hash/order agree with `==` on signed zeros.
#[inline]
fn canonical(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

impl Coordinate {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub(crate) fn as_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Vector pointing from `self` to `other`.
    #[inline]
    pub fn direction_to(&self, other: Coordinate) -> Coordinate {
        other - *self
    }

    /// Vector pointing from `other` to `self`.
    #[inline]
    pub fn direction_from(&self, other: Coordinate) -> Coordinate {
        *self - other
    }

    /// Euclidean magnitude.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.as_vector().norm()
    }

    /// Unit vector with the same direction, or `DegenerateVector` if the
    /// magnitude is zero.
    pub fn normalized(&self) -> Result<Coordinate, DegenerateVector> {
        let n = self.norm();
        if n == 0.0 {
            return Err(DegenerateVector);
        }
        Ok(Coordinate::new(self.x / n, self.y / n))
    }

    /// Angle in `[0, π]` between `self` and `other`, both taken as vectors.
    ///
    /// Defined as the arccos of the dot product of the two unit vectors.
    /// The dot is clamped to `[-1, 1]` first: floating round-off on nearly
    /// (anti-)parallel vectors can push it just outside the domain of acos.
    pub fn angle_to(&self, other: Coordinate) -> Result<f64, DegenerateVector> {
        let a = self.normalized()?;
        let b = other.normalized()?;
        let dot = a.as_vector().dot(&b.as_vector()).clamp(-1.0, 1.0);
        Ok(dot.acos())
    }
}

impl Add for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// Finite components only; NaN would break reflexivity.
impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical(self.x).to_bits().hash(state);
        canonical(self.y).to_bits().hash(state);
    }
}

impl PartialOrd for Coordinate {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    /// Lexicographic: x first, then y.
    fn cmp(&self, other: &Self) -> Ordering {
        canonical(self.x)
            .total_cmp(&canonical(other.x))
            .then_with(|| canonical(self.y).total_cmp(&canonical(other.y)))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Coordinate: {}, {}>", self.x, self.y)
    }
}
