//! The [`Vec2`] value type: construction, algebra, and scalar queries.
//!
//! Geometric operations (projection family, refraction) live in
//! `geometry.rs`, transforms and the in-place variants in `transform.rs`;
//! all of them are inherent methods on [`Vec2`].

mod geometry;
mod transform;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Absolute tolerance used by [`Vec2::approx_eq`], [`Vec2::is_parallel`],
/// and [`Vec2::is_unit`].
///
/// Fixed by contract. Consumers compare against this exact value, so it is
/// a documented constant rather than a tunable.
pub const EPS: f64 = 1e-13;

/// A 2D vector (or point) with `f64` coordinates.
///
/// Plain value type: no hidden state, no identity beyond the coordinates.
/// The serialized form is the two-field record `{x, y}`.
///
/// # Examples
/// ```
/// use vector2d::Vec2;
///
/// let v = Vec2::new(1.0, 2.0).add(Vec2::new(3.0, 4.0));
/// assert_eq!(v, Vec2::new(4.0, 6.0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Vec2 {
    /// The origin, `(0, 0)`.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Creates a vector from its two coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector from the first two elements of a slice.
    ///
    /// Lenient: missing elements default to `0.0`, extra elements are
    /// ignored. Never panics, never errors — malformed input degrades to
    /// the origin rather than halting the caller.
    #[inline]
    pub fn from_slice(s: &[f64]) -> Self {
        Self {
            x: s.first().copied().unwrap_or(0.0),
            y: s.get(1).copied().unwrap_or(0.0),
        }
    }

    /// Creates a vector with each coordinate independently drawn from a
    /// uniform distribution over `[0, 1)`.
    #[inline]
    pub fn random() -> Self {
        Self::new(fastrand::f64(), fastrand::f64())
    }

    /// Creates the displacement vector from point `a` to point `b`.
    #[inline]
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        b.sub(a)
    }

    /// Maps barycentric coordinates `(u, v)` over triangle `(a, b, c)` to a
    /// Cartesian point: `a + (b − a)·u + (c − a)·v`.
    ///
    /// `u` and `v` are not validated; values outside the triangle
    /// extrapolate and are well-defined.
    #[inline]
    pub fn from_barycentric(a: Vec2, b: Vec2, c: Vec2, u: f64, v: f64) -> Self {
        a.add(b.sub(a).scale(u)).add(c.sub(a).scale(v))
    }

    // =========================================================================
    // ALGEBRA
    // =========================================================================

    /// Component-wise sum.
    #[inline]
    pub fn add(self, v: Vec2) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }

    /// Component-wise difference.
    #[inline]
    pub fn sub(self, v: Vec2) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }

    /// Negation of both coordinates.
    #[inline]
    pub fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Multiplication by a scalar.
    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    /// Hadamard (component-wise) product. Not the dot product — see
    /// [`Vec2::dot`].
    #[inline]
    pub fn prod(self, v: Vec2) -> Self {
        Self::new(self.x * v.x, self.y * v.y)
    }

    // =========================================================================
    // SCALAR QUERIES
    // =========================================================================

    /// Angle from the positive x axis, `atan2(y, x)`, in `(−π, π]`.
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Euclidean length.
    #[inline]
    pub fn norm(self) -> f64 {
        self.norm2().sqrt()
    }

    /// Squared Euclidean length. Avoids the square root when only relative
    /// magnitude comparisons are needed.
    #[inline]
    pub fn norm2(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean distance to another vector.
    #[inline]
    pub fn distance(self, v: Vec2) -> f64 {
        self.sub(v).norm()
    }

    /// Whether the two vectors span the same line, `|cross| <` [`EPS`].
    #[inline]
    pub fn is_parallel(self, v: Vec2) -> bool {
        self.cross(v).abs() < EPS
    }

    /// Whether the vector has unit length, `|norm² − 1| <` [`EPS`].
    #[inline]
    pub fn is_unit(self) -> bool {
        (self.norm2() - 1.0).abs() < EPS
    }

    /// Value equality within [`EPS`]: bitwise-equal coordinates
    /// short-circuit, otherwise both coordinate differences must be below
    /// the tolerance in absolute value.
    #[inline]
    pub fn approx_eq(self, v: Vec2) -> bool {
        (self.x == v.x && self.y == v.y)
            || ((self.x - v.x).abs() < EPS && (self.y - v.y).abs() < EPS)
    }

    /// The coordinates as an ordered pair `[x, y]`.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from(a: [f64; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for [f64; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        v.to_array()
    }
}

impl From<Vec2> for (f64, f64) {
    #[inline]
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// =============================================================================
// OPERATOR TRAITS
// =============================================================================

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::add(self, rhs)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.add_mut(rhs);
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::sub(self, rhs)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.sub_mut(rhs);
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::neg(self)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, s: f64) -> Vec2 {
        self.scale(s)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    #[inline]
    fn mul(self, v: Vec2) -> Vec2 {
        v.scale(self)
    }
}

impl MulAssign<f64> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, s: f64) {
        self.scale_mut(s);
    }
}
