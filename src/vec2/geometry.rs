//! Geometric products and the projection/refraction family.
//!
//! The projection family is deliberately unguarded: a zero-length reference
//! vector produces NaN coordinates through ordinary IEEE-754 division
//! rather than an error. Refraction is the one partial operation and
//! signals total internal reflection with `None`.

use super::Vec2;

impl Vec2 {
    /// Dot product, `x·vx + y·vy`.
    #[inline]
    pub fn dot(self, v: Vec2) -> f64 {
        self.x * v.x + self.y * v.y
    }

    /// Perp-product `x·vy − y·vx`: the signed determinant of the 2×2
    /// matrix formed by the two vectors (the 2D analogue of a cross
    /// product, a scalar rather than a vector).
    #[inline]
    pub fn cross(self, v: Vec2) -> f64 {
        self.x * v.y - self.y * v.x
    }

    /// Rotation by 90° counter-clockwise, `(−y, x)`.
    ///
    /// For any `a`: `a.dot(a.perp()) == 0` and
    /// `a.cross(a.perp()) == a.norm2()`.
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Orthogonal projection of `self` onto `b`.
    ///
    /// Computes `b · (dot(self, b) / dot(b, b))`. Undefined when `b` is the
    /// zero vector: the division produces NaN coordinates, not an error.
    /// Callers must ensure `b ≠ 0` where correctness matters.
    #[inline]
    pub fn project_to(self, b: Vec2) -> Self {
        b.scale(self.dot(b) / b.dot(b))
    }

    /// Component of `self` orthogonal to `b`, `self − project_to(b)`.
    ///
    /// For any non-zero `b`, `project_to(b) + reject_from(b)` recomposes
    /// `self` within [`EPS`](super::EPS).
    #[inline]
    pub fn reject_from(self, b: Vec2) -> Self {
        self.sub(self.project_to(b))
    }

    /// Reflection of `self` across the line spanned by `b`,
    /// `2·project_to(b) − self`.
    ///
    /// Reflecting twice across the same axis returns the original vector
    /// within tolerance.
    #[inline]
    pub fn reflect(self, b: Vec2) -> Self {
        self.project_to(b).scale(2.0).sub(self)
    }

    /// Refraction of the incident direction `self` at a surface with unit
    /// normal `normal`, where `eta` is the ratio of refractive indices
    /// (incident / transmitted).
    ///
    /// Returns `None` when the ray undergoes total internal reflection
    /// (no physically meaningful refraction exists), otherwise
    /// `eta·d − (eta·dot + √k)·normal` with `k = 1 − eta²·(1 − dot²)`.
    ///
    /// Both `self` and `normal` should be unit vectors; this is not
    /// enforced.
    #[inline]
    pub fn refract(self, normal: Vec2, eta: f64) -> Option<Vec2> {
        let d = normal.dot(self);
        let k = 1.0 - eta * eta * (1.0 - d * d);
        if k < 0.0 {
            return None;
        }
        Some(self.scale(eta).sub(normal.scale(eta * d + k.sqrt())))
    }
}
