//! Normalization, rotation, interpolation, and the in-place variants.
//!
//! Every `_mut` method performs the same arithmetic, statement for
//! statement, as its pure counterpart, so the two calling conventions are
//! bit-identical. The mutating forms return `&mut Self` for chaining and
//! never allocate.

use super::Vec2;

impl Vec2 {
    /// Unit-length vector in the same direction.
    ///
    /// Degenerate policy: when the squared length is exactly `0` or exactly
    /// `1`, the receiver is returned unchanged — no division is performed.
    /// This is an identity short-circuit, not an error; callers must not
    /// assume the result of a normalize is always freshly computed.
    #[inline]
    pub fn normalize(self) -> Self {
        let n2 = self.norm2();
        if n2 == 0.0 || n2 == 1.0 {
            return self;
        }
        let inv = 1.0 / n2.sqrt();
        Self::new(self.x * inv, self.y * inv)
    }

    /// Rotation by `angle` radians counter-clockwise.
    ///
    /// Preserves [`norm`](Vec2::norm) and advances [`angle`](Vec2::angle)
    /// by the given value (wrapping mod 2π).
    #[inline]
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Linear interpolation toward `v`: `self + t·(v − self)`.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp(self, v: Vec2, t: f64) -> Self {
        Self::new(self.x + t * (v.x - self.x), self.y + t * (v.y - self.y))
    }

    /// Applies a binary scalar function component-wise against `v`:
    /// `(f(x, vx), f(y, vy))`.
    ///
    /// The escape hatch for component-wise operations the type does not
    /// provide (min, max, abs, …). Pass [`Vec2::ZERO`] when the function
    /// only uses the receiver's coordinates.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vec2;
    ///
    /// let lo = Vec2::new(3.0, -1.0).apply(Vec2::new(2.0, 4.0), f64::min);
    /// assert_eq!(lo, Vec2::new(2.0, -1.0));
    /// ```
    #[inline]
    pub fn apply<F>(self, v: Vec2, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        Self::new(f(self.x, v.x), f(self.y, v.y))
    }

    // =========================================================================
    // IN-PLACE VARIANTS
    // =========================================================================

    /// Copies `v`'s coordinates into the receiver.
    #[inline]
    pub fn set(&mut self, v: Vec2) -> &mut Self {
        self.x = v.x;
        self.y = v.y;
        self
    }

    /// In-place [`add`](Vec2::add).
    #[inline]
    pub fn add_mut(&mut self, v: Vec2) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self
    }

    /// In-place [`sub`](Vec2::sub).
    #[inline]
    pub fn sub_mut(&mut self, v: Vec2) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self
    }

    /// In-place [`neg`](Vec2::neg).
    #[inline]
    pub fn neg_mut(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    /// In-place [`scale`](Vec2::scale).
    #[inline]
    pub fn scale_mut(&mut self, s: f64) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self
    }

    /// In-place [`prod`](Vec2::prod).
    #[inline]
    pub fn prod_mut(&mut self, v: Vec2) -> &mut Self {
        self.x *= v.x;
        self.y *= v.y;
        self
    }

    /// In-place [`normalize`](Vec2::normalize), with the same degenerate
    /// short-circuit: a receiver of squared length exactly `0` or `1` is
    /// left untouched.
    #[inline]
    pub fn normalize_mut(&mut self) -> &mut Self {
        let n2 = self.norm2();
        if n2 != 0.0 && n2 != 1.0 {
            let inv = 1.0 / n2.sqrt();
            self.x *= inv;
            self.y *= inv;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_normalize_unit_result() {
        let v = Vec2::new(3.0, 4.0).normalize();
        assert!(v.approx_eq(Vec2::new(0.6, 0.8)));
        assert_relative_eq!(v.norm(), 1.0);
    }

    #[test]
    fn test_normalize_degenerate_short_circuit() {
        // Zero and unit vectors come back bit-unchanged.
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
        let unit = Vec2::new(0.0, 1.0);
        assert_eq!(unit.normalize(), unit);
    }

    #[test]
    fn test_rotate_preserves_norm_and_advances_angle() {
        let v = Vec2::new(2.0, 1.0);
        let theta = 0.7;
        let r = v.rotate(theta);
        assert_relative_eq!(r.norm(), v.norm(), epsilon = 1e-12);
        let advanced = (r.angle() - v.angle()).rem_euclid(TAU);
        assert_relative_eq!(advanced, theta, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let r = Vec2::new(1.0, 0.0).rotate(FRAC_PI_2);
        assert!(r.approx_eq(Vec2::new(0.0, 1.0)));
        let half = Vec2::new(1.0, 0.0).rotate(PI);
        assert!(half.approx_eq(Vec2::new(-1.0, 0.0)));
    }

    #[test]
    fn test_lerp_endpoints_and_extrapolation() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(5.0, -2.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert!(a.lerp(b, 0.5).approx_eq(Vec2::new(3.0, 0.0)));
        // t outside [0, 1] extrapolates: 2b − a
        assert!(a.lerp(b, 2.0).approx_eq(Vec2::new(9.0, -6.0)));
    }

    #[test]
    fn test_apply_componentwise() {
        let a = Vec2::new(-3.0, 4.0);
        assert_eq!(a.apply(Vec2::ZERO, f64::max), Vec2::new(0.0, 4.0));
        let abs = a.apply(Vec2::ZERO, |x, _| x.abs());
        assert_eq!(abs, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_set_and_chaining() {
        let mut v = Vec2::ZERO;
        v.set(Vec2::new(1.0, 2.0)).add_mut(Vec2::new(1.0, 1.0));
        assert_eq!(v, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_in_place_matches_pure() {
        let a = Vec2::new(1.5, -2.5);
        let b = Vec2::new(-0.25, 4.0);

        let mut m = a;
        m.add_mut(b);
        assert_eq!(m, a.add(b));

        let mut m = a;
        m.sub_mut(b);
        assert_eq!(m, a.sub(b));

        let mut m = a;
        m.neg_mut();
        assert_eq!(m, a.neg());

        let mut m = a;
        m.scale_mut(3.25);
        assert_eq!(m, a.scale(3.25));

        let mut m = a;
        m.prod_mut(b);
        assert_eq!(m, a.prod(b));

        let mut m = a;
        m.normalize_mut();
        assert_eq!(m, a.normalize());
    }

    #[test]
    fn test_normalize_mut_degenerate_untouched() {
        let mut z = Vec2::ZERO;
        z.normalize_mut();
        assert_eq!(z, Vec2::ZERO);

        let mut unit = Vec2::new(1.0, 0.0);
        unit.normalize_mut();
        assert_eq!(unit, Vec2::new(1.0, 0.0));
    }
}
