// core/vector.rs
//
// 2D value-type vector used by every body. Backed by glam's f64 vector;
// the extension trait adds the zero-safe and per-axis helpers the
// simulation relies on.

pub use glam::DVec2 as Vector2;

/// A clamp bound: either one scalar broadcast to both axes, or a per-axis vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Scalar(f64),
    Axis(Vector2),
}

impl Bound {
    #[inline]
    pub fn to_vector(self) -> Vector2 {
        match self {
            Bound::Scalar(s) => Vector2::splat(s),
            Bound::Axis(v) => v,
        }
    }
}

impl From<f64> for Bound {
    fn from(s: f64) -> Self {
        Bound::Scalar(s)
    }
}

impl From<Vector2> for Bound {
    fn from(v: Vector2) -> Self {
        Bound::Axis(v)
    }
}

/// Value-semantics helpers on top of `Vector2`. Every method returns a new vector.
pub trait VectorExt: Sized {
    /// Multiply both axes by a scalar.
    fn scale(self, s: f64) -> Self;
    /// Component-wise multiply.
    fn scale_by(self, v: Self) -> Self;
    /// Divide both axes by a scalar. Not guarded: a zero divisor yields inf/NaN.
    fn divide(self, s: f64) -> Self;
    /// Component-wise divide. Not guarded.
    fn divide_by(self, v: Self) -> Self;
    /// Euclidean distance to `other`.
    fn distance_to(self, other: Self) -> f64;
    /// Unit vector in the same direction, or the zero vector when the length is exactly zero.
    fn normalized(self) -> Self;
    /// Clamp each axis into `[min, max]`. Bounds may be scalars or vectors.
    fn clamp_to(self, min: impl Into<Bound>, max: impl Into<Bound>) -> Self;
}

impl VectorExt for Vector2 {
    #[inline]
    fn scale(self, s: f64) -> Self {
        self * s
    }

    #[inline]
    fn scale_by(self, v: Self) -> Self {
        self * v
    }

    #[inline]
    fn divide(self, s: f64) -> Self {
        self / s
    }

    #[inline]
    fn divide_by(self, v: Self) -> Self {
        self / v
    }

    #[inline]
    fn distance_to(self, other: Self) -> f64 {
        (other - self).length()
    }

    #[inline]
    fn normalized(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return Vector2::ZERO;
        }
        self / len
    }

    #[inline]
    fn clamp_to(self, min: impl Into<Bound>, max: impl Into<Bound>) -> Self {
        // max-then-min, so an inverted range resolves to `max` instead of panicking
        self.max(min.into().to_vector()).min(max.into().to_vector())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero_is_zero() {
        let n = Vector2::ZERO.normalized();
        assert_eq!(n, Vector2::ZERO);
        assert!(!n.x.is_nan() && !n.y.is_nan());
    }

    #[test]
    fn normalize_has_unit_length() {
        let n = Vector2::new(3.0, 4.0).normalized();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(4.0, 5.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn clamp_scalar_broadcasts() {
        let v = Vector2::new(0.9, -2.0).clamp_to(-0.4, 0.4);
        assert_eq!(v, Vector2::new(0.4, -0.4));
    }

    #[test]
    fn clamp_per_axis() {
        let v = Vector2::new(5.0, 5.0).clamp_to(Vector2::new(0.0, 0.0), Vector2::new(1.0, 10.0));
        assert_eq!(v, Vector2::new(1.0, 5.0));
    }

    #[test]
    fn clamp_mixed_bounds() {
        let v = Vector2::new(-3.0, 3.0).clamp_to(-1.0, Vector2::new(2.0, 2.5));
        assert_eq!(v, Vector2::new(-1.0, 2.5));
    }

    #[test]
    fn scale_and_divide() {
        let v = Vector2::new(2.0, -4.0);
        assert_eq!(v.scale(0.5), Vector2::new(1.0, -2.0));
        assert_eq!(v.scale_by(Vector2::new(2.0, 0.5)), Vector2::new(4.0, -2.0));
        assert_eq!(v.divide(2.0), Vector2::new(1.0, -2.0));
        assert_eq!(v.divide_by(Vector2::new(4.0, -4.0)), Vector2::new(0.5, 1.0));
    }

    #[test]
    fn divide_by_zero_is_unguarded() {
        let v = Vector2::new(1.0, 0.0).divide(0.0);
        assert!(v.x.is_infinite());
        assert!(v.y.is_nan());
    }
}
