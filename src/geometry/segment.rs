//! Finite line segments.

use std::fmt;

use num::{One, Zero};

use crate::error::{parameter_out_of_range, Result};
use crate::geometry::point::AffinePoint;
use crate::geometry::vector::Directional;
use crate::geometry::{Point2, Point3};

/// A finite segment between two endpoints.
///
/// Two parameterizations are offered: [`point_at`](LineSegment::point_at)
/// takes a normalized `t` in `[0, 1]`, and
/// [`point_at_distance`](LineSegment::point_at_distance) takes an absolute
/// distance in `[0, length]`. Both reject out-of-range parameters in every
/// build profile.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LineSegment<P: AffinePoint> {
    pub start: P,
    pub end: P,
}

/// A 2D segment.
pub type LineSegment2<T> = LineSegment<Point2<T>>;

/// A 3D segment.
pub type LineSegment3<T> = LineSegment<Point3<T>>;

impl<P: AffinePoint> LineSegment<P> {
    /// Creates a segment between two endpoints.
    #[inline]
    pub fn new(start: P, end: P) -> Self {
        Self { start, end }
    }

    /// Distance between the endpoints.
    #[inline]
    pub fn length(&self) -> P::Scalar {
        self.start.vector_to(self.end).magnitude()
    }

    /// Squared distance between the endpoints; prefer it for comparisons.
    #[inline]
    pub fn length_squared(&self) -> P::Scalar {
        self.start.vector_to(self.end).magnitude_squared()
    }

    /// `start + (end - start) * t` for normalized `t` in `[0, 1]`.
    #[inline]
    pub fn point_at(&self, t: P::Scalar) -> Result<P> {
        if t < P::Scalar::zero() || t > P::Scalar::one() {
            return Err(parameter_out_of_range(format!(
                "t = {} but segment parameters are normalized to [0, 1]",
                t
            )));
        }

        Ok(self.start.lerp(self.end, t))
    }

    /// A point `t` units of distance from `start`, for `t` in `[0, length]`.
    #[inline]
    pub fn point_at_distance(&self, t: P::Scalar) -> Result<P> {
        let length = self.length();
        if t < P::Scalar::zero() || t > length {
            return Err(parameter_out_of_range(format!(
                "t = {} but this segment only covers [0, {}]",
                t, length
            )));
        }

        let unit = self.start.vector_to(self.end).unit_vector();

        Ok(self.start.translate(unit.scale(t)))
    }
}

impl<P: AffinePoint> fmt::Display for LineSegment<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineSegment(Start: {}, End: {})", self.start, self.end)
    }
}
