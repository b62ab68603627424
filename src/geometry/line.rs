//! Infinite lines.

use std::fmt;

use crate::geometry::point::AffinePoint;
use crate::geometry::vector::Directional;
use crate::geometry::{Point2, Point3};

/// An infinite line: a point on it plus a unit direction. Extends both ways,
/// so [`point_at`](Line::point_at) accepts any real parameter.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Line<P: AffinePoint> {
    origin: P,
    direction: P::Vector,
}

/// A 2D line.
pub type Line2<T> = Line<Point2<T>>;

/// A 3D line.
pub type Line3<T> = Line<Point3<T>>;

impl<P: AffinePoint> Line<P> {
    /// Builds a line from a point and a direction, normalized on entry.
    ///
    /// A zero direction survives normalization unchanged and produces a
    /// degenerate line that never leaves its origin.
    #[inline]
    pub fn new(origin: P, direction: P::Vector) -> Self {
        Self {
            origin,
            direction: direction.unit_vector(),
        }
    }

    /// Builds the line through two points, directed from `p0` toward `p1`.
    #[inline]
    pub fn through(p0: P, p1: P) -> Self {
        Self::new(p0, p0.vector_to(p1))
    }

    /// The anchoring point.
    #[inline]
    pub fn origin(&self) -> P {
        self.origin
    }

    /// The unit direction.
    #[inline]
    pub fn direction(&self) -> P::Vector {
        self.direction
    }

    /// `origin + t * direction`, for any real `t`.
    #[inline]
    pub fn point_at(&self, t: P::Scalar) -> P {
        self.origin.translate(self.direction.scale(t))
    }
}

impl<P: AffinePoint> fmt::Display for Line<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line(Point: {}, Direction: {})",
            self.origin, self.direction
        )
    }
}
