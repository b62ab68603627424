//! Rays: lines that only extend forward.

use std::fmt;

use num::Zero;

use crate::error::{parameter_out_of_range, Result};
use crate::geometry::line::Line;
use crate::geometry::point::AffinePoint;
use crate::geometry::{Point2, Point3};

/// A ray: a line restricted to parameters `t >= 0`.
///
/// Unlike a debug assertion, the parameter check in
/// [`point_at`](Ray::point_at) holds in release builds too; a negative `t`
/// is an error value, not undefined behavior.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Ray<P: AffinePoint> {
    line: Line<P>,
}

/// A 2D ray.
pub type Ray2<T> = Ray<Point2<T>>;

/// A 3D ray.
pub type Ray3<T> = Ray<Point3<T>>;

impl<P: AffinePoint> Ray<P> {
    /// Builds a ray from its origin and a direction, normalized on entry.
    #[inline]
    pub fn new(origin: P, direction: P::Vector) -> Self {
        Self {
            line: Line::new(origin, direction),
        }
    }

    /// The ray's starting point.
    #[inline]
    pub fn origin(&self) -> P {
        self.line.origin()
    }

    /// The unit direction.
    #[inline]
    pub fn direction(&self) -> P::Vector {
        self.line.direction()
    }

    /// The underlying double-infinite line.
    #[inline]
    pub fn as_line(&self) -> &Line<P> {
        &self.line
    }

    /// `origin + t * direction` for `t >= 0`; negative `t` is rejected.
    #[inline]
    pub fn point_at(&self, t: P::Scalar) -> Result<P> {
        if t < P::Scalar::zero() {
            return Err(parameter_out_of_range(format!(
                "t = {} but rays only extend forward (t >= 0)",
                t
            )));
        }

        Ok(self.line.point_at(t))
    }
}

impl<P: AffinePoint> fmt::Display for Ray<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray({})", self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;
    use crate::geometry::Vector3;

    #[test]
    fn test_point_at_forward() {
        let ray = Ray3::new(Point3::new(0.0f32, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0));

        assert_eq!(ray.point_at(3.0).unwrap(), Point3::new(0.0, 3.0, 0.0));
        assert_eq!(ray.point_at(0.0).unwrap(), ray.origin());
    }

    #[test]
    fn test_negative_parameter_is_an_error() {
        let ray = Ray3::new(Point3::new(0.0f32, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));

        assert!(matches!(
            ray.point_at(-0.5),
            Err(GeometryError::ParameterOutOfRange { .. })
        ));
    }
}
