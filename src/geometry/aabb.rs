//! Axis-aligned bounding boxes.
//!
//! An `Aabb` is a pair of corner points with `min <= max` on every axis.
//! Construction fails fast: [`Aabb::new`] and the corner setters return
//! [`GeometryError::InvalidBounds`](crate::error::GeometryError) on NaN or
//! inverted corners, in release builds as much as debug ones — a
//! silently-wrong box would corrupt every downstream intersection test.

use std::fmt;

use crate::error::{invalid_bounds, Result};
use crate::geometry::{pack3, Point3, Scalar, Vector3};

/// An axis-aligned bounding box.
#[derive(Copy, Clone, Debug)]
pub struct Aabb<T> {
    min: Point3<T>,
    max: Point3<T>,
}

impl<T: Scalar> PartialEq for Aabb<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

#[inline]
fn check_bounds<T: Scalar>(min: Point3<T>, max: Point3<T>) -> Result<()> {
    if min.x.is_nan()
        || min.y.is_nan()
        || min.z.is_nan()
        || max.x.is_nan()
        || max.y.is_nan()
        || max.z.is_nan()
    {
        return Err(invalid_bounds(format!(
            "corner contains NaN: min {}, max {}",
            min, max
        )));
    }

    if !T::kle(pack3(min.x, min.y, min.z), pack3(max.x, max.y, max.z)) {
        return Err(invalid_bounds(format!(
            "min {} exceeds max {} on some axis",
            min, max
        )));
    }

    Ok(())
}

impl<T: Scalar> Aabb<T> {
    /// Builds a box from its corners, rejecting NaN and `min > max`.
    #[inline]
    pub fn new(min: Point3<T>, max: Point3<T>) -> Result<Self> {
        check_bounds(min, max)?;

        Ok(Self { min, max })
    }

    /// The zero-size box at a single point.
    #[inline]
    pub fn at_point(point: Point3<T>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Minimum corner.
    #[inline]
    pub fn min(&self) -> Point3<T> {
        self.min
    }

    /// Maximum corner.
    #[inline]
    pub fn max(&self) -> Point3<T> {
        self.max
    }

    /// Replaces the minimum corner, re-validating the box.
    #[inline]
    pub fn set_min(&mut self, min: Point3<T>) -> Result<()> {
        check_bounds(min, self.max)?;
        self.min = min;

        Ok(())
    }

    /// Replaces the maximum corner, re-validating the box.
    #[inline]
    pub fn set_max(&mut self, max: Point3<T>) -> Result<()> {
        check_bounds(self.min, max)?;
        self.max = max;

        Ok(())
    }

    /// Whether every axis satisfies `min <= max` with no NaN anywhere.
    ///
    /// Construction enforces this, so it only returns false if a corner was
    /// pushed out from under the box through expansion with NaN input.
    #[inline]
    pub fn is_valid(&self) -> bool {
        check_bounds(self.min, self.max).is_ok()
    }

    /// Per-axis interval test, boundary inclusive.
    #[inline]
    pub fn contains(&self, point: Point3<T>) -> bool {
        let p = pack3(point.x, point.y, point.z);

        T::kge(p, pack3(self.min.x, self.min.y, self.min.z))
            && T::kle(p, pack3(self.max.x, self.max.y, self.max.z))
    }

    /// Per-axis interval overlap test, boundary inclusive.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        T::kge(
            pack3(self.max.x, self.max.y, self.max.z),
            pack3(other.min.x, other.min.y, other.min.z),
        ) && T::kle(
            pack3(self.min.x, self.min.y, self.min.z),
            pack3(other.max.x, other.max.y, other.max.z),
        )
    }

    /// Midpoint of the two corners.
    #[inline]
    pub fn center(&self) -> Point3<T> {
        let [x, y, z, _] = T::kscale(
            T::kadd(
                pack3(self.min.x, self.min.y, self.min.z),
                pack3(self.max.x, self.max.y, self.max.z),
            ),
            T::cast(0.5),
        );

        Point3 { x, y, z }
    }

    /// Product of the three edge lengths.
    #[inline]
    pub fn volume(&self) -> T {
        let size: Vector3<T> = self.max - self.min;

        size.x * size.y * size.z
    }

    /// Grows the box so `point` is inside, via per-axis min/max.
    #[inline]
    pub fn expand_to_include(&mut self, point: Point3<T>) {
        let p = pack3(point.x, point.y, point.z);

        let [minx, miny, minz, _] = T::kmin(pack3(self.min.x, self.min.y, self.min.z), p);
        let [maxx, maxy, maxz, _] = T::kmax(pack3(self.max.x, self.max.y, self.max.z), p);

        self.min = Point3::new(minx, miny, minz);
        self.max = Point3::new(maxx, maxy, maxz);
    }

    /// Grows the box so the whole of `other` is inside.
    #[inline]
    pub fn expand_to_include_aabb(&mut self, other: &Self) {
        self.expand_to_include(other.min);
        self.expand_to_include(other.max);
    }
}

impl<T: Scalar> Default for Aabb<T> {
    /// Zero-size box at the origin.
    #[inline]
    fn default() -> Self {
        Self::at_point(Point3::origin())
    }
}

impl<T: Scalar> fmt::Display for Aabb<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AABB(Min: {}, Max: {})", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    fn unit_box() -> Aabb<f32> {
        Aabb::new(Point3::new(1.0, 1.0, 1.0), Point3::new(5.0, 5.0, 5.0)).unwrap()
    }

    #[test]
    fn test_contains() {
        let aabb = unit_box();

        assert!(aabb.contains(Point3::new(3.0, 3.0, 3.0)));
        assert!(aabb.contains(Point3::new(1.0, 1.0, 1.0)));
        assert!(!aabb.contains(Point3::new(6.0, 3.0, 3.0)));
    }

    #[test]
    fn test_invalid_construction_is_an_error() {
        let result = Aabb::new(Point3::new(2.0f32, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));

        assert!(matches!(result, Err(GeometryError::InvalidBounds { .. })));

        let nan = Aabb::new(Point3::new(f32::NAN, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        assert!(nan.is_err());
    }

    #[test]
    fn test_setters_validate() {
        let mut aabb = unit_box();

        assert!(aabb.set_min(Point3::new(0.0, 0.0, 0.0)).is_ok());
        assert!(aabb.set_min(Point3::new(9.0, 0.0, 0.0)).is_err());
        // failed set leaves the box unchanged
        assert_eq!(aabb.min(), Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_intersects() {
        let a = unit_box();
        let b = Aabb::new(Point3::new(4.0f32, 4.0, 4.0), Point3::new(8.0, 8.0, 8.0)).unwrap();
        let c = Aabb::new(Point3::new(6.0f32, 6.0, 6.0), Point3::new(8.0, 8.0, 8.0)).unwrap();

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_center_and_volume() {
        let aabb = unit_box();

        assert_eq!(aabb.center(), Point3::new(3.0, 3.0, 3.0));
        assert_eq!(aabb.volume(), 64.0);
    }

    #[test]
    fn test_expand_to_include() {
        let mut aabb = unit_box();
        aabb.expand_to_include(Point3::new(-1.0, 3.0, 7.0));

        assert_eq!(aabb.min(), Point3::new(-1.0, 1.0, 1.0));
        assert_eq!(aabb.max(), Point3::new(5.0, 5.0, 7.0));

        let other = Aabb::new(Point3::new(-5.0f32, -5.0, -5.0), Point3::new(0.0, 0.0, 0.0)).unwrap();
        aabb.expand_to_include_aabb(&other);
        assert_eq!(aabb.min(), Point3::new(-5.0, -5.0, -5.0));
    }
}
