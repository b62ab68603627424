//! Locations in two and three dimensions.
//!
//! Points and vectors are kept distinct on purpose: subtracting two points
//! yields the displacement [`Vector2`]/[`Vector3`] between them, and adding
//! a displacement to a point yields another point. There is no
//! point-plus-point.

use std::fmt;
use std::ops::{Add, Sub};

use crate::geometry::{pack2, pack3, Scalar, Vector2, Vector3};

/// A 2D location.
#[derive(Copy, Clone, Debug, Default)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

/// A 3D location.
#[derive(Copy, Clone, Debug, Default)]
pub struct Point3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Point2<T> {
    /// Creates a point from its coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The origin.
    #[inline]
    pub fn origin() -> Self {
        Self::default()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Self) -> T {
        self.distance_squared_to(other).sqrt()
    }

    /// Squared distance to `other`; prefer it for comparisons.
    #[inline]
    pub fn distance_squared_to(self, other: Self) -> T {
        let diff = T::ksub(pack2(self.x, self.y), pack2(other.x, other.y));

        T::kdot(diff, diff)
    }

    /// `self + (other - self) * t`. `t` is not clamped.
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        let [x, y, ..] = T::klerp(pack2(self.x, self.y), pack2(other.x, other.y), t);
        Self { x, y }
    }
}

impl<T: Scalar> Point3<T> {
    /// Creates a point from its coordinates.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    #[inline]
    pub fn origin() -> Self {
        Self::default()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Self) -> T {
        self.distance_squared_to(other).sqrt()
    }

    /// Squared distance to `other`; prefer it for comparisons.
    #[inline]
    pub fn distance_squared_to(self, other: Self) -> T {
        let diff = T::ksub(pack3(self.x, self.y, self.z), pack3(other.x, other.y, other.z));

        T::kdot(diff, diff)
    }

    /// `self + (other - self) * t`. `t` is not clamped.
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        let [x, y, z, _] = T::klerp(
            pack3(self.x, self.y, self.z),
            pack3(other.x, other.y, other.z),
            t,
        );
        Self { x, y, z }
    }
}

/// `Point + Vector = Point`
impl<T: Scalar> Add<Vector2<T>> for Point2<T> {
    type Output = Self;

    #[inline]
    fn add(self, vec: Vector2<T>) -> Self {
        let [x, y, ..] = T::kadd(pack2(self.x, self.y), pack2(vec.x, vec.y));
        Self { x, y }
    }
}

/// `Point - Point = Vector`
impl<T: Scalar> Sub for Point2<T> {
    type Output = Vector2<T>;

    #[inline]
    fn sub(self, other: Self) -> Vector2<T> {
        let [x, y, ..] = T::ksub(pack2(self.x, self.y), pack2(other.x, other.y));
        Vector2 { x, y }
    }
}

/// `Point + Vector = Point`
impl<T: Scalar> Add<Vector3<T>> for Point3<T> {
    type Output = Self;

    #[inline]
    fn add(self, vec: Vector3<T>) -> Self {
        let [x, y, z, _] = T::kadd(pack3(self.x, self.y, self.z), pack3(vec.x, vec.y, vec.z));
        Self { x, y, z }
    }
}

/// `Point - Point = Vector`
impl<T: Scalar> Sub for Point3<T> {
    type Output = Vector3<T>;

    #[inline]
    fn sub(self, other: Self) -> Vector3<T> {
        let [x, y, z, _] = T::ksub(pack3(self.x, self.y, self.z), pack3(other.x, other.y, other.z));
        Vector3 { x, y, z }
    }
}

impl<T: Scalar> PartialEq for Point2<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        T::keq(pack2(self.x, self.y), pack2(other.x, other.y))
    }
}

impl<T: Scalar> PartialEq for Point3<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        T::keq(pack3(self.x, self.y, self.z), pack3(other.x, other.y, other.z))
    }
}

impl<T: Scalar> fmt::Display for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Scalar> fmt::Display for Point3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Location-like quantities, the seam that lets one line/ray/segment body
/// serve both dimensions.
pub trait AffinePoint: Copy + PartialEq + Default + fmt::Debug + fmt::Display {
    /// Component type.
    type Scalar: Scalar;

    /// Matching displacement type.
    type Vector: crate::geometry::Directional<Self::Scalar>;

    /// Moves the point by a displacement.
    fn translate(self, by: Self::Vector) -> Self;

    /// Displacement from `self` to `other`.
    fn vector_to(self, other: Self) -> Self::Vector;

    /// Linear interpolation toward `other`; `t` is not clamped.
    fn lerp(self, other: Self, t: Self::Scalar) -> Self;
}

impl<T: Scalar> AffinePoint for Point2<T> {
    type Scalar = T;
    type Vector = Vector2<T>;

    #[inline]
    fn translate(self, by: Vector2<T>) -> Self {
        self + by
    }

    #[inline]
    fn vector_to(self, other: Self) -> Vector2<T> {
        other - self
    }

    #[inline]
    fn lerp(self, other: Self, t: T) -> Self {
        Point2::lerp(self, other, t)
    }
}

impl<T: Scalar> AffinePoint for Point3<T> {
    type Scalar = T;
    type Vector = Vector3<T>;

    #[inline]
    fn translate(self, by: Vector3<T>) -> Self {
        self + by
    }

    #[inline]
    fn vector_to(self, other: Self) -> Vector3<T> {
        other - self
    }

    #[inline]
    fn lerp(self, other: Self, t: T) -> Self {
        Point3::lerp(self, other, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point3::new(0.0f32, 0.0, 0.0);
        let b = Point3::new(3.0f32, 4.0, 0.0);

        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(a.distance_squared_to(b), 25.0);
    }

    #[test]
    fn test_point_vector_algebra() {
        let p = Point3::new(1.0f32, 2.0, 3.0);
        let q = Point3::new(4.0f32, 6.0, 3.0);

        let v = q - p;
        assert_eq!(v, Vector3::new(3.0, 4.0, 0.0));
        assert_eq!(p + v, q);
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = Point2::new(0.0f64, 0.0);
        let b = Point2::new(2.0f64, 4.0);

        assert_eq!(a.lerp(b, 0.5), Point2::new(1.0, 2.0));
    }
}
