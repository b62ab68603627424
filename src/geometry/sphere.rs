//! Spheres.

use std::fmt;

use crate::geometry::{Point3, Scalar};

/// A sphere: center point plus non-negative radius.
#[derive(Copy, Clone, Debug)]
pub struct Sphere<T> {
    pub center: Point3<T>,
    pub radius: T,
}

impl<T: Scalar> PartialEq for Sphere<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.radius == other.radius
    }
}

impl<T: Scalar> Sphere<T> {
    /// Creates a sphere. The radius must be non-negative.
    #[inline]
    pub fn new(center: Point3<T>, radius: T) -> Self {
        debug_assert!(radius >= T::zero(), "sphere radius must be non-negative");

        Self { center, radius }
    }

    /// Whether `point` lies inside or on the sphere (boundary inclusive).
    #[inline]
    pub fn contains(&self, point: Point3<T>) -> bool {
        point.distance_squared_to(self.center) <= self.radius * self.radius
    }

    /// Whether the two spheres overlap or touch.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        let radius_sum = self.radius + other.radius;

        self.center.distance_squared_to(other.center) <= radius_sum * radius_sum
    }

    /// `4/3 * pi * r^3`
    #[inline]
    pub fn volume(&self) -> T {
        T::cast(4.0) / T::cast(3.0) * T::PI() * self.radius * self.radius * self.radius
    }

    /// `4 * pi * r^2`
    #[inline]
    pub fn surface_area(&self) -> T {
        T::cast(4.0) * T::PI() * self.radius * self.radius
    }
}

impl<T: Scalar> Default for Sphere<T> {
    /// Zero-radius sphere at the origin.
    #[inline]
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            radius: T::zero(),
        }
    }
}

impl<T: Scalar> fmt::Display for Sphere<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sphere(Centre: {}, Radius: {})", self.center, self.radius)
    }
}
