//! Infinite planes in 3D.
//!
//! A plane is a unit normal plus the signed distance from the origin along
//! that normal. The normal is always stored unit-length: every constructor
//! and [`set_normal`](Plane::set_normal) normalizes on entry. A zero normal
//! survives normalization unchanged (degenerate but defined), which leaves
//! a degenerate plane through the origin region; callers constructing
//! planes from computed normals should check for that case themselves.

use std::fmt;

use crate::geometry::{pack3, Point3, Scalar, Vector3};

/// A plane in Hessian normal form: `dot(normal, p) + distance == 0`.
#[derive(Copy, Clone, Debug)]
pub struct Plane<T> {
    normal: Vector3<T>,
    distance: T,
}

impl<T: Scalar> PartialEq for Plane<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.normal == other.normal && self.distance == other.distance
    }
}

impl<T: Scalar> Plane<T> {
    /// Builds a plane from a normal (normalized on entry) and a signed
    /// distance from the origin.
    #[inline]
    pub fn new(normal: Vector3<T>, distance: T) -> Self {
        Self {
            normal: normal.unit_vector(),
            distance,
        }
    }

    /// Builds the plane through `point` with the given normal.
    #[inline]
    pub fn from_point_and_normal(point: Point3<T>, normal: Vector3<T>) -> Self {
        let normal = normal.unit_vector();
        let distance = -T::kdot(
            pack3(normal.x, normal.y, normal.z),
            pack3(point.x, point.y, point.z),
        );

        Self { normal, distance }
    }

    /// The stored unit normal.
    #[inline]
    pub fn normal(&self) -> Vector3<T> {
        self.normal
    }

    /// Replaces the normal, normalizing on entry.
    #[inline]
    pub fn set_normal(&mut self, normal: Vector3<T>) {
        self.normal = normal.unit_vector();
    }

    /// Signed distance of the plane from the origin.
    #[inline]
    pub fn distance(&self) -> T {
        self.distance
    }

    /// Replaces the origin distance.
    #[inline]
    pub fn set_distance(&mut self, distance: T) {
        self.distance = distance;
    }

    /// Perpendicular distance from `point` to the plane; positive on the
    /// side the normal points toward.
    #[inline]
    pub fn signed_distance(&self, point: Point3<T>) -> T {
        T::kdot(
            pack3(self.normal.x, self.normal.y, self.normal.z),
            pack3(point.x, point.y, point.z),
        ) + self.distance
    }

    /// Whether `point` lies on the plane, within machine epsilon of the
    /// scalar type (not the direction tolerance).
    #[inline]
    pub fn contains(&self, point: Point3<T>) -> bool {
        self.signed_distance(point).abs() < T::epsilon()
    }
}

impl<T: Scalar> Default for Plane<T> {
    /// Degenerate plane with a zero normal at distance zero.
    #[inline]
    fn default() -> Self {
        Self {
            normal: Vector3::zero(),
            distance: T::zero(),
        }
    }
}

impl<T: Scalar> fmt::Display for Plane<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plane(Normal: {}, Distance: {})",
            self.normal, self.distance
        )
    }
}
