//! Displacement vectors in two and three dimensions.
//!
//! A vector is a direction and length, not a location; see
//! [`Point2`](crate::geometry::Point2)/[`Point3`](crate::geometry::Point3)
//! for locations. Equality is exact component-wise float equality — this is
//! intentional, the types are used in exact-value regression tests — so use
//! the predicates or [`magnitude_squared`](Vector3::magnitude_squared)
//! comparisons for tolerant logic.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::geometry::{pack2, pack3, Scalar};

/// A 2D displacement vector.
#[derive(Copy, Clone, Debug, Default)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

/// A 3D displacement vector.
#[derive(Copy, Clone, Debug, Default)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Vector2<T> {
    /// Creates a vector from its components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        T::kdot(pack2(self.x, self.y), pack2(other.x, other.y))
    }

    /// Squared length. Cheaper than [`magnitude`](Self::magnitude); prefer
    /// it for comparing relative lengths.
    #[inline]
    pub fn magnitude_squared(self) -> T {
        self.dot(self)
    }

    /// Length.
    #[inline]
    pub fn magnitude(self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// Scales to length one by multiplying with the reciprocal length.
    ///
    /// The zero vector is returned unchanged — degenerate but defined.
    #[inline]
    pub fn unit_vector(self) -> Self {
        let mag = self.magnitude();
        if mag == T::zero() {
            return self;
        }

        self * (T::one() / mag)
    }

    /// `self + (other - self) * t`. `t` is not clamped; callers wanting no
    /// extrapolation must validate it themselves.
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        let [x, y, ..] = T::klerp(pack2(self.x, self.y), pack2(other.x, other.y), t);
        Self { x, y }
    }

    /// Same direction within the default tolerance.
    #[inline]
    pub fn is_collinear(self, other: Self) -> bool {
        self.is_collinear_within(other, T::direction_epsilon())
    }

    /// Same direction: `dot == |a|*|b|` within `epsilon`.
    #[inline]
    pub fn is_collinear_within(self, other: Self, epsilon: T) -> bool {
        (self.dot(other) - self.magnitude() * other.magnitude()).abs() < epsilon
    }

    /// Opposite direction within the default tolerance.
    #[inline]
    pub fn is_collinear_opposite(self, other: Self) -> bool {
        self.is_collinear_opposite_within(other, T::direction_epsilon())
    }

    /// Opposite direction: `dot == -|a|*|b|` within `epsilon`.
    #[inline]
    pub fn is_collinear_opposite_within(self, other: Self, epsilon: T) -> bool {
        (self.dot(other) + self.magnitude() * other.magnitude()).abs() < epsilon
    }

    /// Perpendicular within the default tolerance.
    #[inline]
    pub fn is_perpendicular(self, other: Self) -> bool {
        self.is_perpendicular_within(other, T::direction_epsilon())
    }

    /// Perpendicular: `dot == 0` within `epsilon`.
    #[inline]
    pub fn is_perpendicular_within(self, other: Self, epsilon: T) -> bool {
        self.dot(other).abs() < epsilon
    }

    /// Strictly positive dot product. Sign test, no epsilon.
    #[inline]
    pub fn is_same_direction(self, other: Self) -> bool {
        self.dot(other) > T::zero()
    }

    /// Strictly negative dot product. Sign test, no epsilon.
    #[inline]
    pub fn is_opposite_direction(self, other: Self) -> bool {
        self.dot(other) < T::zero()
    }
}

impl<T: Scalar> Vector3<T> {
    /// Creates a vector from its components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        T::kdot(pack3(self.x, self.y, self.z), pack3(other.x, other.y, other.z))
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let [x, y, z, _] = T::kcross(pack3(self.x, self.y, self.z), pack3(other.x, other.y, other.z));
        Self { x, y, z }
    }

    /// Squared length. Cheaper than [`magnitude`](Self::magnitude); prefer
    /// it for comparing relative lengths.
    #[inline]
    pub fn magnitude_squared(self) -> T {
        self.dot(self)
    }

    /// Length.
    #[inline]
    pub fn magnitude(self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// Scales to length one by multiplying with the reciprocal length.
    ///
    /// The zero vector is returned unchanged — degenerate but defined.
    #[inline]
    pub fn unit_vector(self) -> Self {
        let mag = self.magnitude();
        if mag == T::zero() {
            return self;
        }

        self * (T::one() / mag)
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

    /// Same direction within the default tolerance.
    #[inline]
    pub fn is_collinear(self, other: Self) -> bool {
        self.is_collinear_within(other, T::direction_epsilon())
    }

    /// Same direction: `dot == |a|*|b|` within `epsilon`.
    #[inline]
    pub fn is_collinear_within(self, other: Self, epsilon: T) -> bool {
        (self.dot(other) - self.magnitude() * other.magnitude()).abs() < epsilon
    }

    /// Opposite direction within the default tolerance.
    #[inline]
    pub fn is_collinear_opposite(self, other: Self) -> bool {
        self.is_collinear_opposite_within(other, T::direction_epsilon())
    }

    /// Opposite direction: `dot == -|a|*|b|` within `epsilon`.
    #[inline]
    pub fn is_collinear_opposite_within(self, other: Self, epsilon: T) -> bool {
        (self.dot(other) + self.magnitude() * other.magnitude()).abs() < epsilon
    }

    /// Perpendicular within the default tolerance.
    #[inline]
    pub fn is_perpendicular(self, other: Self) -> bool {
        self.is_perpendicular_within(other, T::direction_epsilon())
    }

    /// Perpendicular: `dot == 0` within `epsilon`.
    #[inline]
    pub fn is_perpendicular_within(self, other: Self, epsilon: T) -> bool {
        self.dot(other).abs() < epsilon
    }

    /// Strictly positive dot product. Sign test, no epsilon.
    #[inline]
    pub fn is_same_direction(self, other: Self) -> bool {
        self.dot(other) > T::zero()
    }

    /// Strictly negative dot product. Sign test, no epsilon.
    #[inline]
    pub fn is_opposite_direction(self, other: Self) -> bool {
        self.dot(other) < T::zero()
    }
}

impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let [x, y, ..] = T::kadd(pack2(self.x, self.y), pack2(rhs.x, rhs.y));
        Self { x, y }
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let [x, y, ..] = T::ksub(pack2(self.x, self.y), pack2(rhs.x, rhs.y));
        Self { x, y }
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: T) -> Self {
        let [x, y, ..] = T::kscale(pack2(self.x, self.y), scalar);
        Self { x, y }
    }
}

impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let [x, y, z, _] = T::kadd(pack3(self.x, self.y, self.z), pack3(rhs.x, rhs.y, rhs.z));
        Self { x, y, z }
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let [x, y, z, _] = T::ksub(pack3(self.x, self.y, self.z), pack3(rhs.x, rhs.y, rhs.z));
        Self { x, y, z }
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: T) -> Self {
        let [x, y, z, _] = T::kscale(pack3(self.x, self.y, self.z), scalar);
        Self { x, y, z }
    }
}

// Exact component-wise equality, through the comparison kernels.
impl<T: Scalar> PartialEq for Vector2<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        T::keq(pack2(self.x, self.y), pack2(other.x, other.y))
    }
}

impl<T: Scalar> PartialEq for Vector3<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        T::keq(pack3(self.x, self.y, self.z), pack3(other.x, other.y, other.z))
    }
}

impl<T: Scalar> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Scalar> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Direction-like quantities, as used by the linear primitives
/// ([`Line`](crate::geometry::Line) and friends). Both vector dimensions
/// implement it, so one line/ray/segment body serves 2D and 3D.
pub trait Directional<T: Scalar>:
    Copy + PartialEq + Default + fmt::Debug + fmt::Display
{
    /// Dot product.
    fn dot(self, other: Self) -> T;

    /// Length.
    fn magnitude(self) -> T;

    /// Squared length.
    fn magnitude_squared(self) -> T;

    /// Unit-length copy; the zero vector is returned unchanged.
    fn unit_vector(self) -> Self;

    /// Scaled copy.
    fn scale(self, scalar: T) -> Self;
}

impl<T: Scalar> Directional<T> for Vector2<T> {
    #[inline]
    fn dot(self, other: Self) -> T {
        Vector2::dot(self, other)
    }

    #[inline]
    fn magnitude(self) -> T {
        Vector2::magnitude(self)
    }

    #[inline]
    fn magnitude_squared(self) -> T {
        Vector2::magnitude_squared(self)
    }

    #[inline]
    fn unit_vector(self) -> Self {
        Vector2::unit_vector(self)
    }

    #[inline]
    fn scale(self, scalar: T) -> Self {
        self * scalar
    }
}

impl<T: Scalar> Directional<T> for Vector3<T> {
    #[inline]
    fn dot(self, other: Self) -> T {
        Vector3::dot(self, other)
    }

    #[inline]
    fn magnitude(self) -> T {
        Vector3::magnitude(self)
    }

    #[inline]
    fn magnitude_squared(self) -> T {
        Vector3::magnitude_squared(self)
    }

    #[inline]
    fn unit_vector(self) -> Self {
        Vector3::unit_vector(self)
    }

    #[inline]
    fn scale(self, scalar: T) -> Self {
        self * scalar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_four_five() {
        let v = Vector2::new(3.0f32, 4.0);

        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_addition_commutes() {
        let a = Vector3::new(1.0f32, -2.5, 3.0);
        let b = Vector3::new(0.5f32, 7.0, -1.0);

        assert_eq!(a + b, b + a);
    }

    #[test]
    fn test_cross_axes() {
        let x = Vector3::new(1.0f32, 0.0, 0.0);
        let y = Vector3::new(0.0f32, 1.0, 0.0);
        let z = Vector3::new(0.0f32, 0.0, 1.0);

        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(x), z * -1.0);
    }

    #[test]
    fn test_unit_vector_of_zero_is_zero() {
        let zero = Vector3::<f32>::zero();

        assert_eq!(zero.unit_vector(), zero);
    }

    #[test]
    fn test_unit_vector_magnitude() {
        let v = Vector3::new(2.0f64, -3.0, 6.0);

        assert!((v.unit_vector().magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_direction_predicates() {
        let v = Vector3::new(1.0f32, 2.0, 3.0);
        let doubled = v * 2.0;
        let flipped = v * -1.0;
        let orthogonal = Vector3::new(-2.0f32, 1.0, 0.0);

        assert!(v.is_collinear(doubled.unit_vector() * v.magnitude()));
        assert!(v.is_collinear_opposite(flipped.unit_vector() * v.magnitude()));
        assert!(v.is_perpendicular(orthogonal));
        assert!(v.is_same_direction(doubled));
        assert!(v.is_opposite_direction(flipped));
    }

    #[test]
    fn test_exact_equality() {
        let a = Vector2::new(0.1f32, 0.2);
        let b = Vector2::new(0.1f32, 0.2);
        let c = Vector2::new(0.1f32 + 1e-7, 0.2);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
