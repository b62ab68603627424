//! Algebraic properties and concrete scenarios for the primitive families.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use geomly::geometry::{
    Aabb, Line3, LineSegment, LineSegment3, Matrix, Plane, Point2, Point3, Quaternion, Ray3,
    Sphere, Vector2, Vector3,
};
use geomly::GeometryError;

fn random_vector3(rng: &mut StdRng) -> Vector3<f32> {
    Vector3::new(
        rng.random::<f32>() * 20.0 - 10.0,
        rng.random::<f32>() * 20.0 - 10.0,
        rng.random::<f32>() * 20.0 - 10.0,
    )
}

fn random_quaternion(rng: &mut StdRng) -> Quaternion<f32> {
    Quaternion::new(
        rng.random::<f32>() * 4.0 - 2.0,
        rng.random::<f32>() * 4.0 - 2.0,
        rng.random::<f32>() * 4.0 - 2.0,
        rng.random::<f32>() * 4.0 - 2.0,
    )
}

// ---------------------------------------------------------------- properties

#[test]
fn test_vector_addition_commutes() {
    let mut rng = StdRng::seed_from_u64(101);

    for _ in 0..500 {
        let a = random_vector3(&mut rng);
        let b = random_vector3(&mut rng);

        assert_eq!(a + b, b + a);
    }
}

#[test]
fn test_hamilton_identity_law() {
    let mut rng = StdRng::seed_from_u64(103);
    let identity = Quaternion::identity();

    for _ in 0..500 {
        let q = random_quaternion(&mut rng);

        assert_eq!(q * identity, q);
        assert_eq!(identity * q, q);
    }
}

#[test]
fn test_transpose_roundtrip() {
    let mut rng = StdRng::seed_from_u64(107);

    for _ in 0..100 {
        let mut m = Matrix::<f32, 3, 4>::zero();
        for r in 0..3 {
            for c in 0..4 {
                m[(r, c)] = rng.random::<f32>() * 10.0 - 5.0;
            }
        }

        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn test_cross_product_orthogonality() {
    let mut rng = StdRng::seed_from_u64(109);

    for _ in 0..500 {
        let a = random_vector3(&mut rng);
        let b = random_vector3(&mut rng);
        let cross = a.cross(b);

        // scaled tolerance: dot terms reach ~2000 before cancelling
        assert!(a.dot(cross).abs() < 5e-3);
        assert!(b.dot(cross).abs() < 5e-3);
    }
}

#[test]
fn test_unit_vector_idempotence() {
    let mut rng = StdRng::seed_from_u64(113);

    for _ in 0..500 {
        let v = random_vector3(&mut rng);
        if v.magnitude() == 0.0 {
            continue;
        }

        assert!((v.unit_vector().magnitude() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn test_point_displacement_roundtrip() {
    let mut rng = StdRng::seed_from_u64(127);

    for _ in 0..500 {
        let p = Point3::new(
            rng.random::<f32>() * 20.0 - 10.0,
            rng.random::<f32>() * 20.0 - 10.0,
            rng.random::<f32>() * 20.0 - 10.0,
        );
        let v = random_vector3(&mut rng);
        let roundtrip = (p + v) - p;

        // addition then subtraction rounds twice; exact equality is not owed
        assert!((roundtrip - v).magnitude() < 1e-4);
    }
}

// ----------------------------------------------------------------- scenarios

#[test]
fn test_vector2_three_four_five() {
    assert_eq!(Vector2::new(3.0f32, 4.0).magnitude(), 5.0);
}

#[test]
fn test_point_distance() {
    let a = Point3::new(0.0f32, 0.0, 0.0);
    let b = Point3::new(3.0f32, 4.0, 0.0);

    assert_eq!(a.distance_to(b), 5.0);
}

#[test]
fn test_aabb_containment() {
    let aabb = Aabb::new(
        Point3::new(1.0f32, 1.0, 1.0),
        Point3::new(5.0f32, 5.0, 5.0),
    )
    .unwrap();

    assert!(aabb.contains(Point3::new(3.0, 3.0, 3.0)));
    assert!(!aabb.contains(Point3::new(6.0, 3.0, 3.0)));
}

#[test]
fn test_sphere_boundary_containment() {
    let sphere = Sphere::new(Point3::new(0.0f32, 0.0, 0.0), 5.0);

    // distance equals the radius exactly
    assert!(sphere.contains(Point3::new(3.0, 4.0, 0.0)));
}

#[test]
fn test_segment_length_and_midpoint() {
    let segment = LineSegment::new(
        Point3::new(0.0f32, 0.0, 0.0),
        Point3::new(3.0f32, 4.0, 0.0),
    );

    assert_eq!(segment.length(), 5.0);
    assert_eq!(segment.point_at(0.5).unwrap(), Point3::new(1.5, 2.0, 0.0));
}

#[test]
fn test_plane_signed_distance() {
    let plane = Plane::from_point_and_normal(
        Point3::new(0.0f32, 0.0, 3.0),
        Vector3::new(0.0, 0.0, 1.0),
    );

    assert_eq!(plane.signed_distance(Point3::new(2.0, 2.0, 5.0)), 2.0);
    assert!(plane.contains(Point3::new(-7.0, 4.0, 3.0)));
}

// ------------------------------------------------------------ error policies

#[test]
fn test_aabb_rejects_inverted_corners() {
    let result = Aabb::new(
        Point3::new(5.0f32, 1.0, 1.0),
        Point3::new(1.0f32, 5.0, 5.0),
    );

    assert!(matches!(result, Err(GeometryError::InvalidBounds { .. })));
}

#[test]
fn test_ray_rejects_backward_parameter() {
    let ray = Ray3::new(Point3::new(0.0f32, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));

    assert!(ray.point_at(2.0).is_ok());
    assert!(matches!(
        ray.point_at(-1.0),
        Err(GeometryError::ParameterOutOfRange { .. })
    ));
}

#[test]
fn test_segment_rejects_out_of_range_parameters() {
    let segment: LineSegment3<f32> = LineSegment::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 10.0, 0.0),
    );

    assert!(segment.point_at(1.0).is_ok());
    assert!(segment.point_at(1.01).is_err());
    assert!(segment.point_at_distance(10.0).is_ok());
    assert!(segment.point_at_distance(10.5).is_err());
}

#[test]
fn test_degenerate_normalization_policy() {
    // vectors and quaternions agree: zero-magnitude input comes back unchanged
    let zero_vec = Vector3::<f32>::zero();
    assert_eq!(zero_vec.unit_vector(), zero_vec);

    let zero_quat = Quaternion::new(0.0f32, 0.0, 0.0, 0.0);
    assert_eq!(zero_quat.normalize(), zero_quat);
    assert_eq!(zero_quat.inverse(), zero_quat);
}

// -------------------------------------------------------------- mixed checks

#[test]
fn test_line_through_gives_unit_direction() {
    let line = Line3::through(
        Point3::new(1.0f32, 1.0, 1.0),
        Point3::new(1.0f32, 1.0, 9.0),
    );

    assert_eq!(line.direction(), Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(line.point_at(-2.0), Point3::new(1.0, 1.0, -1.0));
}

#[test]
fn test_aabb_expansion_keeps_validity() {
    let mut rng = StdRng::seed_from_u64(131);
    let mut aabb = Aabb::new(
        Point3::new(0.0f32, 0.0, 0.0),
        Point3::new(1.0f32, 1.0, 1.0),
    )
    .unwrap();

    for _ in 0..200 {
        let p = Point3::new(
            rng.random::<f32>() * 100.0 - 50.0,
            rng.random::<f32>() * 100.0 - 50.0,
            rng.random::<f32>() * 100.0 - 50.0,
        );
        aabb.expand_to_include(p);

        assert!(aabb.is_valid());
        assert!(aabb.contains(p));
    }
}

#[test]
fn test_quaternion_conjugate_flips_vector_part() {
    let mut rng = StdRng::seed_from_u64(137);

    for _ in 0..200 {
        let q = random_quaternion(&mut rng);
        let c = q.conjugate();

        assert_eq!(c.x, -q.x);
        assert_eq!(c.y, -q.y);
        assert_eq!(c.z, -q.z);
        assert_eq!(c.w, q.w);
    }
}

#[test]
fn test_display_forms_are_readable() {
    let v = Vector2::new(1.0f32, 2.0);
    let p = Point3::new(1.0f32, 2.0, 3.0);
    let q = Quaternion::new(0.0f32, 0.0, 0.0, 1.0);
    let s = Sphere::new(Point3::new(0.0f32, 0.0, 0.0), 2.0);

    assert_eq!(format!("{}", v), "(1, 2)");
    assert_eq!(format!("{}", p), "(1, 2, 3)");
    assert_eq!(format!("{}", q), "(0, 0, 0, 1)");
    assert_eq!(format!("{}", s), "Sphere(Centre: (0, 0, 0), Radius: 2)");
}
