//! Geometric math primitives with SIMD-accelerated single-precision paths.
//!
//! Every primitive family — vectors, points, matrices, quaternions, planes,
//! spheres, bounding boxes and the linear primitives — has one generic body
//! over any [`geometry::Scalar`]. For `f32` the component kernels dispatch
//! to the SIMD tier the build script selected: AVX2 where available, then
//! SSE4.1 or NEON, then a portable scalar fallback. All tiers produce the
//! same observable results.
//!
//! ```
//! use geomly::geometry::{Point3, Vector3};
//!
//! let origin = Point3::new(0.0f32, 0.0, 0.0);
//! let target = Point3::new(3.0f32, 4.0, 0.0);
//!
//! assert_eq!(origin.distance_to(target), 5.0);
//! assert_eq!(target - origin, Vector3::new(3.0, 4.0, 0.0));
//! ```

pub mod batch;
pub mod error;
pub mod geometry;
pub mod simd;

pub use error::{GeometryError, Result};
