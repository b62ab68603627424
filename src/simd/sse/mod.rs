//! SSE4.1 implementation of the lane abstraction (narrow tier).
//!
//! Compiled when the build script raises the `sse` cfg flag — x86 hardware
//! with SSE4.1 but without AVX2. [`f32x4::F32x4`] wraps a 128-bit `__m128`
//! register holding exactly the four geometric lanes.

pub mod f32x4;
