//! ARM NEON implementation of the lane abstraction (narrow tier).
//!
//! Compiled when the build script raises the `neon` cfg flag. NEON is
//! present on every AArch64 processor, including Apple Silicon and AWS
//! Graviton. [`f32x4::F32x4`] wraps a 128-bit `float32x4_t` register.

pub mod f32x4;
