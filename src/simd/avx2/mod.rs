//! AVX2 implementation of the lane abstraction (wide tier).
//!
//! This module is only compiled when the build script detects AVX2 support
//! and raises the `avx2` cfg flag. It provides [`f32x8::F32x8`], a 256-bit
//! register holding the four geometric lanes in its low half with zero
//! padding above.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Haswell (2013+) or AMD Excavator (2015+)
//! - **Target Architecture**: x86 or x86_64
//! - **Compilation**: Must be compiled with AVX2 enabled
//!   (`-C target-feature=+avx2`); the build script takes care of this
//!   for native builds

pub mod f32x8;
