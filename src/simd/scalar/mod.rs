//! Portable scalar implementation of the lane abstraction (fallback tier).
//!
//! Always compiled, for two reasons: it is the active tier on hardware
//! without SSE4.1/AVX2/NEON, and it is the correctness oracle the
//! equivalence tests compare the accelerated tiers against.

pub mod f32x4;
