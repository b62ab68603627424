//! Dot product over whole slices.
//!
//! Products accumulate in a lane register across the slice and fold to a
//! scalar once at the end — a dot against a register of ones, which is the
//! horizontal sum. Accumulation order differs from the scalar reference,
//! so results agree to rounding, not bit-for-bit; compare with a tolerance.

use rayon::prelude::*;

use crate::batch::{BatchDot, PARALLEL_BLOCK};
use crate::simd::{Lane, SimdLane};

/// Scalar reference dot product.
pub fn scalar_dot(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Slices must be the same length");

    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[inline(always)]
fn simd_dot(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Slices must be the same length");

    let width = Lane::WIDTH;
    let full_chunks = a.len() / width;

    let mut acc = Lane::zero();
    for idx in 0..full_chunks {
        let i = idx * width;

        unsafe {
            let a_chunk = Lane::load_unaligned(a.as_ptr().add(i));
            let b_chunk = Lane::load_unaligned(b.as_ptr().add(i));

            acc = acc.add(a_chunk.mul(b_chunk));
        }
    }

    // horizontal sum of the accumulator
    let mut sum = acc.dot(Lane::splat(1.0));

    for i in (full_chunks * width)..a.len() {
        sum += a[i] * b[i];
    }

    sum
}

#[inline(always)]
fn parallel_simd_dot(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Slices must be the same length");

    a.par_chunks(PARALLEL_BLOCK)
        .zip(b.par_chunks(PARALLEL_BLOCK))
        .map(|(a_block, b_block)| simd_dot(a_block, b_block))
        .sum()
}

impl<'b> BatchDot<&'b [f32]> for &[f32] {
    type Output = f32;

    #[inline(always)]
    fn simd_dot(self, rhs: &'b [f32]) -> Self::Output {
        simd_dot(self, rhs)
    }

    #[inline(always)]
    fn par_simd_dot(self, rhs: &'b [f32]) -> Self::Output {
        parallel_simd_dot(self, rhs)
    }

    #[inline(always)]
    fn scalar_dot(self, rhs: &'b [f32]) -> Self::Output {
        scalar_dot(self, rhs)
    }
}
