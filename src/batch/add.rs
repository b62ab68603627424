//! Element-wise slice addition.

use rayon::prelude::*;

use crate::batch::{alloc_uninit_f32_vec, BatchAdd, PARALLEL_BLOCK};
use crate::simd::{Lane, SimdLane};

/// Scalar reference addition.
pub fn scalar_add(a: &[f32], b: &[f32]) -> Vec<f32> {
    assert_eq!(a.len(), b.len(), "Slices must be the same length");

    a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
}

/// Adds one block of equal-length slices into `c`.
#[inline(always)]
fn simd_add_block(a: &[f32], b: &[f32], c: &mut [f32]) {
    let width = Lane::WIDTH;
    let full_chunks = a.len() / width;

    for idx in 0..full_chunks {
        let i = idx * width;

        unsafe {
            let a_chunk = Lane::load_unaligned(a.as_ptr().add(i));
            let b_chunk = Lane::load_unaligned(b.as_ptr().add(i));

            a_chunk.add(b_chunk).store_unaligned(c.as_mut_ptr().add(i));
        }
    }

    // scalar tail for lengths that are not a multiple of the lane width
    for i in (full_chunks * width)..a.len() {
        c[i] = a[i] + b[i];
    }
}

#[inline(always)]
fn simd_add(a: &[f32], b: &[f32]) -> Vec<f32> {
    assert_eq!(a.len(), b.len(), "Slices must be the same length");

    let mut c = alloc_uninit_f32_vec(a.len());
    simd_add_block(a, b, &mut c);

    c
}

#[inline(always)]
fn parallel_simd_add(a: &[f32], b: &[f32]) -> Vec<f32> {
    assert_eq!(a.len(), b.len(), "Slices must be the same length");

    let mut c = alloc_uninit_f32_vec(a.len());

    c.par_chunks_mut(PARALLEL_BLOCK)
        .zip(a.par_chunks(PARALLEL_BLOCK))
        .zip(b.par_chunks(PARALLEL_BLOCK))
        .for_each(|((c_block, a_block), b_block)| {
            simd_add_block(a_block, b_block, c_block);
        });

    c
}

impl<'b> BatchAdd<&'b [f32]> for &[f32] {
    type Output = Vec<f32>;

    #[inline(always)]
    fn simd_add(self, rhs: &'b [f32]) -> Self::Output {
        simd_add(self, rhs)
    }

    #[inline(always)]
    fn par_simd_add(self, rhs: &'b [f32]) -> Self::Output {
        parallel_simd_add(self, rhs)
    }

    #[inline(always)]
    fn scalar_add(self, rhs: &'b [f32]) -> Self::Output {
        scalar_add(self, rhs)
    }
}
