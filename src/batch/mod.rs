//! Bulk slice kernels built on the lane abstraction.
//!
//! For workloads that outgrow single primitives — long coordinate arrays,
//! packed vertex data — these traits process whole `&[f32]` slices. Each
//! operation comes as a triple:
//!
//! - `simd_*` — chunked through the active [`Lane`](crate::simd::Lane)
//! - `par_simd_*` — the same kernel over rayon-parallel blocks
//! - `scalar_*` — plain iterator arithmetic, the reference implementation
//!
//! Slice-length mismatches are programmer errors and panic.

pub mod add;
pub mod dot;

use std::alloc::{alloc, handle_alloc_error, Layout};

use crate::simd::{Lane, SimdLane};

/// Number of f32 elements processed per parallel block. A multiple of every
/// tier's lane width.
pub(crate) const PARALLEL_BLOCK: usize = 4096;

/// Element-wise slice addition.
pub trait BatchAdd<Rhs = Self> {
    /// The produced value.
    type Output;

    /// Lane-accelerated addition.
    fn simd_add(self, rhs: Rhs) -> Self::Output;

    /// Lane-accelerated addition over rayon-parallel blocks.
    fn par_simd_add(self, rhs: Rhs) -> Self::Output;

    /// Scalar reference implementation.
    fn scalar_add(self, rhs: Rhs) -> Self::Output;
}

/// Dot product over whole slices.
pub trait BatchDot<Rhs = Self> {
    /// The produced value.
    type Output;

    /// Lane-accelerated dot product.
    fn simd_dot(self, rhs: Rhs) -> Self::Output;

    /// Lane-accelerated dot product over rayon-parallel blocks.
    fn par_simd_dot(self, rhs: Rhs) -> Self::Output;

    /// Scalar reference implementation.
    fn scalar_dot(self, rhs: Rhs) -> Self::Output;
}

/// Allocates a `Vec<f32>` aligned for the active lane tier, with
/// uninitialized contents.
///
/// The caller must write every element before reading any. The capacity
/// equals the length, so no reallocation can move the buffer.
#[inline(always)]
pub(crate) fn alloc_uninit_f32_vec(len: usize) -> Vec<f32> {
    if len == 0 {
        return Vec::new();
    }

    let layout = Layout::from_size_align(len * std::mem::size_of::<f32>(), Lane::ALIGNMENT)
        .expect("Invalid layout");

    let ptr = unsafe { alloc(layout) as *mut f32 };

    if ptr.is_null() {
        handle_alloc_error(layout);
    }

    // SAFETY: the pointer is non-null and the layout is valid for `len`
    // elements; capacity == len prevents reallocation.
    unsafe { Vec::from_raw_parts(ptr, len, len) }
}
