//! NEON 4-lane f32 backend for the lane abstraction.
//!
//! `F32x4` wraps ARM's `float32x4_t` register. Comparison results are
//! `uint32x4_t` masks reduced with `vminvq`/`vmaxvq`; NEON has no movemask
//! instruction.
//!
//! # Performance Characteristics
//!
//! - **Vector Width**: 128 bits (4 × f32)
//! - **Memory Alignment**: 16-byte aligned data expected by `load`/`store`
//! - **Fused multiply-add**: always available (`vfmaq_f32`)

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use crate::simd::SimdLane;

/// NEON memory alignment requirement in bytes.
pub(crate) const NEON_ALIGNMENT: usize = 16;

/// Number of f32 elements in a 128-bit NEON register.
pub(crate) const LANE_COUNT: usize = 4;

/// NEON SIMD vector containing 4 packed f32 values.
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    /// NEON 128-bit register.
    pub elements: float32x4_t,
}

impl SimdLane for F32x4 {
    type Mask = uint32x4_t;

    const ALIGNMENT: usize = NEON_ALIGNMENT;
    const WIDTH: usize = LANE_COUNT;

    #[inline(always)]
    fn set(x: f32, y: f32, z: f32, w: f32) -> Self {
        let values = [x, y, z, w];
        Self {
            elements: unsafe { vld1q_f32(values.as_ptr()) },
        }
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { vdupq_n_f32(value) },
        }
    }

    #[inline(always)]
    fn zero() -> Self {
        Self {
            elements: unsafe { vdupq_n_f32(0.0) },
        }
    }

    /// Loads 4 floats via `vld1q_f32`.
    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        Self {
            elements: vld1q_f32(ptr),
        }
    }

    /// NEON load instructions carry no alignment requirement; this is the
    /// same `vld1q_f32` as [`SimdLane::load`].
    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self {
            elements: vld1q_f32(ptr),
        }
    }

    /// Stores 4 floats via `vst1q_f32`.
    #[inline(always)]
    unsafe fn store(self, ptr: *mut f32) {
        vst1q_f32(ptr, self.elements);
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f32) {
        vst1q_f32(ptr, self.elements);
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vaddq_f32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vsubq_f32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vmulq_f32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn mul_scalar(self, scalar: f32) -> Self {
        Self {
            elements: unsafe { vmulq_n_f32(self.elements, scalar) },
        }
    }

    /// `self * b + c` via `vfmaq_f32` (always fused on NEON).
    #[inline(always)]
    fn mul_add(self, b: Self, c: Self) -> Self {
        Self {
            elements: unsafe { vfmaq_f32(c.elements, self.elements, b.elements) },
        }
    }

    /// `self * b - c`, i.e. the negation of `c - self * b`.
    #[inline(always)]
    fn mul_sub(self, b: Self, c: Self) -> Self {
        Self {
            elements: unsafe { vnegq_f32(vfmsq_f32(c.elements, self.elements, b.elements)) },
        }
    }

    /// `c - self * b` via `vfmsq_f32`.
    #[inline(always)]
    fn neg_mul_add(self, b: Self, c: Self) -> Self {
        Self {
            elements: unsafe { vfmsq_f32(c.elements, self.elements, b.elements) },
        }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vminq_f32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vmaxq_f32(self.elements, rhs.elements) },
        }
    }

    /// Lane-wise multiply, then two pairwise-add passes, ending at
    /// `(m0 + m1) + (m2 + m3)`.
    #[inline(always)]
    fn dot(self, rhs: Self) -> f32 {
        unsafe {
            let mult = vmulq_f32(self.elements, rhs.elements);

            let mut sum = vpaddq_f32(mult, mult);
            sum = vpaddq_f32(sum, sum);

            vgetq_lane_f32::<0>(sum)
        }
    }

    /// `(x,y,z,w) -> (y,z,x,w)`: rotate left one lane, then restore lanes
    /// 2 and 3 from the source.
    #[inline(always)]
    fn shuffle_yzxw(self) -> Self {
        unsafe {
            let rotated = vextq_f32::<1>(self.elements, self.elements); // (y, z, w, x)
            let fixed = vcopyq_laneq_f32::<2, 0>(rotated, self.elements); // (y, z, x, x)
            Self {
                elements: vcopyq_laneq_f32::<3, 3>(fixed, self.elements), // (y, z, x, w)
            }
        }
    }

    /// `(x,y,z,w) -> (z,x,y,w)`: rotate left two lanes, then restore lanes
    /// 1, 2 and 3 from the source.
    #[inline(always)]
    fn shuffle_zxyw(self) -> Self {
        unsafe {
            let rotated = vextq_f32::<2>(self.elements, self.elements); // (z, w, x, y)
            let a = vcopyq_laneq_f32::<1, 0>(rotated, self.elements); // (z, x, x, y)
            let b = vcopyq_laneq_f32::<2, 1>(a, self.elements); // (z, x, y, y)
            Self {
                elements: vcopyq_laneq_f32::<3, 3>(b, self.elements), // (z, x, y, w)
            }
        }
    }

    #[inline(always)]
    fn cmp_eq(self, rhs: Self) -> Self::Mask {
        unsafe { vceqq_f32(self.elements, rhs.elements) }
    }

    #[inline(always)]
    fn cmp_ne(self, rhs: Self) -> Self::Mask {
        unsafe { vmvnq_u32(vceqq_f32(self.elements, rhs.elements)) }
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> Self::Mask {
        unsafe { vcleq_f32(self.elements, rhs.elements) }
    }

    #[inline(always)]
    fn cmp_ge(self, rhs: Self) -> Self::Mask {
        unsafe { vcgeq_f32(self.elements, rhs.elements) }
    }

    /// The minimum across lanes is all-ones only when every lane matched.
    #[inline(always)]
    fn all_true(mask: Self::Mask) -> bool {
        unsafe { vminvq_u32(mask) == u32::MAX }
    }

    /// The maximum across lanes is non-zero when any lane matched.
    #[inline(always)]
    fn any_true(mask: Self::Mask) -> bool {
        unsafe { vmaxvq_u32(mask) != 0 }
    }

    #[inline(always)]
    fn get_x(self) -> f32 {
        unsafe { vgetq_lane_f32::<0>(self.elements) }
    }

    #[inline(always)]
    fn get_y(self) -> f32 {
        unsafe { vgetq_lane_f32::<1>(self.elements) }
    }

    #[inline(always)]
    fn get_z(self) -> f32 {
        unsafe { vgetq_lane_f32::<2>(self.elements) }
    }

    #[inline(always)]
    fn get_w(self) -> f32 {
        unsafe { vgetq_lane_f32::<3>(self.elements) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_extract() {
        let v = F32x4::set(1.0, 2.0, 3.0, 4.0);

        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_shuffles_are_cyclic() {
        let v = F32x4::set(1.0, 2.0, 3.0, 9.0);

        assert_eq!(v.shuffle_yzxw().to_array(), [2.0, 3.0, 1.0, 9.0]);
        assert_eq!(v.shuffle_zxyw().to_array(), [3.0, 1.0, 2.0, 9.0]);
    }

    #[test]
    fn test_dot() {
        let a = F32x4::set(1.0, 2.0, 3.0, 4.0);
        let b = F32x4::set(5.0, 6.0, 7.0, 8.0);

        assert_eq!(a.dot(b), 70.0);
    }

    #[test]
    fn test_mask_reductions() {
        let a = F32x4::set(1.0, 2.0, 3.0, 4.0);
        let b = F32x4::set(1.0, 2.0, 3.0, 5.0);

        assert!(!F32x4::all_true(a.cmp_eq(b)));
        assert!(F32x4::any_true(a.cmp_eq(b)));
        assert!(F32x4::all_true(a.cmp_le(b)));
    }
}
