use std::arch::aarch64::*;

/// 4 lanes of `i32` in a 128-bit NEON register
#[derive(Debug, Clone, Copy)]
pub struct NEONVector(int32x4_t);

impl super::Vector for NEONVector {
    const LANES: usize = 4;

    #[inline]
    fn is_available() -> bool {
        // NEON is mandatory on aarch64
        cfg!(target_arch = "aarch64")
    }

    #[inline(always)]
    unsafe fn splat_i32(value: i32) -> Self {
        Self(vdupq_n_s32(value))
    }

    #[inline(always)]
    unsafe fn load(values: &[i32]) -> Self {
        debug_assert!(values.len() >= Self::LANES);
        Self(vld1q_s32(values.as_ptr()))
    }

    #[inline(always)]
    unsafe fn store(self, out: &mut [i32]) {
        debug_assert!(out.len() >= Self::LANES);
        vst1q_s32(out.as_mut_ptr(), self.0)
    }

    #[inline(always)]
    unsafe fn add_i32(self, other: Self) -> Self {
        Self(vaddq_s32(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn max_i32(self, other: Self) -> Self {
        Self(vmaxq_s32(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn eq_i32(self, other: Self) -> Self {
        Self(vreinterpretq_s32_u32(vceqq_s32(self.0, other.0)))
    }

    #[inline(always)]
    unsafe fn gt_i32(self, other: Self) -> Self {
        Self(vreinterpretq_s32_u32(vcgtq_s32(self.0, other.0)))
    }

    #[inline(always)]
    unsafe fn blendv(self, other: Self, mask: Self) -> Self {
        Self(vbslq_s32(vreinterpretq_u32_s32(mask.0), other.0, self.0))
    }

    #[inline(always)]
    unsafe fn shift_right_padded_i32(self, fill: i32) -> Self {
        // [fill, fill, fill, fill] ++ [a, b, c, d] starting at element 3 -> [fill, a, b, c]
        Self(vextq_s32::<3>(vdupq_n_s32(fill), self.0))
    }

    #[inline(always)]
    unsafe fn any(self) -> bool {
        vmaxvq_u32(vreinterpretq_u32_s32(self.0)) != 0
    }
}
