use std::arch::x86_64::*;

/// 4 lanes of `i32` in a 128-bit register. Requires SSE4.1 for `max` and `blendv`.
#[derive(Debug, Clone, Copy)]
pub struct SSEVector(__m128i);

impl super::Vector for SSEVector {
    const LANES: usize = 4;

    #[inline]
    fn is_available() -> bool {
        raw_cpuid::CpuId::new()
            .get_feature_info()
            .is_some_and(|info| info.has_sse41())
    }

    #[inline(always)]
    unsafe fn splat_i32(value: i32) -> Self {
        Self(_mm_set1_epi32(value))
    }

    #[inline(always)]
    unsafe fn load(values: &[i32]) -> Self {
        debug_assert!(values.len() >= Self::LANES);
        Self(_mm_loadu_si128(values.as_ptr() as *const __m128i))
    }

    #[inline(always)]
    unsafe fn store(self, out: &mut [i32]) {
        debug_assert!(out.len() >= Self::LANES);
        _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, self.0)
    }

    #[inline(always)]
    unsafe fn add_i32(self, other: Self) -> Self {
        Self(_mm_add_epi32(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn max_i32(self, other: Self) -> Self {
        Self(_mm_max_epi32(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn eq_i32(self, other: Self) -> Self {
        Self(_mm_cmpeq_epi32(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn gt_i32(self, other: Self) -> Self {
        Self(_mm_cmpgt_epi32(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn blendv(self, other: Self, mask: Self) -> Self {
        Self(_mm_blendv_epi8(self.0, other.0, mask.0))
    }

    #[inline(always)]
    unsafe fn shift_right_padded_i32(self, fill: i32) -> Self {
        // byte shift leaves lane 0 zeroed, cvtsi32 leaves lanes 1..4 zeroed
        Self(_mm_or_si128(
            _mm_slli_si128::<4>(self.0),
            _mm_cvtsi32_si128(fill),
        ))
    }

    #[inline(always)]
    unsafe fn any(self) -> bool {
        _mm_movemask_epi8(self.0) != 0
    }
}
