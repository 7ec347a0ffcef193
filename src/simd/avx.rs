use std::arch::x86_64::*;

/// 8 lanes of `i32` in a 256-bit register. Requires AVX2.
#[derive(Debug, Clone, Copy)]
pub struct AVXVector(pub __m256i);

impl super::Vector for AVXVector {
    const LANES: usize = 8;

    #[inline]
    fn is_available() -> bool {
        raw_cpuid::CpuId::new()
            .get_extended_feature_info()
            .is_some_and(|info| info.has_avx2())
    }

    #[inline(always)]
    unsafe fn splat_i32(value: i32) -> Self {
        Self(_mm256_set1_epi32(value))
    }

    #[inline(always)]
    unsafe fn load(values: &[i32]) -> Self {
        debug_assert!(values.len() >= Self::LANES);
        Self(_mm256_loadu_si256(values.as_ptr() as *const __m256i))
    }

    #[inline(always)]
    unsafe fn store(self, out: &mut [i32]) {
        debug_assert!(out.len() >= Self::LANES);
        _mm256_storeu_si256(out.as_mut_ptr() as *mut __m256i, self.0)
    }

    #[inline(always)]
    unsafe fn add_i32(self, other: Self) -> Self {
        Self(_mm256_add_epi32(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn max_i32(self, other: Self) -> Self {
        Self(_mm256_max_epi32(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn eq_i32(self, other: Self) -> Self {
        Self(_mm256_cmpeq_epi32(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn gt_i32(self, other: Self) -> Self {
        Self(_mm256_cmpgt_epi32(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn blendv(self, other: Self, mask: Self) -> Self {
        Self(_mm256_blendv_epi8(self.0, other.0, mask.0))
    }

    #[inline(always)]
    unsafe fn shift_right_padded_i32(self, fill: i32) -> Self {
        // byte shifts don't cross the 128-bit halves on AVX2, so permute across lanes instead
        let shifted =
            _mm256_permutevar8x32_epi32(self.0, _mm256_setr_epi32(0, 0, 1, 2, 3, 4, 5, 6));
        Self(_mm256_blend_epi32::<0b0000_0001>(
            shifted,
            _mm256_set1_epi32(fill),
        ))
    }

    #[inline(always)]
    unsafe fn any(self) -> bool {
        _mm256_movemask_epi8(self.0) != 0
    }
}
