#[cfg(target_arch = "x86_64")]
mod avx;
#[cfg(target_arch = "aarch64")]
mod neon;
mod portable;
#[cfg(target_arch = "x86_64")]
mod sse;

#[cfg(target_arch = "x86_64")]
pub use avx::AVXVector;
#[cfg(target_arch = "aarch64")]
pub use neon::NEONVector;
pub use portable::PortableVector;
#[cfg(target_arch = "x86_64")]
pub use sse::SSEVector;

/// Fixed width vector of `i32` lanes. Masks use all bits set for `true` and zero for `false`.
pub trait Vector: Copy + core::fmt::Debug {
    /// Number of `i32` lanes
    const LANES: usize;

    /// Whether the current CPU supports the instructions used by this vector
    fn is_available() -> bool;

    /// Create a vector with the given value repeated into each lane
    unsafe fn splat_i32(value: i32) -> Self;

    #[inline(always)]
    unsafe fn zero() -> Self {
        Self::splat_i32(0)
    }

    /// Read `LANES` values from the slice
    ///
    /// # Safety
    ///
    /// Callers must guarantee that `values.len() >= LANES`
    unsafe fn load(values: &[i32]) -> Self;

    /// Write `LANES` values into the slice
    ///
    /// # Safety
    ///
    /// Callers must guarantee that `out.len() >= LANES`
    unsafe fn store(self, out: &mut [i32]);

    unsafe fn add_i32(self, other: Self) -> Self;
    unsafe fn max_i32(self, other: Self) -> Self;

    unsafe fn eq_i32(self, other: Self) -> Self;
    unsafe fn gt_i32(self, other: Self) -> Self;

    /// Uses a mask to blend the values of `self` and `other` where `0` means `self` and `!0`
    /// means `other`
    unsafe fn blendv(self, other: Self, mask: Self) -> Self;

    /// Move every lane up by one (lane `k` receives lane `k - 1`), filling lane 0 with `fill`
    unsafe fn shift_right_padded_i32(self, fill: i32) -> Self;

    /// Whether any lane of the mask is set
    unsafe fn any(self) -> bool;
}
