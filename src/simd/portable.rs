/// Array backed vector for CPUs without a dedicated backend. The fixed width loops are simple
/// enough for the compiler to auto-vectorize.
#[derive(Debug, Clone, Copy)]
pub struct PortableVector<const L: usize>(pub [i32; L]);

impl<const L: usize> PortableVector<L> {
    #[inline(always)]
    fn zip_map(self, other: Self, f: impl Fn(i32, i32) -> i32) -> Self {
        let mut out = [0; L];
        for (lane, out) in out.iter_mut().enumerate() {
            *out = f(self.0[lane], other.0[lane]);
        }
        Self(out)
    }
}

impl<const L: usize> super::Vector for PortableVector<L> {
    const LANES: usize = L;

    #[inline]
    fn is_available() -> bool {
        true
    }

    #[inline(always)]
    unsafe fn splat_i32(value: i32) -> Self {
        Self([value; L])
    }

    #[inline(always)]
    unsafe fn load(values: &[i32]) -> Self {
        let mut out = [0; L];
        out.copy_from_slice(&values[..L]);
        Self(out)
    }

    #[inline(always)]
    unsafe fn store(self, out: &mut [i32]) {
        out[..L].copy_from_slice(&self.0);
    }

    #[inline(always)]
    unsafe fn add_i32(self, other: Self) -> Self {
        self.zip_map(other, i32::wrapping_add)
    }

    #[inline(always)]
    unsafe fn max_i32(self, other: Self) -> Self {
        self.zip_map(other, i32::max)
    }

    #[inline(always)]
    unsafe fn eq_i32(self, other: Self) -> Self {
        self.zip_map(other, |a, b| if a == b { !0 } else { 0 })
    }

    #[inline(always)]
    unsafe fn gt_i32(self, other: Self) -> Self {
        self.zip_map(other, |a, b| if a > b { !0 } else { 0 })
    }

    #[inline(always)]
    unsafe fn blendv(self, other: Self, mask: Self) -> Self {
        let mut out = self.0;
        for (lane, out) in out.iter_mut().enumerate() {
            if mask.0[lane] != 0 {
                *out = other.0[lane];
            }
        }
        Self(out)
    }

    #[inline(always)]
    unsafe fn shift_right_padded_i32(self, fill: i32) -> Self {
        let mut out = [fill; L];
        if L > 1 {
            out[1..].copy_from_slice(&self.0[..L - 1]);
        }
        Self(out)
    }

    #[inline(always)]
    unsafe fn any(self) -> bool {
        self.0.iter().any(|&lane| lane != 0)
    }
}
