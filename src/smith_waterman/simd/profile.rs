use crate::{
    Scoring,
    sequence::{NUCLEOTIDES, nucleotide_index},
    simd::Vector,
};

/// Match/mismatch scores of every nucleotide against the query, in striped layout: for each
/// nucleotide, one vector per stripe offset where lane `k` holds the score against
/// `query[offset + k * seg_len]`. Padding past the end of the query scores as a mismatch.
#[derive(Debug, Clone)]
pub struct QueryProfile<V: Vector> {
    profile: [Vec<V>; 4],
    seg_len: usize,
}

impl<V: Vector> QueryProfile<V> {
    /// # Safety
    ///
    /// Caller must ensure that the instructions used by `V` are available
    #[inline(always)]
    pub unsafe fn new(query: &[u8], scoring: &Scoring) -> Self {
        let seg_len = query.len().div_ceil(V::LANES);
        let mut lanes = vec![0; V::LANES];

        let profile = NUCLEOTIDES.map(|nucleotide| {
            (0..seg_len)
                .map(|offset| {
                    for (lane, score) in lanes.iter_mut().enumerate() {
                        *score = match query.get(offset + lane * seg_len) {
                            Some(&symbol) => scoring.score(symbol, nucleotide),
                            None => scoring.mismatch_score,
                        };
                    }
                    unsafe { V::load(&lanes) }
                })
                .collect()
        });

        Self { profile, seg_len }
    }

    #[inline(always)]
    pub fn seg_len(&self) -> usize {
        self.seg_len
    }

    /// Scores of the whole query against a single database symbol, `None` for symbols outside
    /// of the alphabet
    #[inline(always)]
    pub fn get(&self, symbol: u8) -> Option<&[V]> {
        nucleotide_index(symbol).map(|index| self.profile[index].as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::PortableVector;

    #[test]
    fn test_striped_layout() {
        let scoring = Scoring::default();
        // 5 symbols over 2 lanes => 3 offsets, lane 1 has one padding cell
        let profile = unsafe { QueryProfile::<PortableVector<2>>::new(b"ACGTA", &scoring) };
        assert_eq!(profile.seg_len(), 3);

        let a = profile.get(b'A').unwrap();
        // lane 0 covers "ACG", lane 1 covers "TA" + padding
        assert_eq!(a[0].0, [2, -1]);
        assert_eq!(a[1].0, [-1, 2]);
        assert_eq!(a[2].0, [-1, -1]);

        let t = profile.get(b'T').unwrap();
        assert_eq!(t[0].0, [-1, 2]);

        assert!(profile.get(b'N').is_none());
    }

    #[test]
    fn test_empty_query() {
        let profile =
            unsafe { QueryProfile::<PortableVector<4>>::new(b"", &Scoring::default()) };
        assert_eq!(profile.seg_len(), 0);
        assert!(profile.get(b'A').unwrap().is_empty());
    }
}
