use log::debug;

use crate::{Scoring, error::Result, sequence::Sequence, simd::PortableVector};

#[cfg(target_arch = "aarch64")]
use crate::simd::NEONVector;
#[cfg(target_arch = "x86_64")]
use crate::simd::{AVXVector, SSEVector};

mod algo;
pub mod gaps;
mod profile;

pub use profile::QueryProfile;

/// Lane count of the portable backend when no instruction set specific backend is available
pub const PORTABLE_LANES: usize = 8;

/// Instruction set used by [`smith_waterman_lanes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    #[cfg(target_arch = "x86_64")]
    AVX2,
    #[cfg(target_arch = "x86_64")]
    SSE,
    #[cfg(target_arch = "aarch64")]
    NEON,
    Portable,
}

impl Backend {
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if StripedAVX2::is_available() {
                return Backend::AVX2;
            }
            if StripedSSE::is_available() {
                return Backend::SSE;
            }
        }
        #[cfg(target_arch = "aarch64")]
        if StripedNEON::is_available() {
            return Backend::NEON;
        }
        Backend::Portable
    }

    pub fn lanes(&self) -> usize {
        match self {
            #[cfg(target_arch = "x86_64")]
            Backend::AVX2 => 8,
            #[cfg(target_arch = "x86_64")]
            Backend::SSE => 4,
            #[cfg(target_arch = "aarch64")]
            Backend::NEON => 4,
            Backend::Portable => PORTABLE_LANES,
        }
    }
}

/// Striped Smith Waterman on the widest vectors supported by the CPU. Fails if either sequence
/// contains a symbol outside of `ACGT`.
pub fn smith_waterman_lanes(
    seq1: &Sequence,
    seq2: &Sequence,
    scoring: &Scoring,
) -> Result<super::Scored> {
    let backend = Backend::detect();
    debug!(
        "striped alignment of {}x{} on {:?} ({} lanes)",
        seq1.len(),
        seq2.len(),
        backend,
        backend.lanes()
    );

    match backend {
        #[cfg(target_arch = "x86_64")]
        Backend::AVX2 => unsafe { StripedAVX2::smith_waterman(seq1, seq2, scoring) },
        #[cfg(target_arch = "x86_64")]
        Backend::SSE => unsafe { StripedSSE::smith_waterman(seq1, seq2, scoring) },
        #[cfg(target_arch = "aarch64")]
        Backend::NEON => unsafe { StripedNEON::smith_waterman(seq1, seq2, scoring) },
        Backend::Portable => smith_waterman_portable::<PORTABLE_LANES>(seq1, seq2, scoring),
    }
}

/// Striped Smith Waterman on plain arrays of `L` lanes
pub fn smith_waterman_portable<const L: usize>(
    seq1: &Sequence,
    seq2: &Sequence,
    scoring: &Scoring,
) -> Result<super::Scored> {
    const { assert!(L > 0, "at least one lane is required") };
    unsafe { algo::smith_waterman_striped::<PortableVector<L>>(seq1, seq2, scoring) }
}

macro_rules! define_striped {
    (
        $name:ident,
        vector = $vector:ty,
        target_feature = $feature:literal
    ) => {
        pub struct $name;

        impl $name {
            pub fn is_available() -> bool {
                <$vector as crate::simd::Vector>::is_available()
            }

            #[doc = concat!(
                "Striped Smith Waterman on `", stringify!($vector), "`\n\n",
                "# Safety\n\n",
                "Caller must ensure that the target feature `", $feature, "` is available"
            )]
            #[target_feature(enable = $feature)]
            pub unsafe fn smith_waterman(
                seq1: &Sequence,
                seq2: &Sequence,
                scoring: &Scoring,
            ) -> Result<super::Scored> {
                algo::smith_waterman_striped::<$vector>(seq1, seq2, scoring)
            }
        }
    };
}

#[cfg(target_arch = "x86_64")]
define_striped!(StripedAVX2, vector = AVXVector, target_feature = "avx2");

#[cfg(target_arch = "x86_64")]
define_striped!(StripedSSE, vector = SSEVector, target_feature = "sse4.1");

#[cfg(target_arch = "aarch64")]
define_striped!(StripedNEON, vector = NEONVector, target_feature = "neon");

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        error::Error,
        smith_waterman::{Direction, Scored, smith_waterman},
    };

    fn random_sequence(rng: &mut StdRng, len: usize, alphabet: &[u8]) -> Vec<u8> {
        (0..len)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect()
    }

    fn assert_engines_agree(seq1: &[u8], seq2: &[u8]) {
        let scoring = Scoring::default();
        let reference = smith_waterman(seq1, seq2, &scoring);
        let a = Sequence::new("seq1", seq1);
        let b = Sequence::new("seq2", seq2);

        let check = |name: &str, lanes: Result<Scored>| {
            let lanes = lanes.unwrap();
            let context = format!(
                "{name} on {:?} / {:?}",
                String::from_utf8_lossy(seq1),
                String::from_utf8_lossy(seq2)
            );
            assert_eq!(lanes.best, reference.best, "best cell, {context}");
            assert_eq!(lanes.directions, reference.directions, "directions, {context}");
        };

        check("1 lane", smith_waterman_portable::<1>(&a, &b, &scoring));
        check("2 lanes", smith_waterman_portable::<2>(&a, &b, &scoring));
        check("3 lanes", smith_waterman_portable::<3>(&a, &b, &scoring));
        check("8 lanes", smith_waterman_portable::<8>(&a, &b, &scoring));
        check("16 lanes", smith_waterman_portable::<16>(&a, &b, &scoring));
        check("detected", smith_waterman_lanes(&a, &b, &scoring));
    }

    #[test]
    fn test_golden() {
        assert_engines_agree(b"ACACACTA", b"AGCACACA");
    }

    #[test]
    fn test_empty() {
        assert_engines_agree(b"", b"");
        assert_engines_agree(b"ACGT", b"");
        assert_engines_agree(b"", b"ACGT");
    }

    #[test]
    fn test_zero_score_ties_agree() {
        assert_engines_agree(b"ACGT", b"AGT");
        assert_engines_agree(b"AGT", b"ACGT");
        assert_engines_agree(b"ACTGG", b"AGAGG");
        assert_engines_agree(b"AGAGG", b"ACTGG");

        let scored = smith_waterman_portable::<2>(
            &Sequence::new("seq1", "ACGT"),
            &Sequence::new("seq2", "AGT"),
            &Scoring::default(),
        )
        .unwrap();
        assert_eq!(scored.directions.get(2, 1), Direction::Up);
    }

    #[test]
    fn test_query_shorter_than_lanes() {
        assert_engines_agree(b"A", b"AAAA");
        assert_engines_agree(b"ACG", b"TTACGTT");
    }

    #[test]
    fn test_random_agrees_with_reference() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..300 {
            let alphabet: &[u8] = match rng.random_range(0..3) {
                0 => b"ACGT",
                1 => b"AC",
                _ => b"A",
            };
            let len1 = rng.random_range(0..40);
            let len2 = rng.random_range(0..40);
            let seq1 = random_sequence(&mut rng, len1, alphabet);
            let seq2 = random_sequence(&mut rng, len2, alphabet);
            assert_engines_agree(&seq1, &seq2);
        }
    }

    #[test]
    fn test_related_sequences_agree() {
        // insertions and deletions produce long gap runs in both directions
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let len = rng.random_range(10..80);
            let seq1 = random_sequence(&mut rng, len, b"ACGT");
            let split = rng.random_range(0..len);
            let insert_len = rng.random_range(1..30);
            let insert = random_sequence(&mut rng, insert_len, b"ACGT");
            let seq2 = [&seq1[..split], &insert[..], &seq1[split..]].concat();

            assert_engines_agree(&seq1, &seq2);
            assert_engines_agree(&seq2, &seq1);
        }
    }

    #[test]
    fn test_long_vertical_gap_converges() {
        let flank1 = b"CACGAAGACGAGAAACCAAAGCAGAAGGGAGGCAAAGACC";
        let flank2 = b"AGAGCGGAAGGGACAGGAGAGACGGCCCGCCCAAGAAGCG";
        let seq1 = [&flank1[..], &[b'T'; 40][..], &flank2[..]].concat();
        let seq2 = [&flank1[..], &flank2[..]].concat();

        assert_engines_agree(&seq1, &seq2);
        let scored = smith_waterman_portable::<16>(
            &Sequence::new("seq1", seq1),
            &Sequence::new("seq2", seq2),
            &Scoring::default(),
        )
        .unwrap();
        assert_eq!(scored.best.score, 80 * 2 - 2 - 39);
        assert_eq!((scored.best.row, scored.best.col), (120, 80));
    }

    #[test]
    fn test_invalid_symbol() {
        let scoring = Scoring::default();
        let valid = Sequence::new("valid", "ACGT");
        let invalid = Sequence::new("invalid", "ACXT");

        for result in [
            smith_waterman_lanes(&invalid, &valid, &scoring),
            smith_waterman_lanes(&valid, &invalid, &scoring),
        ] {
            match result {
                Err(Error::InvalidSymbol {
                    label,
                    position,
                    symbol,
                }) => {
                    assert_eq!(label, "invalid");
                    assert_eq!(position, 2);
                    assert_eq!(symbol, 'X');
                }
                other => panic!("expected invalid symbol, got {:?}", other.map(|s| s.best)),
            }
        }
    }

    #[test]
    fn test_custom_scoring_agrees() {
        let scoring = Scoring {
            match_score: 5,
            mismatch_score: -4,
            gap_open: -8,
            gap_extend: -2,
        };
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let len1 = rng.random_range(1..50);
            let len2 = rng.random_range(1..50);
            let seq1 = random_sequence(&mut rng, len1, b"ACGT");
            let seq2 = random_sequence(&mut rng, len2, b"ACGT");
            let reference = smith_waterman(&seq1, &seq2, &scoring);
            let lanes = smith_waterman_portable::<4>(
                &Sequence::new("seq1", seq1),
                &Sequence::new("seq2", seq2),
                &scoring,
            )
            .unwrap();
            assert_eq!(lanes, reference);
        }
    }
}
