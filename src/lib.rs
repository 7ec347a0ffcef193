//! Swalign is a local aligner for nucleotide sequences. The core is Smith-Waterman with affine gaps, implemented twice: a scalar reference engine and a striped engine which scores several cells of a column per SIMD instruction (AVX2, SSE4.1, NEON or a portable fallback, detected at runtime). Both engines produce the same score, best cell and traceback for every input.
//!
//! # Example: aligning two sequences
//!
//! ```rust
//! use swalign::{Mode, Sequence, run};
//!
//! let seq1 = Sequence::new("seq1", "ACACACTA");
//! let seq2 = Sequence::new("seq2", "AGCACACA");
//!
//! let report = run(&seq1, &seq2, Mode::VectorLane).unwrap();
//! assert_eq!(report.score, 10);
//! assert_eq!(report.result.aligned1, "ACACA");
//! println!("{report}\n{}", report.result);
//! ```
//!
//! # Example: custom scoring
//!
//! ```rust
//! use swalign::{Config, Mode, Scoring, Sequence, run_with_config};
//!
//! let config = Config {
//!     mode: Mode::Scalar,
//!     scoring: Scoring {
//!         match_score: 5,
//!         mismatch_score: -4,
//!         gap_open: -10,
//!         gap_extend: -1,
//!     },
//! };
//! let seq1 = Sequence::new("seq1", "GATTACA");
//! let seq2 = Sequence::new("seq2", "GATTACA");
//! let report = run_with_config(&seq1, &seq2, &config).unwrap();
//! assert_eq!(report.score, 35);
//! ```
//!
//! # Example: many pairs
//!
//! ```rust
//! use swalign::{Config, Sequence, align_batch};
//!
//! let pairs = vec![
//!     (Sequence::new("a", "ACGT"), Sequence::new("b", "ACGT")),
//!     (Sequence::new("c", "AAAA"), Sequence::new("d", "CCCC")),
//! ];
//! let reports = align_batch(&pairs, &Config::default());
//! assert_eq!(reports[0].as_ref().unwrap().score, 8);
//! assert_eq!(reports[1].as_ref().unwrap().score, 0);
//! ```
#![allow(unsafe_op_in_unsafe_fn)]

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod alignment;
mod batch;
pub mod r#const;
pub mod error;
pub mod fasta;
mod sequence;
mod simd;
pub mod smith_waterman;

pub use alignment::{AlignmentReport, AlignmentResult};
pub use batch::{align_batch, align_batch_parallel};
pub use error::{Error, Result};
pub use sequence::{NUCLEOTIDES, Sequence};

use r#const::*;

/// Integer type of every score in the matrices
pub type Score = i32;

/// Engine used by [`run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Mode {
    /// One cell at a time, accepts any byte
    Scalar,
    /// Striped SIMD engine, `ACGT` only
    #[default]
    VectorLane,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Scalar => "scalar",
            Mode::VectorLane => "vector-lane",
        })
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "scalar" | "naive" => Ok(Mode::Scalar),
            "vector" | "vector-lane" | "simd" | "striped" => Ok(Mode::VectorLane),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Engine to score with, see [`Mode`]
    pub mode: Mode,
    /// Controls the scoring used by both engines, see [`Scoring::validate`] for the accepted
    /// ranges
    pub scoring: Scoring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scoring {
    /// Score for a pair of equal symbols
    pub match_score: Score,
    /// Score for a substitution, usually negative
    pub mismatch_score: Score,
    /// Score of the first position of a gap (insertion/deletion)
    pub gap_open: Score,
    /// Score of every following position of the same gap
    pub gap_extend: Score,
}

impl Default for Scoring {
    fn default() -> Self {
        Scoring {
            match_score: MATCH_SCORE,
            mismatch_score: MISMATCH_SCORE,
            gap_open: GAP_OPEN,
            gap_extend: GAP_EXTEND,
        }
    }
}

impl Scoring {
    #[inline(always)]
    pub fn score(&self, a: u8, b: u8) -> Score {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    /// A gap of `len` positions
    pub fn gap(&self, len: usize) -> Score {
        match len {
            0 => 0,
            len => self.gap_open + (len as Score - 1) * self.gap_extend,
        }
    }

    /// Requires a positive match score, non-positive gap scores and every value within `i16`.
    /// Every candidate is then at most `i16::MAX` below a non-negative score, so only the scores
    /// themselves grow with the sequence length, see [`Scoring::validate_lengths`].
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("match", self.match_score),
            ("mismatch", self.mismatch_score),
            ("gap open", self.gap_open),
            ("gap extend", self.gap_extend),
        ];
        if let Some((name, value)) = fields
            .iter()
            .find(|(_, value)| i16::try_from(*value).is_err())
        {
            return Err(Error::InvalidScoring(format!(
                "{name} score {value} is out of range"
            )));
        }

        if self.match_score <= 0 {
            return Err(Error::InvalidScoring(format!(
                "match score must be positive, got {}",
                self.match_score
            )));
        }
        if self.gap_open > 0 || self.gap_extend > 0 {
            return Err(Error::InvalidScoring(format!(
                "gap scores must not be positive, got open {} and extend {}",
                self.gap_open, self.gap_extend
            )));
        }
        Ok(())
    }

    /// No score can exceed `match_score * min(len1, len2)`, which must fit in a [`Score`]
    pub fn validate_lengths(&self, len1: usize, len2: usize) -> Result<()> {
        let shortest = len1.min(len2);
        let max_score = Score::try_from(shortest)
            .ok()
            .and_then(|len| len.checked_mul(self.match_score));
        match max_score {
            Some(_) => Ok(()),
            None => Err(Error::InvalidScoring(format!(
                "match score {} over {shortest} symbols overflows the score range",
                self.match_score
            ))),
        }
    }
}

/// Align two sequences with the default scoring
pub fn run(seq1: &Sequence, seq2: &Sequence, mode: Mode) -> Result<AlignmentReport> {
    run_with_config(
        seq1,
        seq2,
        &Config {
            mode,
            ..Config::default()
        },
    )
}

/// Score both sequences with the configured engine and trace the best local alignment back.
/// The vector lane engine fails on symbols outside of `ACGT`.
pub fn run_with_config(
    seq1: &Sequence,
    seq2: &Sequence,
    config: &Config,
) -> Result<AlignmentReport> {
    config.scoring.validate()?;
    config.scoring.validate_lengths(seq1.len(), seq2.len())?;

    let start = Instant::now();
    let scored = match config.mode {
        Mode::Scalar => {
            smith_waterman::smith_waterman(seq1.symbols(), seq2.symbols(), &config.scoring)
        }
        Mode::VectorLane => smith_waterman::smith_waterman_lanes(seq1, seq2, &config.scoring)?,
    };
    let result = smith_waterman::traceback(
        &scored.directions,
        seq1.symbols(),
        seq2.symbols(),
        &scored.best,
    );
    let elapsed = start.elapsed();

    debug!(
        "{} alignment of '{}' ({}) and '{}' ({}): score {} in {:?}",
        config.mode,
        seq1.label(),
        seq1.len(),
        seq2.label(),
        seq2.len(),
        scored.best.score,
        elapsed
    );

    Ok(AlignmentReport {
        result,
        elapsed,
        score: scored.best.score,
        mode: config.mode,
    })
}
