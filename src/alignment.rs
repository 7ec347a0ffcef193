use std::fmt;
use std::ops::Range;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Mode, Score};

/// Reconstructed local alignment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlignmentResult {
    /// Aligned part of the first sequence, with `-` where the second sequence has a symbol the
    /// first doesn't
    pub aligned1: String,
    pub aligned2: String,
    /// `|` for a match, `*` for a mismatch and a blank for a gap
    pub marker: String,
    /// 0-based, half-open range of the first sequence covered by the alignment
    pub range1: Range<usize>,
    pub range2: Range<usize>,
}

impl AlignmentResult {
    /// Number of columns in the alignment
    pub fn len(&self) -> usize {
        self.marker.len()
    }

    /// True when the sequences share no positive scoring region
    pub fn is_empty(&self) -> bool {
        self.marker.is_empty()
    }

    pub fn matches(&self) -> usize {
        self.marker.bytes().filter(|&mark| mark == b'|').count()
    }

    pub fn gaps(&self) -> usize {
        self.marker.bytes().filter(|&mark| mark == b' ').count()
    }
}

/// Renders the alignment as three lines, with closed 1-based positions:
///
/// ```text
/// Seq1:  1  ACACA  5
///           |||||
/// Seq2:  4  ACACA  8
/// ```
///
/// An empty alignment keeps the layout, with the empty closed range `1..=0` on both sides.
impl fmt::Display for AlignmentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start1 = (self.range1.start + 1).to_string();
        let start2 = (self.range2.start + 1).to_string();
        let width = start1.len().max(start2.len());

        writeln!(
            f,
            "Seq1:  {start1:>width$}  {}  {}",
            self.aligned1, self.range1.end
        )?;
        writeln!(f, "       {:width$}  {}", "", self.marker)?;
        writeln!(
            f,
            "Seq2:  {start2:>width$}  {}  {}",
            self.aligned2, self.range2.end
        )
    }
}

/// Output of [`crate::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlignmentReport {
    pub result: AlignmentResult,
    /// Wall time of scoring and traceback
    pub elapsed: Duration,
    pub score: Score,
    pub mode: Mode,
}

impl AlignmentReport {
    /// Compare everything but the timing
    pub fn same_alignment(&self, other: &AlignmentReport) -> bool {
        self.score == other.score && self.result == other.result
    }
}

impl fmt::Display for AlignmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {:.3} ms, score: {}",
            self.mode,
            self.elapsed.as_secs_f64() * 1000.0,
            self.score
        )
    }
}
