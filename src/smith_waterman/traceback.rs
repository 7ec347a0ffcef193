use super::{BestCell, Direction, DirectionMatrix};
use crate::alignment::AlignmentResult;

/// One column of the alignment. Positions are 0-indexed `(seq1_idx, seq2_idx)`; for gaps, the
/// index on the gapped side is the position the gap sits in front of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentStep {
    Match((usize, usize)),
    Mismatch((usize, usize)),
    /// Symbol of seq1 against a gap in seq2
    Up((usize, usize)),
    /// Symbol of seq2 against a gap in seq1
    Left((usize, usize)),
}

impl AlignmentStep {
    pub fn pos(&self) -> (usize, usize) {
        match self {
            AlignmentStep::Match(pos) | AlignmentStep::Mismatch(pos) => *pos,
            AlignmentStep::Up(pos) | AlignmentStep::Left(pos) => *pos,
        }
    }
}

/// Walks the direction matrix backwards from a cell until it reaches a [`Direction::None`] cell
/// or the boundary, yielding the alignment from its last column to its first.
pub struct AlignmentPathIter<'a> {
    directions: &'a DirectionMatrix,
    seq1: &'a [u8],
    seq2: &'a [u8],
    row_idx: usize,
    col_idx: usize,
}

impl<'a> AlignmentPathIter<'a> {
    pub fn new(
        directions: &'a DirectionMatrix,
        seq1: &'a [u8],
        seq2: &'a [u8],
        start: (usize, usize),
    ) -> Self {
        debug_assert_eq!(directions.rows(), seq1.len() + 1);
        debug_assert_eq!(directions.cols(), seq2.len() + 1);
        Self {
            directions,
            seq1,
            seq2,
            row_idx: start.0,
            col_idx: start.1,
        }
    }

    /// Current cell of the walk. Once exhausted, the cell where the alignment starts.
    pub fn position(&self) -> (usize, usize) {
        (self.row_idx, self.col_idx)
    }
}

impl Iterator for AlignmentPathIter<'_> {
    type Item = AlignmentStep;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.row_idx == 0 || self.col_idx == 0 {
            return None;
        }

        match self.directions.get(self.row_idx, self.col_idx) {
            Direction::None => None,
            Direction::Diagonal => {
                self.row_idx -= 1;
                self.col_idx -= 1;
                let pos = (self.row_idx, self.col_idx);
                if self.seq1[self.row_idx] == self.seq2[self.col_idx] {
                    Some(AlignmentStep::Match(pos))
                } else {
                    Some(AlignmentStep::Mismatch(pos))
                }
            }
            Direction::Up => {
                self.row_idx -= 1;
                Some(AlignmentStep::Up((self.row_idx, self.col_idx)))
            }
            Direction::Left => {
                self.col_idx -= 1;
                Some(AlignmentStep::Left((self.row_idx, self.col_idx)))
            }
        }
    }
}

/// Reconstruct the aligned subsequences ending at the best cell
pub fn traceback(
    directions: &DirectionMatrix,
    seq1: &[u8],
    seq2: &[u8],
    best: &BestCell,
) -> AlignmentResult {
    let mut path = AlignmentPathIter::new(directions, seq1, seq2, (best.row, best.col));

    let mut aligned1 = Vec::new();
    let mut aligned2 = Vec::new();
    let mut marker = Vec::new();
    for step in path.by_ref() {
        let (a, b, mark) = match step {
            AlignmentStep::Match((i, j)) => (seq1[i], seq2[j], b'|'),
            AlignmentStep::Mismatch((i, j)) => (seq1[i], seq2[j], b'*'),
            AlignmentStep::Up((i, _)) => (seq1[i], b'-', b' '),
            AlignmentStep::Left((_, j)) => (b'-', seq2[j], b' '),
        };
        aligned1.push(a);
        aligned2.push(b);
        marker.push(mark);
    }

    // Built from the end backwards
    let reversed = |bytes: Vec<u8>| bytes.into_iter().rev().map(char::from).collect::<String>();
    let (start_row, start_col) = path.position();

    AlignmentResult {
        aligned1: reversed(aligned1),
        aligned2: reversed(aligned2),
        marker: reversed(marker),
        range1: start_row..best.row,
        range2: start_col..best.col,
    }
}
