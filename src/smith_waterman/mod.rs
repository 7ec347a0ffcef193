//! The [Smith Waterman algorithm](https://en.wikipedia.org/wiki/Smith%E2%80%93Waterman_algorithm) performs local sequence alignment, finding the best scoring pair of subsequences between two DNA strings. With [affine gaps](https://en.wikipedia.org/wiki/Smith%E2%80%93Waterman_algorithm#Affine), opening a gap costs more than extending it, so one long gap is preferred over many short ones.
//!
//! Two engines are provided, which always produce the same score, best cell and direction matrix:
//! - [`reference`]: the scalar recurrence, one cell at a time in row-major order
//! - [`simd`]: a [striped](https://doi.org/10.1093/bioinformatics/btl582) reformulation which
//!   scores `LANES` cells of a column per vector instruction
//!
//! ```text
//! seq1: "ACGTACG" (m = 7), 4 lanes => seg_len = ceil(7 / 4) = 2
//!
//! // each lane owns a contiguous stripe of seq1, one vector per stripe offset
//! offset 0:  [A   G   A   G]     i = 0, 2, 4, 6
//! offset 1:  [C   T   C   _]     i = 1, 3, 5, (padding)
//!
//! // the cell above offset 0 lives at the end of the previous lane, so it's read from the
//! // last offset shifted up by one lane, with lane 0 filled from the matrix boundary
//! offset 1:  [C   T   C   _]
//! shifted:   [0   C   T   C]
//! ```
//!
//! The diagonal and left (previous column) dependencies are known up front, so they're resolved in
//! a single pass over the offsets. The up dependency chain runs through the column itself, which
//! striping serializes across lanes: a gap opened at the end of lane 0 only reaches lane 1 on the
//! next pass. The up gaps are therefore swept until nothing changes, see [`simd::gaps`].

use crate::Score;

pub mod reference;
pub mod simd;
mod traceback;

pub use reference::{score_matrix, smith_waterman};
pub use simd::{smith_waterman_lanes, smith_waterman_portable};
pub use traceback::{AlignmentPathIter, AlignmentStep, traceback};

/// Predecessor which produced the score of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Direction {
    /// Boundary, or a reset to 0 that no predecessor reaches. Terminates the traceback
    #[default]
    None = 0,
    /// Match or mismatch, consuming a symbol from both sequences
    Diagonal = 1,
    /// Gap in the second sequence, consuming a symbol from the first
    Up = 2,
    /// Gap in the first sequence, consuming a symbol from the second
    Left = 3,
}

impl Direction {
    /// Convert the lane value written by the vector engine
    #[inline(always)]
    pub(crate) fn from_lane(value: i32) -> Self {
        match value {
            1 => Direction::Diagonal,
            2 => Direction::Up,
            3 => Direction::Left,
            _ => {
                debug_assert_eq!(value, 0, "invalid direction lane value");
                Direction::None
            }
        }
    }
}

/// Direction per cell of the `(m + 1) x (n + 1)` matrix, row `i` for the first sequence and
/// column `j` for the second. Row 0 and column 0 are the boundary and always [`Direction::None`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionMatrix {
    cells: Vec<Direction>,
    rows: usize,
    cols: usize,
}

impl DirectionMatrix {
    pub fn new(seq1_len: usize, seq2_len: usize) -> Self {
        let rows = seq1_len + 1;
        let cols = seq2_len + 1;
        Self {
            cells: vec![Direction::None; rows * cols],
            rows,
            cols,
        }
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Direction {
        self.cells[row * self.cols + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, direction: Direction) {
        debug_assert!(row > 0 && col > 0, "boundary cells are fixed");
        self.cells[row * self.cols + col] = direction;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

/// Running maximum over the score matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BestCell {
    pub score: Score,
    pub row: usize,
    pub col: usize,
}

impl BestCell {
    /// Keep the first occurrence of the maximum in row-major order, regardless of the order in
    /// which cells are offered
    #[inline(always)]
    pub fn offer(&mut self, score: Score, row: usize, col: usize) {
        if score > self.score || (score == self.score && score > 0 && (row, col) < (self.row, self.col))
        {
            *self = BestCell { score, row, col };
        }
    }
}

/// Output of either engine, consumed by the traceback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scored {
    pub best: BestCell,
    pub directions: DirectionMatrix,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_cell_first_occurrence() {
        let mut best = BestCell::default();
        best.offer(0, 1, 1);
        assert_eq!(best, BestCell::default());

        best.offer(4, 3, 2);
        best.offer(4, 3, 5);
        assert_eq!((best.row, best.col), (3, 2));

        // offered out of order (as the lanes do), an earlier row still wins
        best.offer(4, 1, 9);
        assert_eq!((best.row, best.col), (1, 9));

        best.offer(5, 7, 7);
        assert_eq!(best, BestCell { score: 5, row: 7, col: 7 });
    }

    #[test]
    fn test_direction_matrix_boundary() {
        let mut matrix = DirectionMatrix::new(2, 3);
        assert_eq!((matrix.rows(), matrix.cols()), (3, 4));
        matrix.set(2, 3, Direction::Left);
        assert_eq!(matrix.get(2, 3), Direction::Left);
        assert_eq!(matrix.get(0, 3), Direction::None);
        assert_eq!(matrix.get(2, 0), Direction::None);
    }

    #[test]
    fn test_direction_from_lane() {
        for direction in [
            Direction::None,
            Direction::Diagonal,
            Direction::Up,
            Direction::Left,
        ] {
            assert_eq!(Direction::from_lane(direction as i32), direction);
        }
    }
}
