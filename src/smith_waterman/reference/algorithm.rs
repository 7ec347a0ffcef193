use crate::{
    Score, Scoring,
    r#const::NEG_INF,
    smith_waterman::{BestCell, Direction, DirectionMatrix, Scored},
};

/// Scalar affine gap Smith Waterman. Accepts arbitrary bytes, anything that isn't equal is scored
/// as a mismatch.
pub fn smith_waterman(seq1: &[u8], seq2: &[u8], scoring: &Scoring) -> Scored {
    fill(seq1, seq2, scoring, |_, _, _| {})
}

/// Full `(m + 1) x (n + 1)` score matrix, including the zero boundary row and column. Only used
/// for inspection, the engines keep rolling rows.
pub fn score_matrix(seq1: &[u8], seq2: &[u8], scoring: &Scoring) -> Vec<Vec<Score>> {
    let mut matrix = vec![vec![0; seq2.len() + 1]; seq1.len() + 1];
    fill(seq1, seq2, scoring, |row, col, score| matrix[row][col] = score);
    matrix
}

#[inline(always)]
fn fill(
    seq1: &[u8],
    seq2: &[u8],
    scoring: &Scoring,
    mut on_cell: impl FnMut(usize, usize, Score),
) -> Scored {
    let mut directions = DirectionMatrix::new(seq1.len(), seq2.len());
    let mut best = BestCell::default();

    // State
    let mut prev_row_scores = vec![0; seq2.len() + 1];
    let mut row_scores = vec![0; seq2.len() + 1];
    // Best score ending in an up gap, per column, carried between rows
    let mut up_gaps = vec![NEG_INF; seq2.len() + 1];

    for i in 1..=seq1.len() {
        let seq1_char = seq1[i - 1];
        let mut left_gap = NEG_INF;

        for j in 1..=seq2.len() {
            // Up - skipping char in seq1
            let up = (prev_row_scores[j] + scoring.gap_open).max(up_gaps[j] + scoring.gap_extend);
            up_gaps[j] = up;

            // Left - skipping char in seq2
            let left = (row_scores[j - 1] + scoring.gap_open).max(left_gap + scoring.gap_extend);
            left_gap = left;

            // Diagonal - match/mismatch
            let diag = prev_row_scores[j - 1] + scoring.score(seq1_char, seq2[j - 1]);

            let score = diag.max(up).max(left).max(0);
            row_scores[j] = score;

            // Ties resolve in the order diagonal, up, left. A reset only wins when no
            // predecessor reaches the score, including a tie at 0
            let direction = if score == diag {
                Direction::Diagonal
            } else if score == up {
                Direction::Up
            } else if score == left {
                Direction::Left
            } else {
                Direction::None
            };
            directions.set(i, j, direction);

            best.offer(score, i, j);
            on_cell(i, j, score);
        }

        std::mem::swap(&mut prev_row_scores, &mut row_scores);
    }

    Scored { best, directions }
}
