use log::trace;

use crate::{
    Scoring,
    error::Result,
    r#const::NEG_INF,
    sequence::Sequence,
    simd::Vector,
    smith_waterman::{BestCell, Direction, DirectionMatrix, Scored},
};

use super::gaps::propagate_vertical_gaps;
use super::profile::QueryProfile;

/// Striped Smith Waterman over `V::LANES` lanes of the first sequence, one column of the second
/// sequence at a time. Produces the same best cell and direction matrix as
/// [`crate::smith_waterman::smith_waterman`].
///
/// # Safety
///
/// Caller must ensure that the instructions used by `V` are available
#[inline(always)]
pub unsafe fn smith_waterman_striped<V: Vector>(
    seq1: &Sequence,
    seq2: &Sequence,
    scoring: &Scoring,
) -> Result<Scored> {
    seq1.validate_nucleotides()?;
    seq2.validate_nucleotides()?;

    let query = seq1.symbols();
    let database = seq2.symbols();

    let mut directions = DirectionMatrix::new(query.len(), database.len());
    let mut best = BestCell::default();
    if query.is_empty() || database.is_empty() {
        return Ok(Scored { best, directions });
    }

    let profile = QueryProfile::<V>::new(query, scoring);
    let seg_len = profile.seg_len();

    // Constants
    let zero = V::zero();
    let gap_open = V::splat_i32(scoring.gap_open);
    let gap_extend = V::splat_i32(scoring.gap_extend);
    let direction_none = V::splat_i32(Direction::None as i32);
    let direction_diag = V::splat_i32(Direction::Diagonal as i32);
    let direction_up = V::splat_i32(Direction::Up as i32);
    let direction_left = V::splat_i32(Direction::Left as i32);

    // State, the previous column is never written while the current one is computed
    let mut prev_scores = vec![zero; seg_len];
    let mut scores = vec![zero; seg_len];
    let mut left_gaps = vec![V::splat_i32(NEG_INF); seg_len];
    let mut up_gaps = vec![zero; seg_len];
    let mut diag_scores = vec![zero; seg_len];
    let mut score_lanes = vec![0; V::LANES];
    let mut direction_lanes = vec![0; V::LANES];

    for (col, &symbol) in database.iter().enumerate().map(|(j, c)| (j + 1, c)) {
        let Some(symbol_scores) = profile.get(symbol) else {
            unreachable!("database symbols are validated before scoring");
        };

        // Diagonal and left only depend on the previous column. The diagonal of offset 0 is the
        // last offset of the previous lane, lane 0 reads the boundary
        let mut prev_diag = prev_scores[seg_len - 1].shift_right_padded_i32(0);
        for offset in 0..seg_len {
            let diag = prev_diag.add_i32(symbol_scores[offset]);
            let left = prev_scores[offset]
                .add_i32(gap_open)
                .max_i32(left_gaps[offset].add_i32(gap_extend));

            diag_scores[offset] = diag;
            left_gaps[offset] = left;
            scores[offset] = diag.max_i32(left).max_i32(zero);
            prev_diag = prev_scores[offset];
        }

        // Up - depends on the current column, swept until converged
        let sweeps = propagate_vertical_gaps(&mut scores, &mut up_gaps, gap_open, gap_extend);
        trace!("column {col}: up gaps converged after {sweeps} sweeps");

        for offset in 0..seg_len {
            let score = scores[offset];

            // Ties resolve in the order diagonal, up, left, so the highest priority blends last.
            // Lanes no predecessor reaches keep the reset
            let direction = direction_none
                .blendv(direction_left, score.eq_i32(left_gaps[offset]))
                .blendv(direction_up, score.eq_i32(up_gaps[offset]))
                .blendv(direction_diag, score.eq_i32(diag_scores[offset]));

            score.store(&mut score_lanes);
            direction.store(&mut direction_lanes);

            for lane in 0..V::LANES {
                let row = offset + lane * seg_len + 1;
                // Rows grow with the lane, so everything after this is padding
                if row > query.len() {
                    break;
                }
                best.offer(score_lanes[lane], row, col);
                directions.set(row, col, Direction::from_lane(direction_lanes[lane]));
            }
        }

        std::mem::swap(&mut prev_scores, &mut scores);
    }

    Ok(Scored { best, directions })
}
