use crate::{r#const::NEG_INF, simd::Vector};

/// Resolves the up gaps (skipping a char in the first sequence) of one column. Each cell depends
/// on the final score of the cell above it, which for stripe offset 0 is the last offset of the
/// previous lane. A single pass carries a gap to the end of its lane, but only one lane further,
/// so we sweep until no gap changes.
///
/// ```text
/// // 2 lanes, seg_len = 3, gap open -2, gap extend -1
/// // a match in the middle of lane 0 (score 6) opens a gap running into lane 1
///
/// scores (before):  offset 0: [0   0]   offset 1: [6   0]   offset 2: [0   0]
/// sweep 1:          offset 0: [0   0]   offset 1: [6   0]   offset 2: [4   0]   // lane 1 read the stale 0
/// sweep 2:          offset 0: [0   3]   offset 1: [6   2]   offset 2: [4   1]
/// sweep 3:          no change, done
/// ```
///
/// Gaps only ever increase between sweeps, so the fixed point is the exact recurrence and is
/// reached after at most `LANES + 1` sweeps. On entry `scores` holds `max(0, diag, left)`, on
/// exit the final scores of the column. Returns the number of sweeps.
///
/// # Safety
///
/// Caller must ensure that the instructions used by `V` are available
#[inline(always)]
pub unsafe fn propagate_vertical_gaps<V: Vector>(
    scores: &mut [V],
    up_gaps: &mut [V],
    gap_open: V,
    gap_extend: V,
) -> usize {
    debug_assert!(!scores.is_empty() && scores.len() == up_gaps.len());
    let seg_len = scores.len();

    let neg_inf = V::splat_i32(NEG_INF);
    up_gaps.fill(neg_inf);

    let mut sweeps = 0;
    loop {
        sweeps += 1;
        let mut changed = false;

        // Lane 0 at offset 0 sits right below the boundary row
        let mut above_score = scores[seg_len - 1].shift_right_padded_i32(0);
        let mut above_gap = up_gaps[seg_len - 1].shift_right_padded_i32(NEG_INF);

        for offset in 0..seg_len {
            let gap = above_score
                .add_i32(gap_open)
                .max_i32(above_gap.add_i32(gap_extend));
            changed |= gap.gt_i32(up_gaps[offset]).any();

            up_gaps[offset] = gap;
            scores[offset] = scores[offset].max_i32(gap);

            above_score = scores[offset];
            above_gap = gap;
        }

        if !changed {
            break;
        }
    }

    debug_assert!(
        sweeps <= V::LANES + 1,
        "up gaps took {sweeps} sweeps to converge"
    );
    sweeps
}
