use crate::Score;

pub const MATCH_SCORE: Score = 2;
pub const MISMATCH_SCORE: Score = -1;
pub const GAP_OPEN: Score = -2;
pub const GAP_EXTEND: Score = -1;

/// Gap state outside of the matrix. Far enough from `Score::MIN` that adding any valid penalty
/// can't overflow.
pub const NEG_INF: Score = Score::MIN / 2;
