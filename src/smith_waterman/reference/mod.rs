mod algorithm;

pub use algorithm::{score_matrix, smith_waterman};
