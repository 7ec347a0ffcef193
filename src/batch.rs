use itertools::Itertools;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use crate::{AlignmentReport, Config, Result, Sequence, run_with_config};

/// Align independent pairs, in parallel when the `parallel` feature is enabled. Reports are
/// returned in input order, a failing pair doesn't affect the others.
pub fn align_batch(pairs: &[(Sequence, Sequence)], config: &Config) -> Vec<Result<AlignmentReport>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        pairs
            .par_iter()
            .map(|(seq1, seq2)| run_with_config(seq1, seq2, config))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        pairs
            .iter()
            .map(|(seq1, seq2)| run_with_config(seq1, seq2, config))
            .collect()
    }
}

/// Align independent pairs on `threads` scoped threads. Reports are returned in input order.
pub fn align_batch_parallel(
    pairs: &[(Sequence, Sequence)],
    config: &Config,
    threads: usize,
) -> Vec<Result<AlignmentReport>> {
    if pairs.is_empty() {
        return vec![];
    }

    // A single alignment is orders of magnitude more work than claiming a chunk
    let chunk_size = 4;
    let num_chunks = pairs.len().div_ceil(chunk_size);
    let next_chunk = AtomicUsize::new(0);

    thread::scope(|s| {
        let handles: Vec<_> = (0..threads.max(1))
            .map(|_| {
                s.spawn(|| {
                    let mut local_reports = Vec::new();

                    loop {
                        // Claim next available chunk
                        let chunk_idx = next_chunk.fetch_add(1, Ordering::Relaxed);
                        if chunk_idx >= num_chunks {
                            break;
                        }

                        let start = chunk_idx * chunk_size;
                        let end = (start + chunk_size).min(pairs.len());
                        for (index, (seq1, seq2)) in pairs[start..end].iter().enumerate() {
                            local_reports.push((start + index, run_with_config(seq1, seq2, config)));
                        }
                    }

                    // Chunks are claimed in increasing order, so each thread's reports are
                    // already sorted by index for the k-way merge
                    local_reports
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .kmerge_by(|a, b| a.0 < b.0)
            .map(|(_, report)| report)
            .collect()
    })
}
