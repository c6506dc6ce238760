use crate::{CentralityControl, Network};
use rayon::prelude::*;
use std::sync::Mutex;

/// Default number of worker blocks when the caller doesn't pin one down,
/// mirroring the teacher's `rayon::current_num_threads()` gate in
/// `betweenness_centrality`.
fn default_block_count() -> usize {
    rayon::current_num_threads()
}

/// Resolves the caller-requested block count against the control struct's
/// `max_parallel_blocks` (`0` = default, matching `§6`).
fn resolve_block_count(requested: usize) -> usize {
    if requested == 0 {
        default_block_count()
    } else {
        requested
    }
}

/// Dispatch rule from `§4.8`: parallel iff the network is large enough
/// and more than one block was requested.
fn is_parallel(vertex_count: usize, blocks: usize) -> bool {
    vertex_count >= 128 && blocks > 1
}

/// Splits `vertex_count` sources into `blocks` contiguous ranges of size
/// `ceil(vertex_count / blocks)`, the last one truncated (`§4.8`).
fn block_ranges(vertex_count: usize, blocks: usize) -> Vec<(usize, usize)> {
    let block_size = vertex_count.div_ceil(blocks);
    (0..blocks)
        .map(|b| {
            let start = b * block_size;
            let end = (start + block_size).min(vertex_count);
            (start, end)
        })
        .filter(|(start, end)| start < end)
        .collect()
}

/// Runs one centrality computation over every enabled source vertex,
/// sequentially or across Rayon-backed worker blocks depending on
/// `§4.8`'s dispatch rule, and returns the reduced `c` buffer.
///
/// `make_worker` builds one reusable per-block scratch bundle; `run_source`
/// runs a single source's SSSP + accumulation into `local_c`, given that
/// worker's scratch. Both closures must be safe to call from any block's
/// thread; blocks never share a worker.
pub fn dispatch<W, MakeWorker, RunSource>(
    network: &Network,
    control: Option<&CentralityControl>,
    make_worker: MakeWorker,
    run_source: RunSource,
) -> Vec<f64>
where
    MakeWorker: Fn() -> W + Sync,
    RunSource: Fn(&mut W, &Network, usize, &mut [f64]) + Sync,
{
    let vertex_count = network.vertex_count();
    let mut out = vec![0.0; vertex_count];
    run_into(network, control, make_worker, run_source, &mut out);
    out
}

/// Same as [`dispatch`] but writes into a caller-supplied buffer, which is
/// what the public `compute_*_centrality` entry points expose (`§6`).
pub fn run_into<W, MakeWorker, RunSource>(
    network: &Network,
    control: Option<&CentralityControl>,
    make_worker: MakeWorker,
    run_source: RunSource,
    out: &mut [f64],
) where
    MakeWorker: Fn() -> W + Sync,
    RunSource: Fn(&mut W, &Network, usize, &mut [f64]) + Sync,
{
    let vertex_count = network.vertex_count();
    out.iter_mut().for_each(|v| *v = 0.0);

    let requested_blocks = control.map(|c| c.max_parallel_blocks).unwrap_or(0);
    let blocks = resolve_block_count(requested_blocks);
    let parallel = is_parallel(vertex_count, blocks);

    if let Some(control) = control {
        control.reset_progress(vertex_count as i64);
    }

    tracing::trace!(vertex_count, blocks, parallel, "dispatching centrality computation");

    if parallel {
        let ranges = block_ranges(vertex_count, blocks);
        let out_mutex = Mutex::new(out);
        ranges.into_par_iter().for_each(|(start, end)| {
            let _span = tracing::trace_span!("block", start, end).entered();
            tracing::trace!("block start");
            let mut worker = make_worker();
            let mut local_c = vec![0.0; vertex_count];
            for source in start..end {
                if let Some(control) = control {
                    control.advance();
                    if control.should_abort() {
                        break;
                    }
                }
                if !network.is_enabled(source) {
                    continue;
                }
                tracing::trace!(source, "processing source");
                run_source(&mut worker, network, source, &mut local_c);
            }
            let mut shared = out_mutex.lock().unwrap();
            for (dst, src) in shared.iter_mut().zip(local_c.iter()) {
                *dst += src;
            }
            tracing::trace!("block end");
        });
    } else {
        let _span = tracing::trace_span!("block", start = 0, end = vertex_count).entered();
        tracing::trace!("block start");
        let mut worker = make_worker();
        for source in 0..vertex_count {
            if let Some(control) = control {
                control.advance();
                if control.should_abort() {
                    break;
                }
            }
            if !network.is_enabled(source) {
                continue;
            }
            tracing::trace!(source, "processing source");
            run_source(&mut worker, network, source, out);
        }
        tracing::trace!("block end");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_parallel_requires_size_and_blocks() {
        assert!(!is_parallel(127, 4));
        assert!(!is_parallel(128, 1));
        assert!(is_parallel(128, 4));
    }

    #[test]
    fn test_block_ranges_cover_every_vertex_exactly_once() {
        let ranges = block_ranges(10, 3);
        let mut covered: Vec<usize> = vec![];
        for (start, end) in &ranges {
            covered.extend(*start..*end);
        }
        covered.sort_unstable();
        assert_eq!(covered, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_block_ranges_drops_empty_tail_blocks() {
        // 5 vertices over 8 blocks: block_size = 1, so only 5 non-empty ranges.
        let ranges = block_ranges(5, 8);
        assert_eq!(ranges.len(), 5);
    }
}
