use super::queue::PriorityQueue;
use super::scratch::WeightedScratch;
use crate::Network;

/// Converts a stored edge weight into the distance contributed by
/// traversing that edge. The source network models edge weight as a
/// "strength"; `exp(-w)` turns a larger strength into a shorter
/// (stronger) path, matching the transform adopted uniformly in `§4.5`
/// (the original's sequential code path used `1.0 / w` instead — that
/// divergence from its own parallel path is resolved here in favor of
/// `exp(-w)`).
#[inline]
pub fn edge_length(weight: f64) -> f64 {
    (-weight).exp()
}

/// Dijkstra-with-path-counting from `source` (`§4.5`). Lazy decrease-key:
/// an improved tentative distance for `w` is a fresh heap insertion, and
/// stale entries for already-finalized vertices are discarded on pop
/// rather than removed from the heap.
///
/// When a strictly shorter tentative distance for `w` is found, any
/// predecessors recorded for the old tentative distance are no longer on
/// a shortest path, so `sigma[w]` and `p[w]` are reset before recording
/// the new relaxation; a bit-equal tie instead accumulates into the
/// existing `sigma[w]`/`p[w]`.
pub fn sssp_weighted(network: &Network, source: usize, scratch: &mut WeightedScratch, heap: &mut PriorityQueue) {
    scratch.reset_for_source(source);
    heap.clear();
    heap.push(0.0, source, source);

    while let Some((dist, v, prev)) = heap.pop_min() {
        if scratch.d[v] >= 0.0 {
            continue;
        }
        scratch.sigma[v] += scratch.sigma[prev];
        scratch.stack.push(v);
        scratch.d[v] = dist;

        for neighbor in network.neighbors(v) {
            let w = neighbor.vertex;
            if !network.is_enabled(w) {
                continue;
            }
            let w_dist = scratch.d[v] + edge_length(network.edge_weight(neighbor.edge));
            if scratch.d[w] < 0.0 && (scratch.seen[w] < 0.0 || w_dist < scratch.seen[w]) {
                scratch.seen[w] = w_dist;
                heap.push(w_dist, w, v);
                scratch.sigma[w] = 0.0;
                scratch.p[w].clear();
                scratch.p[w].push(v);
            } else if w_dist == scratch.seen[w] {
                scratch.sigma[w] += scratch.sigma[v];
                scratch.p[w].push(v);
            }
        }
    }
}
