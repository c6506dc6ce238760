use super::scratch::{UnweightedScratch, UNVISITED};
use super::simple_queue::SimpleQueue;
use crate::Network;

/// BFS from `source`, filling `scratch` with the shortest-path DAG
/// predecessors `p`, path counts `sigma`, and a finalization-order
/// `stack` (`§4.4`). `fringe` is worker-private and reused across
/// sources by the caller, same as `scratch`.
///
/// Disabled neighbors are invisible: they never update `d`, `sigma`, or
/// `p`, and are never pushed onto `fringe`. A self-loop relaxes to
/// `d[v] + 1 == d[v]`, which is false, so it neither extends the DAG nor
/// duplicates a predecessor. Multi-edges between the same pair of
/// vertices are walked once per incident edge, so `p[w]` gets `v`
/// appended once per edge and `sigma[w]` accumulates `sigma[v]` once per
/// edge — multigraph path multiplicity falls out for free.
pub fn sssp_unweighted(network: &Network, source: usize, scratch: &mut UnweightedScratch, fringe: &mut SimpleQueue) {
    scratch.reset_for_source(source);
    fringe.clear();
    fringe.push(source);

    while let Some(v) = fringe.try_pop() {
        scratch.stack.push(v);
        let dv = scratch.d[v];
        let sigma_v = scratch.sigma[v];
        for neighbor in network.neighbors(v) {
            let w = neighbor.vertex;
            if !network.is_enabled(w) {
                continue;
            }
            let vw_dist = dv + 1;
            if scratch.d[w] == UNVISITED {
                scratch.d[w] = vw_dist;
                fringe.push(w);
            }
            if scratch.d[w] == vw_dist {
                scratch.sigma[w] += sigma_v;
                scratch.p[w].push(v);
            }
        }
    }
}
