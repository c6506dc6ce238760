use super::scratch::{UnweightedScratch, WeightedScratch};

/// Brandes' back-propagation for betweenness, unweighted variant (`§4.6`).
/// `stack` is drained in reverse finalization order, so every `w` is
/// processed only after all `x` with `w` in `p[x]` — `delta[w]` is final
/// by the time it's read.
pub fn accumulate_betweenness_unweighted(scratch: &mut UnweightedScratch, source: usize, source_weight: f64, local_c: &mut [f64]) {
    while let Some(w) = scratch.stack.pop() {
        let coeff = (1.0 + scratch.delta[w]) / scratch.sigma[w] as f64;
        for &v in &scratch.p[w] {
            scratch.delta[v] += scratch.sigma[v] as f64 * coeff;
        }
        if w != source {
            local_c[w] += source_weight * scratch.delta[w];
        }
    }
}

/// Same accumulation, weighted variant: `sigma` is already `f64` so no
/// cast is needed.
pub fn accumulate_betweenness_weighted(scratch: &mut WeightedScratch, source: usize, source_weight: f64, local_c: &mut [f64]) {
    while let Some(w) = scratch.stack.pop() {
        let coeff = (1.0 + scratch.delta[w]) / scratch.sigma[w];
        for &v in &scratch.p[w] {
            scratch.delta[v] += scratch.sigma[v] * coeff;
        }
        if w != source {
            local_c[w] += source_weight * scratch.delta[w];
        }
    }
}

/// Stress centrality's accumulator (`§4.7`): the recurrence drops the
/// `sigma` ratio (every predecessor gets an equal share of `1 + delta[w]`)
/// and the contribution counts path *instances*, scaled by `sigma[w]`
/// instead of normalized by it.
pub fn accumulate_stress(scratch: &mut UnweightedScratch, source: usize, source_weight: f64, local_c: &mut [f64]) {
    while let Some(w) = scratch.stack.pop() {
        let contribution = 1.0 + scratch.delta[w];
        for &v in &scratch.p[w] {
            scratch.delta[v] += contribution;
        }
        if w != source {
            local_c[w] += scratch.sigma[w] as f64 * source_weight * scratch.delta[w];
        }
    }
}
