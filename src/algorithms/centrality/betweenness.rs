use super::accumulate::{accumulate_betweenness_unweighted, accumulate_betweenness_weighted};
use super::dispatch::run_into;
use super::queue::PriorityQueue;
use super::scratch::{UnweightedScratch, WeightedScratch};
use super::simple_queue::SimpleQueue;
use super::sssp_unweighted::sssp_unweighted;
use super::sssp_weighted::sssp_weighted;
use crate::{CentralityControl, Error, ErrorKind, Network};

struct UnweightedWorker {
    scratch: UnweightedScratch,
    fringe: SimpleQueue,
}

struct WeightedWorker {
    scratch: WeightedScratch,
    heap: PriorityQueue,
}

/**
Computes betweenness centrality for every enabled vertex of `network`,
writing unnormalized contributions into `out` (`§6`).

Dispatches on `network.is_weighted()` between the BFS-based and
Dijkstra-based SSSP (`§4.4`, `§4.5`) — whether to use edge weights is a
property of the network, not a separate caller input — and on vertex
count / requested block count between the sequential and Rayon-backed
parallel paths (`§4.8`). `out` must have length `network.vertex_count()`.

# Examples

```
use centrality_core::{algorithms::centrality::betweenness::compute_betweenness_centrality, NetworkBuilder};

let mut builder = NetworkBuilder::new(5);
for i in 0..4 {
    builder.add_undirected_edge(i, i + 1, 1.0).unwrap();
}
let network = builder.build().unwrap();
let mut out = vec![0.0; 5];
compute_betweenness_centrality(&network, &mut out, None).unwrap();
assert_eq!(out, vec![0.0, 6.0, 8.0, 6.0, 0.0]);
```
*/
pub fn compute_betweenness_centrality(
    network: &Network,
    out: &mut [f64],
    control: Option<&CentralityControl>,
) -> Result<(), Error> {
    if out.len() != network.vertex_count() {
        return Err(Error {
            kind: ErrorKind::OutputBufferWrongLength,
            message: format!(
                "output buffer has length {} but the network has {} vertices",
                out.len(),
                network.vertex_count()
            ),
        });
    }

    let weighted = network.is_weighted();
    tracing::trace!(
        vertex_count = network.vertex_count(),
        weighted,
        "computing betweenness centrality"
    );

    if weighted {
        run_into(
            network,
            control,
            || WeightedWorker {
                scratch: WeightedScratch::new(network.vertex_count()),
                heap: PriorityQueue::new(),
            },
            |worker, network, source, local_c| {
                sssp_weighted(network, source, &mut worker.scratch, &mut worker.heap);
                accumulate_betweenness_weighted(
                    &mut worker.scratch,
                    source,
                    network.vertex_weight(source),
                    local_c,
                );
            },
            out,
        );
    } else {
        run_into(
            network,
            control,
            || UnweightedWorker {
                scratch: UnweightedScratch::new(network.vertex_count()),
                fringe: SimpleQueue::new(),
            },
            |worker, network, source, local_c| {
                sssp_unweighted(network, source, &mut worker.scratch, &mut worker.fringe);
                accumulate_betweenness_unweighted(
                    &mut worker.scratch,
                    source,
                    network.vertex_weight(source),
                    local_c,
                );
            },
            out,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NetworkBuilder;

    fn path_graph_5() -> Network {
        let mut builder = NetworkBuilder::new(5);
        for i in 0..4 {
            builder.add_undirected_edge(i, i + 1, 1.0).unwrap();
        }
        builder.build().unwrap()
    }

    fn star_graph(leaves: usize) -> Network {
        let mut builder = NetworkBuilder::new(leaves + 1);
        for leaf in 1..=leaves {
            builder.add_undirected_edge(0, leaf, 1.0).unwrap();
        }
        builder.build().unwrap()
    }

    fn triangle() -> Network {
        let mut builder = NetworkBuilder::new(3);
        builder.add_undirected_edge(0, 1, 1.0).unwrap();
        builder.add_undirected_edge(1, 2, 1.0).unwrap();
        builder.add_undirected_edge(0, 2, 1.0).unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_path_graph_p5_unweighted() {
        let network = path_graph_5();
        let mut out = vec![0.0; 5];
        compute_betweenness_centrality(&network, &mut out, None).unwrap();
        // A path graph has no branching, so sigma is 1 everywhere and
        // betweenness coincides with stress: summed over all 5 sources,
        // not just source 0 (whose own contribution alone is [0,3,2,1,0]).
        assert_eq!(out, vec![0.0, 6.0, 8.0, 6.0, 0.0]);
    }

    #[test]
    fn test_star_graph_k14() {
        let network = star_graph(4);
        let mut out = vec![0.0; 5];
        compute_betweenness_centrality(&network, &mut out, None).unwrap();
        assert_eq!(out, vec![12.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_triangle_k3() {
        let network = triangle();
        let mut out = vec![0.0; 3];
        compute_betweenness_centrality(&network, &mut out, None).unwrap();
        assert_eq!(out, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_disabled_vertex_splits_path_graph() {
        let mut builder = NetworkBuilder::new(5);
        for i in 0..4 {
            builder.add_undirected_edge(i, i + 1, 1.0).unwrap();
        }
        builder.set_enabled(2, false).unwrap();
        let network = builder.build().unwrap();
        let mut out = vec![0.0; 5];
        compute_betweenness_centrality(&network, &mut out, None).unwrap();
        for (v, value) in out.iter().enumerate() {
            if network.is_enabled(v) {
                assert_eq!(*value, 0.0);
            }
        }
    }

    #[test]
    fn test_weighted_diamond() {
        let mut builder = NetworkBuilder::new(4);
        builder.add_directed_edge(0, 1, 1.0).unwrap();
        builder.add_directed_edge(0, 2, 1.0).unwrap();
        builder.add_directed_edge(1, 3, 1.0).unwrap();
        builder.add_directed_edge(2, 3, 1.0).unwrap();
        builder.mark_weighted();
        let network = builder.build().unwrap();
        let mut out = vec![0.0; 4];
        compute_betweenness_centrality(&network, &mut out, None).unwrap();
        // Source 0 is the only source with a path through 1 or 2, and it
        // splits evenly across the two equal-length paths to 3.
        assert!((out[1] - 0.5).abs() < 1e-9);
        assert!((out[2] - 0.5).abs() < 1e-9);
        assert_eq!(out[0], 0.0);
        assert_eq!(out[3], 0.0);
    }

    #[test]
    fn test_wrong_length_output_buffer_is_rejected() {
        let network = path_graph_5();
        let mut out = vec![0.0; 3];
        let result = compute_betweenness_centrality(&network, &mut out, None);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind, ErrorKind::OutputBufferWrongLength);
    }

    #[test]
    fn test_sequential_and_parallel_paths_agree() {
        // Large enough ring to trigger the parallel dispatch rule.
        let n = 200;
        let mut builder = NetworkBuilder::new(n);
        for i in 0..n {
            builder.add_undirected_edge(i, (i + 1) % n, 1.0).unwrap();
        }
        let network = builder.build().unwrap();

        let mut sequential = vec![0.0; n];
        let sequential_control = CentralityControl::new();
        assert_eq!(sequential_control.max_parallel_blocks, 0);
        let mut forced_sequential = CentralityControl::new();
        forced_sequential.max_parallel_blocks = 1;
        compute_betweenness_centrality(&network, &mut sequential, Some(&forced_sequential)).unwrap();

        let mut parallel = vec![0.0; n];
        let mut forced_parallel = CentralityControl::new();
        forced_parallel.max_parallel_blocks = 4;
        compute_betweenness_centrality(&network, &mut parallel, Some(&forced_parallel)).unwrap();

        for (a, b) in sequential.iter().zip(parallel.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }
}
