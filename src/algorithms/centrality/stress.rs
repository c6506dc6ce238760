use super::accumulate::accumulate_stress;
use super::dispatch::run_into;
use super::scratch::UnweightedScratch;
use super::simple_queue::SimpleQueue;
use super::sssp_unweighted::sssp_unweighted;
use crate::{CentralityControl, Error, ErrorKind, Network};

struct Worker {
    scratch: UnweightedScratch,
    fringe: SimpleQueue,
}

/**
Computes stress centrality for every enabled vertex of `network` (`§4.7`):
the total number of shortest-path instances, over all ordered source-
target pairs, passing through each vertex, scaled by source weight.

Unlike betweenness this is always computed on the unweighted SSSP DAG
(`§2`); there is no `weighted` parameter. Dispatch between the
sequential and parallel paths follows the same rule as betweenness
(`§4.8`). `out` must have length `network.vertex_count()`.

# Examples

```
use centrality_core::{algorithms::centrality::stress::compute_stress_centrality, NetworkBuilder};

let mut builder = NetworkBuilder::new(5);
for i in 0..4 {
    builder.add_undirected_edge(i, i + 1, 1.0).unwrap();
}
let network = builder.build().unwrap();
let mut out = vec![0.0; 5];
compute_stress_centrality(&network, &mut out, None).unwrap();
assert_eq!(out, vec![0.0, 6.0, 8.0, 6.0, 0.0]);
```
*/
pub fn compute_stress_centrality(
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

    tracing::trace!(vertex_count = network.vertex_count(), "computing stress centrality");

    run_into(
        network,
        control,
        || Worker {
            scratch: UnweightedScratch::new(network.vertex_count()),
            fringe: SimpleQueue::new(),
        },
        |worker, network, source, local_c| {
            sssp_unweighted(network, source, &mut worker.scratch, &mut worker.fringe);
            accumulate_stress(&mut worker.scratch, source, network.vertex_weight(source), local_c);
        },
        out,
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NetworkBuilder;

    #[test]
    fn test_path_graph_p5() {
        let mut builder = NetworkBuilder::new(5);
        for i in 0..4 {
            builder.add_undirected_edge(i, i + 1, 1.0).unwrap();
        }
        let network = builder.build().unwrap();
        let mut out = vec![0.0; 5];
        compute_stress_centrality(&network, &mut out, None).unwrap();
        assert_eq!(out, vec![0.0, 6.0, 8.0, 6.0, 0.0]);
    }

    #[test]
    fn test_star_graph_k14() {
        let mut builder = NetworkBuilder::new(5);
        for leaf in 1..=4 {
            builder.add_undirected_edge(0, leaf, 1.0).unwrap();
        }
        let network = builder.build().unwrap();
        let mut out = vec![0.0; 5];
        compute_stress_centrality(&network, &mut out, None).unwrap();
        assert_eq!(out, vec![12.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_triangle_k3() {
        let mut builder = NetworkBuilder::new(3);
        builder.add_undirected_edge(0, 1, 1.0).unwrap();
        builder.add_undirected_edge(1, 2, 1.0).unwrap();
        builder.add_undirected_edge(0, 2, 1.0).unwrap();
        let network = builder.build().unwrap();
        let mut out = vec![0.0; 3];
        compute_stress_centrality(&network, &mut out, None).unwrap();
        assert_eq!(out, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_wrong_length_output_buffer_is_rejected() {
        let mut builder = NetworkBuilder::new(5);
        for i in 0..4 {
            builder.add_undirected_edge(i, i + 1, 1.0).unwrap();
        }
        let network = builder.build().unwrap();
        let mut out = vec![0.0; 1];
        let result = compute_stress_centrality(&network, &mut out, None);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind, ErrorKind::OutputBufferWrongLength);
    }
}
