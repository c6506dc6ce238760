/// Betweenness and stress centrality over a read-only [`crate::Network`].
pub mod centrality;
