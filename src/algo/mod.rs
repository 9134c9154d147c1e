//! Network analytics
//!
//! Kernels live in the `interactome-graph-algorithms` crate.
//! This module provides the integration/adapter layer.

use crate::graph::InteractionNetwork;
use serde::{Deserialize, Serialize};

// Re-export algorithms
pub use interactome_graph_algorithms::{
    connected_components, degree_centrality, normalized_degree_centrality, spring_layout,
    top_hubs, ComponentResult, GraphView, Layout, LayoutConfig, NodeId as AlgoNodeId, MAX_SPACING,
};

/// Build a GraphView from the network for algorithm execution.
///
/// Dense indices equal network NodeIds, so results map straight back.
pub fn build_view(network: &InteractionNetwork) -> GraphView {
    let index_to_node: Vec<AlgoNodeId> = network.genes().map(|g| g.id.as_u64()).collect();
    let edges: Vec<(usize, usize, f64)> = network
        .interactions()
        .iter()
        .map(|e| (e.source.index(), e.target.index(), e.score))
        .collect();

    GraphView::from_edges(index_to_node, &edges)
}

/// A highly connected gene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hub {
    pub symbol: String,
    pub degree: usize,
    /// Degree divided by (nodes - 1)
    pub centrality: f64,
}

/// Summary statistics shown next to the network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetrics {
    /// Distinct physical interactions in the network
    pub interaction_count: usize,
    /// Genes in the network
    pub active_nodes: usize,
    /// Genes with no interaction
    pub isolated_nodes: usize,
    /// edges / possible edges
    pub density: f64,
    /// Size of the largest connected module
    pub largest_component: usize,
    /// Modules with two or more genes
    pub module_count: usize,
    /// Highest-degree genes, highest first
    pub hubs: Vec<Hub>,
}

/// Compute degree statistics and the top `hub_count` hubs
pub fn compute_metrics(network: &InteractionNetwork, hub_count: usize) -> NetworkMetrics {
    let view = build_view(network);
    let n = view.node_count;
    let centrality = normalized_degree_centrality(&view);
    let components = connected_components(&view);

    let hubs = top_hubs(&view, hub_count)
        .into_iter()
        .filter_map(|(id, degree)| {
            let gene = network.gene_by_id(crate::graph::NodeId::new(id))?;
            Some(Hub {
                symbol: gene.symbol.clone(),
                degree,
                centrality: centrality.get(&id).copied().unwrap_or(0.0),
            })
        })
        .collect();

    let possible = if n > 1 { n * (n - 1) / 2 } else { 0 };
    let density = if possible > 0 {
        view.edge_count() as f64 / possible as f64
    } else {
        0.0
    };

    NetworkMetrics {
        interaction_count: view.edge_count(),
        active_nodes: n,
        isolated_nodes: (0..n).filter(|&i| view.degree(i) == 0).count(),
        density,
        largest_component: components.largest_size(),
        module_count: components.non_trivial_count(),
        hubs,
    }
}

/// Position of one gene in the rendered layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub symbol: String,
    pub x: f64,
    pub y: f64,
}

/// Force-directed layout keyed by symbol, in network order
pub fn compute_layout(network: &InteractionNetwork, config: &LayoutConfig) -> Vec<NodePosition> {
    let view = build_view(network);
    let layout = spring_layout(&view, config);

    layout
        .positions
        .iter()
        .filter_map(|p| {
            let gene = network.gene_by_id(crate::graph::NodeId::new(p.node))?;
            Some(NodePosition {
                symbol: gene.symbol.clone(),
                x: p.x,
                y: p.y,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> InteractionNetwork {
        let mut net = InteractionNetwork::new();
        for s in ["HUB", "A", "B", "C", "LONE"] {
            net.add_gene(s, "", 0.0);
        }
        net.add_interaction("HUB", "A", 0.9).unwrap();
        net.add_interaction("HUB", "B", 0.9).unwrap();
        net.add_interaction("C", "HUB", 0.9).unwrap();
        net
    }

    #[test]
    fn test_view_projection() {
        let view = build_view(&star());
        assert_eq!(view.node_count, 5);
        assert_eq!(view.edge_count(), 3);
        assert_eq!(view.degree(0), 3);
        assert_eq!(view.degree(4), 0);
    }

    #[test]
    fn test_metrics() {
        let metrics = compute_metrics(&star(), 5);

        assert_eq!(metrics.interaction_count, 3);
        assert_eq!(metrics.active_nodes, 5);
        assert_eq!(metrics.isolated_nodes, 1);
        assert_eq!(metrics.largest_component, 4);
        assert_eq!(metrics.module_count, 1);
        assert!((metrics.density - 0.3).abs() < 1e-12);

        assert_eq!(metrics.hubs.len(), 4);
        assert_eq!(metrics.hubs[0].symbol, "HUB");
        assert_eq!(metrics.hubs[0].degree, 3);
        assert!((metrics.hubs[0].centrality - 0.75).abs() < 1e-12);
        assert!(metrics.hubs.iter().all(|h| h.symbol != "LONE"));
    }

    #[test]
    fn test_metrics_on_empty_network() {
        let metrics = compute_metrics(&InteractionNetwork::new(), 5);
        assert_eq!(metrics.active_nodes, 0);
        assert_eq!(metrics.density, 0.0);
        assert!(metrics.hubs.is_empty());
    }

    #[test]
    fn test_layout_covers_every_gene() {
        let positions = compute_layout(&star(), &LayoutConfig::default());
        let symbols: Vec<&str> = positions.iter().map(|p| p.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["HUB", "A", "B", "C", "LONE"]);
    }
}
