//! Degree centrality and hub ranking

use super::common::{GraphView, NodeId};
use std::collections::HashMap;

/// Degree of every node
pub fn degree_centrality(view: &GraphView) -> HashMap<NodeId, usize> {
    (0..view.node_count)
        .map(|idx| (view.index_to_node[idx], view.degree(idx)))
        .collect()
}

/// Degree divided by the maximum possible degree (n - 1)
///
/// A graph with fewer than two nodes reports 0.0 for every node.
pub fn normalized_degree_centrality(view: &GraphView) -> HashMap<NodeId, f64> {
    let n = view.node_count;
    let scale = if n > 1 { 1.0 / (n - 1) as f64 } else { 0.0 };

    (0..n)
        .map(|idx| (view.index_to_node[idx], view.degree(idx) as f64 * scale))
        .collect()
}

/// The `k` highest-degree nodes, highest first.
///
/// Ties keep dense-index order, which is insertion order for views built by
/// the network adapter. Nodes without any edge are never reported as hubs.
pub fn top_hubs(view: &GraphView, k: usize) -> Vec<(NodeId, usize)> {
    let mut ranked: Vec<(usize, usize)> = (0..view.node_count)
        .map(|idx| (idx, view.degree(idx)))
        .filter(|&(_, deg)| deg > 0)
        .collect();

    // Stable sort keeps index order among equal degrees
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(k)
        .map(|(idx, deg)| (view.index_to_node[idx], deg))
        .collect()
}
