//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of an undirected network for algorithm execution.

use std::collections::HashMap;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of an undirected graph in Compressed Sparse Row (CSR) format.
///
/// Every undirected edge is stored twice, once in each endpoint's neighbor run,
/// so `degree(i)` is simply the length of that run.
pub struct GraphView {
    pub node_count: usize,
    /// Dense index (0..N) -> NodeId
    pub index_to_node: Vec<NodeId>,
    pub node_to_index: HashMap<NodeId, usize>,

    /// Row starts into `targets`; `node_count + 1` entries
    pub offsets: Vec<usize>,
    pub targets: Vec<usize>,
    /// Edge weights, aligned with `targets`
    pub edge_weights: Vec<f64>,
}

impl GraphView {
    /// Build a view from an undirected edge list over dense indices.
    ///
    /// Edges referencing an index outside `0..index_to_node.len()` are ignored.
    /// Within a row, neighbors keep the order their edges were listed in.
    pub fn from_edges(index_to_node: Vec<NodeId>, edges: &[(usize, usize, f64)]) -> Self {
        let node_count = index_to_node.len();
        let in_range = |&&(u, v, _): &&(usize, usize, f64)| u < node_count && v < node_count;

        // Count both endpoints, then prefix-sum into row starts
        let mut offsets = vec![0usize; node_count + 1];
        for &(u, v, _) in edges.iter().filter(in_range) {
            offsets[u + 1] += 1;
            offsets[v + 1] += 1;
        }
        for i in 0..node_count {
            offsets[i + 1] += offsets[i];
        }

        let total = offsets[node_count];
        let mut targets = vec![0usize; total];
        let mut edge_weights = vec![0.0; total];
        let mut cursor: Vec<usize> = offsets[..node_count].to_vec();

        for &(u, v, w) in edges.iter().filter(in_range) {
            for (from, to) in [(u, v), (v, u)] {
                let slot = cursor[from];
                targets[slot] = to;
                edge_weights[slot] = w;
                cursor[from] += 1;
            }
        }

        let node_to_index = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            offsets,
            targets,
            edge_weights,
        }
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }

    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    pub fn neighbors(&self, idx: usize) -> &[usize] {
        &self.targets[self.offsets[idx]..self.offsets[idx + 1]]
    }

    /// Weights aligned with `neighbors(idx)`
    pub fn weights(&self, idx: usize) -> &[f64] {
        &self.edge_weights[self.offsets[idx]..self.offsets[idx + 1]]
    }
}
