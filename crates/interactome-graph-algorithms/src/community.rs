//! Connected components of an undirected network

use super::common::{GraphView, NodeId};
use std::collections::HashMap;

/// Components of a network, in order of their first member's index
pub struct ComponentResult {
    /// Members of each component, by dense index order
    pub components: Vec<Vec<NodeId>>,
    /// NodeId -> position in `components`
    pub node_component: HashMap<NodeId, usize>,
}

impl ComponentResult {
    /// Size of the largest component (0 for an empty graph)
    pub fn largest_size(&self) -> usize {
        self.components.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of components with more than one member
    pub fn non_trivial_count(&self) -> usize {
        self.components.iter().filter(|c| c.len() > 1).count()
    }
}

/// Disjoint sets over dense indices, union by size
struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn root(&mut self, mut i: usize) -> usize {
        // Path halving
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn merge(&mut self, a: usize, b: usize) {
        let (mut a, mut b) = (self.root(a), self.root(b));
        if a == b {
            return;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
    }
}

/// Find all disjoint subnetworks.
pub fn connected_components(view: &GraphView) -> ComponentResult {
    let n = view.node_count;
    let mut sets = DisjointSets::new(n);

    for u in 0..n {
        for &v in view.neighbors(u) {
            if u < v {
                sets.merge(u, v);
            }
        }
    }

    let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
    let mut components: Vec<Vec<NodeId>> = Vec::new();
    let mut node_component = HashMap::with_capacity(n);

    for i in 0..n {
        let root = sets.root(i);
        let slot = *slot_of_root.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        let node = view.index_to_node[i];
        components[slot].push(node);
        node_component.insert(node, slot);
    }

    ComponentResult {
        components,
        node_component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components() {
        // 1-2, 3-4-5, 6 alone
        let view = GraphView::from_edges(
            vec![1, 2, 3, 4, 5, 6],
            &[(0, 1, 1.0), (2, 3, 1.0), (3, 4, 1.0)],
        );

        let result = connected_components(&view);

        assert_eq!(result.components, vec![vec![1, 2], vec![3, 4, 5], vec![6]]);
        assert_eq!(result.largest_size(), 3);
        assert_eq!(result.non_trivial_count(), 2);
        assert_eq!(result.node_component[&5], 1);
        assert_ne!(result.node_component[&1], result.node_component[&6]);
    }

    #[test]
    fn test_empty_graph() {
        let view = GraphView::from_edges(vec![], &[]);
        let result = connected_components(&view);
        assert_eq!(result.largest_size(), 0);
        assert_eq!(result.non_trivial_count(), 0);
    }
}
