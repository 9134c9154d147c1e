//! In-memory interaction network
//!
//! An undirected simple graph keyed by gene symbol:
//! - genes: symbol -> GeneNode, in insertion order (NodeId == position)
//! - edges: EdgeId -> Interaction
//! - adjacency: NodeId -> Vec<EdgeId>
//! - pair_index: canonical (NodeId, NodeId) -> EdgeId, so each pair appears once

use super::edge::{canonical_pair, Interaction};
use super::node::GeneNode;
use super::types::{EdgeId, NodeId};
use indexmap::IndexMap;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during network operations
#[derive(Error, Debug, PartialEq)]
pub enum NetworkError {
    #[error("Gene {0} is not in the network")]
    UnknownGene(String),

    #[error("Self-interaction on {0} is not allowed")]
    SelfLoop(String),

    #[error("Invalid interaction score {0}")]
    InvalidScore(f64),
}

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Outcome of adding an interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsert {
    /// A new edge was created
    Added(EdgeId),
    /// The pair already existed; its score is now the max of both
    Merged(EdgeId),
}

impl EdgeInsert {
    pub fn id(&self) -> EdgeId {
        match self {
            EdgeInsert::Added(id) | EdgeInsert::Merged(id) => *id,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, EdgeInsert::Added(_))
    }
}

/// Undirected gene interaction network
#[derive(Debug, Default, Clone)]
pub struct InteractionNetwork {
    genes: IndexMap<String, GeneNode>,
    edges: Vec<Interaction>,
    adjacency: Vec<Vec<EdgeId>>,
    pair_index: HashMap<(NodeId, NodeId), EdgeId>,
}

impl InteractionNetwork {
    /// Create a new empty network
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a gene, or return the existing node for an already-present symbol.
    ///
    /// The first insertion of a symbol fixes its description and LogFC.
    pub fn add_gene(&mut self, symbol: impl Into<String>, description: impl Into<String>, log_fc: f64) -> NodeId {
        let symbol = symbol.into();
        if let Some(existing) = self.genes.get(&symbol) {
            return existing.id;
        }

        let id = NodeId::new(self.genes.len() as u64);
        let node = GeneNode::new(id, symbol.clone(), description, log_fc);
        self.genes.insert(symbol, node);
        self.adjacency.push(Vec::new());
        id
    }

    /// Add an undirected interaction between two known genes
    pub fn add_interaction(&mut self, a: &str, b: &str, score: f64) -> NetworkResult<EdgeInsert> {
        if !score.is_finite() {
            return Err(NetworkError::InvalidScore(score));
        }
        let a_id = self.node_id(a).ok_or_else(|| NetworkError::UnknownGene(a.to_string()))?;
        let b_id = self.node_id(b).ok_or_else(|| NetworkError::UnknownGene(b.to_string()))?;
        if a_id == b_id {
            return Err(NetworkError::SelfLoop(a.to_string()));
        }

        let key = canonical_pair(a_id, b_id);
        if let Some(&edge_id) = self.pair_index.get(&key) {
            let edge = &mut self.edges[edge_id.index()];
            edge.score = edge.score.max(score);
            return Ok(EdgeInsert::Merged(edge_id));
        }

        let edge_id = EdgeId::new(self.edges.len() as u64);
        self.edges.push(Interaction::new(edge_id, a_id, b_id, score));
        self.adjacency[a_id.index()].push(edge_id);
        self.adjacency[b_id.index()].push(edge_id);
        self.pair_index.insert(key, edge_id);
        Ok(EdgeInsert::Added(edge_id))
    }

    pub fn node_id(&self, symbol: &str) -> Option<NodeId> {
        self.genes.get(symbol).map(|g| g.id)
    }

    pub fn get_gene(&self, symbol: &str) -> Option<&GeneNode> {
        self.genes.get(symbol)
    }

    pub fn gene_by_id(&self, id: NodeId) -> Option<&GeneNode> {
        self.genes.get_index(id.index()).map(|(_, g)| g)
    }

    pub fn has_gene(&self, symbol: &str) -> bool {
        self.genes.contains_key(symbol)
    }

    pub fn has_interaction(&self, a: &str, b: &str) -> bool {
        match (self.node_id(a), self.node_id(b)) {
            (Some(x), Some(y)) => self.pair_index.contains_key(&canonical_pair(x, y)),
            _ => false,
        }
    }

    /// Number of interactions touching a gene (0 for unknown genes)
    pub fn degree(&self, symbol: &str) -> usize {
        self.node_id(symbol)
            .map(|id| self.adjacency[id.index()].len())
            .unwrap_or(0)
    }

    /// Symbols of a gene's interaction partners, in edge insertion order
    pub fn neighbors(&self, symbol: &str) -> Vec<&str> {
        let Some(id) = self.node_id(symbol) else {
            return Vec::new();
        };

        self.adjacency[id.index()]
            .iter()
            .filter_map(|e| self.edges[e.index()].other(id))
            .filter_map(|n| self.gene_by_id(n))
            .map(|g| g.symbol.as_str())
            .collect()
    }

    /// All genes in insertion order
    pub fn genes(&self) -> impl Iterator<Item = &GeneNode> {
        self.genes.values()
    }

    /// All interactions in insertion order
    pub fn interactions(&self) -> &[Interaction] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.genes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}
