//! Network construction from a gene selection and interaction records

use super::store::{InteractionNetwork, NetworkError};
use crate::expression::ExpressionOverlay;
use crate::kegg::GeneEntry;
use crate::string_db::{ConfidenceThreshold, InteractionRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Counters describing what happened to each interaction record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    pub records_seen: usize,
    pub below_threshold: usize,
    pub outside_gene_set: usize,
    pub self_loops: usize,
    pub duplicates: usize,
    pub edges_added: usize,
}

/// Builds an [`InteractionNetwork`] from the selected symbols
pub struct NetworkBuilder<'a> {
    genes: &'a [GeneEntry],
    overlay: Option<&'a ExpressionOverlay>,
    threshold: ConfidenceThreshold,
}

impl<'a> NetworkBuilder<'a> {
    pub fn new(genes: &'a [GeneEntry], threshold: ConfidenceThreshold) -> Self {
        Self {
            genes,
            overlay: None,
            threshold,
        }
    }

    pub fn with_overlay(mut self, overlay: Option<&'a ExpressionOverlay>) -> Self {
        self.overlay = overlay;
        self
    }

    /// One node per selected symbol, in selection order; one edge per
    /// record whose score passes the threshold and whose endpoints are both
    /// selected.
    pub fn build(&self, selected: &[String], records: &[InteractionRecord]) -> (InteractionNetwork, BuildStats) {
        let descriptions: HashMap<&str, &str> = self.genes
            .iter()
            .rev()
            .map(|g| (g.symbol.as_str(), g.description.as_str()))
            .collect();

        let mut network = InteractionNetwork::new();
        for symbol in selected {
            let description = descriptions.get(symbol.as_str()).copied().unwrap_or_default();
            let log_fc = self.overlay.map(|o| o.log_fc(symbol)).unwrap_or(0.0);
            network.add_gene(symbol.as_str(), description, log_fc);
        }

        let mut stats = BuildStats::default();
        for record in records {
            stats.records_seen += 1;

            if !self.threshold.accepts(record.score) {
                stats.below_threshold += 1;
                continue;
            }

            match network.add_interaction(&record.protein_a, &record.protein_b, record.score) {
                Ok(insert) if insert.is_new() => stats.edges_added += 1,
                Ok(_) => stats.duplicates += 1,
                Err(NetworkError::UnknownGene(_)) => stats.outside_gene_set += 1,
                Err(NetworkError::SelfLoop(_)) => stats.self_loops += 1,
                Err(NetworkError::InvalidScore(_)) => stats.below_threshold += 1,
            }
        }

        debug!(
            "Built network: {} nodes, {} edges from {} records",
            network.node_count(),
            network.edge_count(),
            stats.records_seen
        );

        (network, stats)
    }
}
