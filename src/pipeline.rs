//! End-to-end analysis: pathway -> genes -> interactions -> network report

use crate::algo::{compute_layout, compute_metrics, LayoutConfig, NetworkMetrics, MAX_SPACING};
use crate::caption::{CaptionContext, Captions};
use crate::config::{DashboardConfig, DiseasePathway};
use crate::expression::{ExpressionOverlay, ExpressionStatus};
use crate::graph::{BuildStats, NetworkBuilder};
use crate::kegg::{fetch_genes, GeneEntry, PathwaySource};
use crate::string_db::{ConfidenceThreshold, InteractionSource};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

pub const NO_INTERACTIONS_WARNING: &str =
    "No physical interactions found at this confidence level. Try lowering the Confidence Score.";

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Data fetch failed for {pathway_id}: {reason}")]
    DataFetch { pathway_id: String, reason: String },
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// One analysis run's inputs
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub pathway: DiseasePathway,
    /// Overrides the configured threshold (0-1000)
    pub confidence: Option<u16>,
    /// Overrides the configured layout spacing
    pub spacing: Option<f64>,
    pub overlay: Option<ExpressionOverlay>,
}

impl AnalysisRequest {
    pub fn new(pathway: DiseasePathway) -> Self {
        Self {
            pathway,
            confidence: None,
            spacing: None,
            overlay: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeReport {
    pub symbol: String,
    pub description: String,
    pub log_fc: f64,
    pub status: ExpressionStatus,
    pub color: String,
    pub degree: usize,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeReport {
    pub source: String,
    pub target: String,
    pub score: f64,
}

/// Everything needed to render and summarise one network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkReport {
    pub disease: String,
    pub pathway_id: String,
    pub confidence: u16,
    pub spacing: f64,
    pub genes_parsed: usize,
    pub nodes: Vec<NodeReport>,
    pub edges: Vec<EdgeReport>,
    pub metrics: NetworkMetrics,
    pub stats: BuildStats,
    pub captions: Captions,
    pub warnings: Vec<String>,
}

/// Runs analyses against a pair of data sources
pub struct NetworkPipeline {
    config: Arc<DashboardConfig>,
    pathways: Arc<dyn PathwaySource>,
    interactions: Arc<dyn InteractionSource>,
}

impl NetworkPipeline {
    pub fn new(
        config: Arc<DashboardConfig>,
        pathways: Arc<dyn PathwaySource>,
        interactions: Arc<dyn InteractionSource>,
    ) -> Self {
        Self { config, pathways, interactions }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Fetch and parse a pathway's gene list; an empty list is a fetch failure
    pub async fn gene_list(&self, pathway_id: &str) -> PipelineResult<Vec<GeneEntry>> {
        let genes = fetch_genes(self.pathways.as_ref(), pathway_id, &self.config.parser)
            .await
            .map_err(|e| PipelineError::DataFetch {
                pathway_id: pathway_id.to_string(),
                reason: e.to_string(),
            })?;

        if genes.is_empty() {
            return Err(PipelineError::DataFetch {
                pathway_id: pathway_id.to_string(),
                reason: "record contains no genes".to_string(),
            });
        }

        Ok(genes)
    }

    pub async fn run(&self, request: &AnalysisRequest) -> PipelineResult<NetworkReport> {
        let threshold = ConfidenceThreshold::new(request.confidence.unwrap_or(self.config.confidence));
        if request.confidence.is_some_and(|c| c > ConfidenceThreshold::MAX) {
            return Err(PipelineError::InvalidRequest(format!(
                "confidence must be between 0 and {}", ConfidenceThreshold::MAX
            )));
        }
        let layout_config = self.config.layout.to_layout_config(request.spacing);
        if !LayoutConfig::spacing_is_valid(layout_config.k) {
            return Err(PipelineError::InvalidRequest(format!(
                "spacing must be greater than 0 and at most {}", MAX_SPACING
            )));
        }

        let pathway = &request.pathway;
        info!("Analysing {} ({}) at confidence {}", pathway.name, pathway.pathway_id, threshold);

        let genes = self.gene_list(&pathway.pathway_id).await?;
        let selected = GeneEntry::unique_symbols(&genes, self.config.max_genes);

        // Interaction failures degrade to an empty network
        let records = match self.interactions.fetch_interactions(&selected).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Interaction lookup failed, continuing without edges: {}", e);
                Vec::new()
            }
        };

        let (network, stats) = NetworkBuilder::new(&genes, threshold)
            .with_overlay(request.overlay.as_ref())
            .build(&selected, &records);

        let metrics = compute_metrics(&network, self.config.hub_count);
        let positions: HashMap<String, (f64, f64)> = compute_layout(&network, &layout_config)
            .into_iter()
            .map(|p| (p.symbol, (p.x, p.y)))
            .collect();

        let nodes = network
            .genes()
            .map(|g| {
                let (x, y) = positions.get(&g.symbol).copied().unwrap_or_default();
                let status = g.status();
                NodeReport {
                    symbol: g.symbol.clone(),
                    description: g.description.clone(),
                    log_fc: g.log_fc,
                    status,
                    color: status.color().to_string(),
                    degree: network.degree(&g.symbol),
                    x,
                    y,
                }
            })
            .collect();

        let edges = network
            .interactions()
            .iter()
            .filter_map(|e| {
                Some(EdgeReport {
                    source: network.gene_by_id(e.source)?.symbol.clone(),
                    target: network.gene_by_id(e.target)?.symbol.clone(),
                    score: e.score,
                })
            })
            .collect();

        let mut warnings = Vec::new();
        if network.edge_count() == 0 {
            warnings.push(NO_INTERACTIONS_WARNING.to_string());
        }

        let captions = Captions::render(&CaptionContext {
            disease: &pathway.name,
            pathway_id: &pathway.pathway_id,
            gene_count: selected.len(),
            threshold,
            has_overlay: request.overlay.is_some(),
            species: self.config.string_db.species,
            metrics: &metrics,
        });

        info!(
            "Network for {}: {} genes, {} interactions",
            pathway.pathway_id,
            metrics.active_nodes,
            metrics.interaction_count
        );

        Ok(NetworkReport {
            disease: pathway.name.clone(),
            pathway_id: pathway.pathway_id.clone(),
            confidence: threshold.permille(),
            spacing: layout_config.k,
            genes_parsed: genes.len(),
            nodes,
            edges,
            metrics,
            stats,
            captions,
            warnings,
        })
    }
}
