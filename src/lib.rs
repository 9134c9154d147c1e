//! Interactome
//!
//! Builds disease-pathway protein interaction networks: the gene list of a
//! KEGG pathway, the physical interactions STRING reports among those genes,
//! and an optional differential-expression overlay, summarised with degree
//! centrality, a force-directed layout and manuscript text.
//!
//! # Architecture
//!
//! - `kegg`: pathway record sources and the `GENE` section parser
//! - `string_db`: interaction sources and validated interaction records
//! - `expression`: CSV LogFC overlay and up/down/neutral classification
//! - `graph`: the undirected gene network and its builder
//! - `algo`: adapter over `interactome-graph-algorithms`
//! - `caption`: figure legend, methods and results templates
//! - `pipeline`: one analysis run from pathway id to [`NetworkReport`]
//! - `http`: JSON API over the pipeline
//!
//! ## Example Usage
//!
//! ```rust
//! use interactome::kegg::parse_genes;
//!
//! let record = "GENE        351  APP, AAA, ABETA; amyloid beta precursor protein\n\
//!               COMPOUND    C00001  H2O\n";
//! let genes = parse_genes(record);
//!
//! assert_eq!(genes.len(), 1);
//! assert_eq!(genes[0].symbol, "APP");
//! assert_eq!(genes[0].description, "amyloid beta precursor protein");
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod caption;
pub mod config;
pub mod expression;
pub mod graph;
pub mod http;
pub mod kegg;
pub mod pipeline;
pub mod string_db;

// Re-export main types for convenience
pub use config::{DashboardConfig, DiseasePathway};
pub use expression::{ExpressionOverlay, ExpressionStatus};
pub use graph::{InteractionNetwork, NetworkBuilder};
pub use kegg::{parse_genes, parse_pathway_record, GeneEntry, ParserOptions};
pub use pipeline::{AnalysisRequest, NetworkPipeline, NetworkReport, PipelineError};
pub use string_db::{ConfidenceThreshold, InteractionRecord};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
