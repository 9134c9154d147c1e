//! KEGG pathway records
//!
//! Fetches flat-file pathway records and extracts their gene lists.

pub mod client;
pub mod parser;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

pub use client::{FilePathwaySource, KeggClient, StaticPathwaySource};
pub use parser::{parse_genes, parse_pathway_record, GeneEntry, ParserOptions};

#[derive(Error, Debug)]
pub enum KeggError {
    #[error("Invalid pathway id: {0:?}")]
    InvalidPathwayId(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("KEGG returned status {status} for {pathway_id}")]
    Status { pathway_id: String, status: u16 },
    #[error("Pathway record {0} not found")]
    NotFound(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type KeggResult<T> = Result<T, KeggError>;

/// Anything that can supply the raw text of a pathway record
#[async_trait]
pub trait PathwaySource: Send + Sync {
    /// Fetch the record for a pathway identifier such as `hsa05010`
    async fn fetch_record(&self, pathway_id: &str) -> KeggResult<String>;
}

/// Reject identifiers that could not be a KEGG pathway code
pub fn validate_pathway_id(pathway_id: &str) -> KeggResult<()> {
    let valid = !pathway_id.is_empty()
        && pathway_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(KeggError::InvalidPathwayId(pathway_id.to_string()))
    }
}

/// Fetch a record and parse its gene list
pub async fn fetch_genes<S: PathwaySource + ?Sized>(
    source: &S,
    pathway_id: &str,
    options: &ParserOptions,
) -> KeggResult<Vec<GeneEntry>> {
    validate_pathway_id(pathway_id)?;
    let text = source.fetch_record(pathway_id).await?;
    let genes = parse_pathway_record(&text, options);
    debug!("Parsed {} genes from {} ({} bytes)", genes.len(), pathway_id, text.len());
    Ok(genes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_pathway_id() {
        assert!(validate_pathway_id("hsa05010").is_ok());
        assert!(validate_pathway_id("map_01100").is_ok());
        assert!(validate_pathway_id("").is_err());
        assert!(validate_pathway_id("../etc/passwd").is_err());
        assert!(validate_pathway_id("hsa 05010").is_err());
    }

    #[tokio::test]
    async fn test_fetch_genes_from_static_source() {
        let source = StaticPathwaySource::new()
            .with_record("hsa00001", "GENE  1  ABC1, X; alpha\nREFERENCE  x\n");

        let genes = fetch_genes(&source, "hsa00001", &ParserOptions::default()).await.unwrap();
        assert_eq!(genes.len(), 1);
        assert_eq!(genes[0].symbol, "ABC1");

        let missing = fetch_genes(&source, "hsa99999", &ParserOptions::default()).await;
        assert!(matches!(missing, Err(KeggError::NotFound(_))));
    }
}
