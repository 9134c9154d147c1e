//! Pathway record sources: KEGG REST, local files, in-memory

use crate::config::KeggSettings;
use crate::kegg::{KeggError, KeggResult, PathwaySource};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Client for the KEGG REST `get` operation
pub struct KeggClient {
    client: Client,
    base_url: String,
}

impl KeggClient {
    pub fn new(settings: &KeggSettings) -> KeggResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| KeggError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn record_url(&self, pathway_id: &str) -> String {
        format!("{}/get/{}", self.base_url, pathway_id)
    }
}

#[async_trait]
impl PathwaySource for KeggClient {
    async fn fetch_record(&self, pathway_id: &str) -> KeggResult<String> {
        let url = self.record_url(pathway_id);
        info!("Fetching KEGG record {}", pathway_id);

        let resp = self.client.get(&url)
            .send()
            .await
            .map_err(|e| KeggError::Network(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(KeggError::NotFound(pathway_id.to_string()));
        }
        if !status.is_success() {
            return Err(KeggError::Status {
                pathway_id: pathway_id.to_string(),
                status: status.as_u16(),
            });
        }

        let text = resp.text().await.map_err(|e| KeggError::Network(e.to_string()))?;
        debug!("KEGG returned {} bytes for {}", text.len(), pathway_id);
        Ok(text)
    }
}

/// Reads `<dir>/<pathway_id>.txt`, for offline use with saved records
pub struct FilePathwaySource {
    dir: PathBuf,
}

impl FilePathwaySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl PathwaySource for FilePathwaySource {
    async fn fetch_record(&self, pathway_id: &str) -> KeggResult<String> {
        let path = self.dir.join(format!("{}.txt", pathway_id));
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(KeggError::NotFound(pathway_id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory records keyed by pathway id
#[derive(Default, Clone)]
pub struct StaticPathwaySource {
    records: HashMap<String, String>,
}

impl StaticPathwaySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, pathway_id: impl Into<String>, text: impl Into<String>) -> Self {
        self.records.insert(pathway_id.into(), text.into());
        self
    }
}

#[async_trait]
impl PathwaySource for StaticPathwaySource {
    async fn fetch_record(&self, pathway_id: &str) -> KeggResult<String> {
        self.records
            .get(pathway_id)
            .cloned()
            .ok_or_else(|| KeggError::NotFound(pathway_id.to_string()))
    }
}
