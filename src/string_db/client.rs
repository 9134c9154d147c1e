//! Interaction sources: STRING REST API and in-memory

use crate::config::StringDbSettings;
use crate::string_db::{
    parse_interactions, InteractionRecord, InteractionSource, ScoreScale, StringDbError,
    StringDbResult,
};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// STRING separates identifiers with carriage returns
const IDENTIFIER_SEPARATOR: &str = "\r";

/// Client for STRING's `json/network` endpoint
pub struct StringDbClient {
    client: Client,
    settings: StringDbSettings,
}

impl StringDbClient {
    pub fn new(settings: &StringDbSettings) -> StringDbResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| StringDbError::Config(e.to_string()))?;

        Ok(Self {
            client,
            settings: settings.clone(),
        })
    }

    fn network_url(&self) -> String {
        format!("{}/api/json/network", self.settings.base_url.trim_end_matches('/'))
    }

    fn form_params(&self, symbols: &[String]) -> Vec<(&'static str, String)> {
        vec![
            ("identifiers", symbols.join(IDENTIFIER_SEPARATOR)),
            ("species", self.settings.species.to_string()),
            ("caller_identity", self.settings.caller_identity.clone()),
        ]
    }
}

#[async_trait]
impl InteractionSource for StringDbClient {
    async fn fetch_interactions(&self, symbols: &[String]) -> StringDbResult<Vec<InteractionRecord>> {
        if symbols.is_empty() {
            return Ok(Vec::new());
        }

        info!("Requesting STRING network for {} genes", symbols.len());
        let resp = self.client.post(self.network_url())
            .form(&self.form_params(symbols))
            .send()
            .await
            .map_err(|e| StringDbError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(StringDbError::Api(format!("STRING returned {}", resp.status())));
        }

        let body: serde_json::Value = resp.json()
            .await
            .map_err(|e| StringDbError::Serialization(e.to_string()))?;

        let records = parse_interactions(&body, ScoreScale::Unit);
        debug!("STRING returned {} usable interactions", records.len());
        Ok(records)
    }
}

/// Fixed interaction list, filtered to the requested symbols
#[derive(Default, Clone)]
pub struct StaticInteractionSource {
    records: Vec<InteractionRecord>,
    fail_with: Option<String>,
}

impl StaticInteractionSource {
    pub fn new(records: Vec<InteractionRecord>) -> Self {
        Self { records, fail_with: None }
    }

    /// A source whose every request fails with a network error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            fail_with: Some(message.into()),
        }
    }
}

#[async_trait]
impl InteractionSource for StaticInteractionSource {
    async fn fetch_interactions(&self, symbols: &[String]) -> StringDbResult<Vec<InteractionRecord>> {
        if let Some(message) = &self.fail_with {
            return Err(StringDbError::Network(message.clone()));
        }

        // Like STRING, only return pairs where at least one endpoint was asked for
        Ok(self.records
            .iter()
            .filter(|r| symbols.contains(&r.protein_a) || symbols.contains(&r.protein_b))
            .cloned()
            .collect())
    }
}
