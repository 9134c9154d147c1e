//! Dashboard configuration
//!
//! All tunables live in one immutable [`DashboardConfig`] value that is
//! passed into the pipeline and server at construction time. Every field has
//! a default, so a YAML file only needs to mention what it changes.

use crate::algo::{LayoutConfig, MAX_SPACING};
use crate::kegg::ParserOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// A selectable disease and its KEGG pathway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseasePathway {
    pub name: String,
    pub pathway_id: String,
}

impl DiseasePathway {
    pub fn new(name: impl Into<String>, pathway_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pathway_id: pathway_id.into(),
        }
    }
}

/// The built-in disease catalog
pub fn default_diseases() -> Vec<DiseasePathway> {
    vec![
        DiseasePathway::new("Alzheimer's", "hsa05010"),
        DiseasePathway::new("Huntington's", "hsa05016"),
        DiseasePathway::new("Parkinson's", "hsa05012"),
        DiseasePathway::new("Type II Diabetes", "hsa04930"),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeggSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for KeggSettings {
    fn default() -> Self {
        Self {
            base_url: "https://rest.kegg.jp".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringDbSettings {
    pub base_url: String,
    /// NCBI taxonomy id (9606 = human)
    pub species: u32,
    pub caller_identity: String,
    pub timeout_secs: u64,
}

impl Default for StringDbSettings {
    fn default() -> Self {
        Self {
            base_url: "https://string-db.org".to_string(),
            species: 9606,
            caller_identity: "interactome".to_string(),
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Optimal node distance for the spring layout
    pub spacing: f64,
    pub iterations: usize,
    pub seed: u64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            spacing: 0.4,
            iterations: 50,
            seed: 42,
        }
    }
}

impl LayoutSettings {
    /// Layout parameters, with an optional spacing override
    pub fn to_layout_config(&self, spacing: Option<f64>) -> LayoutConfig {
        LayoutConfig {
            k: spacing.unwrap_or(self.spacing),
            iterations: self.iterations,
            seed: self.seed,
            ..LayoutConfig::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub address: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerSettings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

/// Complete dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub diseases: Vec<DiseasePathway>,
    /// Number of distinct genes kept for the network
    pub max_genes: usize,
    /// Default STRING threshold on the 0-1000 scale
    pub confidence: u16,
    /// Number of hubs reported
    pub hub_count: usize,
    pub layout: LayoutSettings,
    pub parser: ParserOptions,
    pub kegg: KeggSettings,
    pub string_db: StringDbSettings,
    pub server: ServerSettings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            diseases: default_diseases(),
            max_genes: 40,
            confidence: 400,
            hub_count: 5,
            layout: LayoutSettings::default(),
            parser: ParserOptions::default(),
            kegg: KeggSettings::default(),
            string_db: StringDbSettings::default(),
            server: ServerSettings::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        let config: DashboardConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.diseases.is_empty() {
            return Err(ConfigError::Invalid("disease catalog is empty".to_string()));
        }
        if let Some(d) = self.diseases.iter().find(|d| d.pathway_id.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("disease {:?} has no pathway id", d.name)));
        }
        if self.max_genes == 0 {
            return Err(ConfigError::Invalid("max_genes must be positive".to_string()));
        }
        if self.confidence > 1000 {
            return Err(ConfigError::Invalid(format!(
                "confidence {} exceeds 1000", self.confidence
            )));
        }
        if !LayoutConfig::spacing_is_valid(self.layout.spacing) {
            return Err(ConfigError::Invalid(format!(
                "layout spacing must be greater than 0 and at most {}", MAX_SPACING
            )));
        }
        Ok(())
    }

    /// Resolve a disease by case-insensitive name or pathway id.
    ///
    /// Any other syntactically valid pathway id is accepted as its own entry,
    /// so records outside the catalog can still be analysed.
    pub fn resolve_disease(&self, name_or_id: &str) -> Option<DiseasePathway> {
        let wanted = name_or_id.trim();
        self.diseases
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(wanted) || d.pathway_id.eq_ignore_ascii_case(wanted))
            .cloned()
            .or_else(|| {
                crate::kegg::validate_pathway_id(wanted)
                    .ok()
                    .filter(|_| wanted.chars().any(|c| c.is_ascii_digit()))
                    .map(|_| DiseasePathway::new(wanted, wanted))
            })
    }
}
