//! STRING protein-protein interactions
//!
//! Scores are kept on one explicit scale: records always carry a unit-scale
//! (0-1) score, the user-facing threshold is always on STRING's 0-1000 scale,
//! and [`ConfidenceThreshold::accepts`] is the only place the two meet.

pub mod client;
pub mod record;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use client::{StaticInteractionSource, StringDbClient};
pub use record::{parse_interactions, InteractionRecord, ScoreScale};

#[derive(Error, Debug)]
pub enum StringDbError {
    #[error("STRING API error: {0}")]
    Api(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type StringDbResult<T> = Result<T, StringDbError>;

/// Anything that can supply interactions among a set of gene symbols
#[async_trait]
pub trait InteractionSource: Send + Sync {
    async fn fetch_interactions(&self, symbols: &[String]) -> StringDbResult<Vec<InteractionRecord>>;
}

/// Minimum combined score, on the 0-1000 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub struct ConfidenceThreshold(u16);

impl ConfidenceThreshold {
    pub const MAX: u16 = 1000;

    /// Values above 1000 are clamped
    pub fn new(permille: u16) -> Self {
        ConfidenceThreshold(permille.min(Self::MAX))
    }

    pub fn permille(&self) -> u16 {
        self.0
    }

    pub fn as_unit(&self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX)
    }

    /// Does a unit-scale score pass this threshold?
    pub fn accepts(&self, unit_score: f64) -> bool {
        unit_score >= self.as_unit()
    }
}

impl From<u16> for ConfidenceThreshold {
    fn from(permille: u16) -> Self {
        ConfidenceThreshold::new(permille)
    }
}

impl From<ConfidenceThreshold> for u16 {
    fn from(threshold: ConfidenceThreshold) -> Self {
        threshold.0
    }
}

impl Default for ConfidenceThreshold {
    fn default() -> Self {
        ConfidenceThreshold(400)
    }
}

impl std::fmt::Display for ConfidenceThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
