//! Differential-expression overlay
//!
//! Maps gene symbols to log fold-change values loaded from a CSV upload and
//! classifies each value into an up / down / neutral status for coloring.

pub mod overlay;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use overlay::ExpressionOverlay;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Overlay is missing required column {0:?}")]
    MissingColumn(&'static str),
    #[error("Invalid LogFC value {value:?} for {symbol} on line {line}")]
    InvalidValue { line: u64, symbol: String, value: String },
    #[error("Malformed overlay CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type OverlayResult<T> = Result<T, OverlayError>;

/// |LogFC| above this marks a gene as differentially expressed
pub const LOGFC_THRESHOLD: f64 = 1.0;

/// Expression status of a gene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpressionStatus {
    Up,
    Down,
    Neutral,
}

impl ExpressionStatus {
    pub fn from_log_fc(log_fc: f64) -> Self {
        if log_fc > LOGFC_THRESHOLD {
            ExpressionStatus::Up
        } else if log_fc < -LOGFC_THRESHOLD {
            ExpressionStatus::Down
        } else {
            // NaN lands here too
            ExpressionStatus::Neutral
        }
    }

    /// Node fill color
    pub fn color(&self) -> &'static str {
        match self {
            ExpressionStatus::Up => "#FF4B4B",
            ExpressionStatus::Down => "#4B4BFF",
            ExpressionStatus::Neutral => "#D5D8DC",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpressionStatus::Up => "up",
            ExpressionStatus::Down => "down",
            ExpressionStatus::Neutral => "neutral",
        }
    }
}
