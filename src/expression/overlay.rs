//! CSV-backed LogFC lookup

use crate::expression::{OverlayError, OverlayResult};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const SYMBOL_COLUMN: &str = "Symbol";
const LOGFC_COLUMN: &str = "LogFC";

/// Gene symbol -> LogFC
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpressionOverlay {
    values: HashMap<String, f64>,
}

impl ExpressionOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit pairs; the first value for a symbol wins
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut values = HashMap::new();
        for (symbol, value) in pairs {
            values.entry(symbol.into()).or_insert(value);
        }
        Self { values }
    }

    /// Read a CSV with a header row containing `Symbol` and `LogFC`.
    ///
    /// Other columns are ignored. Empty LogFC cells leave the gene absent.
    pub fn from_reader<R: Read>(reader: R) -> OverlayResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let symbol_idx = column_index(&headers, SYMBOL_COLUMN)
            .ok_or(OverlayError::MissingColumn(SYMBOL_COLUMN))?;
        let logfc_idx = column_index(&headers, LOGFC_COLUMN)
            .ok_or(OverlayError::MissingColumn(LOGFC_COLUMN))?;

        let mut values = HashMap::new();
        let mut skipped = 0usize;

        for result in csv_reader.records() {
            let record = result?;
            let symbol = record.get(symbol_idx).unwrap_or_default();
            let raw = record.get(logfc_idx).unwrap_or_default();

            if symbol.is_empty() || raw.is_empty() || raw.eq_ignore_ascii_case("na") {
                skipped += 1;
                continue;
            }

            let value: f64 = raw.parse().map_err(|_| OverlayError::InvalidValue {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                symbol: symbol.to_string(),
                value: raw.to_string(),
            })?;

            values.entry(symbol.to_string()).or_insert(value);
        }

        if skipped > 0 {
            debug!("Skipped {} overlay rows without symbol or LogFC", skipped);
        }
        info!("Loaded expression overlay with {} genes", values.len());

        Ok(Self { values })
    }

    pub fn from_csv_str(text: &str) -> OverlayResult<Self> {
        Self::from_reader(text.as_bytes())
    }

    pub fn from_path(path: impl AsRef<Path>) -> OverlayResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// LogFC for a symbol; absent genes are neutral (0.0)
    pub fn log_fc(&self, symbol: &str) -> f64 {
        self.values.get(symbol).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.values.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .or_else(|| headers.iter().position(|h| h.eq_ignore_ascii_case(name)))
}
