//! Pathway record parser
//!
//! Extracts `(symbol, description)` pairs from the `GENE` section of a KEGG
//! flat-file pathway record. Data lines look like
//!
//! ```text
//! GENE        351  APP, AAA, ABETA, ABPP; amyloid beta precursor protein [KO:K04520]
//!             10452  TOMM40, C19orf1; translocase of outer mitochondrial membrane 40
//! COMPOUND    C00001  H2O
//! ```
//!
//! The parser is lenient: lines it cannot interpret are skipped, never reported.

use serde::{Deserialize, Serialize};

const GENE_LABEL: &str = "GENE";
const SECTION_TERMINATORS: [&str; 2] = ["COMPOUND", "REFERENCE"];

/// A gene extracted from a pathway record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneEntry {
    /// Gene symbol, case preserved
    pub symbol: String,
    /// Free-text description following the first separator
    pub description: String,
}

impl GeneEntry {
    /// The first `limit` distinct symbols, in encounter order
    pub fn unique_symbols(entries: &[GeneEntry], limit: usize) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        entries
            .iter()
            .filter(|e| seen.insert(e.symbol.as_str()))
            .take(limit)
            .map(|e| e.symbol.clone())
            .collect()
    }
}

/// Parser policy knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Keep only the first of a comma-separated alias list as the symbol
    pub collapse_aliases: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self { collapse_aliases: true }
    }
}

/// Parse a pathway record with default options
pub fn parse_genes(text: &str) -> Vec<GeneEntry> {
    parse_pathway_record(text, &ParserOptions::default())
}

/// Parse the `GENE` section(s) of a pathway record.
///
/// Section state is a plain flag: a line starting with `GENE` opens it, a
/// line starting with `COMPOUND` or `REFERENCE` closes it, and a later `GENE`
/// line opens it again.
pub fn parse_pathway_record(text: &str, options: &ParserOptions) -> Vec<GeneEntry> {
    let mut genes = Vec::new();
    let mut in_gene_section = false;

    for raw in text.lines() {
        let mut line = raw;

        if let Some(rest) = line.strip_prefix(GENE_LABEL) {
            in_gene_section = true;
            line = rest.trim();
        } else if SECTION_TERMINATORS.iter().any(|t| line.starts_with(t)) {
            in_gene_section = false;
        }

        if !in_gene_section || line.is_empty() || !line.contains(';') {
            continue;
        }

        if let Some(entry) = parse_gene_line(line, options) {
            genes.push(entry);
        }
    }

    genes
}

fn parse_gene_line(line: &str, options: &ParserOptions) -> Option<GeneEntry> {
    // A bare ';' with no following space still separates the head
    let (head, description) = line
        .split_once("; ")
        .or_else(|| line.split_once(';'))?;

    let mut tokens = head.trim_start().splitn(2, char::is_whitespace);
    let _accession = tokens.next().filter(|t| !t.is_empty())?;
    let symbol_field = tokens.next()?.trim();

    let symbol = if options.collapse_aliases {
        symbol_field.split(',').next().unwrap_or_default().trim()
    } else {
        symbol_field
    };

    if symbol.is_empty() {
        return None;
    }

    Some(GeneEntry {
        symbol: symbol.to_string(),
        description: description.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(symbol: &str, description: &str) -> GeneEntry {
        GeneEntry {
            symbol: symbol.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_first_alias_becomes_symbol() {
        let genes = parse_genes("GENE  1234  SYM1, SYM2; Some description");
        assert_eq!(genes, vec![entry("SYM1", "Some description")]);
    }

    #[test]
    fn test_keep_aliases_policy() {
        let options = ParserOptions { collapse_aliases: false };
        let genes = parse_pathway_record("GENE  1234  SYM1, SYM2; Some description", &options);
        assert_eq!(genes, vec![entry("SYM1, SYM2", "Some description")]);
    }

    #[test]
    fn test_no_gene_section() {
        let text = "ENTRY       hsa05010\nNAME        Alzheimer disease\nCOMPOUND    C00001; H2O\n";
        assert!(parse_genes(text).is_empty());
        assert!(parse_genes("").is_empty());
    }

    #[test]
    fn test_line_without_semicolon_is_skipped() {
        let text = "GENE        1234  ABC1 alpha subunit\n            5678  DEF1; beta\n";
        assert_eq!(parse_genes(text), vec![entry("DEF1", "beta")]);
    }

    #[test]
    fn test_single_token_head_is_skipped() {
        let text = "GENE        ABC1; no accession\n            5678  DEF1; beta\n";
        assert_eq!(parse_genes(text), vec![entry("DEF1", "beta")]);
    }

    #[test]
    fn test_additional_semicolons_stay_in_description() {
        let genes = parse_genes("GENE  1  ABC1; first; second");
        assert_eq!(genes, vec![entry("ABC1", "first; second")]);
    }

    #[test]
    fn test_bare_semicolon_separator() {
        let genes = parse_genes("GENE  1  ABC1;tight description");
        assert_eq!(genes, vec![entry("ABC1", "tight description")]);
    }

    #[test]
    fn test_empty_first_alias_is_skipped() {
        assert!(parse_genes("GENE  1  , ABC2; odd").is_empty());
    }

    #[test]
    fn test_unique_symbols_limit() {
        let entries = vec![
            entry("A", ""),
            entry("B", ""),
            entry("A", ""),
            entry("C", ""),
        ];
        assert_eq!(GeneEntry::unique_symbols(&entries, 10), vec!["A", "B", "C"]);
        assert_eq!(GeneEntry::unique_symbols(&entries, 2), vec!["A", "B"]);
    }
}
