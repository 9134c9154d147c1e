//! Manuscript text templates
//!
//! Figure legend, methods and results paragraphs describing a generated
//! network, suitable for pasting into a draft.

use crate::algo::NetworkMetrics;
use crate::expression::LOGFC_THRESHOLD;
use crate::string_db::ConfidenceThreshold;
use serde::{Deserialize, Serialize};

/// Everything the templates need to know about one analysis
#[derive(Debug, Clone)]
pub struct CaptionContext<'a> {
    pub disease: &'a str,
    pub pathway_id: &'a str,
    pub gene_count: usize,
    pub threshold: ConfidenceThreshold,
    pub has_overlay: bool,
    pub species: u32,
    pub metrics: &'a NetworkMetrics,
}

/// Rendered manuscript text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Captions {
    pub figure_legend: String,
    pub methods: String,
    pub results: String,
}

impl Captions {
    pub fn render(ctx: &CaptionContext<'_>) -> Self {
        Self {
            figure_legend: figure_legend(ctx),
            methods: methods_paragraph(ctx),
            results: results_paragraph(ctx),
        }
    }
}

pub fn figure_legend(ctx: &CaptionContext<'_>) -> String {
    let mut legend = format!(
        "Physical protein-protein interaction network of the {} pathway (KEGG {}). \
         Nodes represent {} pathway genes; edges represent STRING interactions with a \
         combined score of at least {:.3}.",
        ctx.disease,
        ctx.pathway_id,
        ctx.gene_count,
        ctx.threshold.as_unit(),
    );

    if ctx.has_overlay {
        legend.push_str(&format!(
            " Node color indicates differential expression: red, log2 fold change > {t}; \
             blue, log2 fold change < -{t}; grey, unchanged.",
            t = LOGFC_THRESHOLD,
        ));
    } else {
        legend.push_str(" No expression data were overlaid.");
    }

    legend
}

pub fn methods_paragraph(ctx: &CaptionContext<'_>) -> String {
    let mut text = format!(
        "Genes annotated to KEGG pathway {} were retrieved through the KEGG REST API, and the \
         first {} distinct gene symbols were queried against STRING (NCBI taxon {}). \
         Interactions with a combined score of at least {} (of 1000) were retained and \
         assembled into an undirected network. Node degree was used as the centrality measure, \
         and the network was drawn with a force-directed layout.",
        ctx.pathway_id, ctx.gene_count, ctx.species, ctx.threshold,
    );

    if ctx.has_overlay {
        text.push_str(&format!(
            " Differential expression values were joined by gene symbol; genes absent from the \
             expression table were assigned a log2 fold change of 0, and |log2 fold change| > {} \
             was considered differentially expressed.",
            LOGFC_THRESHOLD,
        ));
    }

    text
}

pub fn results_paragraph(ctx: &CaptionContext<'_>) -> String {
    let m = ctx.metrics;

    if m.interaction_count == 0 {
        return format!(
            "No physical interactions among the {} {} pathway genes passed the confidence \
             threshold of {}.",
            m.active_nodes, ctx.disease, ctx.threshold,
        );
    }

    let mut text = format!(
        "The {} interactome comprised {} genes connected by {} physical interactions \
         (density {:.3}); the largest connected module contained {} genes.",
        ctx.disease, m.active_nodes, m.interaction_count, m.density, m.largest_component,
    );

    if !m.hubs.is_empty() {
        let hubs: Vec<String> = m
            .hubs
            .iter()
            .map(|h| format!("{} ({} interactions)", h.symbol, h.degree))
            .collect();
        text.push_str(&format!(" The most connected hubs were {}.", join_list(&hubs)));
    }

    text
}

/// "a", "a and b", "a, b and c"
fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::Hub;

    fn metrics(interactions: usize, hubs: Vec<Hub>) -> NetworkMetrics {
        NetworkMetrics {
            interaction_count: interactions,
            active_nodes: 40,
            isolated_nodes: 10,
            density: 0.05,
            largest_component: 25,
            module_count: 2,
            hubs,
        }
    }

    fn hub(symbol: &str, degree: usize) -> Hub {
        Hub { symbol: symbol.to_string(), degree, centrality: 0.0 }
    }

    fn ctx<'a>(m: &'a NetworkMetrics, has_overlay: bool) -> CaptionContext<'a> {
        CaptionContext {
            disease: "Alzheimer's",
            pathway_id: "hsa05010",
            gene_count: 40,
            threshold: ConfidenceThreshold::new(400),
            has_overlay,
            species: 9606,
            metrics: m,
        }
    }

    #[test]
    fn test_figure_legend() {
        let m = metrics(3, vec![]);
        let legend = figure_legend(&ctx(&m, true));
        assert!(legend.contains("KEGG hsa05010"));
        assert!(legend.contains("at least 0.400"));
        assert!(legend.contains("red, log2 fold change > 1"));

        let plain = figure_legend(&ctx(&m, false));
        assert!(plain.ends_with("No expression data were overlaid."));
    }

    #[test]
    fn test_results_with_hubs() {
        let m = metrics(12, vec![hub("APP", 6), hub("APOE", 4), hub("PSEN1", 3)]);
        let text = results_paragraph(&ctx(&m, false));
        assert!(text.contains("12 physical interactions"));
        assert!(text.contains("APP (6 interactions), APOE (4 interactions) and PSEN1 (3 interactions)"));
    }

    #[test]
    fn test_results_without_interactions() {
        let m = metrics(0, vec![]);
        let text = results_paragraph(&ctx(&m, false));
        assert!(text.starts_with("No physical interactions"));
        assert!(text.contains("threshold of 400"));
    }

    #[test]
    fn test_methods_mentions_overlay_only_when_present() {
        let m = metrics(1, vec![]);
        assert!(methods_paragraph(&ctx(&m, true)).contains("Differential expression"));
        assert!(!methods_paragraph(&ctx(&m, false)).contains("Differential expression"));
    }

    #[test]
    fn test_join_list() {
        assert_eq!(join_list(&["a".to_string()]), "a");
        assert_eq!(join_list(&["a".to_string(), "b".to_string()]), "a and b");
    }
}
