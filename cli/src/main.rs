//! Interactome CLI: build disease-pathway interaction networks from the terminal
//!
//! Talks to KEGG and STRING directly, or reads saved records with `--offline-dir`.

use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use interactome::config::{DashboardConfig, DiseasePathway};
use interactome::http::HttpServer;
use interactome::kegg::{FilePathwaySource, KeggClient, PathwaySource};
use interactome::pipeline::{AnalysisRequest, NetworkPipeline, NetworkReport};
use interactome::string_db::{
    parse_interactions, InteractionSource, ScoreScale, StaticInteractionSource, StringDbClient,
};
use interactome::ExpressionOverlay;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "interactome", version, about = "Disease-pathway interaction networks")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "INTERACTOME_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Read pathway records from <dir>/<pathway_id>.txt instead of KEGG
    #[arg(long, global = true)]
    offline_dir: Option<PathBuf>,

    /// Read interactions from a saved STRING JSON response instead of STRING
    #[arg(long, global = true)]
    interactions: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Args)]
struct NetworkArgs {
    /// Disease name or KEGG pathway id
    target: String,

    /// Minimum STRING combined score (0-1000)
    #[arg(long)]
    confidence: Option<u16>,

    /// Layout spacing (optimal node distance)
    #[arg(long)]
    spacing: Option<f64>,

    /// CSV with Symbol and LogFC columns
    #[arg(long)]
    overlay: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the disease catalog
    Diseases,
    /// Print the gene list parsed from a pathway record
    Genes {
        /// Disease name or KEGG pathway id
        target: String,

        /// Keep the full alias list as the symbol
        #[arg(long)]
        keep_aliases: bool,
    },
    /// Build the interaction network and print its metrics
    Network(NetworkArgs),
    /// Print manuscript text for a network
    Caption(NetworkArgs),
    /// Start the dashboard HTTP API
    Serve,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => DashboardConfig::default(),
    };

    apply_command_overrides(&mut config, &cli.command);

    let pipeline = Arc::new(build_pipeline(&cli, config)?);

    match &cli.command {
        Commands::Diseases => run_diseases(&pipeline, &cli.format),
        Commands::Genes { target, .. } => run_genes(&pipeline, target, &cli.format).await,
        Commands::Network(args) => {
            let report = analyse(&pipeline, args).await?;
            print_report(&report, &cli.format)
        }
        Commands::Caption(args) => {
            let report = analyse(&pipeline, args).await?;
            print_captions(&report, &cli.format)
        }
        Commands::Serve => {
            let addr = pipeline.config().server.bind_addr();
            HttpServer::new(Arc::clone(&pipeline), addr)
                .start()
                .await
                .map_err(|e| anyhow!("server error: {}", e))
        }
    }
}

fn apply_command_overrides(config: &mut DashboardConfig, command: &Commands) {
    if let Commands::Genes { keep_aliases: true, .. } = command {
        config.parser.collapse_aliases = false;
    }
}

fn build_pipeline(cli: &Cli, config: DashboardConfig) -> anyhow::Result<NetworkPipeline> {
    let pathways: Arc<dyn PathwaySource> = match &cli.offline_dir {
        Some(dir) => Arc::new(FilePathwaySource::new(dir)),
        None => Arc::new(KeggClient::new(&config.kegg)?),
    };

    let interactions: Arc<dyn InteractionSource> = match &cli.interactions {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let body: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?;
            Arc::new(StaticInteractionSource::new(parse_interactions(&body, ScoreScale::Unit)))
        }
        None => Arc::new(StringDbClient::new(&config.string_db)?),
    };

    Ok(NetworkPipeline::new(Arc::new(config), pathways, interactions))
}

fn resolve(pipeline: &NetworkPipeline, target: &str) -> anyhow::Result<DiseasePathway> {
    pipeline
        .config()
        .resolve_disease(target)
        .ok_or_else(|| anyhow!("unknown disease or pathway: {}", target))
}

async fn analyse(pipeline: &NetworkPipeline, args: &NetworkArgs) -> anyhow::Result<NetworkReport> {
    let overlay = match &args.overlay {
        Some(path) => Some(
            ExpressionOverlay::from_path(path)
                .with_context(|| format!("loading overlay {}", path.display()))?,
        ),
        None => None,
    };

    let request = AnalysisRequest {
        pathway: resolve(pipeline, &args.target)?,
        confidence: args.confidence,
        spacing: args.spacing,
        overlay,
    };

    Ok(pipeline.run(&request).await?)
}

fn run_diseases(pipeline: &NetworkPipeline, format: &OutputFormat) -> anyhow::Result<()> {
    let diseases = &pipeline.config().diseases;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(diseases)?),
        OutputFormat::Csv => {
            println!("name,pathway_id");
            for d in diseases {
                println!("{},{}", csv_field(&d.name), d.pathway_id);
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_header(vec!["Disease", "Pathway"]);
            for d in diseases {
                table.add_row(vec![d.name.clone(), d.pathway_id.clone()]);
            }
            println!("{}", table);
        }
    }

    Ok(())
}

async fn run_genes(pipeline: &NetworkPipeline, target: &str, format: &OutputFormat) -> anyhow::Result<()> {
    let pathway = resolve(pipeline, target)?;
    let genes = pipeline.gene_list(&pathway.pathway_id).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&genes)?),
        OutputFormat::Csv => {
            println!("symbol,description");
            for g in &genes {
                println!("{},{}", csv_field(&g.symbol), csv_field(&g.description));
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Symbol", "Description"]);
            for g in &genes {
                table.add_row(vec![g.symbol.clone(), g.description.clone()]);
            }
            println!("{}", table);
            println!("{} gene(s) in {} ({})", genes.len(), pathway.name, pathway.pathway_id);
        }
    }

    Ok(())
}

fn print_report(report: &NetworkReport, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => {
            println!("symbol,degree,log_fc,status,x,y");
            for n in &report.nodes {
                println!(
                    "{},{},{},{},{:.4},{:.4}",
                    csv_field(&n.symbol), n.degree, n.log_fc, n.status.as_str(), n.x, n.y
                );
            }
        }
        OutputFormat::Table => {
            for warning in &report.warnings {
                eprintln!("Warning: {}", warning);
            }

            let m = &report.metrics;
            println!("Interactome: {} ({})", report.disease, report.pathway_id);
            println!("Confidence:  {} / 1000", report.confidence);
            println!("Physical interactions: {}", m.interaction_count);
            println!("Active nodes:          {}", m.active_nodes);
            println!("Largest module:        {}", m.largest_component);
            println!();

            println!("Central Hubs");
            for hub in &m.hubs {
                println!("  • {}: {} connections", hub.symbol, hub.degree);
            }
            println!();

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Symbol", "Degree", "LogFC", "Status"]);
            for n in &report.nodes {
                table.add_row(vec![
                    n.symbol.clone(),
                    n.degree.to_string(),
                    format!("{:.2}", n.log_fc),
                    n.status.as_str().to_string(),
                ]);
            }
            println!("{}", table);
        }
    }

    Ok(())
}

fn print_captions(report: &NetworkReport, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report.captions)?),
        _ => {
            println!("Figure legend\n{}\n", report.captions.figure_legend);
            println!("Methods\n{}\n", report.captions.methods);
            println!("Results\n{}", report.captions.results);
        }
    }
    Ok(())
}

fn csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("interactome-cli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("APP"), "APP");
        assert_eq!(csv_field("APOE, AD2"), "\"APOE, AD2\"");
        assert_eq!(csv_field("the \"tau\" protein"), "\"the \"\"tau\"\" protein\"");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_keep_aliases_disables_collapsing() {
        let mut config = DashboardConfig::default();
        apply_command_overrides(&mut config, &parse(&["genes", "hsa05010"]).command);
        assert!(config.parser.collapse_aliases);

        apply_command_overrides(&mut config, &parse(&["genes", "hsa05010", "--keep-aliases"]).command);
        assert!(!config.parser.collapse_aliases);
    }

    #[test]
    fn test_network_flags() {
        let cli = parse(&["--format", "json", "network", "Alzheimer's", "--confidence", "700", "--spacing", "0.8"]);
        assert!(matches!(cli.format, OutputFormat::Json));
        let Commands::Network(args) = cli.command else {
            panic!("expected network subcommand");
        };
        assert_eq!(args.target, "Alzheimer's");
        assert_eq!(args.confidence, Some(700));
        assert_eq!(args.spacing, Some(0.8));
        assert!(args.overlay.is_none());
    }

    #[test]
    fn test_confidence_must_fit() {
        assert!(Cli::try_parse_from(["interactome-cli", "network", "hsa05010", "--confidence", "70000"]).is_err());
    }
}
