use anyhow::Context;
use interactome::config::DashboardConfig;
use interactome::http::HttpServer;
use interactome::kegg::KeggClient;
use interactome::pipeline::NetworkPipeline;
use interactome::string_db::StringDbClient;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Config path from the first argument or INTERACTOME_CONFIG
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("INTERACTOME_CONFIG").ok());

    let config = match config_path {
        Some(path) => DashboardConfig::from_path(&path)
            .with_context(|| format!("loading {}", path))?,
        None => DashboardConfig::default(),
    };

    info!("Interactome v{}", interactome::version());

    let pipeline = NetworkPipeline::new(
        Arc::new(config.clone()),
        Arc::new(KeggClient::new(&config.kegg)?),
        Arc::new(StringDbClient::new(&config.string_db)?),
    );

    let server = HttpServer::new(Arc::new(pipeline), config.server.bind_addr());
    server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))?;

    Ok(())
}
