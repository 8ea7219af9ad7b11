use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tagmatch_api::{ApiState, RestApi};
use tagmatch_core::{Catalog, RecommendConfig, DEFAULT_MAX_RESULTS, DEFAULT_MIN_SIMILARITY};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Tag-based learning path and career recommendations
#[derive(Parser, Debug)]
#[command(name = "tagmatch")]
#[command(about = "Tag-based learning path and career recommendations", long_about = None)]
struct Args {
    /// Address to bind the HTTP API to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// HTTP API port
    #[arg(long, default_value_t = 6380)]
    http_port: u16,

    /// JSON catalog snapshot served by the lookup endpoints
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Minimum similarity for requests that do not set one
    #[arg(long, default_value_t = DEFAULT_MIN_SIMILARITY)]
    min_similarity: f32,

    /// Maximum results for requests that do not set one
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting tagmatch v{}", env!("CARGO_PKG_VERSION"));

    let defaults = RecommendConfig::new(args.min_similarity, args.max_results);
    defaults.validate()?;
    info!(
        "Defaults: min_similarity={} max_results={}",
        defaults.min_similarity, defaults.max_results
    );

    let catalog = match &args.catalog {
        Some(path) => {
            let catalog = Catalog::load(path)?;
            info!(
                "Catalog {:?}: {} learning paths, {} careers",
                path,
                catalog.learning_paths.len(),
                catalog.careers.len()
            );
            if catalog.is_empty() {
                warn!("Catalog {:?} is empty, every lookup will return 404", path);
            }
            Some(catalog)
        }
        None => {
            info!("No catalog loaded, lookup endpoints disabled");
            None
        }
    };

    let state = Arc::new(ApiState::new(catalog, defaults));

    let host = args.host.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on {}:{}", host, http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(state, &host, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://{}:{}/", args.host, args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
