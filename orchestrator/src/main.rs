//! Main entry point for the spicetrail binary
//!
//! Wires the HTTP catalog client into the search orchestrator and either
//! runs one query (`--search`) or starts an interactive console session.

use std::sync::Arc;

use clap::Parser;
use tokio::io::{stdin, stdout, AsyncWriteExt, BufReader};
use tokio::signal;

use catalog::RealCatalogClient;
use orchestrator::presentation::{render::render_view, run_console};
use orchestrator::{ExplorerConfig, OrchestratorResult, SearchOrchestrator};
use shared::logging;

const COMPONENT: &str = "spicetrail";

/// Recipe discovery in the terminal
#[derive(Parser)]
#[command(name = "spicetrail")]
#[command(about = "Search a public recipe catalog by name and category")]
pub struct Args {
    /// Catalog base URL (overrides SPICETRAIL_CATALOG_URL)
    #[arg(long)]
    pub catalog_url: Option<String>,

    /// Per-request timeout in milliseconds (overrides SPICETRAIL_TIMEOUT_MS)
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// One-shot mode: search for this term, print the results and exit
    #[arg(long)]
    pub search: Option<String>,

    /// One-shot mode: restrict the search to this category
    #[arg(long, requires = "search")]
    pub category: Option<String>,

    /// One-shot mode: print the session snapshot as JSON instead of text
    #[arg(long, requires = "search")]
    pub json: bool,
}

#[tokio::main]
async fn main() -> OrchestratorResult<()> {
    let args = Args::parse();

    logging::init_tracing(Some(&args.log_level));

    let config = ExplorerConfig::resolve(args.catalog_url.as_deref(), args.timeout_ms)?;
    logging::log_startup(COMPONENT, &format!("recipe explorer against {}", config.catalog.base_url));

    let catalog = RealCatalogClient::new(config.catalog.clone())?;
    let orchestrator = SearchOrchestrator::new(Arc::new(catalog), &config);
    orchestrator.initialize().await;

    match args.search {
        Some(term) => run_once(&orchestrator, &term, args.category.as_deref(), args.json).await?,
        None => {
            let input = BufReader::new(stdin());
            tokio::select! {
                result = run_console(&orchestrator, input, stdout()) => result?,
                signal = signal::ctrl_c() => match signal {
                    Ok(()) => logging::log_shutdown(COMPONENT, "Received Ctrl+C signal"),
                    Err(err) => logging::log_error(COMPONENT, "Signal handling", &err),
                },
            }
        }
    }

    logging::log_success(COMPONENT, "Explorer stopped");
    Ok(())
}

/// Run a single search and print the resulting view
async fn run_once(
    orchestrator: &SearchOrchestrator<RealCatalogClient>,
    term: &str,
    category: Option<&str>,
    as_json: bool,
) -> OrchestratorResult<()> {
    orchestrator.select_category(category).await?;
    orchestrator.submit_search(term).await;

    let snapshot = orchestrator.snapshot().await;
    let rendered = if as_json {
        serde_json::to_string_pretty(&snapshot)? + "\n"
    } else {
        render_view(&snapshot)
    };

    let mut out = stdout();
    out.write_all(rendered.as_bytes()).await?;
    out.flush().await?;
    Ok(())
}
