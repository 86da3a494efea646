//! Haven — supportive chat companion served over HTTP.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cookie;
mod pages;
mod routes;
mod state;
mod transcript;

use state::AppState;
use transcript::TranscriptLogger;

fn resolve_data_dir() -> PathBuf {
    std::env::var("HAVEN_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--transcript" | "transcript" => {
                if args.len() < 3 {
                    eprintln!("Usage: haven transcript <session-id>");
                    std::process::exit(1);
                }
                let paths = haven_core::DataPaths::new(resolve_data_dir())?;
                let log = TranscriptLogger::new(&paths).read(&args[2]);
                println!("{}", serde_json::to_string_pretty(&log)?);
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("Haven — supportive chat companion");
                println!();
                println!("Usage: haven [command]");
                println!();
                println!("Commands:");
                println!("  (none)                   Start the server");
                println!("  transcript <session-id>  Print a stored session transcript");
                println!("  help                     Show this help message");
                println!();
                println!("Environment:");
                println!("  PORT, HAVEN_DATA_DIR, SECRET_KEY, HAVEN_MODEL_URL, HAVEN_MODEL_API_KEY,");
                println!("  HAVEN_MODEL, HAVEN_MODEL_TIMEOUT_SECS, HAVEN_MAX_HISTORY_TURNS");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'haven help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = haven_core::HavenConfig::from_env(&data_dir)?;
    if config.uses_dev_secret() {
        warn!("Session cookies are signed with the development secret. Set SECRET_KEY before deploying.");
    }
    let port = config.port;

    // Model is optional: without one, canned responses only
    let generator = haven_infer::create_generator(&config.model);

    let state = Arc::new(AppState::new(config, generator)?);
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Haven server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
