//! greeter: a web service that greets the subject stored in PostgreSQL.
//!
//! This is the application entry point. It loads configuration, initializes
//! tracing, reads the greeting subject from the store once, and then serves it
//! over HTTP until SIGTERM/SIGINT. Any failure before the listener binds exits
//! the process with a non-zero status.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use greeter::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use greeter::http::start_server;
use greeter::routes::create_router;
use greeter::startup::initialize;
use greeter::store::PostgresSource;

/// greeter: says hello to whoever is in the users table
#[derive(Parser, Debug)]
#[command(name = "greeter", version, about)]
struct Args {
    /// Path to an optional TOML configuration file ([http], [logging])
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "greeter=debug,sqlx=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    // Config errors are reported before logging exists, so go to stderr directly
    let config = match AppConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("greeter: {e}");
            return Err(e.into());
        }
    };

    init_tracing(&log_filter, config.logging.format);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Loaded configuration");
    tracing::info!(
        host = %config.database.host,
        port = config.database.port,
        database = %config.database.database,
        user = %config.database.user,
        "Store configured"
    );

    let source = PostgresSource::new(&config.database);
    let state = match initialize(&source).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    let app = create_router(state);
    start_server(app, &config.http).await?;

    Ok(())
}
