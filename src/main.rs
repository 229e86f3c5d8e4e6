use anyhow::{Context, Result, anyhow};
use finance_assistant::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Filter for the subscriber. `RUST_LOG` directives win over the configured
/// level; either one being malformed is a startup error.
fn build_filter(rust_log: Option<&str>, level: &str) -> Result<EnvFilter> {
    level.parse::<LevelFilter>().map_err(|_| {
        anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    })?;

    match rust_log.filter(|directives| !directives.trim().is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid RUST_LOG directives: '{}'", directives)),
        None => Ok(EnvFilter::new(level)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing CLU settings are fatal before anything else starts
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let rust_log = std::env::var("RUST_LOG").ok();
    let log_level = config.server.logs.level.clone();

    let filter = match build_filter(rust_log.as_deref(), &log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    info!(
        "Starting Financial AI Assistant with log filter: {}",
        rust_log.as_deref().unwrap_or(&log_level)
    );

    server::run(config).await?;

    Ok(())
}
