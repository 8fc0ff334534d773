// src/main.rs
use clap::Parser;
use dotenv::dotenv;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{handle_command, Cli};
use empleaworks::notifications::LogBackend;
use empleaworks::{ApiError, AppContext, ClientConfig};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let mut config = ClientConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config = config.with_api_url(api_url);
    }
    if let Some(store) = cli.store {
        config = config.with_store_url(store);
    }

    let app = AppContext::init(config, Arc::new(LogBackend)).await?;
    info!("🚀 EmpleaWorks client ready");

    let result = handle_command(&app, cli.command).await;
    app.dispose().await;
    result
}

fn report(e: &anyhow::Error) {
    match e.downcast_ref::<ApiError>() {
        Some(api_error) => {
            let kind = api_error.kind();
            error!(kind = kind.label(), status = ?api_error.status(), "{}", kind.message());
            eprintln!("❌ {}", kind.message());
            if let empleaworks::ErrorKind::Validation { fields, .. } = &kind {
                for (field, messages) in fields {
                    for message in messages {
                        eprintln!("   {}: {}", field, message);
                    }
                }
            }
        }
        None => {
            error!(error = %e, "Command failed");
            eprintln!("❌ {}", e);
        }
    }
}
