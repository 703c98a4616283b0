use anyhow::{Context, Result};
use clap::Parser;
use refund_bridge::downstream::RefundApiClient;
use refund_bridge::mcp::{BridgeServer, RefundBridge};
use refund_bridge::tools::{self, ToolRegistry};
use refund_bridge::config;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "refund-bridge")]
#[command(about = "MCP stdio server for the refund API", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to configuration file (optional)
    #[arg(short, long, default_value = "refund-bridge.toml")]
    config: PathBuf,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Override log format (pretty, json)
    #[arg(long)]
    log_format: Option<String>,

    /// Print the advertised tool list as JSON and exit
    #[arg(long)]
    print_tools: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = config::load_config(&cli.config).with_context(|| {
        format!(
            "Failed to load configuration from: {}",
            cli.config.display()
        )
    })?;

    if let Some(log_level) = cli.log_level {
        config.logging.level = log_level;
    }
    if let Some(log_format) = cli.log_format {
        config.logging.format = log_format;
    }

    let client = RefundApiClient::from_config(&config.downstream)
        .context("Failed to create refund API client")?;
    let registry = tools::default_registry(Arc::new(client));

    if cli.print_tools {
        print_tools(&registry)?;
        return Ok(());
    }

    init_logging(&config.logging)?;
    print_banner(&config, &registry);

    let server = BridgeServer::new(RefundBridge::new(registry, config.server.clone()));
    tokio::spawn(shutdown_signal(server.cancellation_token()));

    server
        .serve_stdio()
        .await
        .context("MCP server terminated with an error")?;

    info!("refund-bridge exiting");
    Ok(())
}

// stdout carries the MCP transport, so every log line goes to stderr
fn init_logging(config: &config::LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}

fn print_tools(registry: &ToolRegistry) -> Result<()> {
    let tools: Vec<serde_json::Value> = registry
        .definitions()
        .iter()
        .map(|d| d.to_listing())
        .collect();
    let rendered = serde_json::to_string_pretty(&serde_json::json!({ "tools": tools }))
        .context("Failed to render tool list")?;
    println!("{}", rendered);
    Ok(())
}

fn print_banner(config: &config::BridgeConfig, registry: &ToolRegistry) {
    let version = env!("CARGO_PKG_VERSION");
    let width = 59usize;
    let border = "═".repeat(width + 2);
    let line = |content: &str| {
        info!("║ {:width$} ║", content, width = width);
    };

    info!("╔{}╗", border);
    line("REFUND-BRIDGE");
    line(&format!("MCP Refund Tools Server v{}", version));
    info!("╚{}╝", border);
    info!("");
    info!("Server Configuration:");
    info!(
        "  → MCP Identity: {} {}",
        config.server.name, config.server.version
    );
    info!("  → Refund API: {}", config.downstream.base_url);
    info!("  → Log Level: {}", config.logging.level);
    info!("  → Log Format: {}", config.logging.format);
    for definition in registry.definitions() {
        info!("  → Tool: {}", definition.name);
    }
    info!("");
}

async fn shutdown_signal(ct: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received Ctrl+C signal, shutting down...");
        ct.cancel();
    }
}
