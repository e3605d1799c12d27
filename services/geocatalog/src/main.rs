//! Geodata catalog CLI.
//!
//! Fetches the provider directory and the layer table, joins them and prints
//! the resulting catalog with its WMS/WFS links.

mod output;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use catalog::{CatalogConfig, CatalogService, HttpFetcher};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "geocatalog")]
#[command(about = "Build the geodata layer catalog and print it")]
struct Args {
    /// YAML configuration file
    #[arg(short, long, env = "GEOCATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Override the source root of both resources
    #[arg(long, env = "GEOCATALOG_BASE_URL")]
    base_url: Option<String>,

    /// Leave out layers that have a removal date
    #[arg(short, long)]
    active_only: bool,

    /// Strip the trailing /ows of reflect-style endpoints
    #[arg(long)]
    strict_suffix_strip: bool,

    /// Output format: json (default) or text
    #[arg(short, long, default_value = "json")]
    output: String,

    /// Log level
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{:#}", e), "Catalog unavailable");
            eprintln!("catalog unavailable: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if args.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(args: Args) -> Result<()> {
    let format = OutputFormat::parse(&args.output)
        .with_context(|| format!("Unknown output format '{}'", args.output))?;

    let mut config = match &args.config {
        Some(path) => CatalogConfig::from_file(path)?,
        None => CatalogConfig::default(),
    };
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if args.strict_suffix_strip {
        config.strict_suffix_strip = true;
    }
    config.validate()?;

    info!(
        base_url = %config.base_url,
        active_only = args.active_only,
        strict_suffix_strip = config.strict_suffix_strip,
        "Building catalog"
    );

    let fetcher = HttpFetcher::new(config.request_timeout()).context("Failed to create HTTP client")?;
    let service = CatalogService::new(Arc::new(fetcher), &config);

    let view = service
        .build(args.active_only)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", e.kind(), e))?;

    println!("{}", output::render(&view, format)?);
    Ok(())
}
