//! lotus-rpc - Command-line interface for Lotus JSON-RPC nodes

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use lotus_rpc_sdk::{LotusClient, Settings, Value};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "lotus-rpc")]
#[command(about = "Call Filecoin.* JSON-RPC methods on a Lotus node", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON-RPC endpoint URL (e.g. http://127.0.0.1:1234/rpc/v0)
    #[arg(long, env = "LOTUS_API_ADDRESS")]
    api_address: Option<String>,

    /// Bearer token for the Authorization header
    #[arg(long, env = "LOTUS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log output format
    #[arg(long, env = "LOTUS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Call any method (without the "Filecoin." prefix)
    Call {
        /// Method name, e.g. ChainHead
        method: String,

        /// Positional params; each is parsed as JSON, else sent as a string
        params: Vec<String>,
    },

    /// Show node version
    Version,

    /// Show current chain head
    ChainHead,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

fn init_logging(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("lotus_rpc=info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries results; logs go to stderr
    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// `42` → number, `{"a":1}` → object, `t1abc` → "t1abc"
fn parse_param(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn build_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    if let Some(api_address) = &cli.api_address {
        settings.api_address = api_address.clone();
    }
    if let Some(token) = &cli.token {
        settings.token = Some(token.clone());
    }
    if cli.timeout_secs.is_some() {
        settings.timeout_secs = cli.timeout_secs;
    }

    Ok(settings)
}

fn print_result(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let settings = build_settings(&cli)?;
    let client = LotusClient::from_settings(&settings).context("Failed to create client")?;

    debug!(api_address = %settings.api_address, "Client configured");

    let result = match cli.command {
        Commands::Call { method, params } => {
            let params: Vec<Value> = params.iter().map(|p| parse_param(p)).collect();
            client
                .request(&method, params)
                .await
                .with_context(|| format!("Filecoin.{} failed", method))?
        }
        Commands::Version => client.version().await.context("Filecoin.Version failed")?,
        Commands::ChainHead => client
            .chain_head()
            .await
            .context("Filecoin.ChainHead failed")?,
    };

    print_result(&result)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}
