//! cgctl CLI entry point.
//!
//! This binary is the composition root for the entire system. Responsibilities:
//!
//! 1. **Parse flags** — region, tenant flavour, and the requested action.
//! 2. **Wire observability** — configure `tracing-subscriber` with an
//!    `EnvFilter` so every `tracing` event emitted by the workspace crates is
//!    controllable via `RUST_LOG`.
//! 3. **Read credentials** — `CHKP_API_KEY` / `CHKP_API_SECRET` from the
//!    process environment; missing either is fatal before any network call.
//! 4. **Dispatch** — list the extension registry, or construct an
//!    [`client::ApiClient`] (which self-checks the connection) and hand it to
//!    the selected extension.
//!
//! Invoking with no arguments prints help and exits without side effects.

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::Value;

use client::ApiClient;
use cloudguard::{ApiError, ConnectionConfig, Region};
use extensions::{ExtensionRegistry, ListOutcome};

/// Environment variable holding the API key (basic-auth username).
const API_KEY_VAR: &str = "CHKP_API_KEY";
/// Environment variable holding the API secret (basic-auth password).
const API_SECRET_VAR: &str = "CHKP_API_SECRET";

/// Command-line client for the CloudGuard security-posture API.
#[derive(Parser, Debug)]
#[command(name = "cgctl")]
#[command(about = "Command-line client for the CloudGuard security-posture API", long_about = None)]
#[command(arg_required_else_help = true)]
struct Args {
    /// CloudGuard tenant region (us, eu, au, in, ca, sg)
    #[arg(short = 'r', long, default_value = "us")]
    region: String,

    /// Access the tenant through the Infinity Portal
    #[arg(long)]
    infinity_tenant: bool,

    /// List available modules
    #[arg(short = 'l', long)]
    list_modules: bool,

    /// Run the named module against the API
    #[arg(short = 'm', long)]
    module: Option<String>,

    /// JSON input object passed to the module
    #[arg(long, default_value = "{}")]
    input: String,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    run(args).await
}

async fn run(args: Args) -> Result<()> {
    let registry = ExtensionRegistry::builtin();

    if args.list_modules {
        for outcome in registry.list() {
            match outcome {
                ListOutcome::Available(descriptor) => println!("{descriptor}"),
                ListOutcome::Unavailable { unit, error } => {
                    eprintln!("[error] module '{unit}' does not appear to be valid: {error}");
                }
            }
        }
    }

    // Only build a client if a module was selected.
    let Some(module) = args.module else {
        return Ok(());
    };

    let region = Region::from_str(&args.region)?;
    let api_key = std::env::var(API_KEY_VAR).map_err(|_| ApiError::Configuration {
        message: format!("environment variable {API_KEY_VAR} is not set"),
    })?;
    let api_secret = std::env::var(API_SECRET_VAR).map_err(|_| ApiError::Configuration {
        message: format!("environment variable {API_SECRET_VAR} is not set"),
    })?;
    let config = ConnectionConfig::new(region, api_key, api_secret, args.infinity_tenant)?;
    let input: Value = serde_json::from_str(&args.input).context("--input is not valid JSON")?;

    let client = ApiClient::connect(config).await?;
    let extension = registry.load(&module)?;
    let result = extension.execute(&client, input).await;

    if result.ok {
        let response = result.response.unwrap_or(Value::Null);
        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    } else {
        let reason = result.error.unwrap_or_else(|| "unknown error".to_string());
        bail!("module '{module}' failed: {reason}");
    }
}
