//! TableProbe CLI
//!
//! Connectivity probe for a hosted data service: reads the endpoint and API
//! key, runs three read-only queries, and prints a status line per query.

use anyhow::Result;
use clap::Parser;
use std::io;
use tableprobe_client::{ProbeConfig, ServiceClient};
use tableprobe_probe::{run_probe, ProbeReport};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "tableprobe")]
#[command(about = "TableProbe - Remote data service connectivity probe")]
#[command(version)]
struct Cli {
    /// Service endpoint URL (overrides SERVICE_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,

    /// API key (overrides API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Exit non-zero when any query fails (failures are advisory by default)
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    // Missing configuration is the one fatal precondition; nothing has
    // touched the network yet at this point.
    let config = match ProbeConfig::resolve(cli.endpoint, cli.api_key) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("   set SERVICE_ENDPOINT and API_KEY (or pass --endpoint / --api-key)");
            std::process::exit(1);
        }
    };

    println!("Probing {} ...", config.service_endpoint);

    let code = match probe(&config).await {
        Ok(report) => exit_code(cli.strict, report.all_passed()),
        Err(e) => {
            // Anything escaping the per-query error handling lands here.
            eprintln!("❌ unexpected error: {}", e);
            eprintln!(
                "   possible causes: no network connectivity, invalid credentials, \
                 or a service outage"
            );
            exit_code(cli.strict, false)
        }
    };

    std::process::exit(code);
}

async fn probe(config: &ProbeConfig) -> Result<ProbeReport> {
    let client = ServiceClient::new(config)?;
    debug!("Client handle constructed");

    let mut out = io::stdout().lock();
    let report = run_probe(&client, &mut out).await?;

    Ok(report)
}

// Query failures are advisory by default; --strict turns them (and any
// unexpected error) into a failing exit.
fn exit_code(strict: bool, all_passed: bool) -> i32 {
    if strict && !all_passed {
        1
    } else {
        0
    }
}
