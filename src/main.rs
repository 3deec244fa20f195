use anyhow::Result;
use clap::Parser;
use linktrack::config::{self, Config};
use linktrack::server;
use tracing_subscriber::EnvFilter;

/// URL shortener with per-user links and click analytics.
#[derive(Parser)]
#[command(name = "linktrack")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Validate and print the configuration, then exit
    #[arg(long)]
    config_check: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    if args.config_check {
        tracing::info!("Configuration is valid");
        return Ok(());
    }

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
