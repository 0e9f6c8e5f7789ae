use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dormbase_server::db::pool::create_pool_with_options;
use dormbase_server::{DbConfig, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "dormbase-server", about = "Dormitory management HTTP backend")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Maximum connections in the MySQL pool
    #[arg(long, default_value_t = 5)]
    max_db_connections: u32,

    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // .env is optional; deployed environments set real variables.
    dotenvy::dotenv().ok();

    init_tracing(args.debug)?;

    let db = DbConfig::from_env().context("database configuration")?;
    let pool = create_pool_with_options(&db.url, args.max_db_connections)
        .await
        .context("connecting to MySQL")?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };
    dormbase_server::run_server(pool, config)
        .await
        .context("HTTP server")?;

    Ok(())
}

fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        // Debug mode: set debug level unless RUST_LOG is explicitly set
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
