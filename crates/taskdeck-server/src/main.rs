use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use taskdeck_server::{AppContext, rest};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "taskdeck",
    about = "Taskdeck — minimal task-management web app",
    version
)]
struct Args {
    /// HTTP server port
    #[arg(long, env = "TASKDECK_PORT", default_value_t = 3001)]
    port: u16,

    /// Bind address (default: 127.0.0.1; use 0.0.0.0 for LAN access)
    #[arg(long, env = "TASKDECK_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(long, env = "TASKDECK_LOG", default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .compact()
        .init();

    // メモリ上のストアなので、再起動でタスクは消える
    let ctx = Arc::new(AppContext::new());

    let addr = format!("{}:{}", args.bind, args.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(version = env!("CARGO_PKG_VERSION"), "taskdeck starting");
    rest::serve(ctx, listener).await
}
