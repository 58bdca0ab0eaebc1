//! banter entry point.

use std::{fs::File, path::PathBuf, sync::Mutex};

use banter_tui::runtime::Runtime;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// banter terminal client
#[derive(Parser, Debug)]
#[command(name = "banter")]
#[command(about = "Terminal client for the banter chat service")]
#[command(version)]
struct Args {
    /// Base URL of the chat service's HTTP API
    #[arg(long, env = "BANTER_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    /// Base URL of the chat service's websocket endpoint
    #[arg(long, env = "BANTER_WS_URL", default_value = "ws://localhost:8080")]
    ws_url: String,

    /// Append logs to this file (stderr is unusable while the UI runs)
    #[arg(long, env = "BANTER_LOG")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::options().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let runtime = Runtime::new(&args.api_url, args.ws_url)?;
    Ok(runtime.run().await?)
}
