//! CabinetDraft Web Server Binary
//!
//! This binary starts the CabinetDraft web server that exposes the BOM,
//! drawing and rendering generators as a REST API.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3002, rules from ~/.config/CabinetDraft/)
//! cabinetdraft-web
//!
//! # Specify port and rule document
//! cabinetdraft-web --port 8080 --rules ./shop-rules.json
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cabinetdraft::cli::common::open_rule_store;
use cabinetdraft::web;

/// CabinetDraft Web Server - REST API for BOM and drawing generation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3002")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Rule document path.
    /// Falls back to `$CABINETDRAFT_CONFIG_DIR/rules.json`, then to the
    /// platform-specific config directory:
    /// - Linux: ~/.config/CabinetDraft/rules.json
    /// - macOS: ~/Library/Application Support/CabinetDraft/rules.json
    /// - Windows: %APPDATA%\CabinetDraft\rules.json
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = open_rule_store(args.rules.as_deref())?;

    // Warm the cache so a broken document is reported at startup
    let rules = store.load();
    info!(
        "Loaded rules: sheet {}x{} mm, door gap {} mm",
        rules.sheet_size.width, rules.sheet_size.height, rules.construction.door_gap
    );

    // Build socket address
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    // Start the server
    web::run_server(store, addr).await
}
