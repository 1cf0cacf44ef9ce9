use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nashikweb_brochure::Format;

/// nashikweb - Nashik Website Development marketing site
#[derive(Parser)]
#[command(name = "nashikweb")]
#[command(about = "Marketing website, contact inbox and brochure generator", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Create the SQLite database and inquiry schema
    Migrate,
    /// List stored contact inquiries
    Inquiries {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Write the service brochure to a file
    Brochure {
        #[arg(long)]
        out: PathBuf,

        /// pdf or html
        #[arg(long, default_value = "pdf")]
        format: Format,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = nashikweb::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    nashikweb::observability::init_observability(
        "nashikweb",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Serve { host, port } => nashikweb::cli::server::serve(config, host, port).await,
        Commands::Migrate => nashikweb::cli::migrate::migrate(config).await,
        Commands::Inquiries { limit } => nashikweb::cli::inquiries::list(config, limit).await,
        Commands::Brochure { out, format } => nashikweb::cli::brochure::write(out, format),
    }
}
