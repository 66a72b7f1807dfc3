use std::fs::File;
use std::sync::Arc;

use cinebusca::catalog::OmdbCatalog;
use cinebusca::core::config::{self, CliOverrides};
use cinebusca::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "cinebusca", about = "Search the OMDb movie database from your terminal")]
struct Args {
    /// OMDb API key (overrides OMDB_API_KEY and the config file)
    #[arg(long)]
    api_key: Option<String>,

    /// Initial search query
    #[arg(short, long)]
    query: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to cinebusca.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("cinebusca.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        eprintln!("warning: {e}");
        config::CinebuscaConfig::default()
    });

    let cli = CliOverrides {
        api_key: args.api_key.as_deref(),
        query: args.query.as_deref(),
    };
    let resolved = match config::resolve(&file_config, &cli) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    log::info!(
        "Cinebusca starting up against {} (timeout {:?})",
        resolved.gateway.base_url,
        resolved.gateway.timeout
    );

    let catalog = OmdbCatalog::new(resolved.gateway.clone()).map_err(std::io::Error::other)?;

    tui::run(Arc::new(catalog), resolved.search)
}
