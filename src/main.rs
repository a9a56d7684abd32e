//! AIText Processor - GUI Application
//!
//! Run with: cargo run -- --verbose

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use aitext::config::{self, Config};
use aitext::gui::AiTextApp;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ollama server URL
    #[arg(long)]
    ollama_url: Option<String>,

    /// Ollama model name
    #[arg(short, long)]
    model: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (mut config, config_file) = match args.config {
        Some(path) => (Config::load_from(&path)?, path),
        None => (Config::load()?, config::config_path()),
    };
    if let Some(url) = args.ollama_url {
        config.ollama_url = url;
    }
    if let Some(model) = args.model {
        config.ollama_model = model;
    }
    config.validate()?;

    // Setup logging
    let default_level = if args.verbose {
        "debug".to_string()
    } else {
        config.log_level.to_lowercase()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("✨ AIText v{} starting...", env!("CARGO_PKG_VERSION"));
    info!("   Config: {}", config_file.display());

    iced::application("AIText Processor", AiTextApp::update, AiTextApp::view)
        .theme(AiTextApp::theme)
        .subscription(AiTextApp::subscription)
        .run_with(move || AiTextApp::new(config))?;

    Ok(())
}
