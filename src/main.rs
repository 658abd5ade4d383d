use std::path::PathBuf;

use eyre::Result;
use log::{debug, info};

mod cli;

use cli::Cli;
use ytsum::{CaptionClient, OllamaClient, Request, Summarizer};

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytsum")
        .join("logs")
}

fn build_after_help() -> String {
    let log_path = log_dir().join("ytsum.log");
    let config_path = ytsum::config::config_path();

    format!(
        "\nRequires a running Ollama server (see OLLAMA_HOST).\n\nConfig: {}\nLogs are written to: {}",
        config_path.display(),
        log_path.display()
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = ytsum::config::Config::load().unwrap_or_default();

    let model = config.model(cli.model.as_deref());
    let env_host = std::env::var("OLLAMA_HOST").ok();
    let host = config.host(cli.host.as_deref(), env_host.as_deref());

    let request = match Request::new(cli.url.trim(), model) {
        Ok(request) => request,
        Err(e) => {
            println!("An error occurred: {e}");
            return Ok(());
        }
    };

    let client = reqwest::Client::new();
    let chat = OllamaClient::new(client.clone(), &host);

    if cli.verbose {
        let config_path = ytsum::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        eprintln!("URL: {}\nModel: {}\nOllama: {}", request.url(), request.model(), chat.host());
    }

    let summarizer = Summarizer::new(request, CaptionClient::new(client), chat);

    if cli.verbose {
        if let Ok(video_id) = summarizer.video_id() {
            eprintln!("Video: {video_id}");
        }
    }

    match summarizer.summarize().await {
        Ok(summary) => {
            debug!("Summary: {} chars", summary.len());
            println!("{summary}");
        }
        Err(e) => {
            println!("{}: {e}", e.stage());
            println!("Failed to generate summary");
        }
    }

    Ok(())
}
