//! TravelMate - conversational travel itinerary planner
//!
//! CLI entry point for the chat API server and the one-shot planner.

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::{debug, info};

use travelmate::api;
use travelmate::backend::LocalBackend;
use travelmate::cli::{Cli, Command, OutputFormat};
use travelmate::config::Config;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Determine log level with priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level).map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{other}', defaulting to INFO");
            tracing::Level::INFO
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging with priority: CLI > config > INFO default
    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            api::serve(&config).await
        }
        Command::Plan { message, format } => cmd_plan(&message, format),
    }
}

/// Run the deterministic pipeline once and print the reply
fn cmd_plan(message: &str, format: OutputFormat) -> Result<()> {
    let response = LocalBackend::respond(message);

    match format {
        OutputFormat::Text => {
            println!("{}", response.chat_response);
            if let Some(itinerary) = &response.itinerary_data {
                println!();
                println!(
                    "{} {} ({})",
                    "Itinerary:".bold(),
                    itinerary.trip_name.bright_blue(),
                    itinerary.display_dates()
                );
                for day in &itinerary.days {
                    println!("  {} {}", format!("Day {}:", day.day_number).green(), day.title);
                    for event in &day.events {
                        println!("    {} {}", event.time().dimmed(), event.title());
                    }
                }
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&response).context("Failed to serialize response")?;
            println!("{json}");
        }
    }

    Ok(())
}
