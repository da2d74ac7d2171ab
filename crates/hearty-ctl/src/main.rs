use anyhow::Result;
use clap::{Parser, Subcommand};
use hearty_common::AppConfig;
use std::path::{Path, PathBuf};

mod commands;

#[derive(Parser)]
#[command(name = "hearty-ctl")]
#[command(about = "Hearty health dashboard and AI report tool", long_about = None)]
struct Cli {
    #[arg(long, global = true, help = "Configuration file (defaults to the user config dir)")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the dashboard and print its metric cards
    Snapshot,

    /// Generate an AI health report for the current snapshot
    Report {
        #[arg(long, help = "Call the configured provider instead of returning the mock report")]
        live: bool,
        #[arg(short, long, help = "Provider name (openAI, grok, qwen, doubao, gemini)")]
        provider: Option<String>,
        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },

    /// List report providers
    Providers,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            let mut config = AppConfig::load_from_path(path)?;
            config.apply_overrides(|key| std::env::var(key).ok())?;
            Ok(config)
        }
        None => AppConfig::load(),
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { action: ConfigAction::Init { force } } = cli.command {
        let path = cli.config.unwrap_or_else(AppConfig::default_config_path);
        return commands::config::init(&path, force);
    }

    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.general.log_level);
    config.validate()?;

    match cli.command {
        Commands::Snapshot => commands::snapshot::show(config).await?,
        Commands::Report { live, provider, json } => {
            commands::report::generate(config, live, provider, json).await?
        }
        Commands::Providers => commands::providers::list(&config)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config)?,
            ConfigAction::Init { .. } => {}
        },
    }

    Ok(())
}
