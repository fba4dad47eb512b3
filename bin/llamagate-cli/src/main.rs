//! llamagate – command-line interface for a local LLM server.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use llamagate_client::Config;

mod commands;
mod output;
mod shell;

/// Command-line interface for a local LLM server.
#[derive(Parser, Debug)]
#[command(name = "llamagate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available models
    Models {
        /// Server base address (default: resolved configuration)
        #[arg(long)]
        host: Option<String>,
    },

    /// Generate text from a prompt
    Generate {
        /// Prompt text to generate from
        prompt: String,
        /// Model to use
        #[arg(long)]
        model: Option<String>,
        /// Sampling temperature (0-1)
        #[arg(long, value_parser = parse_temperature)]
        temperature: Option<f32>,
        /// Maximum tokens to generate
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_tokens: Option<u32>,
        /// Server base address
        #[arg(long)]
        host: Option<String>,
    },

    /// Chat with the model (single message)
    Chat {
        /// Message to send
        message: String,
        /// Model to use
        #[arg(long)]
        model: Option<String>,
        /// Sampling temperature (0-1)
        #[arg(long, value_parser = parse_temperature)]
        temperature: Option<f32>,
        /// Maximum tokens to generate
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_tokens: Option<u32>,
        /// Server base address
        #[arg(long)]
        host: Option<String>,
    },

    /// Check if the server is running
    Health {
        /// Server base address
        #[arg(long)]
        host: Option<String>,
    },

    /// Start the interactive shell
    Shell {
        /// Server base address
        #[arg(long)]
        host: Option<String>,
        /// Model to start the session with
        #[arg(long)]
        model: Option<String>,
    },
}

fn parse_temperature(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(String::from("temperature must be between 0 and 1"))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let config = Config::load();

    let outcome = match cli.command {
        Commands::Models { host } => {
            commands::connect(host.as_deref().unwrap_or(&config.ollama_host))
                .and_then(|client| commands::models::run(&client))
        }

        Commands::Generate {
            prompt,
            model,
            temperature,
            max_tokens,
            host,
        } => commands::connect(host.as_deref().unwrap_or(&config.ollama_host)).and_then(|client| {
            commands::generate::run(
                &client,
                &prompt,
                model.as_deref().unwrap_or(&config.default_model),
                temperature.unwrap_or(config.temperature),
                max_tokens.unwrap_or(config.max_tokens),
            )
        }),

        Commands::Chat {
            message,
            model,
            temperature,
            max_tokens,
            host,
        } => commands::connect(host.as_deref().unwrap_or(&config.ollama_host)).and_then(|client| {
            commands::chat::run(
                &client,
                &message,
                model.as_deref().unwrap_or(&config.default_model),
                temperature.unwrap_or(config.temperature),
                max_tokens.unwrap_or(config.max_tokens),
            )
        }),

        Commands::Health { host } => {
            commands::health::run(host.as_deref().unwrap_or(&config.ollama_host))
        }

        Commands::Shell { host, model } => shell::Shell::new(
            host.as_deref().unwrap_or(&config.ollama_host),
            model.unwrap_or_else(|| config.default_model.clone()),
            &config,
        )
        .run(),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
