mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ruleval_core::Strategy;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ruleval")]
#[command(version, about = "Rule-based record validation CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a data document against a rule document
    Validate {
        /// Path to the rule document (YAML, TOML or JSON)
        rules: String,

        /// Path to the data document (JSON, YAML or TOML object)
        data: String,

        /// Strategy: run_all_validations, stop_at_first_invalid_validation,
        /// stop_at_first_invalid_property (overrides the rule document)
        #[arg(short, long)]
        strategy: Option<Strategy>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check a rule document without validating data
    Check {
        /// Path to the rule document (YAML, TOML or JSON)
        rules: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List the available validation identifiers
    List {
        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            rules,
            data,
            strategy,
            format,
        } => commands::validate::execute(&rules, &data, strategy, &format),

        Commands::Check { rules, format } => commands::check::execute(&rules, &format),

        Commands::List { format } => commands::list::execute(&format),
    }
}
