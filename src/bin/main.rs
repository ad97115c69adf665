//! sqlstim CLI - Generate paired CTE / pipe-syntax SQL stimuli
//!
//! Usage:
//!   sqlstim generate --config <file.toml> [--seed <n>] [--output <file>] [--format <format>]
//!   sqlstim shapes --config <file.toml>
//!
//! Examples:
//!   sqlstim generate --config run.toml --output stimuli.json
//!   sqlstim generate --config run.toml --seed 42 --format summary
//!   sqlstim shapes --config run.toml

use clap::{Parser, Subcommand, ValueEnum};
use sqlstim::batch::run_batch;
use sqlstim::config::Settings;
use sqlstim::partition::Partitioner;
use sqlstim::shape::valid_triplet_sequences;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sqlstim")]
#[command(about = "sqlstim - A seed-driven generator of paired CTE / pipe-syntax SQL stimuli")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a batch and emit the accepted rows
    Generate {
        /// Path to the TOML configuration
        #[arg(short, long)]
        config: PathBuf,

        /// Override the configured RNG seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write rows to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// List the realizable shape sequences for a configuration
    Shapes {
        /// Path to the TOML configuration
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// JSON array of result rows
    Json,
    /// Per-combination counts only
    Summary,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            seed,
            output,
            format,
        } => cmd_generate(config, seed, output, format),
        Commands::Shapes { config } => cmd_shapes(config),
    }
}

fn cmd_generate(
    config: PathBuf,
    seed: Option<u64>,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> ExitCode {
    let mut settings = match Settings::load(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading config '{}': {}", config.display(), e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(seed) = seed {
        settings.seed = Some(seed);
    }

    let outcome = match run_batch(&settings) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Generation error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for report in outcome.shortfalls() {
        eprintln!(
            "Warning: {:?} diff {} produced {}/{} rows after {} tries",
            report.error_kind, report.diff_target, report.produced, report.requested, report.tries
        );
    }

    match format {
        OutputFormat::Json => {
            let json = match serde_json::to_string_pretty(&outcome.rows) {
                Ok(j) => j,
                Err(e) => {
                    eprintln!("Serialization error: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            match output {
                Some(path) => {
                    if let Err(e) = fs::write(&path, json) {
                        eprintln!("Error writing '{}': {}", path.display(), e);
                        return ExitCode::FAILURE;
                    }
                    println!("Wrote {} rows to {}", outcome.rows.len(), path.display());
                }
                None => println!("{}", json),
            }
        }
        OutputFormat::Summary => {
            println!("Rows: {}", outcome.rows.len());
            for report in &outcome.reports {
                println!(
                    "  {:?} diff {}: {}/{} ({} tries)",
                    report.error_kind,
                    report.diff_target,
                    report.produced,
                    report.requested,
                    report.tries
                );
            }
        }
    }

    ExitCode::SUCCESS
}

fn cmd_shapes(config: PathBuf) -> ExitCode {
    let settings = match Settings::load(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading config '{}': {}", config.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut partitioner = Partitioner::new();
    let sequences = valid_triplet_sequences(
        &mut partitioner,
        settings.levels,
        settings.total_cost,
        settings.base_columns,
        &settings.generator,
    );

    println!(
        "{} shape sequence(s) for cost {} over {} level(s):",
        sequences.len(),
        settings.total_cost,
        settings.levels
    );
    for sequence in &sequences {
        let parts: Vec<String> = sequence
            .iter()
            .map(|t| format!("({},{},{})", t.attributes, t.aggregates, t.group_by))
            .collect();
        println!("  {}", parts.join(" -> "));
    }

    ExitCode::SUCCESS
}
