mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "meldex",
    version,
    about = "MEL reference index and daily maintenance report extractor"
)]
struct Cli {
    /// JSON extraction config (defaults apply to anything not set)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the MEL reference index (refs + CAT summary) from a MEL PDF
    Index {
        /// Path to the MEL PDF
        input_file: PathBuf,

        /// Output JSON path
        #[arg(default_value = "data/mel_pdf_index.json")]
        output_file: PathBuf,

        /// Segment the document by page (default) or by line
        #[arg(short, long, value_parser = ["page", "line"])]
        granularity: Option<String>,

        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Parse the open MEL/CDL items table of a daily maintenance report PDF
    Daily {
        /// Path to the daily report PDF
        input_file: PathBuf,

        /// Output JSON path
        #[arg(default_value = "data/daily_report.json")]
        output_file: PathBuf,

        /// Also print the parsed rows as a table
        #[arg(long)]
        show: bool,
    },
    /// Look up a reference code (or, in a daily report, a tail) in an artifact
    Lookup {
        /// Reference index or daily report JSON
        artifact: PathBuf,

        /// Reference code such as 27-31-06A, or a tail such as HA-LYG
        query: String,
    },
    /// Check that an artifact was built from the given PDF
    Verify {
        /// Reference index or daily report JSON
        artifact: PathBuf,

        /// Source PDF to compare against
        input_file: PathBuf,
    },
    /// Inspect and validate extraction configs
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the default config as JSON
    Show,
    /// Validate a config file
    Validate {
        /// Path to JSON config file
        file: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = commands::load_config(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            Commands::Index {
                input_file,
                output_file,
                granularity,
                pretty,
            } => commands::index::run(
                input_file,
                output_file,
                granularity.as_deref(),
                pretty,
                &config,
            ),
            Commands::Daily {
                input_file,
                output_file,
                show,
            } => commands::daily::run(input_file, output_file, show, &config),
            Commands::Lookup { artifact, query } => commands::lookup::run(&artifact, &query),
            Commands::Verify {
                artifact,
                input_file,
            } => commands::verify::run(&artifact, &input_file),
            Commands::Config { action } => match action {
                ConfigAction::Show => commands::config::show(&config),
                ConfigAction::Validate { file } => commands::config::validate(&file),
            },
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
