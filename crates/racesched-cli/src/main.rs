mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "racesched",
    version,
    about = "Extract weekly race schedules from season schedule PDFs"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a schedule PDF into series records
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write parsed output to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Export selected series as a pivoted CSV (one column per series)
    Csv {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        select: SelectArgs,

        #[command(flatten)]
        minimize: MinimizeArgs,

        /// Write the CSV to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Print selected series side by side on a weekly calendar
    Calendar {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        select: SelectArgs,

        #[command(flatten)]
        minimize: MinimizeArgs,
    },
    /// Inspect and validate name replacement rules
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Path to a schedule PDF or a JSON file of parsed series
    input_file: PathBuf,

    /// Treat a JSON input as pages of positioned text fragments
    #[arg(long)]
    fragments: bool,

    /// JSON file with parser options
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,
}

#[derive(Args)]
struct SelectArgs {
    /// Exact season name to include (repeatable; default: all series)
    #[arg(short, long = "series", value_name = "NAME")]
    series: Vec<String>,

    /// License level to include: Rookie, D, C, B, A or Unknown (repeatable)
    #[arg(short, long = "license", value_name = "LEVEL")]
    license: Vec<String>,

    /// Case-insensitive substring of the season name
    #[arg(long)]
    search: Option<String>,
}

#[derive(Args)]
struct MinimizeArgs {
    /// Shorten track, layout and car names using replacement rules
    #[arg(short, long)]
    minimize: bool,

    /// Predefined replacement rules (default: "default" when --minimize is given without --rules)
    #[arg(short, long = "preset", value_name = "NAME")]
    preset: Vec<String>,

    /// Custom JSON replacement rule file(s), applied after presets
    #[arg(short, long = "rules", value_name = "FILE")]
    rules: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum RulesAction {
    /// List predefined rule sets
    List,
    /// Print the rules of a predefined rule set
    Show {
        /// Preset name (e.g., "default")
        preset: String,
    },
    /// Validate a custom rule file
    Validate {
        /// Path to JSON rule file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Parse { input, output, out } => commands::parse::run(&input, &output, out),
        Commands::Csv {
            input,
            select,
            minimize,
            out,
        } => commands::csv::run(&input, &select, &minimize, out),
        Commands::Calendar {
            input,
            select,
            minimize,
        } => commands::calendar::run(&input, &select, &minimize),
        Commands::Rules { action } => match action {
            RulesAction::List => commands::rules::list(),
            RulesAction::Show { preset } => commands::rules::show(&preset),
            RulesAction::Validate { file } => commands::rules::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();
}
