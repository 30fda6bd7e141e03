//! CLI frontend for downtime activities.

mod commands;
mod store;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use dt_core::{FieldEdit, OutcomeEdit};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "downtime",
    about = "Downtime activities: roll for outcomes between adventures",
    version,
    propagate_version = true
)]
struct Cli {
    /// JSON file of message overrides (e.g. a translation)
    #[arg(long, global = true)]
    lang: Option<PathBuf>,

    /// Name shown as the speaker of chat messages
    #[arg(long, global = true)]
    speaker: Option<String>,

    /// Don't post roll results to chat; print a plain summary instead
    #[arg(long, global = true)]
    no_chat: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new activity file with the default outcome ranges
    New {
        /// Activity file to create
        file: PathBuf,

        /// Activity name
        #[arg(short, long)]
        name: String,

        /// Roll expression (default: 1d20)
        #[arg(short, long)]
        roll: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show an activity and its outcome table
    Show {
        /// Activity file
        file: PathBuf,
    },

    /// List all activities in a directory
    List {
        /// Directory containing activity files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Roll the activity and record the outcome
    Roll {
        /// Activity file
        file: PathBuf,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Use this result instead of rolling (physical dice)
        #[arg(long, allow_negative_numbers = true, conflicts_with = "seed")]
        result: Option<i64>,
    },

    /// Mark the activity complete
    Complete {
        /// Activity file
        file: PathBuf,
    },

    /// Append a 1-20 outcome range with empty text
    AddOutcome {
        /// Activity file
        file: PathBuf,
    },

    /// Remove the outcome range at an index
    RemoveOutcome {
        /// Activity file
        file: PathBuf,

        /// Index as shown by `show`
        index: usize,
    },

    /// Edit the outcome range at an index
    SetOutcome {
        /// Activity file
        file: PathBuf,

        /// Index as shown by `show`
        index: usize,

        /// Lowest roll (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,

        /// Highest roll (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,

        /// Outcome text
        #[arg(long)]
        text: Option<String>,
    },

    /// Edit the activity's fields
    Edit {
        /// Activity file
        file: PathBuf,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New duration
        #[arg(long)]
        duration: Option<String>,

        /// New cost
        #[arg(long)]
        cost: Option<String>,

        /// New roll expression
        #[arg(long)]
        roll: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "dt_core=debug,downtime=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let ctx = commands::Context::load(cli.lang.as_deref(), cli.speaker, !cli.no_chat)?;

    match cli.command {
        Commands::New {
            file,
            name,
            roll,
            force,
        } => commands::new::run(&file, &name, roll.as_deref(), force),
        Commands::Show { file } => commands::show::run(&file),
        Commands::List { dir } => commands::list::run(&dir),
        Commands::Roll { file, seed, result } => commands::roll::run(&ctx, &file, seed, result),
        Commands::Complete { file } => commands::complete::run(&ctx, &file),
        Commands::AddOutcome { file } => commands::outcome::add(&ctx, &file),
        Commands::RemoveOutcome { file, index } => commands::outcome::remove(&ctx, &file, index),
        Commands::SetOutcome {
            file,
            index,
            min,
            max,
            text,
        } => {
            let edit = OutcomeEdit {
                min_roll: min,
                max_roll: max,
                description: text,
            };
            commands::outcome::set(&ctx, &file, index, edit)
        }
        Commands::Edit {
            file,
            name,
            description,
            duration,
            cost,
            roll,
        } => {
            let edit = FieldEdit {
                name,
                description,
                duration,
                cost,
                roll_expression: roll,
            };
            commands::edit::run(&ctx, &file, edit)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
