//! sortquiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod moves;

#[derive(Parser)]
#[command(name = "sortquiz", version, about = "Drag-and-drop sorting quiz toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a quiz to a self-contained playable HTML page
    Render {
        /// Path to a .toml quiz file
        #[arg(long)]
        quiz: PathBuf,

        /// Output directory (overrides config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Apply a scripted move sequence to a quiz and score it
    Play {
        /// Path to a .toml quiz file
        #[arg(long)]
        quiz: PathBuf,

        /// Path to a .toml move script
        #[arg(long)]
        moves: PathBuf,

        /// Output directory (overrides config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Save a timestamped score report JSON
        #[arg(long)]
        report: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate quiz TOML files
    Validate {
        /// Path to a quiz file or directory
        #[arg(long)]
        quiz: PathBuf,
    },

    /// Create starter config and example quiz
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sortquiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            quiz,
            output,
            config,
        } => commands::render::execute(quiz, output, config),
        Commands::Play {
            quiz,
            moves,
            output,
            report,
            config,
        } => commands::play::execute(quiz, moves, output, report, config),
        Commands::Validate { quiz } => commands::validate::execute(quiz),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
