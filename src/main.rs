use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use statewalk::loader::Session;
use statewalk::render::{dot, json, text};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "statewalk")]
#[command(about = "Walk a declarative FSM and show issues grouped by state")]
#[command(long_about = "Statewalk loads YAML files holding `transitions` (from/to records) and/or \
                       `issues` (title/state records), validates the FSM and prints its states in \
                       deterministic depth-first order.")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every workflow state with the issues in it
    Board {
        /// Files to load, in order; later files replace earlier FSMs or issues
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Emit JSON instead of text
        #[arg(long = "json")]
        as_json: bool,
    },
    /// Print the FSM's states, successors and start/end flags
    Fsm {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the FSM as Graphviz DOT source
    Dot {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the workflow as JSON
    Json {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = match cli.command {
        Commands::Board { files, as_json } => {
            let session = load(&files)?;
            let board = session.board()?;
            if as_json {
                json::board(&board)?
            } else {
                text::board(&board)
            }
        }
        Commands::Fsm { files } => text::fsm(load(&files)?.fsm()?)?,
        Commands::Dot { files } => dot::fsm(load(&files)?.fsm()?)?,
        Commands::Json { files } => json::workflow(load(&files)?.fsm()?)?,
    };

    print!("{output}");
    Ok(())
}

fn load(files: &[PathBuf]) -> Result<Session> {
    let mut session = Session::new();
    for file in files {
        session
            .load(file)
            .with_context(|| format!("failed to load {}", file.display()))?;
    }
    Ok(session)
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
