//! Command-line front end
//!
//! Exercises the core against file snapshots: extract a selection the way a
//! modal editor would, manage the memory notes file, or print the config
//! schema. System directories are resolved here and only here; library code
//! receives explicit paths.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use tandem::commands::{dispatch, Command, Outcome};
use tandem::{Config, MemoryStore, Position, RawSelection, SnapshotHost, Spinner, UnicodeMetrics};

#[derive(Parser)]
#[command(name = "tandem", version, about = "Assistant core: selection extraction and memory notes")]
struct Cli {
    /// Configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Extract a selection from a file the way a modal editor would
    Extract {
        /// File to read the buffer snapshot from
        #[arg(long)]
        file: PathBuf,

        /// Start position, 1-indexed LINE:COL (byte column)
        #[arg(long)]
        start: String,

        /// End position, 1-indexed LINE:COL (byte column)
        #[arg(long)]
        end: String,

        /// Selection mode tag: v/char, V/line, block
        #[arg(long, default_value = "v")]
        mode: String,
    },

    /// Manage the persistent memory notes file
    Memory {
        #[command(subcommand)]
        action: MemoryAction,
    },

    /// Print the configuration JSON schema
    Schema,
}

#[derive(Subcommand)]
enum MemoryAction {
    /// Append a note
    Add { text: String },
    /// Print the current notes
    Show,
}

/// Parse an editor-style 1-indexed `LINE:COL` into a 0-indexed position
fn parse_position(s: &str) -> Result<Position> {
    let (line, col) = s
        .split_once(':')
        .with_context(|| format!("expected LINE:COL, got {:?}", s))?;
    let line: usize = line
        .trim()
        .parse()
        .with_context(|| format!("invalid line number in {:?}", s))?;
    let col: usize = col
        .trim()
        .parse()
        .with_context(|| format!("invalid column number in {:?}", s))?;
    if line == 0 || col == 0 {
        bail!("positions are 1-indexed: {:?}", s);
    }
    Ok(Position::new(line - 1, col - 1))
}

/// Default memory notes location: project-local when the working directory
/// looks like a project, otherwise the user data directory.
fn default_memory_path() -> PathBuf {
    let local = PathBuf::from(".tandem").join("memory.md");
    if PathBuf::from(".git").exists() || PathBuf::from(".tandem").exists() {
        return local;
    }
    match dirs::data_dir() {
        Some(data) => data.join("tandem").join("memory.md"),
        None => local,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };

    let memory = MemoryStore::from_config(&config, default_memory_path());
    let mut spinner = Spinner::from_config(&config);
    let metrics = UnicodeMetrics;

    match cli.command {
        CliCommand::Extract {
            file,
            start,
            end,
            mode,
        } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let lines: Vec<String> = text.lines().map(str::to_string).collect();
            let start = parse_position(&start)?;
            let end = parse_position(&end)?;
            let host = SnapshotHost::new(lines).with_selection(RawSelection {
                start: (start.line, start.col),
                end: (end.line, end.col),
                mode,
            });
            match dispatch(
                Command::CaptureSelection,
                &host,
                &memory,
                &mut spinner,
                &metrics,
            )? {
                Outcome::Text(selected) => println!("{}", selected),
                Outcome::Ack => {}
            }
        }

        CliCommand::Memory { action } => match action {
            MemoryAction::Add { text } => {
                dispatch(
                    Command::MemoryAppend { text },
                    &SnapshotHost::default(),
                    &memory,
                    &mut spinner,
                    &metrics,
                )?;
                eprintln!("Noted in {}", memory.path().display());
            }
            MemoryAction::Show => {
                match dispatch(
                    Command::MemoryShow,
                    &SnapshotHost::default(),
                    &memory,
                    &mut spinner,
                    &metrics,
                )? {
                    Outcome::Text(contents) => print!("{}", contents),
                    Outcome::Ack => {}
                }
            }
        },

        CliCommand::Schema => {
            let schema = schemars::schema_for!(Config);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}
