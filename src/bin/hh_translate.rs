use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use hh_translate::capture::{
    poll_live, scrape_history, CaptureError, LogView, RawHandBlock, ReplayLog,
};
use hh_translate::config::{ConfigError, JsonConfig, SessionConfig};
use hh_translate::export::{write_session, ExportError};
use hh_translate::store::{HandAccumulator, StoreError};
use hh_translate::translate::HandTranslator;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "hh_translate",
    about = "Convert recorded game logs into PokerStars style hand histories",
    long_about = "Replays a recorded game log through the hand translator and writes\n\
                  every finished hero hand, once each, ordered by hand number."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk a recorded log from newest to oldest hand, like paging back
    /// through the site's history.
    History {
        /// Recorded log: hands separated by blank lines, or JSON lines
        dump: PathBuf,

        /// Read the dump as one JSON hand per line
        #[arg(long)]
        jsonl: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Re-read a log file that something else keeps appending to and
    /// capture its newest hand on every tick.
    Watch {
        /// Log file, hands separated by blank lines
        file: PathBuf,

        /// Number of observations to make
        #[arg(short = 'n', long, default_value_t = 30)]
        ticks: usize,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Hero name for the `Dealt to` line, overrides the config
    #[arg(long)]
    hero: Option<String>,

    /// Session config, a JSON file path or inline JSON
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Directory for the session file
    #[arg(short = 'o', long = "out", default_value = ".")]
    out_dir: PathBuf,

    /// Print the session instead of writing a file
    #[arg(long)]
    stdout: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OutputArgs {
    fn session_config(&self) -> Result<SessionConfig, CliError> {
        let mut config = match &self.config {
            Some(input) => SessionConfig::from_str_or_file(input)?,
            None => SessionConfig::default(),
        };
        if let Some(hero) = &self.hero {
            config.translator.hero_name = hero.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// A file on disk standing in for the live log view.
struct TailView {
    path: PathBuf,
}

impl LogView for TailView {
    fn snapshot(&mut self) -> Option<RawHandBlock> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => ReplayLog::parse_text_dump(&text).snapshot(),
            Err(err) => {
                warn!(path = ?self.path, %err, "Log file not readable");
                None
            }
        }
    }
}

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn finish(store: &HandAccumulator, output: &OutputArgs) -> Result<(), CliError> {
    if output.stdout {
        match store.export_all() {
            Ok(text) => print!("{text}"),
            Err(StoreError::EmptyStore) => eprintln!("No hands captured yet!"),
        }
        return Ok(());
    }

    match write_session(store, &output.out_dir, Utc::now()) {
        Ok(path) => {
            println!("Wrote {} hands to {}", store.len(), path.display());
            Ok(())
        }
        Err(ExportError::Store(StoreError::EmptyStore)) => {
            eprintln!("No hands captured yet!");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut store = HandAccumulator::new();

    match cli.command {
        Command::History {
            dump,
            jsonl,
            output,
        } => {
            let config = output.session_config()?;
            let translator = HandTranslator::new(config.translator);
            let text = read(&dump)?;
            let mut log = if jsonl {
                ReplayLog::parse_jsonl(&text)?
            } else {
                ReplayLog::parse_text_dump(&text)
            };
            if log.is_empty() {
                eprintln!("No hands found in {}", dump.display());
                return Ok(());
            }
            let report = scrape_history(&mut log, &translator, &mut store, &config.capture)?;
            info!(?report, "Replayed history");
            finish(&store, &output)
        }
        Command::Watch {
            file,
            ticks,
            output,
        } => {
            let config = output.session_config()?;
            let translator = HandTranslator::new(config.translator);
            let mut view = TailView { path: file };
            let report = poll_live(&mut view, &translator, &mut store, &config.capture, ticks);
            info!(?report, "Finished watching");
            finish(&store, &output)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
