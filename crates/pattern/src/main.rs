//! Pattern recorder CLI
//!
//! Play moves on a terminal board; the resulting move list is the pattern.

use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chess_core::Game;
use chess_pattern::{AssetFeedback, Config, Mode, PatternPolicy, Repl};
use chess_session::{GameSession, SessionHost};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Chess pattern recorder");
    println!();
    println!("Usage:");
    println!("  chess_pattern [--config <file>] [--json]");
    println!();
    println!("Options:");
    println!("  --config, -c <file>  TOML configuration (defaults apply without it)");
    println!("  --json               read JSON events, write JSON projections");
    println!("  --help, -h           show this text");
    println!();
    println!("Logs go to stderr; set RUST_LOG to override the configured filter.");
}

struct Options {
    config: Option<PathBuf>,
    mode: Mode,
}

/// `None` when only help was requested.
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options {
        config: None,
        mode: Mode::Text,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--config needs a file name");
                };
                options.config = Some(PathBuf::from(path));
                i += 1;
            }
            "--json" => options.mode = Mode::Json,
            "--help" | "-h" => return Ok(None),
            other => bail!("unknown argument '{other}'"),
        }
        i += 1;
    }
    Ok(Some(options))
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            print_usage();
            return Err(err);
        }
    };

    let config = match &options.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::default(),
    };
    init_tracing(&config.log.filter);
    info!(config = ?options.config, "starting chess_pattern");

    let session = match &config.start_fen {
        Some(fen) => GameSession::<Game>::with_start_fen(fen.as_str())
            .context("configured start_fen is unusable")?,
        None => GameSession::new(),
    };
    let feedback = AssetFeedback::new(config.cues.clone(), io::stderr());
    let host = SessionHost::new(session, feedback);
    let policy = PatternPolicy::from(&config.pattern);

    let mut repl = Repl::new(host, policy, options.mode);
    repl.run(io::stdin().lock(), io::stdout().lock())
}
