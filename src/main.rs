use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;

use linequill::config::Config;
use linequill::input::InputHandler;
use linequill::session::edit_interactive;

/// Text used when nothing else seeds the line.
const DEFAULT_SEED: &str = "Hello, world!";

/// LineQuill - edit a single line of text with vim-style keys
#[derive(Parser)]
#[command(name = "linequill")]
#[command(version)]
#[command(about = "Edit a single line of text with vim-style keys", long_about = None)]
struct Cli {
    /// Initial text (omit to read the first line of stdin if piped)
    text: Option<String>,

    /// Maximum line length
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Marker shown under the line in Insert mode
    #[arg(long)]
    marker: Option<String>,

    /// Config file to use instead of ~/.config/linequill/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write diagnostics to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Set up a panic hook that leaves the terminal readable before the panic is reported.
///
/// The raw-mode guard restores the terminal while unwinding, but the message
/// is printed before that, so start it on a fresh line.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = write!(io::stderr(), "\r\n");
        let _ = io::stderr().flush();
        tracing::error!(%panic_info, "panic");

        default_panic(panic_info);
    }));
}

/// Installs a file-backed tracing subscriber.
///
/// Logging never goes to the terminal: it would interleave with the editor's
/// own drawing.
fn setup_logging(path: &Path, level: &str) -> Result<WorkerGuard> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = tracing_subscriber::EnvFilter::try_new(level)
        .with_context(|| format!("Invalid log level '{}'", level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install logger: {}", err))?;

    Ok(guard)
}

/// Picks the initial line and the matching key source.
///
/// When stdin is piped its first line becomes the seed, and keys are read from
/// /dev/tty instead.
fn resolve_seed(text: Option<String>) -> Result<(String, InputHandler)> {
    if let Some(text) = text {
        return Ok((text, InputHandler::new()));
    }

    if io::stdin().is_terminal() {
        return Ok((DEFAULT_SEED.to_string(), InputHandler::new()));
    }

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read initial text from stdin")?;
    let line = line.trim_end_matches(['\n', '\r']).to_string();
    let input = InputHandler::new_with_tty()
        .context("Failed to open /dev/tty for keyboard input when stdin was piped")?;
    Ok((line, input))
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    // CLI flags override config values
    if let Some(capacity) = cli.capacity {
        config.capacity = capacity;
    }
    if let Some(marker) = cli.marker {
        config.insert_marker = marker;
    }
    if let Some(log_file) = cli.log_file {
        config.log_file = Some(log_file);
    }

    let _log_guard = match &config.log_file {
        Some(path) => Some(setup_logging(path, &config.log_level)?),
        None => None,
    };

    // Read the seed BEFORE terminal setup (stdin might hold it)
    let (seed, input) = resolve_seed(cli.text)?;

    let line = edit_interactive(&seed, &config, input).context("Editing failed")?;

    println!("{}", line);
    Ok(())
}
