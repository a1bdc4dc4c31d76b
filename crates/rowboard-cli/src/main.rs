//! CLI entry point for the rowboard table viewer.
//!
//! This binary loads a table document from a JSON file and either renders
//! it as an interactive terminal table or performs the supplemental-content
//! fetches once and prints the results.
//!
//! # Usage
//!
//! ```bash
//! rowboard [OPTIONS] <COMMAND>
//!
//! # Interactive table view
//! rowboard view items.json --base-url https://api.example.com
//!
//! # One-shot fetch, printed per row
//! rowboard fetch items.json --base-url https://api.example.com
//!
//! # One-shot fetch as JSON
//! rowboard fetch items.json --json
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use rowboard_core::{ColorScheme, Config, TableDoc};
use rowboard_fetch::ExtraFetcher;
use rustc_hash::FxHashMap;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Terminal viewer for row tables with per-row supplemental content.
///
/// Loads a JSON document describing a titled list of rows, shows one table
/// row per item, and fetches optional supplemental content for each row
/// from its `href`.
#[derive(Parser)]
#[command(name = "rowboard", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Base URL that relative row hrefs are resolved against.
    #[arg(short, long, global = true, env = "ROWBOARD_BASE_URL")]
    base_url: Option<String>,

    /// Maximum number of fetches in flight at once.
    #[arg(long, global = true)]
    concurrency: Option<usize>,

    /// Color scheme for the interactive view.
    #[arg(long, global = true, value_enum, default_value_t = SchemeArg::Auto)]
    color_scheme: SchemeArg,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show the table in an interactive terminal view.
    View {
        /// Path to the table document (JSON).
        file: Utf8PathBuf,
    },

    /// Fetch supplemental content once and print the results.
    Fetch {
        /// Path to the table document (JSON).
        file: Utf8PathBuf,

        /// Print results as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
}

/// Color scheme argument.
#[derive(Clone, Copy, ValueEnum)]
enum SchemeArg {
    /// Follow the terminal's preference.
    Auto,
    /// Light text on dark background.
    Dark,
    /// Dark text on light background.
    Light,
}

impl From<SchemeArg> for ColorScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Auto => Self::Auto,
            SchemeArg::Dark => Self::Dark,
            SchemeArg::Light => Self::Light,
        }
    }
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
/// Noisy crates like `hyper` and `mio` are filtered to `warn` level.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("{level},hyper=warn,mio=warn,reqwest=warn"))
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_ansi(use_ansi))
        .with(filter)
        .init();
}

/// Builds a [`Config`] from CLI arguments.
fn build_config(cli: &Cli) -> Config {
    let mut config = Config::default();
    config.fetch.base_url.clone_from(&cli.base_url);
    if let Some(concurrency) = cli.concurrency {
        config.fetch.concurrency = concurrency.max(1);
    }
    config.tui.color_scheme = cli.color_scheme.into();
    config
}

/// Loads the table document from a file.
///
/// # Errors
///
/// Returns an error if the file is missing or not valid JSON.
fn load_doc(file: &Utf8PathBuf) -> color_eyre::Result<TableDoc> {
    TableDoc::load(file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load {}: {}", file, e))
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Runs the interactive terminal view.
///
/// # Errors
///
/// Returns an error if the TUI fails to start.
async fn run_view(config: Config, file: &Utf8PathBuf) -> color_eyre::Result<()> {
    let doc = load_doc(file)?;
    info!(file = %file, rows = doc.len(), "Starting interactive view");

    // Handle SIGTERM for graceful shutdown on Unix
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::select! {
            result = rowboard_tui::run(config, doc) => {
                result.map_err(|e| color_eyre::eyre::eyre!("TUI error: {}", e))?;
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down");
            }
        }
    }

    #[cfg(not(unix))]
    {
        rowboard_tui::run(config, doc)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("TUI error: {}", e))?;
    }

    Ok(())
}

/// Fetches supplemental content for every row once and prints the results.
///
/// Rows whose fetch fails or returns no content are printed without
/// supplemental content; failures are not errors.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded, the base URL is
/// invalid, or writing the output fails.
async fn run_fetch(config: Config, file: &Utf8PathBuf, json: bool) -> color_eyre::Result<()> {
    let doc = load_doc(file)?;
    info!(file = %file, rows = doc.len(), "Fetching supplemental content");

    let extras = collect_extras(&config, &doc).await?;

    if json {
        print_json_results(&doc, &extras)?;
    } else {
        print_text_results(&doc, &extras)?;
    }

    Ok(())
}

/// Runs all fetches to completion and collects the content by row index.
async fn collect_extras(
    config: &Config,
    doc: &TableDoc,
) -> color_eyre::Result<FxHashMap<usize, String>> {
    let mut extras = FxHashMap::default();
    if doc.is_empty() {
        return Ok(extras);
    }

    let mut fetcher = ExtraFetcher::spawn(&config.fetch, &doc.items)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to start fetcher: {}", e))?;

    while let Some(outcome) = fetcher.recv().await {
        if let Some(extra) = outcome.extra {
            extras.insert(outcome.index, extra);
        }
    }

    Ok(extras)
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Prints fetch results as plain text, one row per line, in row order.
fn print_text_results(
    doc: &TableDoc,
    extras: &FxHashMap<usize, String>,
) -> color_eyre::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "{}", doc.title)?;
    for (index, item) in doc.items.iter().enumerate() {
        let content = item.content.plain_text();
        match extras.get(&index) {
            Some(extra) => writeln!(handle, "  [{index}] {content} | {extra}")?,
            None => writeln!(handle, "  [{index}] {content}")?,
        }
    }

    Ok(())
}

/// Prints fetch results as a JSON document, in row order.
fn print_json_results(
    doc: &TableDoc,
    extras: &FxHashMap<usize, String>,
) -> color_eyre::Result<()> {
    #[derive(serde::Serialize)]
    struct RowResult<'a> {
        index: usize,
        content: String,
        href: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        extra_content: Option<&'a str>,
    }

    #[derive(serde::Serialize)]
    struct Report<'a> {
        title: &'a str,
        rows: Vec<RowResult<'a>>,
    }

    let rows = doc
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| RowResult {
            index,
            content: item.content.plain_text(),
            href: &item.href,
            extra_content: extras.get(&index).map(String::as_str),
        })
        .collect();

    let report = Report {
        title: &doc.title,
        rows,
    };

    let content = serde_json::to_string_pretty(&report)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to serialize JSON: {}", e))?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{content}")?;

    Ok(())
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    // Install color-eyre first, before any potential panics
    color_eyre::install()?;

    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.no_color);

    let config = build_config(&cli);

    match &cli.command {
        Commands::View { file } => run_view(config, file).await,
        Commands::Fetch { file, json } => run_fetch(config, file, *json).await,
    }
}
