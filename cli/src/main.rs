use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pattern_route_core::{canonicalize_value_with, CanonicalizeOptions, KeyOrder};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "pattern-route")]
#[command(about = "Canonicalize message patterns into deterministic dispatch routes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Canonicalize a JSON pattern into its route
    Canonicalize {
        /// Input JSON pattern file (reads stdin if omitted or `-`)
        input: Option<PathBuf>,

        /// Output file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Treat every non-empty input line as a separate pattern
        #[arg(long)]
        lines: bool,

        /// Mapping key ordering
        #[arg(long, value_enum, default_value_t = KeyOrderArg::Locale)]
        key_order: KeyOrderArg,
    },

    /// Check whether two JSON patterns resolve to the same route
    Check {
        /// First JSON pattern file
        left: PathBuf,

        /// Second JSON pattern file
        right: PathBuf,

        /// Mapping key ordering
        #[arg(long, value_enum, default_value_t = KeyOrderArg::Locale)]
        key_order: KeyOrderArg,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum KeyOrderArg {
    Locale,
    Codepoint,
}

impl From<KeyOrderArg> for KeyOrder {
    fn from(val: KeyOrderArg) -> Self {
        match val {
            KeyOrderArg::Locale => KeyOrder::Locale,
            KeyOrderArg::Codepoint => KeyOrder::Codepoint,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    left: &'a str,
    right: &'a str,
    #[serde(rename = "match")]
    matches: bool,
}

/// Exit status for `check` when both patterns are valid but their routes differ.
const EXIT_MISMATCH: u8 = 1;
/// Exit status for any error: unreadable input, bad JSON, illegal pattern type.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries routes
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Canonicalize {
            input,
            output,
            lines,
            key_order,
        } => {
            let options = CanonicalizeOptions::with_key_order(key_order.into());
            let text = read_input(input.as_deref())?;

            let routes = if lines {
                canonicalize_lines(&text, &options)?
            } else {
                vec![canonicalize_text(&text, &options).context("Canonicalization failed")?]
            };

            write_routes(&routes, output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            left,
            right,
            key_order,
            format,
        } => {
            let options = CanonicalizeOptions::with_key_order(key_order.into());
            let left_route = canonicalize_file(&left, &options)?;
            let right_route = canonicalize_file(&right, &options)?;
            let matches = left_route == right_route;
            tracing::debug!(left = %left_route, right = %right_route, matches, "compared routes");

            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            match format {
                ReportFormat::Text => {
                    writeln!(writer, "{left_route}")?;
                    writeln!(writer, "{right_route}")?;
                    writeln!(writer, "{}", if matches { "match" } else { "mismatch" })?;
                }
                ReportFormat::Json => {
                    let report = CheckReport {
                        left: &left_route,
                        right: &right_route,
                        matches,
                    };
                    serde_json::to_writer(&mut writer, &report).context("Failed to write JSON")?;
                    writeln!(writer).context("Failed to write trailing newline")?;
                }
            }
            writer.flush().context("Failed to flush stdout")?;

            Ok(if matches {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_MISMATCH)
            })
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    let mut text = String::new();
    match path {
        Some(p) if p != Path::new("-") => {
            let file = File::open(p)
                .with_context(|| format!("Failed to open input file: {}", p.display()))?;
            BufReader::new(file)
                .read_to_string(&mut text)
                .with_context(|| format!("Failed to read input file: {}", p.display()))?;
        }
        _ => {
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
        }
    }
    Ok(text)
}

fn canonicalize_text(text: &str, options: &CanonicalizeOptions) -> Result<String> {
    let value: serde_json::Value =
        serde_json::from_str(text).context("Failed to parse pattern JSON")?;
    Ok(canonicalize_value_with(&value, options)?)
}

fn canonicalize_lines(text: &str, options: &CanonicalizeOptions) -> Result<Vec<String>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            canonicalize_text(line, options)
                .with_context(|| format!("Canonicalization failed on line {}", index + 1))
        })
        .collect()
}

fn canonicalize_file(path: &Path, options: &CanonicalizeOptions) -> Result<String> {
    let text = read_input(Some(path))?;
    canonicalize_text(&text, options)
        .with_context(|| format!("Canonicalization failed for: {}", path.display()))
}

fn write_routes(routes: &[String], path: Option<&Path>) -> Result<()> {
    let mut writer: Box<dyn Write> = if let Some(p) = path {
        let file = File::create(p)
            .with_context(|| format!("Failed to create output file: {}", p.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    for route in routes {
        writeln!(writer, "{route}").context("Failed to write route")?;
    }
    writer.flush().context("Failed to flush output")?;

    Ok(())
}
