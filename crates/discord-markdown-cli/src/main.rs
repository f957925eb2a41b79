//! Command-line interface for discord-markdown.
//!
//! Usage:
//!   discord-markdown [INPUT] [-o OUTPUT]   - convert HTML to Discord markdown
//!   discord-markdown --strip [INPUT]       - strip markdown back to plain text

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use discord_markdown::{ConvertError, DiscordMarkdown, Options, FORMAT_FAILURE_MESSAGE};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "discord-markdown", version, about = "Convert HTML fragments to Discord markdown")]
struct Cli {
    /// Input file; reads stdin when absent or `-`
    input: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Strip markdown formatting from the input instead of converting HTML
    #[arg(long)]
    strip: bool,

    /// Print the fixed fallback reply instead of failing when the input cannot be parsed
    #[arg(long)]
    fallback: bool,

    /// Keep containers that are normally hidden as secondary UI chrome
    #[arg(long)]
    no_suppress: bool,

    /// Log conversion details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Convert(e)) => {
            tracing::error!(error = %e, "conversion failed");
            eprintln!("{}", FORMAT_FAILURE_MESSAGE);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let input = read_input(cli.input.as_ref())?;

    let mut options = Options::default();
    if cli.no_suppress {
        options.suppressed_class_markers.clear();
    }
    let service = DiscordMarkdown::with_options(options);

    let result = if cli.strip {
        let text = String::from_utf8_lossy(&input);
        service.strip(&text)
    } else if cli.fallback {
        service.convert_or_fallback(&input)
    } else {
        service.convert_bytes(&input)?
    };

    write_output(cli.output.as_ref(), &result)
}

fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>, CliError> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read(path).map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        }),
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(|source| CliError::Read {
                    path: "stdin".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => {
            fs::write(path, format!("{}\n", content)).map_err(|source| CliError::Write {
                path: path.display().to_string(),
                source,
            })
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", content).map_err(|source| CliError::Write {
                path: "stdout".to_string(),
                source,
            })
        }
    }
}
