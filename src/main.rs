use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Turn numbers into tokens that sort like the numbers, and back.
#[derive(Debug, Parser)]
#[command(name = "ordnum", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print each input next to its output, separated by a tab
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Keep going after an input fails, reporting it on stderr
    #[arg(short = 'k', long, global = true)]
    keep_going: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode numbers into tokens
    Encode {
        /// Numbers to encode; lines of stdin when omitted
        values: Vec<String>,
    },
    /// Decode tokens into numbers
    Decode {
        /// Tokens to decode; lines of stdin when omitted
        values: Vec<String>,
    },
    /// Replace the digit runs of each text with tokens
    Text {
        /// Texts to rewrite; lines of stdin when omitted
        values: Vec<String>,
    },
    /// Encode numbers and print them in token order
    Sort {
        /// Numbers to sort; lines of stdin when omitted
        values: Vec<String>,
    },
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Values from the command line, or the lines of `input` when there are none
///
/// Empty lines are kept: the empty string encodes to the empty token, and every
/// output line must match its input line.
fn read_values(values: Vec<String>, input: impl BufRead) -> Result<Vec<String>> {
    if !values.is_empty() {
        return Ok(values);
    }
    let lines = input
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("failed to read stdin")?;
    debug!(count = lines.len(), "read values from stdin");
    Ok(lines)
}

fn run<E: std::fmt::Display>(
    cli_values: Vec<String>,
    verbose: bool,
    keep_going: bool,
    convert: impl Fn(&str) -> std::result::Result<String, E>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for value in read_values(cli_values, io::stdin().lock())? {
        match convert(&value) {
            Ok(converted) if verbose => writeln!(out, "{value}\t{converted}")?,
            Ok(converted) => writeln!(out, "{converted}")?,
            Err(err) if keep_going => warn!(input = %value, %err, "skipping input"),
            Err(err) => anyhow::bail!("{value:?}: {err}"),
        }
    }
    Ok(())
}

fn sort(cli_values: Vec<String>, verbose: bool, keep_going: bool) -> Result<()> {
    let mut tokens = Vec::new();
    for value in read_values(cli_values, io::stdin().lock())? {
        match value.parse::<ordnum::Token>() {
            Ok(token) => tokens.push(token),
            Err(err) if keep_going => warn!(input = %value, %err, "skipping input"),
            Err(err) => anyhow::bail!("{value:?}: {err}"),
        }
    }
    tokens.sort();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for token in &tokens {
        if verbose {
            writeln!(out, "{}\t{token}", token.as_str())?;
        } else {
            writeln!(out, "{token}")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Command::Encode { values } => run(values, cli.verbose, cli.keep_going, ordnum::encode),
        Command::Decode { values } => run(values, cli.verbose, cli.keep_going, ordnum::decode),
        Command::Text { values } => {
            run(values, cli.verbose, cli.keep_going, ordnum::encode_in_text)
        }
        Command::Sort { values } => sort(values, cli.verbose, cli.keep_going),
    }
}
