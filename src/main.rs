use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use std::fs;
use std::io::{self, Write};
use std::path::{self, Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use csdoc::{Report, SourceParser};

fn cli() -> Command {
    Command::new("csdoc")
        .about("Print a structural outline of a C# source file")
        .arg(
            Arg::new("input")
                .help("C# source file to outline")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the declarations as JSON instead of text")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-header")
                .long("no-header")
                .help("Omit the source path header in text output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v debug, -vv trace)")
                .action(ArgAction::Count),
        )
}

/// Logs go to stderr so stdout carries only the outline. `RUST_LOG` wins
/// over `-v` when set.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    let input = matches
        .get_one::<PathBuf>("input")
        .context("No input file given")?;
    let json = matches.get_flag("json");
    let header = !json && !matches.get_flag("no-header");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if header {
        let source_path = full_path(input);
        writeln!(out, "Reading source code from:")?;
        writeln!(out, "{}", source_path.display())?;
    }

    if !input.exists() {
        warn!(path = %input.display(), "input file not found");
        writeln!(out, "File doesn't exist, exiting")?;
        return Ok(());
    }

    let code = read_source(input)?;

    let mut parser = SourceParser::new()?;
    let parsed = parser.parse(&code)?;
    let declarations = parsed.declarations();
    debug!(
        path = %input.display(),
        declarations = declarations.len(),
        malformed = parsed.has_errors(),
        "outlined source file"
    );

    if json {
        let rendered = serde_json::to_string_pretty(&declarations)
            .context("Failed to serialize declarations")?;
        writeln!(out, "{}", rendered)?;
    } else {
        for line in Report::new(&declarations).lines() {
            writeln!(out, "{}", line)?;
        }
    }

    Ok(())
}

/// Normalized absolute path; `canonicalize` needs the file to exist.
fn full_path(input: &Path) -> PathBuf {
    fs::canonicalize(input)
        .or_else(|_| path::absolute(input))
        .unwrap_or_else(|_| input.to_path_buf())
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
