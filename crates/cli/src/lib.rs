#![deny(unsafe_code)]

//! Command-line front-end for the token-sequence diff engines.
//!
//! The crate exposes [`run`] as the primary entry point. The function
//! accepts an iterator of arguments together with handles for standard
//! output and error, so the binary stays a thin wrapper and the whole
//! surface is testable against in-memory buffers. A `clap` command
//! definition parses the supported switches, the inputs are read and split
//! into tokens, and the comparison itself is delegated to
//! [`matcher::SequenceMatcher`].
//!
//! # Exit codes
//!
//! - `0` - comparison completed (or help/version was requested)
//! - `1` - argument parsing failed
//! - `2` - an input could not be read or the engines reported a fault

mod report;
mod tokenize;

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use matcher::{MatcherError, SequenceMatcher};
use policy::{HighestMatch, LowestCost, TieBreak};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::report::{Report, render_json, render_text};
pub use crate::tokenize::{TokenMode, tokenize};

/// Successful completion.
const EXIT_OK: i32 = 0;
/// Argument parsing failed.
const EXIT_USAGE: i32 = 1;
/// Inputs could not be read or the engines faulted.
const EXIT_RUNTIME: i32 = 2;

/// Which tie-break policy drives the comparison.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PolicyChoice {
    /// Cheapest transition wins (the default).
    #[default]
    LowestCost,
    /// Most matched pairs win, cost as the tie-breaker.
    HighestMatch,
}

impl PolicyChoice {
    /// The policy names accepted on the command line.
    pub const NAMES: [&'static str; 2] = ["lowest-cost", "highest-match"];
}

impl fmt::Display for PolicyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LowestCost => "lowest-cost",
            Self::HighestMatch => "highest-match",
        };
        f.write_str(name)
    }
}

impl FromStr for PolicyChoice {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "lowest-cost" => Ok(Self::LowestCost),
            "highest-match" => Ok(Self::HighestMatch),
            other => Err(format!("unknown policy '{other}'")),
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error(transparent)]
    Matcher(#[from] MatcherError),
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

struct Options {
    from: PathBuf,
    to: PathBuf,
    mode: TokenMode,
    policy: PolicyChoice,
    show_opcodes: bool,
    json: bool,
    verbose: bool,
}

impl Options {
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            from: matches.get_one::<PathBuf>("from").cloned().unwrap_or_default(),
            to: matches.get_one::<PathBuf>("to").cloned().unwrap_or_default(),
            mode: matches
                .get_one::<String>("tokens")
                .and_then(|name| name.parse().ok())
                .unwrap_or_default(),
            policy: matches
                .get_one::<String>("policy")
                .and_then(|name| name.parse().ok())
                .unwrap_or_default(),
            show_opcodes: matches.get_flag("opcodes"),
            json: matches.get_flag("json"),
            verbose: matches.get_flag("verbose"),
        }
    }
}

/// Runs the CLI against the provided arguments and output handles.
///
/// The first argument is the program name, mirroring `env::args_os`.
/// Diagnostics go to `stderr`; reports, help, and version banners go to
/// `stdout`. The returned code follows the crate-level exit-code table and
/// never panics on I/O failure.
pub fn run<I, S, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => {
            return if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) {
                let _ = write!(stdout, "{}", error.render());
                EXIT_OK
            } else {
                let _ = write!(stderr, "{}", error.render());
                EXIT_USAGE
            };
        }
    };

    let options = Options::from_matches(&matches);
    if options.verbose {
        init_tracing();
    }

    match execute(&options, stdout) {
        Ok(()) => EXIT_OK,
        Err(error) => {
            let _ = writeln!(stderr, "oc-seqdiff: {error}");
            EXIT_RUNTIME
        }
    }
}

/// Maps a [`run`] return value onto a process exit code.
#[must_use]
pub fn exit_code_from(code: i32) -> ExitCode {
    let clamped = u8::try_from(code.clamp(0, i32::from(u8::MAX))).unwrap_or(1);
    ExitCode::from(clamped)
}

fn command() -> Command {
    Command::new("oc-seqdiff")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compare two files as token sequences and report the edit distance")
        .arg(
            Arg::new("from")
                .value_name("FROM")
                .help("Source file")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("to")
                .value_name("TO")
                .help("Target file")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .short('t')
                .value_name("MODE")
                .help("Split inputs into lines, words, or chars")
                .value_parser(TokenMode::NAMES)
                .default_value("lines"),
        )
        .arg(
            Arg::new("policy")
                .long("policy")
                .value_name("POLICY")
                .help("Tie-break policy selecting among equal-cost alignments")
                .value_parser(PolicyChoice::NAMES)
                .default_value("lowest-cost"),
        )
        .arg(
            Arg::new("opcodes")
                .long("opcodes")
                .help("List the edit operations of the selected alignment")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit the report as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging on stderr")
                .action(ArgAction::SetTrue),
        )
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("SEQDIFF_LOG").unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn execute<W: Write>(options: &Options, stdout: &mut W) -> Result<(), CliError> {
    let from_content = read_input(&options.from)?;
    let to_content = read_input(&options.to)?;
    let a = tokenize(&from_content, options.mode);
    let b = tokenize(&to_content, options.mode);
    debug!(
        a_tokens = a.len(),
        b_tokens = b.len(),
        mode = %options.mode,
        policy = %options.policy,
        "tokenized inputs"
    );

    let report = match options.policy {
        PolicyChoice::LowestCost => build_report(&a, &b, LowestCost, options)?,
        PolicyChoice::HighestMatch => build_report(&a, &b, HighestMatch, options)?,
    };

    if options.json {
        render_json(&report, stdout)?;
    } else {
        render_text(&report, &a, &b, stdout)?;
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn build_report<P: TieBreak>(
    a: &[&str],
    b: &[&str],
    policy: P,
    options: &Options,
) -> Result<Report, CliError> {
    let mut matcher = SequenceMatcher::new(a, b).with_policy(policy);
    let distance = matcher.distance()?;
    let matches = matcher.matches()?;
    let ratio = matcher.ratio()?;
    let opcodes = if options.show_opcodes {
        Some(matcher.opcodes()?.to_vec())
    } else {
        None
    };

    Ok(Report {
        from: options.from.display().to_string(),
        to: options.to.display().to_string(),
        tokens: options.mode.to_string(),
        policy: options.policy.to_string(),
        a_len: a.len(),
        b_len: b.len(),
        distance,
        matches,
        ratio,
        opcodes,
    })
}
