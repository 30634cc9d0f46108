//! Command-line surface: parses a single input file path, runs the routing
//! pipeline, and renders the resulting net as XML.
//!
//! Grounded on `parseArgs` (`examples/original_source/Steiner.cpp`, which
//! accepted `--input <file>`/`--help`) and the teacher CLI's `cli.rs` shape:
//! a `clap::Parser` entry struct, a `CliError` wrapping the core's error via
//! `#[from]`, and a `run_cli` function that returns a renderable summary
//! rather than writing to stdout itself.

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use steiner_core::{Input, Net, SteinerError};

use crate::input_file::{InputFileError, read_input_file};
use crate::xml;

/// Computes a rectilinear Steiner tree for the pins in an input file and
/// prints the routed net as XML.
#[derive(Debug, Parser)]
#[command(name = "steiner", version, about)]
pub struct Cli {
    /// Path to the input file (bounds, pin count, pins).
    pub input: PathBuf,
}

/// Errors surfaced by the CLI, layering file I/O and parse failures over
/// the core's [`SteinerError`].
#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to open or read the input file.
    #[error("failed to read input file {path}: {source}")]
    Io {
        /// The path that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The input file's token stream was malformed.
    #[error("failed to parse input file {path}: {source}")]
    Parse {
        /// The path that failed to parse.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: InputFileError,
    },
    /// The parsed input failed the core's domain validation.
    #[error(transparent)]
    Core(#[from] SteinerError),
}

impl CliError {
    /// Returns the stable machine-readable code for this error, when one is
    /// available (only [`CliError::Core`] carries one from the core).
    #[must_use]
    pub fn core_code(&self) -> Option<steiner_core::SteinerErrorCode> {
        match self {
            Self::Core(err) => Some(err.code()),
            Self::Io { .. } | Self::Parse { .. } => None,
        }
    }
}

/// Runs the CLI command and returns the routed [`Net`], ready for
/// [`render_net`].
///
/// # Errors
/// Returns [`CliError`] if the input file cannot be read, its contents are
/// malformed, or the parsed input fails domain validation.
pub fn run_cli(cli: Cli) -> Result<Net, CliError> {
    let file = File::open(&cli.input).map_err(|source| CliError::Io {
        path: cli.input.clone(),
        source,
    })?;
    let raw = read_input_file(file).map_err(|source| CliError::Parse {
        path: cli.input.clone(),
        source,
    })?;
    let input = Input::new(raw.bounds, raw.pins)?;
    let net = steiner_core::route(&input)?;
    Ok(net)
}

/// Renders `net` as XML into `writer`.
///
/// # Errors
/// Returns any I/O error raised while writing to `writer`.
pub fn render_net(net: &Net, writer: &mut impl std::io::Write) -> std::io::Result<()> {
    writer.write_all(xml::render(net).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::NamedTempFile;

    fn write_input(contents: &str) -> NamedTempFile {
        use std::io::Write as _;
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn run_cli_parses_and_routes_a_valid_file() {
        let file = write_input("0 0 10 10\n2\n0 0\n3 4\n");
        let cli = Cli {
            input: file.path().to_path_buf(),
        };
        let net = run_cli(cli).expect("valid file routes successfully");
        assert_eq!(net.tree_weight, 7);
    }

    #[test]
    fn run_cli_reports_io_error_for_missing_file() {
        let cli = Cli {
            input: PathBuf::from("/nonexistent/path/to/input.txt"),
        };
        let err = run_cli(cli).expect_err("missing file must fail");
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn run_cli_reports_parse_error_for_malformed_file() {
        let file = write_input("not a valid file");
        let cli = Cli {
            input: file.path().to_path_buf(),
        };
        let err = run_cli(cli).expect_err("malformed file must fail");
        assert!(matches!(err, CliError::Parse { .. }));
    }

    #[rstest]
    #[case("0 0 10 10\n1\n0 0\n")] // too few pins
    #[case("10 10 0 0\n2\n0 0\n1 1\n")] // malformed bounds
    #[case("0 0 10 10\n2\n0 0\n20 20\n")] // pin outside bounds
    fn run_cli_reports_core_error_for_domain_violations(#[case] contents: &str) {
        let file = write_input(contents);
        let cli = Cli {
            input: file.path().to_path_buf(),
        };
        let err = run_cli(cli).expect_err("domain violation must fail");
        assert!(matches!(err, CliError::Core(_)));
        assert!(err.core_code().is_some());
    }

    #[test]
    fn render_net_writes_parseable_xml() {
        let file = write_input("0 0 10 10\n2\n0 0\n3 4\n");
        let cli = Cli {
            input: file.path().to_path_buf(),
        };
        let net = run_cli(cli).expect("valid file routes successfully");
        let mut buf = Vec::new();
        render_net(&net, &mut buf).expect("render succeeds");
        let text = String::from_utf8(buf).expect("xml is valid utf-8");
        assert!(text.starts_with("<root>"));
    }
}
