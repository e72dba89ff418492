// src/bin/args.rs
//
// Argument parsing for the two invocation shapes: a single file path, or
// two non-negative integers `X Y`. The shape is auto-detected from the
// positional arguments rather than picked by a subcommand.

use std::fmt;
use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "slitherlink")]
struct RawArgs {
    /// `<FILE>` or `<X> <Y>`.
    positionals: Vec<String>,

    /// Print each found solution as ASCII. Disables memoization for this run.
    #[arg(long)]
    render: bool,

    /// Emit a single-line JSON summary instead of the plain-text line.
    #[arg(long)]
    json: bool,

    /// Shard the row-1 recursion across a thread pool.
    #[arg(long)]
    parallel: bool,

    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    File(PathBuf),
    Dimensions(usize, usize),
}

#[derive(Debug)]
pub struct Args {
    pub mode: Mode,
    pub render: bool,
    pub json: bool,
    pub parallel: bool,
    pub verbose: bool,
}

#[derive(Debug)]
pub enum CliError {
    NoArguments,
    WrongArgumentCount(usize),
    NotFileOrDimensions(String),
    BadDimension(String),
    ZeroDimension,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CliError::*;
        match self {
            NoArguments => write!(f, "expected a file path or two dimensions, got nothing"),
            WrongArgumentCount(n) => {
                write!(f, "expected 1 argument (a file path) or 2 (X Y), got {n}")
            }
            NotFileOrDimensions(s) => {
                write!(f, "{s:?} is neither a readable file nor a valid dimension")
            }
            BadDimension(s) => write!(f, "{s:?} is not a non-negative integer"),
            ZeroDimension => write!(f, "X and Y must both be at least 1"),
        }
    }
}

impl std::error::Error for CliError {}

pub fn parse_and_validate() -> Result<Args, CliError> {
    let raw = RawArgs::parse();
    let mode = resolve_mode(&raw.positionals)?;

    Ok(Args {
        mode,
        render: raw.render,
        json: raw.json,
        parallel: raw.parallel,
        verbose: raw.verbose,
    })
}

fn resolve_mode(positionals: &[String]) -> Result<Mode, CliError> {
    match positionals {
        [] => Err(CliError::NoArguments),
        [only] => {
            let path = PathBuf::from(only);
            if path.is_file() {
                Ok(Mode::File(path))
            } else {
                Err(CliError::NotFileOrDimensions(only.clone()))
            }
        }
        [x, y] => {
            let (x, y) = (parse_dimension(x)?, parse_dimension(y)?);
            if x == 0 || y == 0 {
                return Err(CliError::ZeroDimension);
            }
            Ok(Mode::Dimensions(x, y))
        }
        rest => Err(CliError::WrongArgumentCount(rest.len())),
    }
}

fn parse_dimension(s: &str) -> Result<usize, CliError> {
    s.parse::<usize>().map_err(|_| CliError::BadDimension(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_parses_non_negative_integers() {
        assert_eq!(parse_dimension("0").unwrap(), 0);
        assert_eq!(parse_dimension("12").unwrap(), 12);
    }

    #[test]
    fn dimension_rejects_negative_and_non_numeric() {
        assert!(parse_dimension("-1").is_err());
        assert!(parse_dimension("x").is_err());
        assert!(parse_dimension("3.5").is_err());
    }

    #[test]
    fn missing_file_is_not_file_or_dimensions() {
        let path = "/definitely/does/not/exist/on/this/machine.txt";
        assert!(!PathBuf::from(path).is_file());
    }

    #[test]
    fn resolve_mode_parses_dimensions() {
        let got = resolve_mode(&["3".to_string(), "4".to_string()]).unwrap();
        assert_eq!(got, Mode::Dimensions(3, 4));
    }

    #[test]
    fn resolve_mode_rejects_zero_dimensions() {
        assert!(matches!(
            resolve_mode(&["0".to_string(), "4".to_string()]),
            Err(CliError::ZeroDimension)
        ));
        assert!(matches!(
            resolve_mode(&["4".to_string(), "0".to_string()]),
            Err(CliError::ZeroDimension)
        ));
    }

    #[test]
    fn resolve_mode_rejects_wrong_argument_count() {
        assert!(matches!(resolve_mode(&[]), Err(CliError::NoArguments)));
        assert!(matches!(
            resolve_mode(&["1".to_string(), "2".to_string(), "3".to_string()]),
            Err(CliError::WrongArgumentCount(3))
        ));
    }

    #[test]
    fn resolve_mode_routes_existing_file_to_file_mode() {
        let path = std::env::current_exe().unwrap().to_string_lossy().into_owned();
        assert!(matches!(resolve_mode(&[path]), Ok(Mode::File(_))));
    }
}
