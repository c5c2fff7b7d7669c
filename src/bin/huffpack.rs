// In: src/bin/huffpack.rs

//! Command-line front end: `huffpack -c|-u -f <path> -o <path>`.
//!
//! Argument syntax is handled by `clap`. Every occurrence of an action or path
//! flag is replayed into `RunConfigBuilder`, which owns the "exactly one of each"
//! rules and their messages.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use colored::Colorize;
use log::LevelFilter;

use huffpack::{Action, HuffpackError, ReportFormat, RunConfig, Runner};

/// Environment variable holding the `env_logger` filter.
const LOG_ENV_VAR: &str = "HUFFPACK_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "huffpack",
    version,
    about = "Compress or uncompress a single file with Huffman coding."
)]
struct Cli {
    /// Compress the input file.
    #[arg(short = 'c', action = ArgAction::Count)]
    compress: u8,

    /// Uncompress the input file.
    #[arg(short = 'u', action = ArgAction::Count)]
    uncompress: u8,

    /// Path of the file to read.
    #[arg(short = 'f', long = "file", value_name = "path", action = ArgAction::Append)]
    file: Vec<PathBuf>,

    /// Path of the file to write.
    #[arg(short = 'o', long = "output", value_name = "path", action = ArgAction::Append)]
    output: Vec<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<RunConfig, HuffpackError> {
        let mut builder = RunConfig::builder();
        for _ in 0..self.compress {
            builder.set_action(Action::Encode)?;
        }
        for _ in 0..self.uncompress {
            builder.set_action(Action::Decode)?;
        }
        for path in &self.file {
            builder.set_input(path)?;
        }
        for path in &self.output {
            builder.set_output(path)?;
        }
        builder.report(ReportFormat::from_env());
        builder.build()
    }
}

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    if let Ok(filters) = std::env::var(LOG_ENV_VAR) {
        builder.parse_filters(&filters);
    }

    // Custom formatter: just print the level and message
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));

    let _ = builder.try_init();
}

fn run(cli: Cli) -> Result<(), HuffpackError> {
    let config = cli.into_config()?;
    let stdout = io::stdout();
    let mut sink = stdout.lock();
    Runner::new(config).execute(&mut sink)?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            if let Some(source) = std::error::Error::source(&err) {
                log::debug!("caused by: {}", source);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<RunConfig, HuffpackError> {
        let argv = std::iter::once("huffpack").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().into_config()
    }

    #[test]
    fn test_parse_encode() {
        let config = parse(&["-c", "-f", "in.txt", "--output", "out.huff"]).unwrap();
        assert_eq!(config.action, Action::Encode);
        assert_eq!(config.input, PathBuf::from("in.txt"));
        assert_eq!(config.output, PathBuf::from("out.huff"));
    }

    #[test]
    fn test_parse_decode_any_order() {
        let config = parse(&["-o", "out.txt", "--file", "in.huff", "-u"]).unwrap();
        assert_eq!(config.action, Action::Decode);
    }

    #[test]
    fn test_duplicate_flags_are_configuration_errors() {
        assert!(matches!(
            parse(&["-c", "-u", "-f", "a", "-o", "b"]),
            Err(HuffpackError::MultipleActions)
        ));
        assert!(matches!(
            parse(&["-c", "-c", "-f", "a", "-o", "b"]),
            Err(HuffpackError::MultipleActions)
        ));
        assert!(matches!(
            parse(&["-c", "-f", "a", "--file", "b", "-o", "c"]),
            Err(HuffpackError::MultipleInputs)
        ));
        assert!(matches!(
            parse(&["-c", "-f", "a", "-o", "b", "-o", "c"]),
            Err(HuffpackError::MultipleOutputs)
        ));
    }

    #[test]
    fn test_missing_settings() {
        assert!(matches!(parse(&["-c"]), Err(HuffpackError::NoInput)));
        assert!(matches!(
            parse(&["-c", "-f", "a"]),
            Err(HuffpackError::NoOutput)
        ));
        assert!(matches!(
            parse(&["-f", "a", "-o", "b"]),
            Err(HuffpackError::NoAction)
        ));
    }

    #[test]
    fn test_clap_rejects_unknown_flags_and_missing_values() {
        assert!(Cli::try_parse_from(["huffpack", "-x"]).is_err());
        assert!(Cli::try_parse_from(["huffpack", "-c", "-f"]).is_err());
    }
}
