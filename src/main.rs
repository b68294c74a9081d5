//! `nosj` CLI entry point.
//!
//! Reads one nosj document from the file named on the command line and
//! prints its debug rendering on stdout. Every failure, whether a usage
//! problem, an unreadable file, or a malformed document, is reported as a
//! single `ERROR -- ...` line on stderr with exit code 66.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;

use nosj::{from_path, render, to_exit_code, Error};

#[derive(Parser)]
#[command(name = "nosj", version, about = "Parse a nosj document and print its structure")]
struct Cli {
    /// Path to the nosj document.
    file: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
            ) =>
        {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let message = if err.kind() == ClapErrorKind::MissingRequiredArgument {
                "no input filename provided".to_string()
            } else {
                "invalid arguments".to_string()
            };
            return report(&Error::usage(message));
        }
    };

    match from_path(&cli.file) {
        Ok(map) => {
            print!("{}", render(&map));
            ExitCode::SUCCESS
        }
        Err(err) => report(&err),
    }
}

fn report(err: &Error) -> ExitCode {
    eprintln!("ERROR -- {err}");
    ExitCode::from(to_exit_code(err) as u8)
}
