use std::env;
use std::fmt;
use std::fs;
use std::process::ExitCode;

use cask::{parse_complete, render_parse_error};

enum CliError {
    Usage(String),
    Io(String, std::io::Error),
    Json(serde_json::Error),
    /// Already rendered to stderr; only the exit code remains.
    Parse,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(message) => write!(f, "{message}"),
            CliError::Io(path, err) => write!(f, "{path}: {err}"),
            CliError::Json(err) => write!(f, "{err}"),
            CliError::Parse => Ok(()),
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Parse) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        print_help();
        return Ok(());
    };
    match command.as_str() {
        "-h" | "--help" | "help" => {
            print_help();
            Ok(())
        }
        "parse" => {
            let mut json = false;
            let mut path = None;
            for arg in args {
                if arg == "--json" {
                    json = true;
                } else {
                    path = Some(arg);
                }
            }
            let Some(path) = path else {
                return Err(CliError::Usage("usage: cask parse [--json] <file>".to_string()));
            };
            let expr = load_and_parse(&path)?;
            if json {
                let rendered = serde_json::to_string_pretty(&expr).map_err(CliError::Json)?;
                println!("{rendered}");
            } else {
                println!("{expr:#?}");
            }
            Ok(())
        }
        "check" => {
            let Some(path) = args.next() else {
                return Err(CliError::Usage("usage: cask check <file>".to_string()));
            };
            load_and_parse(&path)?;
            println!("ok: {path}");
            Ok(())
        }
        other => Err(CliError::Usage(format!(
            "unknown command '{other}'; run 'cask --help' for usage"
        ))),
    }
}

fn load_and_parse(path: &str) -> Result<cask::ast::Expr, CliError> {
    let source = fs::read_to_string(path).map_err(|err| CliError::Io(path.to_string(), err))?;
    match parse_complete(&source) {
        Ok(expr) => Ok(expr),
        Err(err) => {
            eprintln!("{}", render_parse_error(path, &err));
            Err(CliError::Parse)
        }
    }
}

fn print_help() {
    println!("cask - parser for the Cask configuration language");
    println!();
    println!("usage:");
    println!("  cask parse [--json] <file>   parse a file and print its tree");
    println!("  cask check <file>            parse a file, reporting only errors");
}
