//! CLI tool to check, inspect, and format source files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, debug, info};

use tinyc::{NodeCounts, ParseOptions, Parsed, TokenKind};

/// Front end for a small C-like language: lexer, parser, and formatter.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Report invalid characters and malformed numbers as diagnostics
    #[arg(long, global = true)]
    lexical_errors: bool,

    /// More logging: `-v` for debug, `-vv` for trace. `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse files and report diagnostics
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the raw token stream, whitespace and comments included
    Tokens { file: PathBuf },
    /// Print files in canonical format
    Fmt {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the syntax tree
    Ast { file: PathBuf },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);
    debug!("{args:#?}");

    let options = ParseOptions {
        report_lexical_errors: args.lexical_errors,
    };

    let result = match &args.command {
        Command::Check { files } => Ok(check(files, options)),
        Command::Fmt { files } => Ok(fmt(files, options)),
        Command::Tokens { file } => tokens(file),
        Command::Ast { file } => ast(file, options),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn parse_file(path: &Path, options: ParseOptions) -> Result<Parsed> {
    let content = load(path)?;
    info!("parsing {}", path.display());
    Ok(tinyc::parse_with(&content, options))
}

/// Print diagnostics; true when there were none.
fn report(path: &Path, parsed: &Parsed) -> bool {
    for diagnostic in &parsed.diagnostics {
        eprintln!(
            "{}:{}:{}: error: {}",
            path.display(),
            diagnostic.position.line,
            diagnostic.position.column,
            diagnostic.message()
        );
    }
    parsed.is_clean()
}

fn check(files: &[PathBuf], options: ParseOptions) -> bool {
    let mut clean = true;

    for path in files {
        let parsed = match parse_file(path, options) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("{e:#}");
                clean = false;
                continue;
            }
        };

        if report(path, &parsed) {
            let counts = NodeCounts::of(&parsed.unit);
            eprintln!(
                "{}: valid ({} function(s), {} variable(s), {} statement(s))",
                path.display(),
                counts.functions,
                counts.variables,
                counts.statements
            );
        } else {
            eprintln!(
                "{}: {} error(s)",
                path.display(),
                parsed.diagnostics.len()
            );
            clean = false;
        }
    }

    clean
}

fn fmt(files: &[PathBuf], options: ParseOptions) -> bool {
    let mut clean = true;

    for path in files {
        match parse_file(path, options) {
            Ok(parsed) if report(path, &parsed) => {
                print!("{}", tinyc::format(&parsed.unit));
            }
            // never print a tree that lost pieces of the input
            Ok(_) => clean = false,
            Err(e) => {
                eprintln!("{e:#}");
                clean = false;
            }
        }
    }

    clean
}

fn tokens(path: &Path) -> Result<bool> {
    let content = load(path)?;
    for token in tinyc::tokenize(&content) {
        if token.kind == TokenKind::WhiteSpace {
            continue;
        }
        println!("{}\t{:?}\t{}", token.position, token.kind, token.text());
    }
    Ok(true)
}

fn ast(path: &Path, options: ParseOptions) -> Result<bool> {
    let parsed = parse_file(path, options)?;
    println!("{:#?}", parsed.unit);
    Ok(report(path, &parsed))
}
