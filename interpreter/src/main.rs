// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod debugger;
mod error;
mod logger;

use std::{fs::File, io::{stdout, BufReader}, path::{Path, PathBuf}, process::exit};

use anyhow::Context;
use clap::Subcommand;
use colored::Colorize;
use freeze::{Debugger, Interpreter, LineSource, RuntimeError, Lexer};
use log::LevelFilter;

use self::{
    config::load_config,
    debugger::TraceDebugger,
    error::ErrorPrinter,
    logger::Logger,
};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a program.
    Run {
        file: PathBuf,
    },

    /// Execute a program, logging every statement before it runs.
    Debug {
        file: PathBuf,
    },

    /// Print the statements of a program without executing it.
    Tokens {
        file: PathBuf,
    },
}

fn main() {
    let args = Args::parse_args();
    Logger::initialize(if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn });

    let result = match &args.command {
        Commands::Run { file } => run(file, false),
        Commands::Debug { file } => run(file, true),
        Commands::Tokens { file } => print_tokens(file),
    };

    match result {
        Ok(true) => (),
        Ok(false) => exit(1),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), format!("{e:#}").bold());
            exit(2);
        }
    }
}

/// Returns whether the program ran to completion.
fn run(path: &Path, trace: bool) -> anyhow::Result<bool> {
    let config = load_config(path)?;
    if config.log.debug {
        Logger::raise_level(LevelFilter::Debug);
    }

    let source = open(path)?;
    let escape_sequences = config.run.escape_sequences;

    let result = if trace || config.run.trace {
        Logger::raise_level(LevelFilter::Info);
        execute(source, TraceDebugger::new(path), escape_sequences)
    } else {
        execute(source, (), escape_sequences)
    };

    if let Err(error) = result {
        ErrorPrinter::new(path, &error).print();
        return Ok(false);
    }

    Ok(true)
}

fn execute<D: Debugger>(source: BufReader<File>, debugger: D, escape_sequences: bool) -> Result<(), RuntimeError> {
    Interpreter::new(source, stdout().lock(), debugger)
        .with_escape_sequences(escape_sequences)
        .run()
}

/// Returns whether every line could be tokenized.
fn print_tokens(path: &Path) -> anyhow::Result<bool> {
    let mut source = open(path)?;
    let mut line = 0;
    let mut is_valid = true;

    while let Some(text) = source.next_line().with_context(|| format!("failed to read `{}`", path.display()))? {
        line += 1;

        match Lexer::new(&text).tokenize() {
            Ok(statement) => {
                println!("{}: {} [{}]", line.to_string().blue().bold(), statement.keyword(), statement.arguments().join(", "));
            }

            Err(e) => {
                ErrorPrinter::new(path, &RuntimeError::new(line, e.into())).print();
                is_valid = false;
            }
        }
    }

    Ok(is_valid)
}

fn open(path: &Path) -> anyhow::Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("could not open `{}`", path.display()))?;
    Ok(BufReader::new(file))
}
