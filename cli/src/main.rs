//! Tether CLI - inspect serialized resource claims and managed resources.
//!
//! ```text
//! tether [--config <path>] get <file>...          listing table
//! tether [--config <path>] check <file>...        engine version admission
//! tether [--config <path>] transition <from> <to> binding phase guard
//! ```
//!
//! Each file holds one JSON record or a `*List` document. Logs go to stderr
//! and are filtered by `RUST_LOG` (default `info`).

mod records;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tether_config::TetherConfig;
use tether_core::{Admission, Row, TransitionGuard, render_table};
use tether_types::BindingPhase;

use crate::records::AnyRecord;

#[derive(Parser)]
#[command(name = "tether", about = "Inspect resource claims and their bindings")]
struct Args {
    /// Config file (default: $TETHER_CONFIG or ~/.tether/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a listing table for the records in the given files.
    Get {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Check engine versions against the configured allow-lists.
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Evaluate a binding phase transition under the configured mode.
    Transition {
        #[arg(value_parser = parse_phase)]
        from: BindingPhase,
        #[arg(value_parser = parse_phase)]
        to: BindingPhase,
    },
}

fn parse_phase(raw: &str) -> Result<BindingPhase, String> {
    BindingPhase::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = BindingPhase::ALL.into_iter().map(BindingPhase::as_str).collect();
        format!("expected one of {}", known.join(", "))
    })
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn load_config(explicit: Option<&Path>) -> Result<TetherConfig> {
    let config = match explicit {
        Some(path) => TetherConfig::load_required(path),
        None => TetherConfig::load(),
    };
    config.context("loading config")
}

fn load_all(files: &[PathBuf]) -> Result<Vec<AnyRecord>> {
    let mut all = Vec::new();
    for file in files {
        all.extend(records::load(file)?);
    }
    Ok(all)
}

fn get(files: &[PathBuf]) -> Result<bool> {
    let now = Utc::now();
    let rows: Vec<Row> = load_all(files)?
        .iter()
        .map(|record| Row::from_summary(&record.summary(), now))
        .collect();
    print!("{}", render_table(&rows));
    Ok(true)
}

fn check(config: &TetherConfig, files: &[PathBuf]) -> Result<bool> {
    let admission = Admission::from(config);
    let mut admitted = true;
    for record in load_all(files)? {
        let name = record.summary().name.unwrap_or_default();
        match record.admit(&admission) {
            Ok(()) => println!("{} {name}: ok", record.kind()),
            Err(err) => {
                println!("{err}");
                admitted = false;
            }
        }
    }
    Ok(admitted)
}

fn transition(config: &TetherConfig, from: BindingPhase, to: BindingPhase) -> bool {
    let guard = TransitionGuard::from(config);
    match guard.check(from, to) {
        Ok(()) if tether_core::is_allowed(from, to) => {
            println!("{from} -> {to}: allowed");
            true
        }
        Ok(()) => {
            println!(
                "{from} -> {to}: outside the transition table, permitted in {} mode",
                guard.mode()
            );
            true
        }
        Err(err) => {
            println!("{err}");
            false
        }
    }
}

fn run(args: Args) -> Result<bool> {
    let config = load_config(args.config.as_deref())?;
    match args.command {
        Command::Get { files } => get(&files),
        Command::Check { files } => check(&config, &files),
        Command::Transition { from, to } => Ok(transition(&config, from, to)),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}
