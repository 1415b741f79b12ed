//! Command-line front end for the Busy Beaver search.
//!
//! # Usage
//!
//! ```bash
//! # Σ(2), scanned on one thread
//! bb-enumerate search --states 2
//!
//! # Σ(4) on 16 worker threads, as JSON
//! bb-enumerate search --states 4 --threads 16 --json
//!
//! # Simulate one machine under the same caps the search uses
//! bb-enumerate run 1RB1LB_1LA1RZ
//! ```

use busy_beaver_enumerator::core::{Machine, Outcome, Simulator};
use busy_beaver_enumerator::search::{busy_beaver, MAX_SMALL_STATES};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::str::FromStr;
use std::thread;

#[derive(Parser)]
#[command(name = "bb-enumerate")]
#[command(about = "Exhaustive Busy Beaver search over 1-4 state, 2-symbol Turing machines")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate every machine with the given number of states and report the best score.
    Search {
        /// Number of states (0 to 4).
        #[arg(short, long)]
        states: usize,

        /// Worker threads for 3 and 4 states, clamped to between 1 and twice the core count.
        /// Defaults to the core count.
        #[arg(short, long)]
        threads: Option<usize>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,

        /// Don't show progress.
        #[arg(short, long)]
        quiet: bool,
    },
    /// Simulate a single machine, given in the standard text format, under the search caps.
    Run {
        /// The machine, e.g. 1RB1LB_1LA1RZ. Halt transitions use any letter past the last state.
        machine: String,

        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct RunReport {
    machine: Machine,
    outcome: Outcome,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            states,
            threads,
            json,
            quiet,
        } => cmd_search(states, threads, json, quiet),
        Commands::Run { machine, json } => cmd_run(machine, json),
    }
}

fn cores() -> usize {
    thread::available_parallelism().map_or(1, |n| n.get())
}

/// The worker count to use: the request (or the core count), kept within `1..=max`.
fn clamp_threads(requested: Option<usize>, cores: usize) -> usize {
    let max = 2 * cores.max(1);
    requested.unwrap_or(cores).clamp(1, max)
}

fn cmd_search(states: usize, threads: Option<usize>, json: bool, quiet: bool) {
    let threads = clamp_threads(threads, cores());
    let show_progress = !quiet && states > MAX_SMALL_STATES;
    if show_progress {
        eprintln!(
            "Using {} worker thread{} This may take some time...",
            threads,
            if threads == 1 { "." } else { "s." }
        );
        eprint!("0%");
    }

    let report = match busy_beaver(states, threads, move |p| {
        if show_progress {
            eprint!("\r{}%", p);
        }
    }) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if show_progress {
        eprintln!();
    }

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("Score: {}", report.score);
    }
}

fn cmd_run(text: String, json: bool) {
    let tm = match Machine::from_str(&text) {
        Ok(tm) => tm,
        Err(e) => {
            eprintln!("Error: bad machine {:?}: {}", text, e);
            std::process::exit(1);
        }
    };
    if !tm.halts_reachable() {
        log::warn!("{} has no halt transition; the search never simulates it", tm);
    }
    let outcome = Simulator::for_states(tm.states()).run(&tm);

    if json {
        match serde_json::to_string_pretty(&RunReport { machine: tm, outcome }) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: failed to serialize outcome: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}: {}", tm, outcome);
    }
}
