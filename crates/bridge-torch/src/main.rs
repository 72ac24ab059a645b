//! CLI entry point for the bridge graph builder.
//!
//! Usage:
//!   bridge-torch build --times 1,10,100,1000 [options]
//!   bridge-torch build <times.json> [options]
//!   bridge-torch build --stdin [options]
//!
//! Options:
//!   --verbose    Log build progress at debug level

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use log::error;
use serde::Serialize;

use bridge_torch::{max_possible_states, BridgeError, BridgeGraph, CrossingTimes, Result};

#[derive(Parser)]
#[command(name = "bridge-torch")]
#[command(about = "State-space graph builder for the bridge and torch puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the graph of every reachable state and print a summary
    Build {
        /// Path to a JSON file of the form {"times": [...]}
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read the JSON document from stdin instead of a file
        #[arg(long)]
        stdin: bool,

        /// Comma-separated crossing times, one per person
        #[arg(long, conflicts_with_all = ["file", "stdin"])]
        times: Option<CrossingTimes>,

        /// Log build progress at debug level
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Summary printed after a successful build
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BuildOutput {
    people_count: usize,
    times: Vec<u32>,
    states: usize,
    max_possible_states: u64,
    connections: usize,
    start: String,
    end: String,
    time_elapsed_ms: u64,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            file,
            stdin,
            times,
            verbose,
        } => {
            init_logging(verbose);

            match build(file, stdin, times) {
                Ok(output) => match serde_json::to_string_pretty(&output) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Error formatting output: {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn build(file: Option<PathBuf>, stdin: bool, times: Option<CrossingTimes>) -> Result<BuildOutput> {
    let times = match times {
        Some(times) => times,
        None => CrossingTimes::from_json(&read_input(file, stdin)?)?,
    };

    let started = Instant::now();
    let graph = BridgeGraph::build(&times)?;

    Ok(BuildOutput {
        people_count: graph.people_count(),
        times: times.as_slice().to_vec(),
        states: graph.len(),
        max_possible_states: max_possible_states(graph.people_count()),
        connections: graph.connection_count(),
        start: graph.start().display_form(),
        end: graph.end().display_form(),
        time_elapsed_ms: started.elapsed().as_millis() as u64,
    })
}

fn read_input(file: Option<PathBuf>, stdin: bool) -> Result<String> {
    if stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| BridgeError::Config(format!("failed to read from stdin: {}", e)))?;
        Ok(buffer)
    } else if let Some(path) = file {
        fs::read_to_string(&path)
            .map_err(|e| BridgeError::Config(format!("failed to read file {:?}: {}", path, e)))
    } else {
        Err(BridgeError::Config(
            "must provide --times, a file path or --stdin".to_string(),
        ))
    }
}
