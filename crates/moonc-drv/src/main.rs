//! Moonc CLI - token listing tool for Moon source files.
//!
//! It uses clap for argument parsing and hands the parsed
//! configuration to the driver library.

use std::path::PathBuf;

use clap::Parser;

use moonc_drv::{run, Config};

/// Moonc - scan a Moon source file and print its tokens
#[derive(Parser, Debug)]
#[command(name = "moonc")]
#[command(author = "Moon Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan a Moon source file and print its tokens", long_about = None)]
struct Cli {
    /// Source file to scan
    input: PathBuf,

    /// List token kinds only, without literal payloads
    #[arg(short, long)]
    kinds_only: bool,

    /// Print a scan summary to stderr
    #[arg(short, long, env = "MOONC_VERBOSE")]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = Config {
        input_file: cli.input,
        kinds_only: cli.kinds_only,
        verbose: cli.verbose,
    };

    if let Err(e) = run(&config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
