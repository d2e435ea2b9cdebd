//! Main entry point for the rlaunch application.

use clap::Parser;
use rlaunch::{build_request_from_args, cli::Args, display_request};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let args = Args::parse();

    let rootpath = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to get current directory: {e}");
            std::process::exit(1);
        }
    };

    let request = match build_request_from_args(&args, &rootpath) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&request.summary()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize request: {e}");
                std::process::exit(1);
            }
        }
    } else {
        display_request(&request);
    }
}

/// Route `log` records to stderr, filtered by `RUST_LOG` (default: warn).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
