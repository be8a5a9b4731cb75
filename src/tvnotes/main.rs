//! # tv
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, this file only
//! invokes `cli::run()` and handles process termination. Everything from
//! `api.rs` inward is UI agnostic; argument parsing, logging setup, rendering
//! and launching the editor all happen in the CLI layer.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
