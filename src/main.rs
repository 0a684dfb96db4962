//! Bank Account Manager CLI
//!
//! Runs the interactive account menu on stdin/stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --interest-rate 4.5 --overdraft-limit 5000
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use bank_account_manager::{Cli, Console, Result};
use clap::Parser;
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), cli.config());
    console.run()
}
