use std::process;

use clap::Parser;
use expense_tracker::{cli, init};

fn main() {
    init();

    let args = cli::Cli::parse();
    if let Err(err) = cli::run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
