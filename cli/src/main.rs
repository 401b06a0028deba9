//! prettymap - derive pretty campaign networks/names and emit SQL.
//!
//! This is the entry point for the prettymap binary.

use std::env;
use std::process;

use prettymap_cli::{run, Args, USAGE};

fn main() {
    let argv: Vec<String> = env::args().skip(1).collect();

    let args = match Args::parse(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
