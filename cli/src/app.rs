//! Command execution.

use std::fs;
use std::path::Path;

use prettymap_ingest::CsvReader;
use prettymap_rule::RuleEngine;

use crate::args::Args;
use crate::error::{AppError, AppResult};

/// Usage text printed alongside argument errors.
pub const USAGE: &str = "Usage: prettymap <input.csv> [--table NAME] [--rules FILE] \
[--export-rules FILE] [--out FILE] [--disable RULE]... [--list-rules]";

/// Run the tool with parsed arguments. The SQL script goes to stdout
/// unless `--out` is given; diagnostics go to stderr.
pub fn run(args: &Args) -> AppResult<()> {
    let mut engine = RuleEngine::new();

    if let Some(path) = &args.rules_file {
        let json = fs::read_to_string(path).map_err(|e| AppError::file(path, e))?;
        let count = engine.import_rules(&json)?;
        eprintln!("Imported {} rules from {}", count, path);
    }

    for name in &args.disabled {
        engine.toggle_rule(name, false);
    }

    if args.list_rules {
        for name in engine.rule_names() {
            println!("{}", name);
        }
    }

    if let Some(path) = &args.export_rules {
        fs::write(path, engine.export_rules()).map_err(|e| AppError::file(path, e))?;
        eprintln!("Exported rules to {}", path);
    }

    let input = match &args.input {
        Some(input) => input,
        None => {
            // Rule management without an input file is a complete run.
            if args.list_rules || args.export_rules.is_some() {
                return Ok(());
            }
            return Err(AppError::usage("no input file"));
        }
    };

    let mut rows = CsvReader::new().read_path(Path::new(input))?;
    engine.apply(&mut rows);

    let table = args
        .table
        .as_deref()
        .unwrap_or(prettymap_sql::DEFAULT_TABLE);
    let script = prettymap_sql::generate(&rows, table);

    match &args.out {
        Some(path) => fs::write(path, &script).map_err(|e| AppError::file(path, e))?,
        None => print!("{}", script),
    }

    Ok(())
}
