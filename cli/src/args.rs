//! Argument parsing.

use crate::error::{AppError, AppResult};

/// Parsed command-line options.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Input CSV path.
    pub input: Option<String>,
    /// Target table for UPDATE statements.
    pub table: Option<String>,
    /// Rules file to import before evaluation.
    pub rules_file: Option<String>,
    /// Path to export the effective rule set to.
    pub export_rules: Option<String>,
    /// Output path for the SQL script (stdout when absent).
    pub out: Option<String>,
    /// Rules to disable by name.
    pub disabled: Vec<String>,
    /// Print rule names and continue.
    pub list_rules: bool,
}

impl Args {
    /// Parse process arguments (without the program name).
    pub fn parse(args: &[String]) -> AppResult<Self> {
        let mut parsed = Self::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--table" => parsed.table = Some(expect_value(&mut iter, "--table")?),
                "--rules" => parsed.rules_file = Some(expect_value(&mut iter, "--rules")?),
                "--export-rules" => {
                    parsed.export_rules = Some(expect_value(&mut iter, "--export-rules")?)
                }
                "--out" => parsed.out = Some(expect_value(&mut iter, "--out")?),
                "--disable" => parsed.disabled.push(expect_value(&mut iter, "--disable")?),
                "--list-rules" => parsed.list_rules = true,
                other if other.starts_with("--") => {
                    return Err(AppError::usage(format!("unknown option: {}", other)))
                }
                other => {
                    if parsed.input.is_some() {
                        return Err(AppError::usage("more than one input file"));
                    }
                    parsed.input = Some(other.to_string());
                }
            }
        }

        Ok(parsed)
    }
}

fn expect_value(iter: &mut std::slice::Iter<'_, String>, flag: &str) -> AppResult<String> {
    iter.next()
        .cloned()
        .ok_or_else(|| AppError::usage(format!("{} requires a value", flag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_full() {
        let parsed = Args::parse(&args(&[
            "data.csv",
            "--table",
            "campaigns",
            "--disable",
            "Google Ads",
            "--disable",
            "Microsoft Ads",
            "--out",
            "out.sql",
        ]))
        .unwrap();
        assert_eq!(parsed.input.as_deref(), Some("data.csv"));
        assert_eq!(parsed.table.as_deref(), Some("campaigns"));
        assert_eq!(parsed.disabled, vec!["Google Ads", "Microsoft Ads"]);
        assert_eq!(parsed.out.as_deref(), Some("out.sql"));
    }

    #[test]
    fn test_parse_list_rules_only() {
        let parsed = Args::parse(&args(&["--list-rules"])).unwrap();
        assert!(parsed.list_rules);
        assert!(parsed.input.is_none());
    }

    #[test]
    fn test_unknown_option() {
        assert!(Args::parse(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_missing_value() {
        assert!(Args::parse(&args(&["data.csv", "--table"])).is_err());
    }

    #[test]
    fn test_duplicate_input() {
        assert!(Args::parse(&args(&["a.csv", "b.csv"])).is_err());
    }
}
