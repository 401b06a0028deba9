//! UPDATE statement assembly.

use prettymap_core::Row;

/// Placeholder table name used when the caller does not supply one.
pub const DEFAULT_TABLE: &str = "your_target_table";

/// Escape a value for a single-quoted SQL literal by doubling quotes.
pub fn escape(value: &str) -> String {
    value.replace('\'', "''")
}

/// Build the UPDATE statement for one row, or None when the row is
/// missing an original key column.
///
/// Pretty fields that are still empty fall back to their original
/// values (network falls back through the original network to the
/// source, covering source-shaped files with no network column).
pub fn update_statement(row: &Row, table: &str) -> Option<String> {
    if row.original_name.is_empty() || row.source.is_empty() {
        return None;
    }

    let pretty_name = if row.pretty_name.is_empty() {
        row.original_name.as_str()
    } else {
        row.pretty_name.as_str()
    };
    let network = if !row.pretty_network.is_empty() {
        row.pretty_network.as_str()
    } else if !row.original_network.is_empty() {
        row.original_network.as_str()
    } else {
        row.source.as_str()
    };

    Some(format!(
        "UPDATE {} SET pretty_name = '{}', network = '{}' WHERE campaign_name = '{}' AND source = '{}';",
        table,
        escape(pretty_name),
        escape(network),
        escape(&row.original_name),
        escape(&row.source),
    ))
}

/// Build the full script: a row-count header, one statement per row in
/// order, and a skip comment for rows missing key columns.
pub fn generate(rows: &[Row], table: &str) -> String {
    if rows.is_empty() {
        return "-- No data loaded to generate SQL.\n".to_string();
    }

    let mut script = format!("-- Generated SQL for {} rows\n", rows.len());
    for row in rows {
        match update_statement(row, table) {
            Some(statement) => {
                script.push_str(&statement);
                script.push('\n');
            }
            None => {
                script.push_str(&format!(
                    "-- Skipping row: Missing campaign_name or source (Original: Campaign='{}', Source='{}')\n",
                    escape(&row.original_name),
                    escape(&row.source),
                ));
            }
        }
    }
    script
}
