//! CSV reading and row mapping.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use prettymap_core::Row;

use crate::error::{IngestError, IngestResult};
use crate::headers::ColumnMap;

/// Configurable CSV reader producing mapping rows.
#[derive(Debug, Clone)]
pub struct CsvReader {
    delimiter: u8,
    trim: bool,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Read rows from a file on disk.
    pub fn read_path(&self, path: &Path) -> IngestResult<Vec<Row>> {
        let content =
            std::fs::read_to_string(path).map_err(|e| IngestError::file_read(path, e))?;
        self.read_str(&content)
    }

    /// Read rows from CSV content.
    ///
    /// Headers are trimmed and lowercased before detection. Fully-empty
    /// rows are dropped; the result is sorted stably by source, then
    /// campaign name.
    pub fn read_str(&self, content: &str) -> IngestResult<Vec<Row>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|header| header.trim().to_lowercase())
            .collect();

        let columns = ColumnMap::detect(&headers)?;

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            // Header is line 1, so the first record is line 2.
            let record = record.map_err(|e| IngestError::record(index + 2, e))?;
            let row = map_record(&record, &columns);
            if row_is_empty(&row) {
                continue;
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(IngestError::Empty);
        }

        rows.sort_by(|a, b| {
            a.source
                .cmp(&b.source)
                .then_with(|| a.original_name.cmp(&b.original_name))
        });

        Ok(rows)
    }
}

fn map_record(record: &StringRecord, columns: &ColumnMap) -> Row {
    let mut row = Row::new();
    row.original_name = field_at(record, Some(columns.campaign));
    row.source = field_at(record, columns.source);
    row.original_network = field_at(record, columns.network);
    row.rt_source = field_at(record, columns.rt_source);
    row.rt_campaign = field_at(record, columns.rt_campaign);
    row
}

fn field_at(record: &StringRecord, index: Option<usize>) -> String {
    index
        .and_then(|i| record.get(i))
        .unwrap_or("")
        .trim()
        .to_string()
}

fn row_is_empty(row: &Row) -> bool {
    row.source.is_empty()
        && row.original_network.is_empty()
        && row.original_name.is_empty()
        && row.rt_source.is_empty()
        && row.rt_campaign.is_empty()
}
