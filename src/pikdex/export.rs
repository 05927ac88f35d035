//! # Exporter
//!
//! Renders an entry list as comma-separated text. The caller decides which list to
//! pass (full or filtered) and what to do with the text; rows come out in exactly the
//! order given.
//!
//! Every field is wrapped in double quotes, and double quotes inside a value are
//! doubled, so commas and quotes in names survive. Rows are joined with `\n` with no
//! trailing newline.

use crate::error::{PikdexError, Result};
use crate::model::Entry;

pub const EXPORT_FILENAME: &str = "my_pikmin_collection.csv";
pub const EXPORT_MIME: &str = "text/csv;charset=utf-8";
pub const HEADERS: [&str; 4] = ["Decor Category", "Color", "Name", "Status"];

/// Fails with [`PikdexError::EmptyExport`] when there is nothing to write.
pub fn to_delimited_text(entries: &[Entry]) -> Result<String> {
    if entries.is_empty() {
        return Err(PikdexError::EmptyExport);
    }

    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(HEADERS.join(","));
    for entry in entries {
        let row = [
            escape_field(entry.decor_type.as_str()),
            escape_field(entry.color.as_str()),
            escape_field(&entry.name),
            escape_field(entry.status.as_str()),
        ];
        lines.push(row.join(","));
    }
    Ok(lines.join("\n"))
}

fn escape_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
