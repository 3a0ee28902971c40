use crate::domain::model::TicketRecord;
use crate::utils::error::{Result, ScrapeError};
use std::collections::BTreeSet;

/// The export schema is the union of every key present across all records,
/// sorted lexicographically. Field sets vary between runs and site
/// revisions, so nothing here assumes the canonical ticket fields.
pub fn infer_columns(records: &[TicketRecord]) -> Vec<String> {
    let mut columns = BTreeSet::new();
    for record in records {
        for key in record.fields.keys() {
            columns.insert(key.clone());
        }
    }
    columns.into_iter().collect()
}

/// Renders the records as RFC 4180 CSV: header row first, every field
/// quoted, CRLF line endings, missing fields as empty values. With no
/// columns there is nothing to render and the output is empty.
pub fn render_csv(columns: &[String], records: &[TicketRecord]) -> Result<String> {
    if columns.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(columns)?;
    for record in records {
        writer.write_record(columns.iter().map(|column| record.get(column).unwrap_or("")))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| ScrapeError::Processing {
        message: format!("CSV output was not UTF-8: {}", e),
    })
}
