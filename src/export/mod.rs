use std::io;
use std::path::Path;

use crate::models::Entry;
use crate::store::StoreError;

/// Default output file, written into the working directory.
pub(crate) const DEFAULT_EXPORT_PATH: &str = "Expenses.csv";

/// Write one comma-joined line per entry in the fixed order
/// `description,category,amount,date,isIncome`. No header row, and
/// `QuoteStyle::Never` means fields are written raw even when they
/// contain commas. Zero entries produce an empty file.
pub(crate) fn write_entries(path: &Path, entries: &[Entry]) -> Result<usize, StoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_path(path)
        .map_err(io::Error::from)?;

    for entry in entries {
        writer
            .write_record([
                entry.description.as_str(),
                entry.category.as_str(),
                &entry.amount.to_string(),
                &entry.date.format("%Y-%m-%d %H:%M:%S").to_string(),
                if entry.is_income { "true" } else { "false" },
            ])
            .map_err(io::Error::from)?;
    }
    writer.flush()?;

    Ok(entries.len())
}

#[cfg(test)]
mod tests;
