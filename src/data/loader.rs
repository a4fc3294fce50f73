// Loading and saving of company records, as JSON or CSV.
//
// The format follows the file extension: `.csv` is a header row with the
// `Company_ID, Sector_Code, HTML, Total_Production_Costs, Service_Costs`
// columns (extra columns such as an exported index are ignored); anything
// else is a JSON array.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::models::CompanyRecord;

/// On-disk record format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Csv,
}

impl RecordFormat {
    /// `.csv` (any case) is CSV; everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

/// Read company records from a JSON or CSV file.
pub fn load_records(path: &Path) -> Result<Vec<CompanyRecord>> {
    let format = RecordFormat::from_path(path);
    let records = match format {
        RecordFormat::Json => load_json(path)?,
        RecordFormat::Csv => load_csv(path)?,
    };

    info!(
        path = %path.display(),
        format = ?format,
        records = records.len(),
        "Loaded company records"
    );
    Ok(records)
}

/// Write records as pretty-printed JSON or CSV, creating parent directories.
pub fn save_records(path: &Path, records: &[CompanyRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    match RecordFormat::from_path(path) {
        RecordFormat::Json => {
            let json = serde_json::to_string_pretty(records)?;
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        }
        RecordFormat::Csv => save_csv(path, records)?,
    }

    info!(path = %path.display(), records = records.len(), "Saved company records");
    Ok(())
}

fn load_json(path: &Path) -> Result<Vec<CompanyRecord>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read records from {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse records in {}", path.display()))
}

fn load_csv(path: &Path) -> Result<Vec<CompanyRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to read records from {}", path.display()))?;

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<CompanyRecord>().enumerate() {
        // Row 1 is the header
        let record = row.with_context(|| {
            format!("Failed to parse row {} of {}", i + 2, path.display())
        })?;
        records.push(record);
    }
    Ok(records)
}

fn save_csv(path: &Path, records: &[CompanyRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
