//! Conversion of the spreadsheet CSV layout into tradition records.
//!
//! The sheet has one row per tradition and one column per field. List
//! columns are packed into a single cell: `practices` and
//! `parentTraditions` are comma-separated, `citations` pipe-separated.
//! Each outcome dimension has its own integer column.

use csv::{ReaderBuilder, StringRecord};

use super::error::SyncError;
use crate::dataset::{Effectiveness, OutcomeDimension, Tradition};

/// Columns every export must have.
pub const REQUIRED_COLUMNS: [&str; 4] = ["id", "name", "origin", "description"];

/// Parse a full CSV export into records.
///
/// Rows without an `id` are skipped. The header row must contain every
/// column in [`REQUIRED_COLUMNS`].
pub fn parse_traditions_csv(csv_text: &str) -> Result<Vec<Tradition>, SyncError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SyncError::MissingColumns(missing));
    }

    let mut traditions = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = Row {
            headers: &headers,
            record: &record,
        };
        if row.get("id").is_empty() {
            tracing::debug!(row = idx + 2, "Skipping row without id");
            continue;
        }
        traditions.push(row.to_tradition());
    }

    tracing::info!(count = traditions.len(), "Parsed traditions from CSV");
    Ok(traditions)
}

/// Split a packed list cell, dropping empty pieces.
pub fn split_list(cell: &str, delimiter: char) -> Vec<String> {
    cell.split(delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Digits-only cells become the score as written; anything else is 0.
///
/// Out-of-range values are kept so that `validate` can report them.
pub fn parse_score(cell: &str) -> i32 {
    let cell = cell.trim();
    if cell.is_empty() || !cell.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    cell.parse::<i32>().unwrap_or(i32::MAX)
}

struct Row<'r> {
    headers: &'r StringRecord,
    record: &'r StringRecord,
}

impl<'r> Row<'r> {
    fn get(&self, column: &str) -> &'r str {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|idx| self.record.get(idx))
            .unwrap_or("")
    }

    fn to_tradition(&self) -> Tradition {
        let mut effectiveness = Effectiveness::default();
        for dim in OutcomeDimension::ALL {
            *effectiveness.score_mut(dim) = parse_score(self.get(dim.as_str()));
        }

        let mut t = Tradition::new(self.get("id"), self.get("name"))
            .with_origin(self.get("origin"))
            .with_year(self.get("yearOrigin").parse().unwrap_or(0))
            .with_effectiveness(effectiveness);
        t.parent_traditions = split_list(self.get("parentTraditions"), ',');
        t.description = self.get("description").to_string();
        t.practices = split_list(self.get("practices"), ',');
        t.time_commitment = self.get("timeCommitment").to_string();
        t.guidance_needed = self.get("guidanceNeeded").to_string();
        t.accessibility = self.get("accessibility").to_string();
        t.research_support = self.get("researchSupport").to_string();
        t.citations = split_list(self.get("citations"), '|');
        t
    }
}
