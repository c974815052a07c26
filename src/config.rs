//! Runtime configuration for the spreadsheet sync.
//!
//! Values come from command-line flags or their environment variables:
//!
//! - `TRADITIONS_DATA` — dataset path (default `data/traditions.json`)
//! - `TRADITIONS_SHEET_ID` — Google Sheet id; the sheet must be published as CSV
//! - `TRADITIONS_SHEET_URL` — full CSV export URL, overrides the sheet id
//! - `RUST_LOG` — tracing filter (default `info`)

use std::time::Duration;

/// Default HTTP timeout for the sheet export.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Build the published CSV export URL for a Google Sheet.
pub fn sheet_export_url(sheet_id: &str) -> String {
    format!(
        "https://docs.google.com/spreadsheets/d/{}/export?format=csv&gid=0",
        sheet_id
    )
}

/// Where and how to fetch the spreadsheet export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    pub url: String,
    pub timeout: Duration,
}

impl SheetConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Resolve from an explicit URL or a sheet id; the URL wins.
    pub fn resolve(url: Option<&str>, sheet_id: Option<&str>) -> Option<Self> {
        match (url, sheet_id) {
            (Some(url), _) if !url.trim().is_empty() => Some(Self::new(url.trim())),
            (_, Some(id)) if !id.trim().is_empty() => Some(Self::new(sheet_export_url(id.trim()))),
            _ => None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
