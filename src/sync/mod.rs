//! Spreadsheet sync: rebuild the dataset from a published CSV export.
//!
//! A sync replaces the whole document. It does not merge with what is on
//! disk, and the standard `dimensions` and `scale` blocks are written
//! fresh. The file is only touched after the fetch and parse both
//! succeed.
//!
//! ```text
//! SheetSource::fetch_csv()      (HTTP export or local file)
//!   ↓  parse_traditions_csv()
//! Vec<Tradition>
//!   ↓  TraditionsDocument::with_traditions()
//!   ↓  DatasetStore::save()     (atomic replace)
//! ```

pub mod csv_import;
pub mod error;
pub mod source;

pub use csv_import::{parse_traditions_csv, REQUIRED_COLUMNS};
pub use error::SyncError;
pub use source::{FileSheetSource, HttpSheetSource, SheetSource};

use crate::dataset::{DatasetStore, TraditionsDocument};

/// Fetch, parse and write. Returns the number of records written.
pub async fn sync_dataset(
    source: &dyn SheetSource,
    store: &DatasetStore,
) -> Result<usize, SyncError> {
    tracing::info!(source = %source.name(), "Fetching traditions sheet");
    let csv_text = source.fetch_csv().await?;

    let traditions = parse_traditions_csv(&csv_text)?;
    let count = traditions.len();

    let doc = TraditionsDocument::with_traditions(traditions);
    store.save(&doc)?;

    tracing::info!(count, path = %store.path().display(), "Sync complete");
    Ok(count)
}
