//! Where a spreadsheet export comes from.

use std::path::PathBuf;

use async_trait::async_trait;

use super::error::SyncError;
use crate::config::SheetConfig;

/// A provider of CSV text in the sheet layout.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Human-readable source description for logs.
    fn name(&self) -> String;

    /// Fetch the whole export as text.
    async fn fetch_csv(&self) -> Result<String, SyncError>;
}

/// Fetches a published sheet over HTTP.
pub struct HttpSheetSource {
    config: SheetConfig,
    client: reqwest::Client,
}

impl HttpSheetSource {
    pub fn new(config: SheetConfig) -> Result<Self, SyncError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl SheetSource for HttpSheetSource {
    fn name(&self) -> String {
        self.config.url.clone()
    }

    async fn fetch_csv(&self) -> Result<String, SyncError> {
        tracing::debug!(url = %self.config.url, "Fetching sheet export");
        let response = self.client.get(&self.config.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status {
                status: status.as_u16(),
                url: self.config.url.clone(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Reads a CSV export saved on disk, e.g. `data/traditions-template.csv`.
pub struct FileSheetSource {
    path: PathBuf,
}

impl FileSheetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SheetSource for FileSheetSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_csv(&self) -> Result<String, SyncError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SyncError::Io {
                path: self.path.display().to_string(),
                source,
            })
    }
}
