//! File-backed storage for the traditions document.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::error::DatasetError;
use super::tradition::TraditionsDocument;

/// Default location of the dataset, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/traditions.json";

/// Mode given to a dataset file that did not exist before.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Reads and replaces a single JSON dataset file.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    path: PathBuf,
}

impl DatasetStore {
    /// Create a store for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load and parse the document.
    pub fn load(&self) -> Result<TraditionsDocument, DatasetError> {
        let content = fs::read_to_string(&self.path).map_err(|source| DatasetError::Io {
            path: self.path.clone(),
            source,
        })?;
        let doc: TraditionsDocument =
            serde_json::from_str(&content).map_err(|source| DatasetError::Json {
                path: self.path.clone(),
                source,
            })?;
        tracing::info!(
            path = %self.path.display(),
            count = doc.traditions.len(),
            "Loaded traditions dataset"
        );
        Ok(doc)
    }

    /// Replace the file with `doc`, pretty-printed.
    ///
    /// The content goes to a temporary file in the same directory first and
    /// is renamed into place, so readers never observe a partial write.
    pub fn save(&self, doc: &TraditionsDocument) -> Result<(), DatasetError> {
        let mut content = serde_json::to_string_pretty(doc)?;
        content.push('\n');

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let io_err = |source| DatasetError::Io {
            path: self.path.clone(),
            source,
        };
        fs::create_dir_all(&dir).map_err(io_err)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(io_err)?;
        tmp.write_all(content.as_bytes()).map_err(io_err)?;
        tmp.flush().map_err(io_err)?;
        tmp.as_file()
            .set_permissions(self.target_permissions(tmp.as_file()).map_err(io_err)?)
            .map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;

        tracing::info!(
            path = %self.path.display(),
            count = doc.traditions.len(),
            "Wrote traditions dataset"
        );
        Ok(())
    }

    /// Mode for the replacement file: the existing file's, or 0644 when new.
    fn target_permissions(&self, tmp: &fs::File) -> std::io::Result<fs::Permissions> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.permissions()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                #[allow(unused_mut)]
                let mut perms = tmp.metadata()?.permissions();
                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    perms.set_mode(NEW_FILE_MODE);
                }
                Ok(perms)
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}
