//! spendquest-storage-json
//!
//! Filesystem-backed key-value store for the persisted collections. Each
//! key maps to one `<key>.json` document under the data directory, replaced
//! atomically on every write (stage to a temporary file, then rename) so a
//! failed write never leaves a half-written document behind.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use spendquest_core::{CoreError, KeyValueStore};

const DOC_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Stores each collection as a JSON document under a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&data_dir).map_err(io_error)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn document_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", key, DOC_EXTENSION))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let path = self.document_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path).map(Some).map_err(io_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let path = self.document_path(key);
        let tmp = tmp_path(&path);
        write_all(&tmp, value)?;
        fs::rename(&tmp, &path).map_err(io_error)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let mut file = File::create(path).map_err(io_error)?;
    file.write_all(data.as_bytes()).map_err(io_error)?;
    file.flush().map_err(io_error)?;
    Ok(())
}

fn io_error(err: std::io::Error) -> CoreError {
    CoreError::Storage(err.to_string())
}
