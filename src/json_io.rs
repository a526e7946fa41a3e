// src/json_io.rs
//! Reading and writing the JSON files the pipeline consumes and produces.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DepGraphError, Result};

/// Reads and deserializes a JSON file.
///
/// # Errors
/// `NotFound` if the path does not exist, `Malformed` if the content does
/// not match `T`, `Io` if the file cannot be read.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(DepGraphError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| DepGraphError::io(e, path))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            DepGraphError::io(source.into(), path)
        } else {
            DepGraphError::Malformed {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// A serialized file sitting next to its target, not yet moved into place.
#[derive(Debug)]
pub struct StagedFile {
    temp: PathBuf,
    target: PathBuf,
}

impl StagedFile {
    /// Renames the temp file onto the target. The temp file is removed on failure.
    ///
    /// # Errors
    /// Returns `Io` if the rename fails.
    pub fn commit(self) -> Result<PathBuf> {
        if let Err(e) = fs::rename(&self.temp, &self.target) {
            let _ = fs::remove_file(&self.temp);
            return Err(DepGraphError::io(e, &self.target));
        }
        Ok(self.target)
    }

    /// Drops the temp file without touching the target.
    pub fn discard(self) {
        let _ = fs::remove_file(&self.temp);
    }
}

/// Serializes `value` to a temp file beside `path`, creating parent
/// directories as needed. Nothing is visible at `path` until `commit`.
///
/// # Errors
/// Returns `Io` if the directory or temp file cannot be written.
pub fn stage_json<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    pretty: bool,
) -> Result<StagedFile> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DepGraphError::io(e, parent))?;
    }

    let temp = temp_path(path);
    let staged = StagedFile {
        temp: temp.clone(),
        target: path.to_path_buf(),
    };
    if let Err(e) = write_to(&temp, value, pretty) {
        staged.discard();
        return Err(e);
    }
    Ok(staged)
}

fn write_to<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let file = File::create(path).map_err(|e| DepGraphError::io(e, path))?;
    let mut writer = BufWriter::new(file);
    let written = if pretty {
        serde_json::to_writer_pretty(&mut writer, value)
    } else {
        serde_json::to_writer(&mut writer, value)
    };
    written.map_err(|e| DepGraphError::io(e.into(), path))?;
    writer.flush().map_err(|e| DepGraphError::io(e, path))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map_or_else(OsString::new, OsString::from);
    name.push(".tmp");
    path.with_file_name(name)
}
