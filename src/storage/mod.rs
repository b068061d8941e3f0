//! Persistent storage
//!
//! This module handles persistence of user settings. Conversations are
//! deliberately not persisted; the conversation identifier lives only for
//! the UI session.

pub mod settings;

use std::path::PathBuf;

use directories::ProjectDirs;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not determine application data directory")]
    NoDataDir,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Get the application data directory, creating it if needed
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    let dirs = ProjectDirs::from("dev", "banter", "banter").ok_or(StorageError::NoDataDir)?;
    let dir = dirs.data_dir().to_path_buf();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
