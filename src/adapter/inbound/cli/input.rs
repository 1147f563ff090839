//! JSON input files for the analysis commands.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{InputError, Result};

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&content).map_err(|source| InputError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(value)
}
