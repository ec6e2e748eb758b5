//! Persistence of the last dispatched invocation.
//!
//! After a successful dispatch the CLI records the function path and the
//! forwarded arguments as YAML, so `--rerun-last` can replay them.

use std::fs::{self, File};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LastInvocation {
    pub path: String,
    pub forwarded: Vec<String>,
}

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Reads the last dispatched invocation from disk. Returns `None` if the
/// file does not exist yet.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or contains
/// YAML that does not match the expected structure.
pub fn get_last_invocation(history_path: &str) -> Result<Option<LastInvocation>> {
    if !Path::new(history_path).exists() {
        return Ok(None);
    }

    let reader = get_reader("history", history_path)?;

    let parsed: serde_yaml::Result<LastInvocation> = serde_yaml::from_reader(reader);
    match parsed {
        Ok(invocation) => Ok(Some(invocation)),
        Err(e) => Err(Error::yaml_error(
            "reading".to_string(),
            "history".to_string(),
            history_path.to_string(),
            e,
        )),
    }
}

/// Writes the last dispatched invocation to disk, creating the parent
/// directory if needed.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to, or if
/// serialization to YAML fails.
pub fn write_last_invocation(history_path: &str, invocation: &LastInvocation) -> Result<()> {
    if let Some(parent) = Path::new(history_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io_error("history".to_string(), history_path.to_string(), e)
            })?;
        }
    }

    let file = File::create(history_path)
        .map_err(|e| Error::io_error("history".to_string(), history_path.to_string(), e))?;

    serde_yaml::to_writer(file, invocation).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "history".to_string(),
            history_path.to_string(),
            e,
        )
    })
}
