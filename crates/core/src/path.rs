//! Function path parsing.
//!
//! A function path names the dispatch target: `container:member` with an
//! optional trailing modes segment, `container:member:modes`. The
//! container part may also be written as a filesystem-style path
//! (`tools/env.rs:cwd`), which is normalized into a dotted container id.

use crate::error::{Error, Result};

/// Extension stripped when a filesystem-style path is normalized.
const SOURCE_EXTENSION: &str = ".rs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub container_id: String,
    pub member_name: String,
    pub modes_text: Option<String>,
}

impl ResolvedPath {
    /// The `container:member` label rendered templates identify the
    /// entrypoint by.
    pub fn label(&self) -> String {
        format!("{}:{}", self.container_id, self.member_name)
    }
}

/// Splits a raw function path into its components. Components are
/// whitespace-trimmed; empty components produced by stray colons are
/// dropped before counting.
pub fn parse(raw_path: &str) -> Result<ResolvedPath> {
    let components: Vec<&str> = raw_path
        .split(':')
        .map(str::trim)
        .filter(|component| !component.is_empty())
        .collect();

    if components.len() < 2 || components.len() > 3 {
        return Err(Error::InvalidPathFormat(raw_path.to_string()));
    }

    let container_id = normalize_container(components[0]);
    let member_name = components[1].to_string();

    if container_id.is_empty() {
        return Err(Error::MissingContainer);
    }
    if member_name.is_empty() {
        return Err(Error::MissingMember);
    }

    Ok(ResolvedPath {
        container_id,
        member_name,
        modes_text: components.get(2).map(|modes| (*modes).to_string()),
    })
}

/// Normalizes a filesystem-style component into a dotted container id:
/// `~` expands, a trailing source extension is dropped and `/` becomes
/// `.`. Components without a `/` pass through unchanged.
fn normalize_container(component: &str) -> String {
    if !component.contains('/') {
        return component.to_string();
    }

    let expanded = shellexpand::tilde(component).to_string();
    let without_extension = expanded
        .strip_suffix(SOURCE_EXTENSION)
        .unwrap_or(&expanded);

    without_extension.trim_matches('/').replace('/', ".")
}
