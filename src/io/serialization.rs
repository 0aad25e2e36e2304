// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project and media list deserialization.
//!
//! Lists are read from JSON or YAML files, chosen by extension. Anything
//! that is not `.yaml`/`.yml` is parsed as JSON.

use crate::models::{media::MediaItem, project::Project};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Read a list of projects.
pub fn import_projects(path: &Path) -> Result<Vec<Project>> {
    import_list(path)
}

/// Read a list of media items.
pub fn import_media(path: &Path) -> Result<Vec<MediaItem>> {
    import_list(path)
}

fn import_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let extension = path.extension().and_then(|s| s.to_str());
    let list = match extension {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse YAML {}", path.display()))?,
        _ => serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse JSON {}", path.display()))?,
    };
    Ok(list)
}

/// Resolve a list or media reference against the viewer's root directory.
pub fn resolve(root: &Path, reference: &str) -> PathBuf {
    let path = Path::new(reference);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
