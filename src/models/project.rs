// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project metadata.
//!
//! A project names one media list. The project list is loaded once at
//! startup and is read-only afterwards.

use serde::Deserialize;

/// A portfolio project entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Location of the project's media list.
    pub src: String,
}

impl Project {
    #[cfg(test)]
    pub fn new(id: impl Into<String>, name: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            src: src.into(),
        }
    }
}

/// Find the project with `id`, falling back to the first project.
pub fn find_or_first<'a>(projects: &'a [Project], id: Option<&str>) -> Option<&'a Project> {
    id.and_then(|id| projects.iter().find(|p| p.id == id))
        .or_else(|| projects.first())
}
