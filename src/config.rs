// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command line arguments and viewer configuration.

use crate::viewer::Source;
use clap::Parser;
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Viewport widths at or below this many points use the mobile layout.
pub const DEFAULT_BREAKPOINT: f32 = 899.0;

const PROJECTS_FILE: &str = "projects.json";
const MEDIA_FILE: &str = "media.json";

/// Media slideshow and portfolio viewer.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// Project list (or media list with --single). Defaults to ./projects.json
    pub path: Option<PathBuf>,

    /// Treat PATH as a single media list without a project menu
    #[arg(long)]
    pub single: bool,

    /// Initial project, as a location fragment (`#id`) or a bare id
    #[arg(short, long)]
    pub project: Option<String>,

    /// Mobile layout breakpoint in logical points
    #[arg(long, default_value_t = DEFAULT_BREAKPOINT)]
    pub breakpoint: f32,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log level for the given verbosity.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// The file named on the command line, or the default file in the
    /// working directory if it exists.
    pub fn source_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.path {
            return Some(path.clone());
        }
        let default = PathBuf::from(if self.single { MEDIA_FILE } else { PROJECTS_FILE });
        default.exists().then_some(default)
    }
}

/// Resolved viewer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Directory that list and media references resolve against.
    pub root: PathBuf,
    pub source: Source,
    pub initial_fragment: Option<String>,
    pub breakpoint: f32,
}

impl ViewerConfig {
    pub fn new(path: &Path, cli: &Cli) -> Self {
        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let source = if cli.single {
            Source::Media(file)
        } else {
            Source::Projects(file)
        };
        Self {
            root,
            source,
            initial_fragment: cli.project.clone(),
            breakpoint: cli.breakpoint,
        }
    }

    /// Whether a viewport of `width` points uses the mobile layout.
    pub fn is_mobile(&self, width: f32) -> bool {
        width <= self.breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let cli = Cli::parse_from(["folio", "site/projects.yaml", "--project", "#beta", "-vv"]);
        assert_eq!(cli.path, Some(PathBuf::from("site/projects.yaml")));
        assert_eq!(cli.project.as_deref(), Some("#beta"));
        assert_eq!(cli.breakpoint, DEFAULT_BREAKPOINT);
        assert_eq!(cli.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn test_config_splits_root_and_source() {
        let cli = Cli::parse_from(["folio", "site/projects.json"]);
        let config = ViewerConfig::new(Path::new("site/projects.json"), &cli);
        assert_eq!(config.root, PathBuf::from("site"));
        assert_eq!(config.source, Source::Projects("projects.json".into()));
        assert_eq!(config.initial_fragment, None);
    }

    #[test]
    fn test_single_media_source() {
        let cli = Cli::parse_from(["folio", "--single", "media.json", "--breakpoint", "600"]);
        let config = ViewerConfig::new(Path::new("media.json"), &cli);
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.source, Source::Media("media.json".into()));
        assert!(config.is_mobile(600.0));
        assert!(!config.is_mobile(601.0));
    }
}
