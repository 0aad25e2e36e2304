// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background loading of project and media lists.
//!
//! Each load runs on its own thread and reports back over a channel that the
//! UI polls once per frame. Only the most recently started load is kept: a
//! new request drops the receiver of the previous one, so a stale result is
//! discarded when it arrives.

use crate::io::serialization;
use crate::models::{media::MediaItem, project::Project};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};

/// Which kind of list a load reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Projects,
    Media,
}

/// What triggered a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Part of the startup sequence; failure halts the viewer.
    Startup,
    /// A project picked from the menu.
    Menu,
}

/// A successfully read list.
#[derive(Debug)]
pub enum LoadedList {
    Projects(Vec<Project>),
    Media(Vec<MediaItem>),
}

/// Result of a finished load.
#[derive(Debug)]
pub struct Finished {
    pub origin: LoadOrigin,
    pub result: Result<LoadedList>,
}

/// Runs list loads off the UI thread.
#[derive(Debug, Default)]
pub struct Loader {
    pending: Option<Receiver<Finished>>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start reading `path` in the background, replacing any pending load.
    pub fn start(&mut self, kind: ListKind, path: PathBuf, origin: LoadOrigin) {
        let (sender, receiver) = channel();
        self.pending = Some(receiver);
        log::info!("Loading {:?} list from {}", kind, path.display());

        std::thread::spawn(move || {
            let result = match kind {
                ListKind::Projects => serialization::import_projects(&path).map(LoadedList::Projects),
                ListKind::Media => serialization::import_media(&path).map(LoadedList::Media),
            };
            // The receiver is gone when a newer load replaced this one.
            let _ = sender.send(Finished { origin, result });
        });
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending result if it has arrived.
    pub fn poll(&mut self) -> Option<Finished> {
        let receiver = self.pending.as_ref()?;
        match receiver.try_recv() {
            Ok(finished) => {
                self.pending = None;
                Some(finished)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                None
            }
        }
    }

    /// Block until the pending load finishes.
    #[cfg(test)]
    pub fn wait(&mut self) -> Option<Finished> {
        let receiver = self.pending.take()?;
        receiver.recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_loads_media_in_background() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("media.json");
        fs::write(&path, r#"[{"type":"image","src":"a.jpg"}]"#).unwrap();

        let mut loader = Loader::new();
        loader.start(ListKind::Media, path, LoadOrigin::Menu);
        assert!(loader.is_loading());

        let finished = loader.wait().unwrap();
        assert_eq!(finished.origin, LoadOrigin::Menu);
        match finished.result.unwrap() {
            LoadedList::Media(items) => assert_eq!(items[0].src, "a.jpg"),
            other => panic!("unexpected list: {:?}", other),
        }
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_newer_load_replaces_pending() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");
        fs::write(&first, r#"[{"id":"a","name":"A","src":"a.json"}]"#).unwrap();
        fs::write(&second, r#"[{"type":"image","src":"b.jpg"}]"#).unwrap();

        let mut loader = Loader::new();
        loader.start(ListKind::Projects, first, LoadOrigin::Startup);
        loader.start(ListKind::Media, second, LoadOrigin::Menu);

        let finished = loader.wait().unwrap();
        assert!(matches!(finished.result, Ok(LoadedList::Media(_))));
        assert!(loader.poll().is_none());
    }

    #[test]
    fn test_failure_is_reported() {
        let dir = tempdir().unwrap();
        let mut loader = Loader::new();
        loader.start(ListKind::Projects, dir.path().join("missing.json"), LoadOrigin::Startup);
        let finished = loader.wait().unwrap();
        assert!(finished.result.is_err());
    }
}
