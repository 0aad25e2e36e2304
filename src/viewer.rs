// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewer state and input handling.
//!
//! [`ViewerState`] holds everything the slideshow mutates: the navigator,
//! the project list, the active project, the location fragment and the menu
//! overlay. Input arrives as [`Event`]s; [`ViewerState::handle`] applies
//! one event, renders through the given [`Surface`], and returns a
//! [`Command`] when I/O is needed.

use crate::io::loader::{Finished, ListKind, LoadOrigin, LoadedList};
use crate::models::project::{find_or_first, Project};
use crate::navigator::{Navigator, Surface, Tracker};
use crate::util::fragment;

/// Tracker text shown when startup fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load projects/media JSON.";

/// Where a pointer press landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The stage or any other part of the window.
    Stage,
    /// The bottom "Index" button.
    IndexButton,
    /// The dark area around the open menu overlay.
    Backdrop,
    /// Inside the open menu overlay.
    Overlay,
}

/// Keyboard input the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Space, right or down arrow.
    Next,
    /// Left or up arrow.
    Previous,
    Escape,
}

/// A discrete input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    PointerDown(PointerTarget),
    Key(KeyInput),
    /// The "Index" button was clicked.
    OpenIndex,
    /// A close control inside the overlay was clicked.
    CloseMenu,
    /// A project menu entry was clicked.
    SelectProject(String),
}

/// I/O requested by the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load {
        kind: ListKind,
        src: String,
        origin: LoadOrigin,
    },
}

/// Where the viewer reads its content from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A project list; each project names its own media list.
    Projects(String),
    /// A single media list without a menu.
    Media(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Starting,
    Ready,
    Failed,
}

/// All mutable slideshow state.
#[derive(Debug)]
pub struct ViewerState {
    navigator: Navigator,
    projects: Vec<Project>,
    active_project: Option<String>,
    /// Fragment given at startup.
    initial_fragment: Option<String>,
    /// Fragment written by manual project selection.
    fragment: Option<String>,
    menu_open: bool,
    mobile: bool,
    phase: Phase,
}

impl ViewerState {
    pub fn new(initial_fragment: Option<String>) -> Self {
        Self {
            navigator: Navigator::new(),
            projects: Vec::new(),
            active_project: None,
            initial_fragment,
            fragment: None,
            menu_open: false,
            mobile: false,
            phase: Phase::Starting,
        }
    }

    /// First command of the startup sequence.
    pub fn start(&self, source: &Source) -> Command {
        let (kind, src) = match source {
            Source::Projects(src) => (ListKind::Projects, src),
            Source::Media(src) => (ListKind::Media, src),
        };
        Command::Load {
            kind,
            src: src.clone(),
            origin: LoadOrigin::Startup,
        }
    }

    #[cfg(test)]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn active_project(&self) -> Option<&str> {
        self.active_project.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    #[cfg(test)]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether the menu overlay is shown; it only exists on narrow viewports.
    pub fn overlay_visible(&self) -> bool {
        self.mobile && self.menu_open
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn is_failed(&self) -> bool {
        self.phase == Phase::Failed
    }

    /// Update the narrow-viewport flag.
    pub fn set_mobile(&mut self, mobile: bool) {
        self.mobile = mobile;
    }

    /// Apply one input event.
    pub fn handle(&mut self, event: Event, surface: &mut impl Surface) -> Option<Command> {
        match (self.phase, &event) {
            (Phase::Ready, _) => {}
            // Menu entries work as soon as the project list is in; the
            // selection then takes over the startup load.
            (Phase::Starting, Event::SelectProject(id)) if !self.projects.is_empty() => {
                return self.select_project(Some(id.as_str()), true, LoadOrigin::Startup);
            }
            _ => return None,
        }

        match event {
            Event::PointerDown(target) => {
                if self.overlay_visible() {
                    if target == PointerTarget::Backdrop {
                        self.close_menu();
                    }
                    return None;
                }
                if target != PointerTarget::IndexButton {
                    self.navigator.advance(surface);
                }
                None
            }
            Event::Key(KeyInput::Next) => {
                self.navigator.advance(surface);
                None
            }
            Event::Key(KeyInput::Previous) => {
                self.navigator.retreat(surface);
                None
            }
            Event::Key(KeyInput::Escape) | Event::CloseMenu => {
                self.close_menu();
                None
            }
            Event::OpenIndex => {
                self.open_menu();
                None
            }
            Event::SelectProject(id) => self.select_project(Some(id.as_str()), true, LoadOrigin::Menu),
        }
    }

    /// Apply the result of a background load.
    pub fn finish(&mut self, finished: Finished, surface: &mut impl Surface) -> Option<Command> {
        let Finished { origin, result } = finished;
        let list = match result {
            Ok(list) => list,
            Err(e) => {
                log::error!("{:#}", e);
                if origin == LoadOrigin::Startup {
                    self.fail(surface);
                }
                return None;
            }
        };

        match list {
            LoadedList::Projects(projects) => {
                log::info!("Loaded {} projects", projects.len());
                self.projects = projects;
                let initial = match self.initial_fragment.as_deref().map(fragment::parse) {
                    Some(Ok(id)) => id,
                    Some(Err(e)) => {
                        log::error!("{:#}", e);
                        self.fail(surface);
                        return None;
                    }
                    None => None,
                };
                let command = self.select_project(initial.as_deref(), false, LoadOrigin::Startup);
                if command.is_none() {
                    // Nothing to show, but the viewer still becomes interactive.
                    self.phase = Phase::Ready;
                }
                command
            }
            LoadedList::Media(items) => {
                log::info!("Loaded {} media items", items.len());
                self.navigator.reset(items, surface);
                match origin {
                    LoadOrigin::Startup => self.phase = Phase::Ready,
                    LoadOrigin::Menu => {
                        if self.mobile {
                            self.close_menu();
                        }
                    }
                }
                None
            }
        }
    }

    fn select_project(
        &mut self,
        id: Option<&str>,
        push_fragment: bool,
        origin: LoadOrigin,
    ) -> Option<Command> {
        let project = find_or_first(&self.projects, id)?;
        log::info!("Selected project {} ({})", project.name, project.id);

        self.active_project = Some(project.id.clone());
        if push_fragment {
            self.fragment = Some(fragment::format(&project.id));
        }

        Some(Command::Load {
            kind: ListKind::Media,
            src: project.src.clone(),
            origin,
        })
    }

    fn open_menu(&mut self) {
        if self.mobile {
            self.menu_open = true;
        }
    }

    fn close_menu(&mut self) {
        self.menu_open = false;
    }

    fn fail(&mut self, surface: &mut impl Surface) {
        self.phase = Phase::Failed;
        surface.set_tracker(Tracker::Message(LOAD_FAILED_MESSAGE.to_string()));
    }
}
