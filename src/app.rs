// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the viewer state, the stage and the background loader,
//! translates egui input into viewer events and runs the commands the
//! viewer returns.

use crate::config::ViewerConfig;
use crate::io::{loader::Loader, serialization::resolve};
use crate::ui::{menu, stage::EguiStage, tracker};
use crate::viewer::{Command, Event, KeyInput, PointerTarget, ViewerState};

const APP_TITLE: &str = "folio";

/// Keys and the navigation they trigger.
const KEY_BINDINGS: [(egui::Key, KeyInput); 6] = [
    (egui::Key::Space, KeyInput::Next),
    (egui::Key::ArrowRight, KeyInput::Next),
    (egui::Key::ArrowDown, KeyInput::Next),
    (egui::Key::ArrowLeft, KeyInput::Previous),
    (egui::Key::ArrowUp, KeyInput::Previous),
    (egui::Key::Escape, KeyInput::Escape),
];

/// Main application state.
pub struct FolioApp {
    config: ViewerConfig,
    state: ViewerState,
    stage: EguiStage,
    loader: Loader,

    /// Where the "Index" button was last drawn
    index_button_rect: Option<egui::Rect>,

    /// Content area of the open overlay, as last drawn
    overlay_rect: Option<egui::Rect>,

    /// Window title currently applied
    title: String,
}

impl FolioApp {
    /// Create the application and start loading its source.
    pub fn new(config: ViewerConfig) -> Self {
        let state = ViewerState::new(config.initial_fragment.clone());
        let stage = EguiStage::new(config.root.clone());
        let command = state.start(&config.source);

        let mut app = Self {
            config,
            state,
            stage,
            loader: Loader::new(),
            index_button_rect: None,
            overlay_rect: None,
            title: APP_TITLE.to_string(),
        };
        app.run(Some(command));
        app
    }

    fn run(&mut self, command: Option<Command>) {
        let Some(Command::Load { kind, src, origin }) = command else {
            return;
        };
        let path = resolve(&self.config.root, &src);
        self.loader.start(kind, path, origin);
    }

    fn dispatch(&mut self, event: Event) {
        let command = self.state.handle(event, &mut self.stage);
        self.run(command);
    }

    /// Classify a pointer press by the rects drawn last frame.
    fn pointer_target(&self, pos: egui::Pos2) -> PointerTarget {
        if self.state.overlay_visible() {
            return match self.overlay_rect {
                Some(rect) if rect.contains(pos) => PointerTarget::Overlay,
                _ => PointerTarget::Backdrop,
            };
        }
        match self.index_button_rect {
            Some(rect) if rect.contains(pos) => PointerTarget::IndexButton,
            _ => PointerTarget::Stage,
        }
    }

    fn collect_input(&self, ctx: &egui::Context) -> Vec<Event> {
        let mut events = Vec::new();

        if let Some(pos) = ctx.input(|i| {
            if i.pointer.any_pressed() {
                i.pointer.press_origin()
            } else {
                None
            }
        }) {
            events.push(Event::PointerDown(self.pointer_target(pos)));
        }

        if !ctx.wants_keyboard_input() {
            ctx.input(|i| {
                for (key, input) in KEY_BINDINGS {
                    if i.key_pressed(key) {
                        events.push(Event::Key(input));
                    }
                }
            });
        }

        events
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        let title = match self.state.fragment() {
            Some(fragment) => format!("{} {}", APP_TITLE, fragment),
            None => APP_TITLE.to_string(),
        };
        if title != self.title {
            log::info!("Location {}", self.state.fragment().unwrap_or_default());
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.set_mobile(self.config.is_mobile(ctx.screen_rect().width()));

        for event in self.collect_input(ctx) {
            self.dispatch(event);
        }

        let has_menu = !self.state.projects().is_empty();
        let mut action = menu::MenuAction::None;

        if has_menu && !self.state.is_mobile() {
            action = menu::show_side_panel(ctx, self.state.projects(), self.state.active_project());
        }

        self.index_button_rect = None;
        if has_menu && self.state.is_mobile() {
            let (clicked, rect) = menu::show_index_button(ctx);
            self.index_button_rect = Some(rect);
            if clicked {
                self.dispatch(Event::OpenIndex);
            }
        }

        egui::TopBottomPanel::bottom("tracker").show(ctx, |ui| {
            tracker::show(ui, self.stage.tracker());
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = self.stage.show(ui);
                if !self.state.is_ready() && !self.state.is_failed() {
                    ui.put(
                        egui::Rect::from_center_size(rect.center(), egui::vec2(24.0, 24.0)),
                        egui::Spinner::new(),
                    );
                }
            });

        self.overlay_rect = None;
        if self.state.overlay_visible() {
            let (overlay_action, rect) =
                menu::show_overlay(ctx, self.state.projects(), self.state.active_project());
            self.overlay_rect = Some(rect);
            if !matches!(overlay_action, menu::MenuAction::None) {
                action = overlay_action;
            }
        }

        // Handle menu actions
        match action {
            menu::MenuAction::Select(id) => self.dispatch(Event::SelectProject(id)),
            menu::MenuAction::Close => self.dispatch(Event::CloseMenu),
            menu::MenuAction::None => {}
        }

        // Check for completed list loading, once the stage has been measured
        if let Some(finished) = self.loader.poll() {
            let command = self.state.finish(finished, &mut self.stage);
            self.run(command);
            ctx.request_repaint();
        }

        // Request repaint while loading so the result is picked up
        if self.loader.is_loading() {
            ctx.request_repaint();
        }

        self.update_title(ctx);
    }
}
