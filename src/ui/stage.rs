// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Stage for slideshow display.
//!
//! The stage keeps every layer the navigator pushes and paints them in
//! order, each on top of the previous ones, clipped to the stage area.

use crate::io::serialization::resolve;
use crate::models::media::MediaKind;
use crate::navigator::{Layer, Surface, Tracker};
use crate::ui::textures::{TextureCache, TextureState};
use crate::util::geometry::{place_media, StageSize};
use std::path::PathBuf;

const BACKGROUND: egui::Color32 = egui::Color32::from_gray(12);

/// egui implementation of the presentation surface.
pub struct EguiStage {
    root: PathBuf,
    size: StageSize,
    layers: Vec<Layer>,
    tracker: Tracker,
    textures: TextureCache,
}

impl EguiStage {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            size: StageSize::default(),
            layers: Vec::new(),
            tracker: Tracker::default(),
            textures: TextureCache::new(),
        }
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Paint all layers into the remaining space of `ui`.
    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Rect {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        self.size = StageSize::new(rect.width(), rect.height());

        let ctx = ui.ctx().clone();
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, BACKGROUND);

        for layer in &self.layers {
            let item = &layer.item;
            let texture_src = match item.kind {
                MediaKind::Image => Some(item.src.as_str()),
                MediaKind::Video => item.poster.as_deref(),
            };
            let state = match texture_src {
                Some(src) => self.textures.get(&ctx, &resolve(&self.root, src)),
                None => TextureState::Failed,
            };
            let p = layer.presentation;

            match state {
                TextureState::Ready(texture) => {
                    let size = texture.size_vec2();
                    let placed = place_media(size.x, size.y, self.size, p.fit, p.scale, p.offset);
                    let media_rect = egui::Rect::from_min_size(
                        rect.min + egui::vec2(placed.x, placed.y),
                        egui::vec2(placed.width, placed.height),
                    );
                    painter.image(
                        texture.id(),
                        media_rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }
                TextureState::Loading => {}
                TextureState::Failed => {
                    let label = match item.kind {
                        MediaKind::Video => format!("▶ {}", item.src),
                        MediaKind::Image => item.alt().to_string(),
                    };
                    let placed = place_media(0.0, 0.0, self.size, p.fit, p.scale, p.offset);
                    let center = rect.min
                        + egui::vec2(placed.x + placed.width / 2.0, placed.y + placed.height / 2.0);
                    if item.kind == MediaKind::Video {
                        painter.rect_filled(
                            egui::Rect::from_center_size(center, egui::vec2(placed.width, placed.height)),
                            0.0,
                            egui::Color32::from_gray(30),
                        );
                    }
                    painter.text(
                        center,
                        egui::Align2::CENTER_CENTER,
                        label,
                        egui::FontId::proportional(16.0),
                        egui::Color32::from_gray(180),
                    );
                }
            }
        }

        rect
    }
}

impl Surface for EguiStage {
    fn size(&self) -> StageSize {
        self.size
    }

    fn clear_layers(&mut self) {
        self.layers.clear();
    }

    fn push_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    fn set_tracker(&mut self, tracker: Tracker) {
        self.tracker = tracker;
    }
}
