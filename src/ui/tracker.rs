// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Position indicator below the stage.

use crate::navigator::Tracker;

const DOT_RADIUS: f32 = 4.0;
const DOT_SPACING: f32 = 14.0;

/// Display one dot per item, or the tracker message.
pub fn show(ui: &mut egui::Ui, tracker: &Tracker) {
    match tracker {
        Tracker::Message(message) => {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(message).color(egui::Color32::from_gray(200)));
            });
        }
        Tracker::Markers { count, active } => {
            let width = *count as f32 * DOT_SPACING;
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), DOT_SPACING + 6.0),
                egui::Sense::hover(),
            );
            let painter = ui.painter_at(rect);
            let start_x = rect.center().x - width / 2.0 + DOT_SPACING / 2.0;

            for i in 0..*count {
                let center = egui::pos2(start_x + i as f32 * DOT_SPACING, rect.center().y);
                let color = if i == *active {
                    egui::Color32::WHITE
                } else {
                    egui::Color32::from_gray(90)
                };
                painter.circle_filled(center, DOT_RADIUS, color);
            }
        }
    }
}
