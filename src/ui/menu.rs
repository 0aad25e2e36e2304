// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project menus.
//!
//! Wide viewports list projects in a side panel. Narrow ones use a
//! full-window overlay opened from the bottom "Index" button.

use crate::models::project::Project;

/// Result of menu interaction.
pub enum MenuAction {
    None,
    Select(String),
    Close,
}

/// Display the project entries, highlighting the active one.
fn project_list(ui: &mut egui::Ui, projects: &[Project], active: Option<&str>) -> MenuAction {
    let mut action = MenuAction::None;
    for project in projects {
        let is_active = active == Some(project.id.as_str());
        if ui.selectable_label(is_active, project.name.as_str()).clicked() {
            action = MenuAction::Select(project.id.clone());
        }
    }
    action
}

/// Display the desktop side panel.
pub fn show_side_panel(ctx: &egui::Context, projects: &[Project], active: Option<&str>) -> MenuAction {
    egui::SidePanel::left("projects")
        .default_width(200.0)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            project_list(ui, projects, active)
        })
        .inner
}

/// Display the bottom "Index" button. Returns whether it was clicked and
/// where it is.
pub fn show_index_button(ctx: &egui::Context) -> (bool, egui::Rect) {
    egui::TopBottomPanel::bottom("index_bar")
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let response = ui.button("Index");
                (response.clicked(), response.rect)
            })
            .inner
        })
        .inner
}

/// Display the mobile overlay. Returns the action and the content rect;
/// everything outside the content rect is backdrop.
pub fn show_overlay(
    ctx: &egui::Context,
    projects: &[Project],
    active: Option<&str>,
) -> (MenuAction, egui::Rect) {
    let screen = ctx.screen_rect();
    let content = egui::Rect::from_center_size(
        screen.center(),
        egui::vec2(
            (screen.width() - 32.0).clamp(0.0, 360.0),
            screen.height() * 0.75,
        ),
    );

    let action = egui::Area::new(egui::Id::new("menu_overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let painter = ui.painter();
            painter.rect_filled(screen, 0.0, egui::Color32::from_black_alpha(210));
            painter.rect_filled(content, 6.0, egui::Color32::from_gray(24));

            ui.allocate_ui_at_rect(content.shrink(12.0), |ui| {
                let mut action = MenuAction::None;
                ui.horizontal(|ui| {
                    if ui.button("Index").clicked() {
                        action = MenuAction::Close;
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            action = MenuAction::Close;
                        }
                    });
                });
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if let MenuAction::Select(id) = project_list(ui, projects, active) {
                        action = MenuAction::Select(id);
                    }
                });
                action
            })
            .inner
        })
        .inner;

    (action, content)
}
