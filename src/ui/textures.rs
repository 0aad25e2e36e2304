// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Texture cache for stage media.
//!
//! Images are decoded on a background thread the first time a path is
//! requested and kept as egui textures afterwards.

use crate::io::media::{load_image, LoadedImage};
use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};

/// Availability of a texture.
pub enum TextureState<'a> {
    Ready(&'a egui::TextureHandle),
    Loading,
    Failed,
}

enum Slot {
    Pending(Receiver<Result<LoadedImage>>),
    Ready(egui::TextureHandle),
    Failed,
}

/// Decoded textures keyed by resolved path.
#[derive(Default)]
pub struct TextureCache {
    slots: HashMap<PathBuf, Slot>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the texture for `path`, starting a decode if needed.
    pub fn get(&mut self, ctx: &egui::Context, path: &Path) -> TextureState<'_> {
        if !self.slots.contains_key(path) {
            self.slots.insert(path.to_path_buf(), Self::spawn_decode(ctx, path));
        }

        let Some(slot) = self.slots.get_mut(path) else {
            return TextureState::Failed;
        };

        let finished = match slot {
            Slot::Pending(receiver) => match receiver.try_recv() {
                Ok(Ok(loaded)) => {
                    let size = [loaded.width as usize, loaded.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                    let texture = ctx.load_texture(
                        path.to_string_lossy(),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    );
                    log::debug!("Loaded texture {} ({}x{})", path.display(), loaded.width, loaded.height);
                    Some(Slot::Ready(texture))
                }
                Ok(Err(e)) => {
                    log::error!("{:#}", e);
                    Some(Slot::Failed)
                }
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(Slot::Failed),
            },
            _ => None,
        };
        if let Some(next) = finished {
            *slot = next;
        }

        match slot {
            Slot::Ready(texture) => TextureState::Ready(texture),
            Slot::Pending(_) => TextureState::Loading,
            Slot::Failed => TextureState::Failed,
        }
    }

    fn spawn_decode(ctx: &egui::Context, path: &Path) -> Slot {
        let (sender, receiver) = channel();
        let ctx = ctx.clone();
        let path = path.to_path_buf();
        std::thread::spawn(move || {
            let _ = sender.send(load_image(&path));
            ctx.request_repaint();
        });
        Slot::Pending(receiver)
    }
}
