// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module converts fractional stage offsets to absolute ones and
//! computes where media of a given size lands on the stage for each fit mode.

use crate::models::media::Fit;

/// Measured size of the stage in logical points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StageSize {
    pub width: f32,
    pub height: f32,
}

impl StageSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An absolute offset in logical points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

/// Placement of media relative to the stage's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Convert fractional offsets (of stage width/height) to absolute offsets.
pub fn denormalize_offset(x: f64, y: f64, stage: StageSize) -> Offset {
    Offset {
        x: (x * stage.width as f64) as f32,
        y: (y * stage.height as f64) as f32,
    }
}

/// Place media of `media_width` x `media_height` on the stage.
///
/// The fitted rect is centred, scaled about its centre by `scale`, then
/// translated by `offset`. Degenerate media sizes fill the stage.
pub fn place_media(
    media_width: f32,
    media_height: f32,
    stage: StageSize,
    fit: Fit,
    scale: f32,
    offset: Offset,
) -> Placement {
    let (width, height) = if media_width <= 0.0 || media_height <= 0.0 || stage.height <= 0.0 {
        (stage.width, stage.height)
    } else {
        let media_aspect = media_width / media_height;
        let stage_aspect = stage.width / stage.height;
        // Contain fits the constraining side, cover the other one.
        let fit_to_width = match fit {
            Fit::Contain => media_aspect > stage_aspect,
            Fit::Cover => media_aspect <= stage_aspect,
        };
        if fit_to_width {
            (stage.width, stage.width / media_aspect)
        } else {
            (stage.height * media_aspect, stage.height)
        }
    };

    let width = width * scale;
    let height = height * scale;
    Placement {
        x: (stage.width - width) / 2.0 + offset.x,
        y: (stage.height - height) / 2.0 + offset.y,
        width,
        height,
    }
}
