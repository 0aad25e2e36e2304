// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Slideshow navigation.
//!
//! The [`Navigator`] owns the current media list and a cursor into it.
//! Everything it displays goes through a [`Surface`], so the cursor logic
//! can be driven without a window.
//!
//! Navigating never removes layers from the surface: each step stacks a new
//! layer on top of the previous ones. Only [`Navigator::reset`] clears them.

use crate::models::media::{Fit, MediaItem};
use crate::util::geometry::{denormalize_offset, Offset, StageSize};

/// Wrap `n` into `[0, len)`. Returns 0 when `len` is 0.
pub fn wrap(n: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    n.rem_euclid(len as i64) as usize
}

/// Presentation parameters resolved for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub scale: f32,
    pub fit: Fit,
    /// Absolute offset, computed from the stage size at render time.
    pub offset: Offset,
}

impl Presentation {
    /// Resolve an item's presentation against the measured stage.
    pub fn resolve(item: &MediaItem, stage: StageSize) -> Self {
        Self {
            scale: item.scale() as f32,
            fit: item.fit(),
            offset: denormalize_offset(item.x(), item.y(), stage),
        }
    }
}

/// One rendered instance of a media item.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub item: MediaItem,
    pub presentation: Presentation,
}

/// Content of the position indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tracker {
    /// One marker per item, `active` flagged.
    Markers { count: usize, active: usize },
    /// Static text replacing the markers.
    Message(String),
}

impl Default for Tracker {
    fn default() -> Self {
        Tracker::Markers { count: 0, active: 0 }
    }
}

/// Display surface the navigator renders into.
pub trait Surface {
    /// Current stage size.
    fn size(&self) -> StageSize;

    /// Remove every layer.
    fn clear_layers(&mut self);

    /// Stack a layer on top of the existing ones.
    fn push_layer(&mut self, layer: Layer);

    /// Replace the tracker content.
    fn set_tracker(&mut self, tracker: Tracker);
}

/// Cursor over an ordered list of media items.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    items: Vec<MediaItem>,
    cursor: usize,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&MediaItem> {
        self.items.get(self.cursor)
    }

    /// Move to the next item, wrapping to the first.
    pub fn advance(&mut self, surface: &mut impl Surface) {
        self.step(1, surface);
    }

    /// Move to the previous item, wrapping to the last.
    pub fn retreat(&mut self, surface: &mut impl Surface) {
        self.step(-1, surface);
    }

    /// Replace the item list and start again from the first item.
    pub fn reset(&mut self, items: Vec<MediaItem>, surface: &mut impl Surface) {
        self.items = items;
        self.cursor = 0;
        surface.clear_layers();
        self.render_tracker(surface);
        self.render_current(surface);
    }

    fn step(&mut self, delta: i64, surface: &mut impl Surface) {
        if self.items.is_empty() {
            return;
        }
        self.cursor = wrap(self.cursor as i64 + delta, self.items.len());
        log::debug!("Showing item {} of {}", self.cursor + 1, self.items.len());
        self.render_tracker(surface);
        self.render_current(surface);
    }

    fn render_tracker(&self, surface: &mut impl Surface) {
        surface.set_tracker(Tracker::Markers {
            count: self.items.len(),
            active: self.cursor,
        });
    }

    fn render_current(&self, surface: &mut impl Surface) {
        let Some(item) = self.current() else {
            return;
        };
        let presentation = Presentation::resolve(item, surface.size());
        surface.push_layer(Layer {
            item: item.clone(),
            presentation,
        });
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Surface that records everything rendered into it.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub size: StageSize,
        pub layers: Vec<Layer>,
        pub tracker: Tracker,
        pub renders: usize,
    }

    impl RecordingSurface {
        pub fn new(width: f32, height: f32) -> Self {
            Self {
                size: StageSize::new(width, height),
                ..Default::default()
            }
        }

        pub fn last_src(&self) -> Option<&str> {
            self.layers.last().map(|l| l.item.src.as_str())
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> StageSize {
            self.size
        }

        fn clear_layers(&mut self) {
            self.layers.clear();
        }

        fn push_layer(&mut self, layer: Layer) {
            self.renders += 1;
            self.layers.push(layer);
        }

        fn set_tracker(&mut self, tracker: Tracker) {
            self.tracker = tracker;
        }
    }

    fn items(names: &[&str]) -> Vec<MediaItem> {
        names.iter().map(|n| MediaItem::image(*n)).collect()
    }

    proptest! {
        #[test]
        fn wrap_empty_is_zero(n in any::<i32>()) {
            prop_assert_eq!(wrap(n as i64, 0), 0);
        }

        #[test]
        fn wrap_stays_in_range(n in any::<i32>(), len in 1usize..1000) {
            prop_assert!(wrap(n as i64, len) < len);
        }

        #[test]
        fn advance_then_retreat_is_identity(len in 1usize..1000, seed in any::<usize>()) {
            let cursor = seed % len;
            let forward = wrap(cursor as i64 + 1, len);
            prop_assert_eq!(wrap(forward as i64 - 1, len), cursor);
        }
    }

    #[test]
    fn test_wrap_negative() {
        assert_eq!(wrap(-1, 3), 2);
        assert_eq!(wrap(-7, 3), 2);
        assert_eq!(wrap(3, 3), 0);
    }

    #[test]
    fn test_advance_on_empty_is_noop() {
        let mut nav = Navigator::new();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        nav.advance(&mut surface);
        nav.retreat(&mut surface);
        assert_eq!(nav.cursor(), 0);
        assert_eq!(surface.renders, 0);
        assert!(surface.layers.is_empty());
    }

    #[test]
    fn test_advance_wraps_around() {
        let mut nav = Navigator::new();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        nav.reset(items(&["A", "B", "C"]), &mut surface);
        assert_eq!(surface.last_src(), Some("A"));

        nav.advance(&mut surface);
        assert_eq!(nav.cursor(), 1);
        assert_eq!(surface.last_src(), Some("B"));

        nav.advance(&mut surface);
        assert_eq!(nav.cursor(), 2);
        assert_eq!(surface.last_src(), Some("C"));

        nav.advance(&mut surface);
        assert_eq!(nav.cursor(), 0);
        assert_eq!(surface.last_src(), Some("A"));
        assert_eq!(surface.tracker, Tracker::Markers { count: 3, active: 0 });
    }

    #[test]
    fn test_layers_accumulate_until_reset() {
        let mut nav = Navigator::new();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        nav.reset(items(&["A", "B"]), &mut surface);
        nav.advance(&mut surface);
        nav.retreat(&mut surface);
        let srcs: Vec<_> = surface.layers.iter().map(|l| l.item.src.as_str()).collect();
        assert_eq!(srcs, ["A", "B", "A"]);
    }

    #[test]
    fn test_retreat_single_item_stays() {
        let mut nav = Navigator::new();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        nav.reset(items(&["A"]), &mut surface);
        for _ in 0..5 {
            nav.retreat(&mut surface);
            assert_eq!(nav.cursor(), 0);
        }
        assert_eq!(surface.tracker, Tracker::Markers { count: 1, active: 0 });
    }

    #[test]
    fn test_reset_clears_stale_state() {
        let mut nav = Navigator::new();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        nav.reset(items(&["A", "B", "C", "D", "E", "F"]), &mut surface);
        for _ in 0..5 {
            nav.advance(&mut surface);
        }
        assert_eq!(nav.cursor(), 5);

        nav.reset(items(&["X", "Y"]), &mut surface);
        assert_eq!(nav.cursor(), 0);
        assert_eq!(surface.tracker, Tracker::Markers { count: 2, active: 0 });
        assert_eq!(surface.layers.len(), 1);
        assert_eq!(surface.last_src(), Some("X"));
    }

    #[test]
    fn test_reset_to_empty_renders_nothing() {
        let mut nav = Navigator::new();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        nav.reset(items(&["A"]), &mut surface);
        nav.reset(Vec::new(), &mut surface);
        assert!(surface.layers.is_empty());
        assert_eq!(surface.tracker, Tracker::Markers { count: 0, active: 0 });
    }

    #[test]
    fn test_presentation_uses_measured_size() {
        let item = MediaItem {
            x: Some(0.5),
            y: Some(0.0),
            scale: Some(2.0),
            fit: Some("cover".to_string()),
            ..MediaItem::image("a.jpg")
        };
        let mut nav = Navigator::new();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        nav.reset(vec![item.clone(), item], &mut surface);

        let p = surface.layers[0].presentation;
        assert_eq!(p.offset, Offset { x: 400.0, y: 0.0 });
        assert_eq!(p.scale, 2.0);
        assert_eq!(p.fit, Fit::Cover);

        // Same item, resized stage.
        surface.size = StageSize::new(400.0, 300.0);
        nav.advance(&mut surface);
        assert_eq!(surface.layers[1].presentation.offset, Offset { x: 200.0, y: 0.0 });
    }
}
