// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media item data structures.
//!
//! A media item is one entry of a project's slideshow. Optional fields are
//! read leniently: a value of the wrong type is treated as if it were absent,
//! so a malformed entry still loads with defaults.

use serde::{de::IgnoredAny, Deserialize, Deserializer};

/// Kind of media an item displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl<'de> Deserialize<'de> for MediaKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Anything that is not exactly "video" displays as an image.
        let kind = lenient::<_, String>(deserializer)?;
        Ok(match kind.as_deref() {
            Some("video") => MediaKind::Video,
            _ => MediaKind::Image,
        })
    }
}

/// How media is sized against the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fit {
    /// Whole media visible, letterboxed.
    #[default]
    Contain,
    /// Stage filled, overflow cropped.
    Cover,
}

/// One slideshow entry.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "type", default)]
    pub kind: MediaKind,
    #[serde(default, deserialize_with = "lenient_string")]
    pub src: String,
    #[serde(default, deserialize_with = "lenient")]
    pub alt: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub poster: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub scale: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub fit: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub x: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub y: Option<f64>,
}

impl MediaItem {
    /// Create an image item with default presentation.
    #[cfg(test)]
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            src: src.into(),
            ..Default::default()
        }
    }

    /// Scale factor, 1 when unset.
    pub fn scale(&self) -> f64 {
        self.scale.unwrap_or(1.0)
    }

    /// Fit mode; only "cover" selects [`Fit::Cover`].
    pub fn fit(&self) -> Fit {
        match self.fit.as_deref() {
            Some("cover") => Fit::Cover,
            _ => Fit::Contain,
        }
    }

    /// Horizontal offset as a fraction of stage width.
    pub fn x(&self) -> f64 {
        self.x.unwrap_or(0.0)
    }

    /// Vertical offset as a fraction of stage height.
    pub fn y(&self) -> f64 {
        self.y.unwrap_or(0.0)
    }

    /// Alternative text, empty when unset.
    pub fn alt(&self) -> &str {
        self.alt.as_deref().unwrap_or("")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Value(value) => Some(value),
        Lenient::Other(_) => None,
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient(deserializer)?.unwrap_or_default())
}
