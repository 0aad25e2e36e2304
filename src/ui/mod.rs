// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the folio viewer.

pub mod menu;
pub mod stage;
pub mod textures;
pub mod tracker;
