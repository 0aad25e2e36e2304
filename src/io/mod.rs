// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for media and list files.

pub mod loader;
pub mod media;
pub mod serialization;
