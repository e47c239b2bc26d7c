// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Core rasterizer components
//!
//! This module contains all rendering components:
//! - Color (packed ARGB pixel values)
//! - Surface (pixel-write collaborator and framebuffer implementation)
//! - Transform (affine matrices and the matrix stack)
//! - Raster (the primitive rasterizers)
//! - Config (canvas configuration for the demo binary)

pub mod color;
pub mod config;
pub mod error;
pub mod raster;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use color::Color;
pub use config::CanvasConfig;
pub use error::{RasterError, Result};
pub use raster::Rasterizer;
pub use surface::{Framebuffer, Surface};
pub use transform::{Matrix2d, MatrixStack};
