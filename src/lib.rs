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

//! 2D software rasterizer core library
//!
//! This library converts geometric primitives (lines, rectangles, triangles,
//! quads, circles/arcs) into individual pixel writes on an addressable
//! drawing surface, optionally under an affine transform stack.
//!
//! # Example
//!
//! ```
//! use softraster::core::color::Color;
//! use softraster::core::raster::Rasterizer;
//! use softraster::core::surface::Framebuffer;
//!
//! let mut fb = Framebuffer::new(64, 64).unwrap();
//! let raster = Rasterizer::new();
//!
//! // Draw a white diagonal
//! raster.draw_line(&mut fb, 0, 0, 63, 63, Color::WHITE);
//! assert_eq!(fb.pixel(0, 0), Some(Color::WHITE));
//! ```

pub mod core;
