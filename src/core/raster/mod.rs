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

//! Primitive rasterizers
//!
//! This module converts geometric primitives into pixel writes on a
//! [`Surface`](crate::core::surface::Surface):
//! - Lines and polylines (Bresenham error-accumulation stepping)
//! - Axis-aligned rectangles (filled or outlined, built from lines)
//! - Triangles (two-pass top/bottom scanline sweep)
//! - Quadrilaterals (decomposed into two triangles)
//! - Circles and arcs (transform-aware adaptive triangle fan, plus a legacy
//!   transform-unaware angle sweep)
//!
//! # Coordinate System
//!
//! The origin (0, 0) is at the top-left corner of the surface:
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! Lines and rectangles address whole pixels with integer coordinates.
//! Triangles, quads and circles take real-valued coordinates, since
//! transforms and edge interpolation need sub-pixel precision before the
//! final rounding.
//!
//! # Guarantees
//!
//! Every operation is a finite, bounded sequence of pixel writes with no
//! shared state beyond the caller-owned surface and transform stack.
//! Degenerate geometry (zero-size rectangles, zero-area triangles, empty
//! angle ranges) draws nothing rather than faulting, and no slope or step
//! division ever executes with a zero denominator.

mod circle;
mod line;
mod quad;
mod rect;
mod shader;
mod triangle;

// Public re-exports
pub use shader::{Fragment2d, Fragment3d, Point3d, Shader2d, Shader3d, Texture2d, Triangle3d};

/// Primitive rasterizer
///
/// Stateless between calls: every operation receives the destination surface
/// (and, for transform-aware arcs, the matrix stack) explicitly. The only
/// retained field is the optional per-pixel shader, a declared extension
/// point that the solid-color fill paths do not consult yet.
///
/// # Examples
///
/// ```
/// use softraster::core::color::Color;
/// use softraster::core::raster::Rasterizer;
/// use softraster::core::surface::Framebuffer;
///
/// let mut fb = Framebuffer::new(64, 64).unwrap();
/// let raster = Rasterizer::new();
///
/// raster.draw_rect(&mut fb, 8, 8, 16, 16, true, Color::RED);
/// assert_eq!(fb.pixel(15, 15), Some(Color::RED));
/// ```
#[derive(Default)]
pub struct Rasterizer {
    /// Attached per-pixel shading callback
    ///
    /// Reserved extension point: stored and exposed, but not yet invoked by
    /// the fill loops, which always write the caller's flat color.
    shader: Option<Shader2d>,
}

impl Rasterizer {
    /// Create a rasterizer with no shader attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a per-pixel shading callback
    ///
    /// The callback is held as an extension point only; the solid-color fill
    /// paths do not consult it.
    pub fn attach_shader(&mut self, shader: Shader2d) {
        self.shader = Some(shader);
    }

    /// Detach and return the current shading callback, if any
    pub fn detach_shader(&mut self) -> Option<Shader2d> {
        self.shader.take()
    }

    /// The attached shading callback, if any
    pub fn shader(&self) -> Option<&Shader2d> {
        self.shader.as_ref()
    }
}
