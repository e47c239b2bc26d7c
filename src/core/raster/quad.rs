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

//! Quadrilateral rasterization
//!
//! Implements quad filling by decomposing into triangles.

use super::Rasterizer;
use crate::core::color::Color;
use crate::core::surface::Surface;

impl Rasterizer {
    /// Fill a quadrilateral given four vertices in winding order
    ///
    /// Quads are rendered as two triangles sharing the v0-v2 diagonal:
    /// (v0, v1, v2) and (v0, v2, v3). This is exact for convex quads. For
    /// non-convex or self-intersecting input the visible result is the union
    /// of the two triangle interiors, which may not match the intended
    /// polygon - a known limitation of the decomposition.
    ///
    /// # Arguments
    ///
    /// * `surface` - Destination surface
    /// * `x0`..`y3` - The four vertices, in order
    /// * `color` - Fill color
    #[allow(clippy::too_many_arguments)]
    pub fn draw_quad<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
        color: Color,
    ) {
        self.draw_triangle(surface, x0, y0, x1, y1, x2, y2, color);
        self.draw_triangle(surface, x0, y0, x2, y2, x3, y3, color);
    }
}
