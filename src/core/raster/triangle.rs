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

//! Triangle rasterization
//!
//! Fills triangles with a two-pass scanline sweep: the region above the
//! middle vertex is swept between edges (0-1) and (0-2), the region below it
//! between edges (1-2) and (0-2). Scanline bounds and span endpoints round
//! to nearest by adding 0.5 before truncation, and spans fill the half-open
//! interval `[start, end)`, so the two regions neither overlap nor leave a
//! seam at the shared middle scanline.

use std::mem;

use super::Rasterizer;
use crate::core::color::Color;
use crate::core::surface::Surface;

/// A triangle edge parameterized as `x(y) = slope * y + offset`
///
/// A horizontal edge takes slope 0 and an offset fixed at its starting x; it
/// contributes no scanlines of its own, and the guard keeps every slope
/// division away from a zero denominator.
#[derive(Debug, Clone, Copy)]
struct Edge {
    slope: f64,
    offset: f64,
}

impl Edge {
    fn through(xa: f64, ya: f64, xb: f64, yb: f64) -> Self {
        if yb == ya {
            Self {
                slope: 0.0,
                offset: xa,
            }
        } else {
            let slope = (xb - xa) / (yb - ya);
            Self {
                slope,
                offset: xa - ya * slope,
            }
        }
    }

    fn x_at(&self, y: f64) -> f64 {
        self.slope * y + self.offset
    }
}

impl Rasterizer {
    /// Fill a triangle given three real-valued vertices
    ///
    /// Fills the closed triangular region without double-filling between
    /// adjacent scanlines. Degenerate triangles (collinear or coincident
    /// vertices) draw nothing or a harmless subset.
    ///
    /// # Arguments
    ///
    /// * `surface` - Destination surface
    /// * `x0`, `y0` - First vertex
    /// * `x1`, `y1` - Second vertex
    /// * `x2`, `y2` - Third vertex
    /// * `color` - Fill color
    ///
    /// # Algorithm
    ///
    /// 1. Sort the vertices by ascending y with a fixed compare-and-swap
    ///    ladder, so any input ordering (ties included) resolves
    ///    deterministically
    /// 2. Parameterize the three edges as `x(y) = slope * y + offset`
    /// 3. Sweep the top region `[round(y0), round(y1))`, then the bottom
    ///    region `[round(y1), round(y2))`, evaluating both active edges at
    ///    each scanline's vertical center and filling the span between them
    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        mut x0: f64,
        mut y0: f64,
        mut x1: f64,
        mut y1: f64,
        mut x2: f64,
        mut y2: f64,
        color: Color,
    ) {
        log::trace!(
            "Drawing triangle: ({}, {}), ({}, {}), ({}, {})",
            x0,
            y0,
            x1,
            y1,
            x2,
            y2
        );

        // Fixed swap ladder: vertex 0 ends up topmost, vertex 2 bottommost.
        // Ties keep their incoming relative order.
        if y1 < y0 {
            mem::swap(&mut x0, &mut x1);
            mem::swap(&mut y0, &mut y1);
        }
        if y2 < y1 {
            mem::swap(&mut x1, &mut x2);
            mem::swap(&mut y1, &mut y2);
        }
        if y2 < y0 {
            mem::swap(&mut x0, &mut x2);
            mem::swap(&mut y0, &mut y2);
        }
        if y1 < y0 {
            mem::swap(&mut x0, &mut x1);
            mem::swap(&mut y0, &mut y1);
        }

        let edge01 = Edge::through(x0, y0, x1, y1);
        let edge02 = Edge::through(x0, y0, x2, y2);
        let edge12 = Edge::through(x1, y1, x2, y2);

        // Top region: only when the topmost rounded scanline sits above the
        // middle vertex
        let top = (y0 + 0.5) as i32;
        if f64::from(top) + 0.5 <= y1 {
            let end = (y1 + 0.5) as i32;
            for y in top..end {
                Self::fill_span(surface, y, &edge01, &edge02, color);
            }
        }

        // Bottom region, symmetric
        let middle = (y1 + 0.5) as i32;
        if f64::from(middle) + 0.5 <= y2 {
            let end = (y2 + 0.5) as i32;
            for y in middle..end {
                Self::fill_span(surface, y, &edge12, &edge02, color);
            }
        }
    }

    /// Fill one scanline between two edges evaluated at its vertical center
    fn fill_span<S: Surface + ?Sized>(
        surface: &mut S,
        y: i32,
        edge_a: &Edge,
        edge_b: &Edge,
        color: Color,
    ) {
        let center = f64::from(y) + 0.5;
        let mut start = (edge_a.x_at(center) + 0.5) as i32;
        let mut end = (edge_b.x_at(center) + 0.5) as i32;

        if start > end {
            mem::swap(&mut start, &mut end);
        }

        for x in start..end {
            surface.set_pixel(x, y, color);
        }
    }
}
