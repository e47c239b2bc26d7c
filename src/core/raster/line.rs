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

//! Line rasterization
//!
//! Implements line and polyline rasterization using Bresenham's algorithm.

use std::mem;

use super::Rasterizer;
use crate::core::color::Color;
use crate::core::surface::Surface;

impl Rasterizer {
    /// Draw a 1-pixel-wide line between two integer endpoints
    ///
    /// Sets every pixel of an 8-connected approximation of the ideal
    /// segment, exactly one pixel per unit step along the dominant axis.
    /// Endpoint order does not matter: both orders produce the identical
    /// pixel set, since the stepping loop is normalized to advance in
    /// increasing dominant-axis coordinate.
    ///
    /// # Arguments
    ///
    /// * `surface` - Destination surface
    /// * `x0`, `y0` - First endpoint
    /// * `x1`, `y1` - Second endpoint
    /// * `color` - Line color
    ///
    /// # Algorithm
    ///
    /// Classic error accumulation: when the line is steeper than 45° the
    /// roles of x and y are swapped for the stepping loop (and swapped back
    /// when emitting each pixel), so the loop always advances one unit along
    /// the dominant axis. The signed error accumulator starts at half the
    /// dominant delta; each step subtracts the minor delta and, when the
    /// accumulator goes negative, the minor coordinate advances by its sign
    /// step and the accumulator is replenished by the dominant delta.
    pub fn draw_line<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    ) {
        log::trace!("Drawing line: ({}, {}) -> ({}, {})", x0, y0, x1, y1);

        let (mut x0, mut y0, mut x1, mut y1) = (x0, y0, x1, y1);

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            mem::swap(&mut x0, &mut y0);
            mem::swap(&mut x1, &mut y1);
        }

        if x0 > x1 {
            mem::swap(&mut x0, &mut x1);
            mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let y_step = if y0 < y1 { 1 } else { -1 };

        let mut err = dx / 2;
        let mut y = y0;

        for x in x0..=x1 {
            if steep {
                surface.set_pixel(y, x, color);
            } else {
                surface.set_pixel(x, y, color);
            }

            err -= dy;
            if err < 0 {
                y += y_step;
                err += dx;
            }
        }
    }

    /// Draw connected line segments through an ordered point list
    ///
    /// Requires at least 2 points; fewer draw nothing. Interior points are
    /// shared by two segments and therefore written twice (harmless for
    /// solid colors).
    ///
    /// # Arguments
    ///
    /// * `surface` - Destination surface
    /// * `points` - Polyline vertices in order
    /// * `color` - Line color
    pub fn draw_polyline<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        points: &[(i32, i32)],
        color: Color,
    ) {
        if points.len() < 2 {
            return;
        }

        log::trace!("Drawing polyline with {} points", points.len());

        for pair in points.windows(2) {
            self.draw_line(surface, pair[0].0, pair[0].1, pair[1].0, pair[1].1, color);
        }
    }
}
