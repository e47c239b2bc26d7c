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

//! Rectangle rasterization
//!
//! Axis-aligned rectangles built entirely from line segments.

use super::Rasterizer;
use crate::core::color::Color;
use crate::core::surface::Surface;

impl Rasterizer {
    /// Draw an axis-aligned rectangle
    ///
    /// Filled mode draws one vertical line per column, producing a solid
    /// `width` x `height` block. Outline mode draws the four boundary
    /// segments, each inclusive of its corner pixels; corners are written
    /// twice, which is harmless for solid colors.
    ///
    /// Zero or negative `width`/`height` draws nothing.
    ///
    /// # Arguments
    ///
    /// * `surface` - Destination surface
    /// * `x`, `y` - Top-left corner
    /// * `width`, `height` - Extent in pixels
    /// * `filled` - Solid block when true, outline only when false
    /// * `color` - Rectangle color
    pub fn draw_rect<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        filled: bool,
        color: Color,
    ) {
        // Empty rectangles would otherwise turn into reversed line spans
        if width <= 0 || height <= 0 {
            log::trace!("Skipping empty rect at ({}, {}): {}x{}", x, y, width, height);
            return;
        }

        log::trace!(
            "Drawing {} rect at ({}, {}): {}x{}",
            if filled { "filled" } else { "outline" },
            x,
            y,
            width,
            height
        );

        let right = x + width - 1;
        let bottom = y + height - 1;

        if filled {
            for column in x..=right {
                self.draw_line(surface, column, y, column, bottom, color);
            }
        } else {
            self.draw_line(surface, x, y, right, y, color);
            self.draw_line(surface, x, bottom, right, bottom, color);
            self.draw_line(surface, x, y, x, bottom, color);
            self.draw_line(surface, right, y, right, bottom, color);
        }
    }
}
