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

//! Circle and arc rasterization
//!
//! The transform-aware approximator renders an arc as a regular polygon fan
//! (filled) or polygon outline (stroked), choosing the step count from the
//! arc's effective on-screen size so small or zoomed-out circles tessellate
//! finely while large circles stay capped. A legacy transform-unaware
//! degree-sweep renderer is kept as an alternate implementation.

use std::f64::consts::PI;

use super::Rasterizer;
use crate::core::color::Color;
use crate::core::surface::Surface;
use crate::core::transform::{Matrix2d, MatrixStack};

impl Rasterizer {
    /// Upper bound on arc tessellation steps
    pub const ARC_MAX_STEPS: i32 = 40;

    /// Effective-circumference threshold below which tessellation adapts
    pub const ARC_SPAN_THRESHOLD: f64 = 60.0;

    /// Divisor converting an effective circumference into a step count
    pub const ARC_STEP_DIVISOR: f64 = 1.7;

    /// Start angles beyond this epsilon pre-rotate the stepping matrix
    const ARC_START_EPSILON: f64 = 0.000_000_1;

    /// Draw a circular arc under the current transform stack
    ///
    /// Approximates the arc from `start_angle` to `end_angle` (radians) as a
    /// polygon: filled mode draws a triangle fan from the transformed center,
    /// stroked mode traces the polygon outline with lines. Angle-range
    /// ordering is the caller's responsibility and is not validated here.
    ///
    /// # Arguments
    ///
    /// * `surface` - Destination surface
    /// * `stack` - Transform stack; only its current matrix is read
    /// * `center_x`, `center_y` - Arc center in shape space
    /// * `radius` - Arc radius in shape space
    /// * `start_angle`, `end_angle` - Sweep bounds in radians
    /// * `filled` - Triangle fan when true, outline when false
    /// * `color` - Arc color
    ///
    /// # Tessellation
    ///
    /// The step count follows the arc's effective on-screen size: the
    /// current matrix is probed to estimate the rendered circumference, and
    /// the count is `circumference / 1.7` below a 60-unit threshold, else
    /// capped at 40. The count is clamped to at least 1, so the angular
    /// division below is always defined; a degenerate (zero-size) arc then
    /// emits one zero-area triangle or zero-length line, which rasterizes to
    /// nothing.
    ///
    /// Rather than evaluating sine/cosine per step, one incremental rotation
    /// matrix is composed into a running copy of the transform, and each
    /// boundary vertex is the canonical point `(0, -radius)` mapped through
    /// the running copy.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_circle<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        stack: &MatrixStack,
        center_x: f64,
        center_y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        filled: bool,
        color: Color,
    ) {
        // Probe the stack's scale so the polygon has enough sides to fool
        // the viewer at the current zoom
        let effective_circumference = effective_radius(stack, radius) * PI;
        let steps = arc_steps(effective_circumference);

        log::trace!(
            "Drawing {} arc at ({}, {}) r={}: {} steps for effective circumference {:.2}",
            if filled { "filled" } else { "stroked" },
            center_x,
            center_y,
            radius,
            steps,
            effective_circumference
        );

        let angle_per_step = (start_angle - end_angle) / f64::from(steps);
        let rotation_step = Matrix2d::rotate(angle_per_step);

        let mut current = stack
            .current()
            .multiply(&Matrix2d::translate(center_x, center_y));
        if start_angle > Self::ARC_START_EPSILON {
            // Rotate to the starting angle
            current = current.multiply(&Matrix2d::rotate(start_angle));
        }

        // Fan apex: the center through the unmodified current matrix
        let (apex_x, apex_y) = stack.current().transform_point(center_x, center_y);

        let (mut last_x, mut last_y) = current.transform_point(0.0, -radius);
        for _ in 0..steps {
            current = current.multiply(&rotation_step);
            let (next_x, next_y) = current.transform_point(0.0, -radius);

            if filled {
                self.draw_triangle(surface, apex_x, apex_y, last_x, last_y, next_x, next_y, color);
            } else {
                self.draw_line(
                    surface,
                    (last_x + 0.5) as i32,
                    (last_y + 0.5) as i32,
                    (next_x + 0.5) as i32,
                    (next_y + 0.5) as i32,
                    color,
                );
            }

            (last_x, last_y) = (next_x, next_y);
        }
    }

    /// Draw a circle with the legacy angle-sweep renderer
    ///
    /// Iterates integer degrees from `start_angle` to `end_angle`, computing
    /// boundary points via cosine/sine and connecting successive points with
    /// line segments. Filled mode repeats the sweep for every radius from 0
    /// to `radius`, producing concentric rings that approximate a solid
    /// disc. This renderer does not consult the transform stack.
    ///
    /// `start_angle >= end_angle` or a negative radius draws nothing.
    ///
    /// # Arguments
    ///
    /// * `surface` - Destination surface
    /// * `x0`, `y0` - Circle center
    /// * `radius` - Circle radius in pixels
    /// * `start_angle`, `end_angle` - Sweep bounds in degrees
    /// * `filled` - Concentric rings when true, single ring when false
    /// * `color` - Circle color
    #[allow(clippy::too_many_arguments)]
    pub fn draw_circle_legacy<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x0: i32,
        y0: i32,
        radius: i32,
        start_angle: i32,
        end_angle: i32,
        filled: bool,
        color: Color,
    ) {
        if start_angle >= end_angle || radius < 0 {
            log::trace!(
                "Skipping legacy circle at ({}, {}): empty sweep {}..{} or radius {}",
                x0,
                y0,
                start_angle,
                end_angle,
                radius
            );
            return;
        }

        log::trace!(
            "Drawing legacy {} circle at ({}, {}) r={} over {}..{} degrees",
            if filled { "filled" } else { "stroked" },
            x0,
            y0,
            radius,
            start_angle,
            end_angle
        );

        let inner = if filled { 0 } else { radius };
        for ring in inner..=radius {
            let mut prev: Option<(i32, i32)> = None;

            for degrees in start_angle..end_angle {
                let radians = f64::from(degrees) * PI / 180.0;
                let px = (f64::from(x0) + f64::from(ring) * radians.cos()) as i32;
                let py = (f64::from(y0) + f64::from(ring) * radians.sin()) as i32;

                match prev {
                    Some((last_x, last_y)) if (last_x, last_y) != (px, py) => {
                        self.draw_line(surface, last_x, last_y, px, py, color);
                    }
                    _ => surface.set_pixel(px, py, color),
                }

                prev = Some((px, py));
            }
        }
    }
}

/// Step count for an arc of the given effective circumference
///
/// Below the threshold the count scales with the circumference; above it
/// the count is capped. Clamped to at least 1 so the caller's angular
/// division is always defined.
fn arc_steps(effective_circumference: f64) -> i32 {
    let steps = if effective_circumference < Rasterizer::ARC_SPAN_THRESHOLD {
        (effective_circumference / Rasterizer::ARC_STEP_DIVISOR) as i32
    } else {
        Rasterizer::ARC_MAX_STEPS
    };

    steps.max(1)
}

/// Estimate the on-screen radius of a circle under the stack's transform
///
/// Transforms the probe point `(0, radius)` through the current matrix and
/// through two successively 45°-rotated copies, and returns the largest
/// distance from the origin observed. Probing three directions keeps the
/// estimate honest under non-uniform scale.
fn effective_radius(stack: &MatrixStack, radius: f64) -> f64 {
    let rotation = Matrix2d::rotate(PI * 0.25);
    let mut current = stack.current();
    let mut max_sqr: f64 = 0.0;

    for _ in 0..3 {
        let (x, y) = current.transform_point(0.0, radius);
        let sqr_dist = x * x + y * y;
        if sqr_dist > max_sqr {
            max_sqr = sqr_dist;
        }
        current = current.multiply(&rotation);
    }

    max_sqr.sqrt()
}
