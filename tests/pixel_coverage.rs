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

//! End-to-end pixel coverage contracts
//!
//! Exercises the public drawing API against the coverage guarantees each
//! primitive makes: exact line pixel sets, endpoint symmetry, fill/outline
//! rectangle coverage, triangle seam behavior, quad decomposition, and the
//! legacy circle's empty-sweep guard.

mod common;

use std::collections::HashSet;

use common::{assert_no_double_writes, RecordingSurface};
use softraster::core::color::Color;
use softraster::core::raster::Rasterizer;
use softraster::core::surface::Framebuffer;

#[test]
fn line_covers_one_pixel_per_dominant_step() {
    let raster = Rasterizer::new();

    let mut surface = RecordingSurface::new();
    raster.draw_line(&mut surface, 0, 0, 4, 0, Color::WHITE);
    let expected: HashSet<_> = (0..=4).map(|x| (x, 0)).collect();
    assert_eq!(surface.pixel_set(), expected);

    let mut surface = RecordingSurface::new();
    raster.draw_line(&mut surface, 0, 0, 4, 4, Color::WHITE);
    let expected: HashSet<_> = (0..=4).map(|i| (i, i)).collect();
    assert_eq!(surface.pixel_set(), expected);
}

#[test]
fn line_is_symmetric_in_its_endpoints() {
    let raster = Rasterizer::new();
    let endpoints = [
        ((0, 0), (7, 3)),
        ((3, 7), (0, 0)),
        ((-5, 2), (5, -2)),
        ((1, 1), (1, 9)),
    ];

    for &((x0, y0), (x1, y1)) in &endpoints {
        let mut forward = RecordingSurface::new();
        raster.draw_line(&mut forward, x0, y0, x1, y1, Color::WHITE);

        let mut backward = RecordingSurface::new();
        raster.draw_line(&mut backward, x1, y1, x0, y0, Color::WHITE);

        assert_eq!(
            forward.pixel_set(),
            backward.pixel_set(),
            "asymmetric line ({}, {}) -> ({}, {})",
            x0,
            y0,
            x1,
            y1
        );
    }
}

#[test]
fn rect_fill_and_outline_coverage() {
    let raster = Rasterizer::new();

    let mut filled = RecordingSurface::new();
    raster.draw_rect(&mut filled, 0, 0, 3, 3, true, Color::WHITE);
    assert_eq!(filled.pixel_set().len(), 9);

    let mut outline = RecordingSurface::new();
    raster.draw_rect(&mut outline, 0, 0, 3, 3, false, Color::WHITE);
    let pixels = outline.pixel_set();
    assert_eq!(pixels.len(), 8);
    assert!(!pixels.contains(&(1, 1)));
}

#[test]
fn triangle_respects_the_hypotenuse() {
    let raster = Rasterizer::new();
    let mut surface = RecordingSurface::new();
    raster.draw_triangle(&mut surface, 0.0, 0.0, 0.0, 4.0, 4.0, 0.0, Color::WHITE);

    assert!(!surface.writes.is_empty());
    for &(x, y, _) in &surface.writes {
        assert!(x >= 0 && y >= 0, "pixel ({}, {}) is negative", x, y);
        assert!(x + y <= 4, "pixel ({}, {}) crossed the hypotenuse", x, y);
    }
}

#[test]
fn triangle_middle_scanline_has_no_seam() {
    let raster = Rasterizer::new();
    let mut surface = RecordingSurface::new();
    raster.draw_triangle(&mut surface, 0.0, 0.0, 6.0, 3.0, 0.0, 6.0, Color::WHITE);

    // No double-draw anywhere, including the shared middle scanline
    assert_no_double_writes(&surface);

    // And no gap: every scanline the triangle spans has pixels
    for y in 0..6 {
        assert!(!surface.row(y).is_empty(), "scanline {} is empty", y);
    }
}

#[test]
fn quad_is_its_two_triangles() {
    let raster = Rasterizer::new();

    let mut quad = RecordingSurface::new();
    raster.draw_quad(
        &mut quad,
        2.0,
        1.0,
        11.0,
        2.0,
        10.0,
        9.0,
        1.0,
        8.0,
        Color::WHITE,
    );

    let mut triangles = RecordingSurface::new();
    raster.draw_triangle(&mut triangles, 2.0, 1.0, 11.0, 2.0, 10.0, 9.0, Color::WHITE);
    raster.draw_triangle(&mut triangles, 2.0, 1.0, 10.0, 9.0, 1.0, 8.0, Color::WHITE);

    assert_eq!(quad.pixel_set(), triangles.pixel_set());
}

#[test]
fn legacy_circle_guards_empty_sweeps() {
    let raster = Rasterizer::new();
    let mut surface = RecordingSurface::new();

    raster.draw_circle_legacy(&mut surface, 50, 50, 10, 180, 180, true, Color::WHITE);
    raster.draw_circle_legacy(&mut surface, 50, 50, 10, 270, 90, false, Color::WHITE);
    assert!(surface.writes.is_empty());
}

#[test]
fn drawing_off_surface_is_harmless() {
    // The framebuffer discards out-of-range writes; geometry hanging past
    // every border must neither fault nor corrupt in-range pixels
    let raster = Rasterizer::new();
    let mut fb = Framebuffer::new(32, 32).unwrap();

    raster.draw_line(&mut fb, -10, -10, 50, 50, Color::WHITE);
    raster.draw_rect(&mut fb, 28, 28, 10, 10, true, Color::RED);
    raster.draw_triangle(&mut fb, -20.0, 5.0, 40.0, 5.0, 10.0, 60.0, Color::GREEN);
    raster.draw_circle_legacy(&mut fb, 0, 0, 20, 0, 360, false, Color::BLUE);

    // A write that stayed inside is visible
    assert_eq!(fb.pixel(31, 31), Some(Color::RED));
    // Reads outside stay None
    assert_eq!(fb.pixel(32, 32), None);
}
