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

//! Line and polyline rasterization tests

use std::collections::HashSet;

use super::super::Rasterizer;
use super::RecordingSurface;
use crate::core::color::Color;

fn line_pixels(x0: i32, y0: i32, x1: i32, y1: i32) -> HashSet<(i32, i32)> {
    let raster = Rasterizer::new();
    let mut surface = RecordingSurface::new();
    raster.draw_line(&mut surface, x0, y0, x1, y1, Color::WHITE);
    surface.pixel_set()
}

#[test]
fn test_horizontal_line() {
    let pixels = line_pixels(0, 0, 4, 0);
    let expected: HashSet<_> = (0..=4).map(|x| (x, 0)).collect();
    assert_eq!(pixels, expected);
}

#[test]
fn test_diagonal_line() {
    let pixels = line_pixels(0, 0, 4, 4);
    let expected: HashSet<_> = (0..=4).map(|i| (i, i)).collect();
    assert_eq!(pixels, expected);
}

#[test]
fn test_vertical_line() {
    let pixels = line_pixels(3, 1, 3, 6);
    let expected: HashSet<_> = (1..=6).map(|y| (3, y)).collect();
    assert_eq!(pixels, expected);
}

#[test]
fn test_single_point() {
    let pixels = line_pixels(7, 9, 7, 9);
    assert_eq!(pixels, HashSet::from([(7, 9)]));
}

#[test]
fn test_one_pixel_per_dominant_axis_step() {
    let raster = Rasterizer::new();
    let mut surface = RecordingSurface::new();
    raster.draw_line(&mut surface, 0, 0, 10, 3, Color::WHITE);

    // Shallow line: exactly one write per x column
    assert_eq!(surface.writes.len(), 11);
    let columns: HashSet<i32> = surface.writes.iter().map(|&(x, _, _)| x).collect();
    assert_eq!(columns.len(), 11);
}

#[test]
fn test_steep_line_steps_along_y() {
    let raster = Rasterizer::new();
    let mut surface = RecordingSurface::new();
    raster.draw_line(&mut surface, 0, 0, 2, 6, Color::WHITE);

    // Steep line: exactly one write per y row
    assert_eq!(surface.writes.len(), 7);
    let rows: HashSet<i32> = surface.writes.iter().map(|&(_, y, _)| y).collect();
    assert_eq!(rows.len(), 7);
}

#[test]
fn test_endpoint_order_is_irrelevant() {
    assert_eq!(line_pixels(1, 2, 9, 5), line_pixels(9, 5, 1, 2));
    assert_eq!(line_pixels(2, 1, 5, 9), line_pixels(5, 9, 2, 1));
    assert_eq!(line_pixels(0, 0, -7, 4), line_pixels(-7, 4, 0, 0));
}

#[test]
fn test_eight_connectivity() {
    let raster = Rasterizer::new();
    let mut surface = RecordingSurface::new();
    raster.draw_line(&mut surface, 0, 0, 9, 6, Color::WHITE);

    let pixels = surface.pixel_set();
    for &(x, y) in &pixels {
        if (x, y) == (9, 6) {
            continue;
        }
        // Every pixel but the last has an 8-connected successor one column over
        let has_successor = (y - 1..=y + 1).any(|ny| pixels.contains(&(x + 1, ny)));
        assert!(has_successor, "pixel ({}, {}) has no successor", x, y);
    }
}

#[test]
fn test_polyline_needs_two_points() {
    let raster = Rasterizer::new();
    let mut surface = RecordingSurface::new();

    raster.draw_polyline(&mut surface, &[], Color::WHITE);
    raster.draw_polyline(&mut surface, &[(5, 5)], Color::WHITE);
    assert!(surface.writes.is_empty());
}

#[test]
fn test_polyline_traces_all_segments() {
    let raster = Rasterizer::new();
    let mut surface = RecordingSurface::new();
    raster.draw_polyline(
        &mut surface,
        &[(0, 0), (4, 0), (4, 4), (0, 4)],
        Color::WHITE,
    );

    let pixels = surface.pixel_set();
    // Corners
    for corner in [(0, 0), (4, 0), (4, 4), (0, 4)] {
        assert!(pixels.contains(&corner));
    }
    // Segment interiors
    assert!(pixels.contains(&(2, 0)));
    assert!(pixels.contains(&(4, 2)));
    assert!(pixels.contains(&(2, 4)));
    // The open side is not drawn
    assert!(!pixels.contains(&(0, 2)));
}

#[test]
fn test_polyline_joints_written_by_both_segments() {
    let raster = Rasterizer::new();
    let mut surface = RecordingSurface::new();
    raster.draw_polyline(&mut surface, &[(0, 0), (3, 0), (3, 3)], Color::WHITE);

    // The shared vertex belongs to both segments
    assert_eq!(surface.count_at(3, 0), 2);
}
