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

//! Common test helpers for rasterizer coverage tests

use std::collections::HashSet;

use softraster::core::color::Color;
use softraster::core::surface::Surface;

/// Surface that records every pixel-write call in order, bounds-free
pub struct RecordingSurface {
    pub writes: Vec<(i32, i32, Color)>,
}

#[allow(dead_code)]
impl RecordingSurface {
    pub fn new() -> Self {
        Self { writes: Vec::new() }
    }

    /// The set of distinct pixels written
    pub fn pixel_set(&self) -> HashSet<(i32, i32)> {
        self.writes.iter().map(|&(x, y, _)| (x, y)).collect()
    }

    /// How many times one pixel was written
    pub fn count_at(&self, x: i32, y: i32) -> usize {
        self.writes
            .iter()
            .filter(|&&(wx, wy, _)| wx == x && wy == y)
            .count()
    }

    /// Distinct pixels written on one scanline
    pub fn row(&self, y: i32) -> HashSet<i32> {
        self.writes
            .iter()
            .filter(|&&(_, wy, _)| wy == y)
            .map(|&(x, _, _)| x)
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.writes.push((x, y, color));
    }
}

/// Assert that no pixel was written more than once
#[allow(dead_code)]
pub fn assert_no_double_writes(surface: &RecordingSurface) {
    let mut seen = HashSet::new();
    for &(x, y, _) in &surface.writes {
        assert!(
            seen.insert((x, y)),
            "pixel ({}, {}) written more than once",
            x,
            y
        );
    }
}
