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

//! Shading extension points
//!
//! Declared callback types for per-pixel 2D/3D shading. These are a stable
//! extension surface only: the rasterizer stores an attached [`Shader2d`]
//! but never invokes it, and no shading behavior is implemented.

use crate::core::color::Color;

/// A 2D texture available to a shader
#[derive(Debug, Clone)]
pub struct Texture2d {
    /// Width in texels
    pub width: i32,

    /// Height in texels
    pub height: i32,

    /// Packed texels, row-major
    pub texels: Vec<Color>,
}

impl Texture2d {
    /// Read one texel
    ///
    /// Returns `None` for out-of-range coordinates.
    pub fn texel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.texels.get((y as usize) * (self.width as usize) + (x as usize)).copied()
    }
}

/// A point in 3D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A textured triangle in 3D space
///
/// Carrier type for the future 3D pipeline; nothing rasterizes these yet.
/// A 3D shader receives it mutably so it can displace vertices before the
/// shape is drawn.
#[derive(Debug, Clone)]
pub struct Triangle3d {
    /// The three vertices
    pub vertices: [Point3d; 3],

    /// Texture coordinates per vertex, each in `0.0..=1.0`
    pub tex_coords: [(f64, f64); 3],
}

/// Per-pixel context handed to a 2D shader
#[derive(Debug, Clone, Copy)]
pub struct Fragment2d {
    /// The drawing's flat color; a textured shader would use it as a tint
    pub tint: Color,

    /// Real X position on screen
    pub screen_x: i32,

    /// Real Y position on screen
    pub screen_y: i32,

    /// X position this pixel would have had untransformed
    pub pre_transform_x: f64,

    /// Y position this pixel would have had untransformed
    pub pre_transform_y: f64,

    /// Horizontal texture coordinate, `0.0..=1.0`
    pub u: f64,

    /// Vertical texture coordinate, `0.0..=1.0`
    pub v: f64,
}

/// Per-pixel context handed to a 3D shader
#[derive(Debug, Clone, Copy)]
pub struct Fragment3d {
    /// The drawing's flat color; a textured shader would use it as a tint
    pub tint: Color,

    /// Real X position on screen
    pub screen_x: i32,

    /// Real Y position on screen
    pub screen_y: i32,

    /// X position in space this pixel would have had untransformed
    pub pre_transform_x: f64,

    /// Y position in space this pixel would have had untransformed
    pub pre_transform_y: f64,

    /// Z position in space this pixel would have had untransformed
    pub pre_transform_z: f64,

    /// Horizontal texture coordinate, `0.0..=1.0`
    pub u: f64,

    /// Vertical texture coordinate, `0.0..=1.0`
    pub v: f64,
}

/// Per-pixel 2D shading callback
///
/// Given the fragment context and an optional texture, produces the color to
/// write. Attachable via
/// [`Rasterizer::attach_shader`](super::Rasterizer::attach_shader).
pub type Shader2d = Box<dyn Fn(&Fragment2d, Option<&Texture2d>) -> Color + Send + Sync>;

/// Per-pixel 3D shading callback
///
/// Called once to displace the triangle's vertices and once more per pixel
/// while drawing, which is why the triangle is passed mutably.
pub type Shader3d =
    Box<dyn Fn(&Fragment3d, Option<&Texture2d>, &mut Triangle3d) -> Color + Send + Sync>;
