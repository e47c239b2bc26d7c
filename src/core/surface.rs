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

//! Drawing surfaces
//!
//! The rasterizer draws through the [`Surface`] trait, which exposes a single
//! pixel-write primitive. Bounds checking is the surface's contract: the
//! rasterizer may hand over out-of-range coordinates and expects them to be
//! discarded silently.
//!
//! [`Framebuffer`] is the packed-ARGB in-memory implementation, with
//! read-back for tests and PNG export for the demo binary.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::core::color::Color;
use crate::core::error::{RasterError, Result};

/// Destination for pixel writes
///
/// Implementations must accept any coordinate pair: writes outside the
/// surface bounds are silently discarded, never a fault. The rasterizer
/// relies on this when geometry extends past the visible area.
pub trait Surface {
    /// Write one pixel
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);
}

/// An in-memory packed-ARGB framebuffer
///
/// Pixels are stored in row-major order (left-to-right, top-to-bottom) with
/// the origin at the top-left corner.
///
/// # Examples
///
/// ```
/// use softraster::core::color::Color;
/// use softraster::core::surface::{Framebuffer, Surface};
///
/// let mut fb = Framebuffer::new(320, 240).unwrap();
/// fb.set_pixel(10, 10, Color::RED);
/// assert_eq!(fb.pixel(10, 10), Some(Color::RED));
///
/// // Out-of-range writes are discarded
/// fb.set_pixel(-1, 500, Color::RED);
/// ```
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels
    width: u32,

    /// Height in pixels
    height: u32,

    /// Packed ARGB pixels, row-major
    pixels: Vec<u32>,
}

impl Framebuffer {
    /// Create a framebuffer cleared to opaque black
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![Color::BLACK.argb(); (width as usize) * (height as usize)],
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill the whole surface with one color
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.argb());
    }

    /// Read one pixel back
    ///
    /// Returns `None` for out-of-range coordinates.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }

        let index = (y as usize) * (self.width as usize) + (x as usize);
        Some(Color::new(self.pixels[index]))
    }

    /// Convert to tightly packed RGBA8 bytes (for PNG output)
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for &argb in &self.pixels {
            let color = Color::new(argb);
            bytes.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }
        bytes
    }

    /// Encode the framebuffer as PNG bytes
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();

        {
            let mut encoder = png::Encoder::new(&mut buffer, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.to_rgba_bytes())?;
        }

        Ok(buffer)
    }

    /// Write the framebuffer to a PNG file
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);

        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.to_rgba_bytes())?;

        Ok(())
    }
}

impl Surface for Framebuffer {
    /// Write one pixel, silently discarding out-of-range coordinates
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }

        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[index] = color.argb();
    }
}
