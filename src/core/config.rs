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

//! Canvas configuration
//!
//! TOML-backed settings for the demo binary: canvas dimensions and the
//! background color. Missing keys fall back to defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::color::Color;
use crate::core::error::Result;

/// Canvas settings for the demo renderer
///
/// # Examples
///
/// ```
/// use softraster::core::config::CanvasConfig;
///
/// let config: CanvasConfig = toml::from_str(
///     r##"
///     width = 640
///     height = 480
///     background = "#202040"
///     "##,
/// )
/// .unwrap();
/// assert_eq!(config.width, 640);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Background color literal, `#RRGGBB` or `#AARRGGBB`
    pub background: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            background: "#000000".to_string(),
        }
    }
}

impl CanvasConfig {
    /// Load a config from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Parse the configured background color
    ///
    /// # Errors
    ///
    /// Returns [`crate::core::error::RasterError::InvalidColor`] for a
    /// malformed literal.
    pub fn background_color(&self) -> Result<Color> {
        Color::from_hex(&self.background)
    }
}
