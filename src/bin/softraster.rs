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

use clap::Parser;
use log::{error, info};
use softraster::core::color::Color;
use softraster::core::config::CanvasConfig;
use softraster::core::error::Result;
use softraster::core::raster::Rasterizer;
use softraster::core::surface::Framebuffer;
use softraster::core::transform::MatrixStack;

/// 2D software rasterizer demo
#[derive(Parser)]
#[command(name = "softraster")]
#[command(about = "Software rasterizer demo renderer", long_about = None)]
struct Args {
    /// Output PNG path
    #[arg(short = 'o', long, default_value = "showcase.png")]
    output: String,

    /// Path to a canvas config file (TOML)
    #[arg(short = 'c', long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logger with default level INFO
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("softraster v{}", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    // Load canvas settings
    let config = match &args.config {
        Some(path) => {
            info!("Loading canvas config from: {}", path);
            CanvasConfig::load(path).map_err(|e| {
                error!("Failed to load config: {}", e);
                e
            })?
        }
        None => CanvasConfig::default(),
    };

    let mut fb = Framebuffer::new(config.width, config.height)?;
    fb.clear(config.background_color()?);

    info!("Rendering {}x{} showcase scene", config.width, config.height);
    render_showcase(&mut fb);

    fb.write_png(&args.output).map_err(|e| {
        error!("Failed to write {}: {}", args.output, e);
        e
    })?;

    info!("Wrote {}", args.output);
    Ok(())
}

/// Draw one of every primitive
fn render_showcase(fb: &mut Framebuffer) {
    let raster = Rasterizer::new();
    let mut stack = MatrixStack::new();

    let width = fb.width() as i32;
    let height = fb.height() as i32;

    // Frame around the whole canvas
    raster.draw_rect(fb, 0, 0, width, height, false, Color::from_rgb(90, 90, 90));

    // Line fan from the top-left region
    for i in 0..8 {
        raster.draw_line(
            fb,
            10,
            10,
            30 + i * 12,
            70,
            Color::from_rgb(255, 200, (i * 30) as u8),
        );
    }

    // Filled and outlined rectangles
    raster.draw_rect(fb, 120, 14, 40, 28, true, Color::from_rgb(70, 130, 220));
    raster.draw_rect(fb, 170, 14, 40, 28, false, Color::from_rgb(70, 220, 130));

    // A triangle and a quad
    raster.draw_triangle(fb, 20.0, 90.0, 90.0, 100.0, 45.0, 160.0, Color::RED);
    raster.draw_quad(
        fb, 110.0, 90.0, 170.0, 95.0, 165.0, 150.0, 105.0, 155.0,
        Color::from_rgb(200, 160, 40),
    );

    // Adaptive circles: plain, then under a rotated and scaled stack
    raster.draw_circle(
        fb,
        &stack,
        240.0,
        60.0,
        30.0,
        0.0,
        2.0 * std::f64::consts::PI,
        true,
        Color::from_rgb(160, 80, 200),
    );

    stack.push();
    stack.translate(240.0, 160.0);
    stack.rotate(std::f64::consts::FRAC_PI_4);
    stack.scale(1.0, 0.5);
    raster.draw_circle(
        fb,
        &stack,
        0.0,
        0.0,
        40.0,
        0.0,
        2.0 * std::f64::consts::PI,
        false,
        Color::WHITE,
    );
    raster.draw_circle(
        fb,
        &stack,
        0.0,
        0.0,
        28.0,
        0.0,
        std::f64::consts::PI,
        true,
        Color::from_rgb(80, 200, 200),
    );
    stack.pop();

    // Legacy angle-sweep circle for comparison
    raster.draw_circle_legacy(fb, 60, 200, 24, 0, 360, true, Color::from_rgb(220, 220, 80));
    raster.draw_circle_legacy(fb, 130, 200, 24, 0, 270, false, Color::from_rgb(80, 220, 120));

    // Polyline zig-zag along the bottom
    raster.draw_polyline(
        fb,
        &[(180, 225), (200, 205), (220, 225), (240, 205), (260, 225)],
        Color::from_rgb(255, 120, 120),
    );
}
