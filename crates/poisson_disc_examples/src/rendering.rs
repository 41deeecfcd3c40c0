//! PNG rendering of sampler state for the example binaries.
use std::path::Path;

use anyhow::Context;
use glam::Vec2;
use image::{Rgb, RgbImage};
use poisson_disc::prelude::*;

/// How a sampler is drawn into an image.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub background: [u8; 3],
    pub point_color: [u8; 3],
    pub active_color: [u8; 3],
    pub point_radius: i32,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32)) -> Self {
        Self {
            image_size,
            background: [250, 250, 245],
            point_color: [40, 40, 40],
            active_color: [220, 60, 40],
            point_radius: 2,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_point_radius(mut self, point_radius: i32) -> Self {
        self.point_radius = point_radius;
        self
    }
}

/// Draws every accepted point, highlighting active ones, and writes a PNG to `path`.
pub fn render_sampler_to_png<G: RandomSource>(
    sampler: &Sampler<G>,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    let domain = Vec2::new(sampler.config().width, sampler.config().height);
    let scale = Vec2::new(w as f32, h as f32) / domain;

    let points = sampler.points();
    for point in points {
        draw_disc(&mut img, point.position * scale, config.point_radius, config.point_color);
    }
    for &index in sampler.active() {
        draw_disc(
            &mut img,
            points[index].position * scale,
            config.point_radius + 1,
            config.active_color,
        );
    }

    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn draw_disc(img: &mut RgbImage, center: Vec2, radius: i32, color: [u8; 3]) {
    let cx = center.x.round() as i32;
    let cy = center.y.round() as i32;
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let x = cx + dx;
            let y = cy + dy;
            if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
                img.put_pixel(x as u32, y as u32, Rgb(color));
            }
        }
    }
}
