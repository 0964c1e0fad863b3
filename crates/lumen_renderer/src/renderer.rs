//! Render driver.
//!
//! Generates primary rays for every pixel (optionally supersampled on a
//! regular sub-pixel grid), evaluates them with the integrator and writes
//! the averaged colors into the output buffer. Pixels are independent, so
//! the parallel driver renders buckets of pixels concurrently with rayon.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::integrator::cast_ray;
use crate::{PinholeCamera, Scene};
use lumen_core::{Color, ImageBuffer};

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Edge length of the square tiles rendered as one parallel task
    pub bucket_size: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Sub-pixel offsets used on both axes for a supersampling `multiplier`.
///
/// Starts at `1 / m^2` and steps by `1 / m` while below 1, giving `m`
/// offsets. Empty when `multiplier < 2` (single sample per pixel).
pub fn supersample_offsets(multiplier: u32) -> Vec<f64> {
    if multiplier < 2 {
        return Vec::new();
    }

    let m = multiplier as f64;
    let step = 1.0 / m;
    std::iter::successors(Some(1.0 / (m * m)), |offset| Some(offset + step))
        .take_while(|offset| *offset < 1.0)
        .collect()
}

/// Render a single pixel.
///
/// With no `offsets` one ray is traced through (x, y). Otherwise one ray is
/// traced per offset pair and the sum is divided by the number of pairs.
pub fn render_pixel(
    scene: &Scene,
    camera: &PinholeCamera,
    x: u32,
    y: u32,
    offsets: &[f64],
) -> Color {
    let (x, y) = (x as f64, y as f64);

    if offsets.is_empty() {
        return cast_ray(scene, &camera.primary_ray(x, y), 0);
    }

    let mut pixel_color = Color::ZERO;
    for i in offsets {
        for j in offsets {
            let ray = camera.primary_ray(x + i, y + j);
            pixel_color += cast_ray(scene, &ray, 0);
        }
    }

    let per_axis = offsets.len() as f64;
    pixel_color / (per_axis * per_axis)
}

/// Log the start of a render. Returns false if there is nothing to render.
fn begin_render(scene: &Scene, image: &ImageBuffer, mode: &str) -> bool {
    if image.is_empty() {
        log::warn!(
            "Skipping render of empty {}x{} image",
            image.width(),
            image.height()
        );
        return false;
    }

    log::info!(
        "Rendering {}x{} ({}): {} entities, {} lights, {} samples/pixel",
        image.width(),
        image.height(),
        mode,
        scene.entity_count(),
        scene.light_count(),
        scene.options().samples_per_pixel()
    );
    true
}

/// Render the scene into `image` on the calling thread.
///
/// Iterates columns in the outer loop and rows in the inner loop.
pub fn render_serial(scene: &Scene, image: &mut ImageBuffer) {
    if !begin_render(scene, image, "serial") {
        return;
    }

    let start = Instant::now();
    let camera = PinholeCamera::new(image.width(), image.height());
    let offsets = supersample_offsets(scene.options().anti_alias_multiplier);

    for x in 0..image.width() {
        for y in 0..image.height() {
            let color = render_pixel(scene, &camera, x, y, &offsets);
            image.set(x, y, color);
        }
    }

    log::info!("Time elapsed: {:?}", start.elapsed());
}

/// Render the scene into `image`, distributing buckets over the rayon pool.
///
/// Produces the same pixels as `render_serial`.
pub fn render(scene: &Scene, image: &mut ImageBuffer, settings: &RenderSettings) {
    if !begin_render(scene, image, "parallel") {
        return;
    }

    let start = Instant::now();
    let camera = PinholeCamera::new(image.width(), image.height());
    let offsets = supersample_offsets(scene.options().anti_alias_multiplier);
    let buckets = generate_buckets(image.width(), image.height(), settings.bucket_size);
    let bucket_count = buckets.len();

    let results: Vec<BucketResult> = buckets
        .into_par_iter()
        .map(|bucket| {
            let pixels = render_bucket(&bucket, scene, &camera, &offsets);
            log::debug!(
                "Bucket {}/{} done ({}x{} at {},{})",
                bucket.index + 1,
                bucket_count,
                bucket.width,
                bucket.height,
                bucket.x,
                bucket.y
            );
            BucketResult::new(bucket, pixels)
        })
        .collect();

    for result in &results {
        result.write_to(image);
    }

    log::info!(
        "Time elapsed: {:?} ({} buckets)",
        start.elapsed(),
        bucket_count
    );
}

impl Scene {
    /// Render the scene into `image` using all available cores.
    pub fn render(&self, image: &mut ImageBuffer) {
        render(self, image, &RenderSettings::default());
    }

    /// Render with explicit settings.
    pub fn render_with(&self, image: &mut ImageBuffer, settings: &RenderSettings) {
        render(self, image, settings);
    }

    /// Render the scene into `image` on the calling thread.
    pub fn render_serial(&self, image: &mut ImageBuffer) {
        render_serial(self, image);
    }
}
