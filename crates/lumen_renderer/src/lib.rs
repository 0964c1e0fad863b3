//! Lumen Renderer - recursive Whitted-style ray tracing.
//!
//! Traces one primary ray per pixel (or a regular grid of sub-pixel rays
//! when supersampling) from a pinhole camera at the origin, and shades hits
//! with diffuse, mirror, glass (Fresnel-weighted) and glossy materials under
//! hard-shadowed point lights.

mod bucket;
mod camera;
mod hit;
mod integrator;
mod optics;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod triangle;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{PinholeCamera, HFOV};
pub use hit::{Intersect, RayHit, PARALLEL_EPSILON};
pub use integrator::{
    cast_ray, direct_lighting, is_shadowed, light_contribution, nearest_hit, BIAS, KD, KS,
    MAX_DEPTH, SPECULAR_EXPONENT,
};
pub use optics::{fresnel, reflect, refract};
pub use plane::Plane;
pub use renderer::{render, render_pixel, render_serial, supersample_offsets, RenderSettings};
pub use scene::Scene;
pub use sphere::Sphere;
pub use triangle::Triangle;

// Re-export the scene data and math types needed to build a scene
pub use lumen_core::{
    color_to_rgba, Color, ImageBuffer, ImageError, ImageResult, Material, MaterialType,
    PointLight, SceneOptions,
};
pub use lumen_math::{DVec3, Ray};
