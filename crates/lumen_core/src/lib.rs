//! Lumen Core - Renderer-agnostic scene data.
//!
//! This crate provides:
//!
//! - **Surface description**: `Color`, `Material`, `MaterialType`
//! - **Lighting**: `PointLight`
//! - **Configuration**: `SceneOptions`
//! - **Output**: `ImageBuffer` and its PNG/RGBA conversion
//!
//! # Example
//!
//! ```
//! use lumen_core::{Color, ImageBuffer, Material, PointLight};
//! use lumen_math::DVec3;
//!
//! let red = Material::diffuse(Color::new(1.0, 0.0, 0.0));
//! let light = PointLight::new(DVec3::new(0.0, 5.0, 0.0), Color::ONE);
//! let image = ImageBuffer::new(4, 3);
//! assert_eq!(image.get(0, 0), Color::ZERO);
//! # let _ = (red, light);
//! ```

pub mod buffer;
pub mod light;
pub mod material;
pub mod options;

// Re-export commonly used types
pub use buffer::{color_to_rgba, ImageBuffer, ImageError, ImageResult};
pub use light::PointLight;
pub use material::{Color, Material, MaterialType};
pub use options::SceneOptions;
