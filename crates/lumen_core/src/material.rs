//! Surface materials.

use lumen_math::DVec3;
use serde::{Deserialize, Serialize};

/// Color type alias (linear RGB, typically 0-1)
pub type Color = DVec3;

/// How a surface responds to incoming light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialType {
    /// Lambertian surface lit directly by point lights
    Diffuse,
    /// Perfect mirror
    Reflective,
    /// Dielectric that splits light between reflection and transmission
    Refractive,
    /// Damped diffuse plus a reflection-driven specular term
    Glossy,
}

/// A surface material.
///
/// Owned by the entity that carries it and lent by reference to every hit
/// the entity produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Shading model
    pub material_type: MaterialType,

    /// Surface color (used by the diffuse and glossy models)
    pub color: Color,

    /// Index of refraction (used by the refractive model)
    pub refractive_index: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            material_type: MaterialType::Diffuse,
            color: Color::ONE,
            refractive_index: 1.0,
        }
    }
}

impl Material {
    /// Create a new material.
    pub fn new(material_type: MaterialType, color: Color, refractive_index: f64) -> Self {
        Self {
            material_type,
            color,
            refractive_index,
        }
    }

    /// A diffuse material of the given color.
    pub fn diffuse(color: Color) -> Self {
        Self::new(MaterialType::Diffuse, color, 1.0)
    }

    /// A perfect mirror.
    pub fn reflective() -> Self {
        Self::new(MaterialType::Reflective, Color::ONE, 1.0)
    }

    /// A clear dielectric.
    ///
    /// - `refractive_index`: 1.0 = air, 1.5 = glass, 2.4 = diamond
    pub fn refractive(refractive_index: f64) -> Self {
        Self::new(MaterialType::Refractive, Color::ONE, refractive_index)
    }

    /// A glossy material of the given color.
    pub fn glossy(color: Color) -> Self {
        Self::new(MaterialType::Glossy, color, 1.0)
    }
}
