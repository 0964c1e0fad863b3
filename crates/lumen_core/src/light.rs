//! Point light sources.

use lumen_math::DVec3;
use serde::{Deserialize, Serialize};

use crate::Color;

/// An infinitesimal light emitting `color` from `position` in all directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: DVec3,
    pub color: Color,
}

impl PointLight {
    /// Create a new point light.
    pub fn new(position: DVec3, color: Color) -> Self {
        Self { position, color }
    }

    /// Squared distance from `point` to the light.
    #[inline]
    pub fn distance_squared(&self, point: DVec3) -> f64 {
        (self.position - point).length_squared()
    }

    /// Unit vector from `point` towards the light.
    #[inline]
    pub fn direction_from(&self, point: DVec3) -> DVec3 {
        (self.position - point).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_geometry() {
        let light = PointLight::new(DVec3::new(0.0, 4.0, 0.0), Color::ONE);

        assert_eq!(light.distance_squared(DVec3::ZERO), 16.0);
        assert_eq!(light.direction_from(DVec3::ZERO), DVec3::Y);
        assert_eq!(light.direction_from(DVec3::new(0.0, 8.0, 0.0)), -DVec3::Y);
    }
}
