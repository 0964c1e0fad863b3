//! Sphere primitive for ray tracing.

use crate::hit::{Intersect, RayHit};
use lumen_core::Material;
use lumen_math::{DVec3, Ray};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: DVec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: DVec3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Intersect for Sphere {
    /// Geometric ray-sphere intersection.
    ///
    /// Projects the center onto the ray to find the closest approach, then
    /// steps back and forth by the half chord length.
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        let d2 = l.dot(l) - tca * tca;
        let radius2 = self.radius * self.radius;

        // Closest approach passes outside the sphere
        if d2 > radius2 {
            return None;
        }

        let thc = (radius2 - d2).sqrt();
        let (mut t0, mut t1) = (tca - thc, tca + thc);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        // Origin inside the sphere: use the far root
        let t = if t0 > 0.0 { t0 } else { t1 };
        if t <= 0.0 {
            return None;
        }

        let position = ray.at(t);
        let outward_normal = (position - self.center).normalize();
        Some(RayHit::new(ray, t, outward_normal, &self.material))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
