//! Intersect trait and RayHit for ray-object intersection.

use lumen_core::Material;
use lumen_math::{DVec3, Ray};

/// Denominators at or below this magnitude mean the ray runs parallel to a
/// planar surface and cannot hit it.
pub const PARALLEL_EPSILON: f64 = 1e-8;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct RayHit<'a> {
    /// Point of intersection
    pub position: DVec3,
    /// Unit surface normal. Not oriented towards the ray: planes and
    /// triangles report their stored normal, spheres the outward one.
    pub normal: DVec3,
    /// Unit direction from the ray origin to the hit
    pub incident: DVec3,
    /// Material of the entity that was hit
    pub material: &'a Material,
}

impl<'a> RayHit<'a> {
    /// Build a hit at parameter `t` along `ray`.
    #[inline]
    pub fn new(ray: &Ray, t: f64, normal: DVec3, material: &'a Material) -> Self {
        let position = ray.at(t);
        Self {
            position,
            normal,
            incident: (position - ray.origin).normalize(),
            material,
        }
    }

    /// Squared distance between `point` and the hit position.
    #[inline]
    pub fn distance_squared(&self, point: DVec3) -> f64 {
        (self.position - point).length_squared()
    }
}

/// Trait for scene entities that can be hit by rays.
pub trait Intersect: Send + Sync {
    /// Find the first forward intersection of `ray` with this entity.
    ///
    /// Hits at or behind the ray origin (`t <= 0`) are rejected.
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>>;

    /// The material carried by this entity.
    fn material(&self) -> &Material;
}

impl<T: Intersect + ?Sized> Intersect for Box<T> {
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        (**self).intersect(ray)
    }

    fn material(&self) -> &Material {
        (**self).material()
    }
}
