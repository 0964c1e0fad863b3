//! Infinite plane primitive.

use crate::hit::{Intersect, RayHit, PARALLEL_EPSILON};
use lumen_core::Material;
use lumen_math::{DVec3, Ray};

/// An infinite plane through `center` facing `normal`.
#[derive(Debug, Clone)]
pub struct Plane {
    center: DVec3,
    /// Unit normal, normalized on construction
    normal: DVec3,
    material: Material,
}

impl Plane {
    /// Create a new plane. `normal` need not be unit length.
    pub fn new(center: DVec3, normal: DVec3, material: Material) -> Self {
        Self {
            center,
            normal: normal.normalize(),
            material,
        }
    }
}

impl Intersect for Plane {
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let denom = ray.direction.dot(self.normal);

        // Ray is parallel to the plane
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = (self.center - ray.origin).dot(self.normal) / denom;
        if t <= 0.0 {
            return None;
        }

        // The stored normal is reported as-is, even for back-face hits
        Some(RayHit::new(ray, t, self.normal, &self.material))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::Color;

    fn floor() -> Plane {
        Plane::new(
            DVec3::new(0.0, -1.0, 0.0),
            DVec3::new(0.0, 2.0, 0.0),
            Material::diffuse(Color::ONE),
        )
    }

    #[test]
    fn test_plane_normal_is_normalized() {
        let plane = floor();
        let hit = plane
            .intersect(&Ray::new(DVec3::ZERO, -DVec3::Y))
            .expect("should hit the floor");
        assert_eq!(hit.normal, DVec3::Y);
    }

    #[test]
    fn test_plane_hit() {
        let plane = floor();
        let ray = Ray::new(DVec3::ZERO, -DVec3::Y);

        let hit = plane.intersect(&ray).expect("ray should hit the floor");
        assert!((hit.position - DVec3::new(0.0, -1.0, 0.0)).length() < 1e-12);
        assert_eq!(hit.normal, DVec3::Y);
        assert!((hit.incident + DVec3::Y).length() < 1e-12);
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let plane = floor();

        for direction in [DVec3::X, DVec3::Z, DVec3::new(1.0, 0.0, 1.0).normalize()] {
            assert!(plane.intersect(&Ray::new(DVec3::ZERO, direction)).is_none());
            // Even a ray lying in the plane itself
            let in_plane = Ray::new(DVec3::new(0.0, -1.0, 0.0), direction);
            assert!(plane.intersect(&in_plane).is_none());
        }
    }

    #[test]
    fn test_plane_behind_ray_misses() {
        let plane = floor();
        let ray = Ray::new(DVec3::ZERO, DVec3::Y);
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_back_face_keeps_stored_normal() {
        let plane = floor();
        // Looking up at the floor from below
        let ray = Ray::new(DVec3::new(0.0, -3.0, 0.0), DVec3::Y);

        let hit = plane.intersect(&ray).expect("ray should hit the floor from below");
        assert_eq!(hit.normal, DVec3::Y);
        assert!(hit.incident.dot(hit.normal) > 0.0);
    }
}
