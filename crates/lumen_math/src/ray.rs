use crate::DVec3;

/// A ray in 3D space with an origin and a direction.
///
/// Rays are the query object for every intersection test. The direction is
/// expected to be unit length at call sites but this is not enforced.
/// Rays are built fresh for every primary, secondary and shadow query and
/// never mutated afterwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray from `origin` heading towards `target`, with a normalized direction.
    #[inline]
    pub fn towards(origin: DVec3, target: DVec3) -> Self {
        Self::new(origin, (target - origin).normalize())
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: DVec3::ZERO,
            direction: DVec3::Z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(DVec3::ZERO, DVec3::X);

        assert_eq!(ray.at(0.0), DVec3::ZERO);
        assert_eq!(ray.at(1.0), DVec3::X);
        assert_eq!(ray.at(2.5), DVec3::new(2.5, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), DVec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_towards() {
        let ray = Ray::towards(DVec3::new(1.0, 1.0, 1.0), DVec3::new(1.0, 1.0, 4.0));

        assert_eq!(ray.origin, DVec3::new(1.0, 1.0, 1.0));
        assert!((ray.direction - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_ray_default_looks_down_z() {
        let ray = Ray::default();
        assert_eq!(ray.origin, DVec3::ZERO);
        assert_eq!(ray.direction, DVec3::Z);
    }
}
