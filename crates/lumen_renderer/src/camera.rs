//! Fixed pinhole camera for primary ray generation.

use lumen_math::{DVec3, Ray};

/// Horizontal field of view in radians (60 degrees).
pub const HFOV: f64 = std::f64::consts::PI / 3.0;

/// Pinhole camera at the origin looking down +Z.
///
/// Uses a left-handed convention: +X is right, +Y is up, and the image plane
/// sits at depth 1 in camera space.
#[derive(Debug, Clone, Copy)]
pub struct PinholeCamera {
    width: f64,
    height: f64,
    /// tan(hfov / 2)
    scale_x: f64,
    /// tan(hfov / 2) / aspect
    scale_y: f64,
}

impl PinholeCamera {
    /// Camera position
    pub const ORIGIN: DVec3 = DVec3::ZERO;

    /// Create a camera for an image of the given resolution.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width as f64;
        let height = height as f64;
        let aspect_ratio = width / height;
        let scale_x = (HFOV / 2.0).tan();

        Self {
            width,
            height,
            scale_x,
            scale_y: scale_x / aspect_ratio,
        }
    }

    /// Generate the primary ray through image coordinates (x, y).
    ///
    /// Coordinates are in pixels and may be fractional; (0, 0) is the top-left
    /// corner of the image.
    pub fn primary_ray(&self, x: f64, y: f64) -> Ray {
        // Normalize to [0, 1], then map to [-1, 1] with Y flipped
        let u = x / self.width;
        let v = y / self.height;
        let nx = (2.0 * u - 1.0) * self.scale_x;
        let ny = (1.0 - 2.0 * v) * self.scale_y;

        Ray::new(Self::ORIGIN, DVec3::new(nx, ny, 1.0).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_looks_down_z() {
        let camera = PinholeCamera::new(100, 50);
        let ray = camera.primary_ray(50.0, 25.0);

        assert_eq!(ray.origin, DVec3::ZERO);
        assert!((ray.direction - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_corner_rays_span_field_of_view() {
        let camera = PinholeCamera::new(100, 100);
        let half = (HFOV / 2.0).tan();

        let top_left = camera.primary_ray(0.0, 0.0);
        let expected = DVec3::new(-half, half, 1.0).normalize();
        assert!((top_left.direction - expected).length() < 1e-12);

        let bottom_right = camera.primary_ray(100.0, 100.0);
        let expected = DVec3::new(half, -half, 1.0).normalize();
        assert!((bottom_right.direction - expected).length() < 1e-12);
    }

    #[test]
    fn test_horizontal_fov_is_60_degrees() {
        let camera = PinholeCamera::new(200, 100);
        let left = camera.primary_ray(0.0, 50.0).direction;
        let right = camera.primary_ray(200.0, 50.0).direction;

        let angle = left.angle_between(right);
        assert!((angle - HFOV).abs() < 1e-9);
    }

    #[test]
    fn test_aspect_ratio_scales_vertical_extent() {
        let camera = PinholeCamera::new(200, 100);
        let top = camera.primary_ray(100.0, 0.0).direction;

        // Vertical half-extent is tan(hfov / 2) / 2 for a 2:1 image
        let expected = DVec3::new(0.0, (HFOV / 2.0).tan() / 2.0, 1.0).normalize();
        assert!((top - expected).length() < 1e-12);
    }

    #[test]
    fn test_primary_rays_are_unit_length() {
        let camera = PinholeCamera::new(64, 48);
        for (x, y) in [(0.0, 0.0), (13.25, 40.5), (63.9, 47.9)] {
            let ray = camera.primary_ray(x, y);
            assert!((ray.direction.length() - 1.0).abs() < 1e-12);
        }
    }
}
