//! Triangle primitive for ray tracing.
//!
//! Uses the geometric (plane hit + inside-outside) ray-triangle test.

use crate::hit::{Intersect, RayHit, PARALLEL_EPSILON};
use lumen_core::Material;
use lumen_math::{DVec3, Ray};

/// A triangle primitive.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Vertices
    v0: DVec3,
    v1: DVec3,
    v2: DVec3,
    /// Material
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The face normal follows the winding `v0 -> v1 -> v2` (right-hand rule).
    pub fn new(v0: DVec3, v1: DVec3, v2: DVec3, material: Material) -> Self {
        Self {
            v0,
            v1,
            v2,
            material,
        }
    }

    pub fn vertices(&self) -> [DVec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Unnormalized face normal, `(v1 - v0) x (v2 - v0)`.
    #[inline]
    fn face_normal(&self) -> DVec3 {
        (self.v1 - self.v0).cross(self.v2 - self.v0)
    }
}

impl Intersect for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let n = self.face_normal();

        // Ray is parallel to the triangle's plane
        let n_dot_dir = n.dot(ray.direction);
        if n_dot_dir.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = n.dot(self.v0 - ray.origin) / n_dot_dir;
        if t <= 0.0 {
            return None;
        }

        // Inside-outside test against each edge
        let p = ray.at(t);
        let edges = [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)];
        for (start, end) in edges {
            let c = (end - start).cross(p - start);
            if n.dot(c) < 0.0 {
                return None;
            }
        }

        Some(RayHit::new(ray, t, n.normalize(), &self.material))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
