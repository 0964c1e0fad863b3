//! Reflection, refraction and Fresnel helpers for specular materials.
//!
//! All functions take the incident direction `incident` pointing towards the
//! surface and a unit `normal` that may face either side. Whether the ray is
//! entering or leaving the medium is decided from the sign of their dot
//! product: negative means the ray arrives from the side the normal points to.

use lumen_math::DVec3;

/// Mirror `incident` about `normal`. Returns a unit vector.
#[inline]
pub fn reflect(incident: DVec3, normal: DVec3) -> DVec3 {
    (incident - 2.0 * incident.dot(normal) * normal).normalize()
}

/// Refract `incident` through a surface with index of refraction
/// `refractive_index` on the inside and 1.0 outside (Snell's law).
///
/// Returns `None` on total internal reflection, where no transmitted
/// direction exists.
pub fn refract(incident: DVec3, normal: DVec3, refractive_index: f64) -> Option<DVec3> {
    let mut cos_i = incident.dot(normal).clamp(-1.0, 1.0);
    let (mut eta_i, mut eta_t) = (1.0, refractive_index);
    let mut n = normal;

    if cos_i < 0.0 {
        // Entering from outside
        cos_i = -cos_i;
    } else {
        // Leaving the medium
        std::mem::swap(&mut eta_i, &mut eta_t);
        n = -normal;
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }

    Some((eta * incident + (eta * cos_i - k.sqrt()) * n).normalize())
}

/// Fraction of light reflected at a dielectric boundary (unpolarized
/// Fresnel equations). The remainder `1 - kr` is transmitted.
///
/// Returns exactly 1.0 under total internal reflection.
pub fn fresnel(incident: DVec3, normal: DVec3, refractive_index: f64) -> f64 {
    let cos_i = incident.dot(normal).clamp(-1.0, 1.0);
    let (mut eta_i, mut eta_t) = (1.0, refractive_index);
    if cos_i >= 0.0 {
        std::mem::swap(&mut eta_i, &mut eta_t);
    }

    let sin_t = eta_i / eta_t * (1.0 - cos_i * cos_i).max(0.0).sqrt();
    if sin_t >= 1.0 {
        return 1.0;
    }

    let cos_t = (1.0 - sin_t * sin_t).max(0.0).sqrt();
    let cos_i = cos_i.abs();
    let rs = (eta_t * cos_i - eta_i * cos_t) / (eta_t * cos_i + eta_i * cos_t);
    let rp = (eta_i * cos_i - eta_t * cos_t) / (eta_i * cos_i + eta_t * cos_t);
    (rs * rs + rp * rp) / 2.0
}
