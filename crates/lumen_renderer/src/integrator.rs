//! Recursive Whitted-style integrator.
//!
//! `cast_ray` finds the nearest hit among all scene entities and shades it
//! according to its material:
//! - Diffuse: direct lighting from unshadowed point lights
//! - Reflective: perfect mirror recursion
//! - Refractive: Fresnel-weighted reflection and transmission
//! - Glossy: damped direct lighting plus a specular-weighted reflection
//!
//! Recursion stops once the depth exceeds `MAX_DEPTH`.

use crate::optics::{fresnel, reflect, refract};
use crate::{Intersect, RayHit, Scene};
use lumen_core::{Color, MaterialType, PointLight};
use lumen_math::{DVec3, Ray};

/// Deepest recursion level that is still shaded; deeper rays return black.
pub const MAX_DEPTH: u32 = 6;

/// Offset applied to secondary ray origins to avoid self-intersection.
pub const BIAS: f64 = 1e-3;

/// Diffuse weight of the glossy material.
pub const KD: f64 = 0.4;

/// Specular weight of the glossy material.
pub const KS: f64 = 0.8;

/// Exponent of the glossy specular lobe.
pub const SPECULAR_EXPONENT: i32 = 2;

/// Compute the color seen along `ray`.
///
/// Primary rays start at depth 0; every reflection or refraction adds one.
/// Misses return black (there is no background or ambient term).
pub fn cast_ray(scene: &Scene, ray: &Ray, depth: u32) -> Color {
    if depth > MAX_DEPTH {
        return Color::ZERO;
    }

    let Some(hit) = nearest_hit(scene.entities(), ray) else {
        return Color::ZERO;
    };

    match hit.material.material_type {
        MaterialType::Diffuse => direct_lighting(scene, &hit),
        MaterialType::Reflective => shade_reflective(scene, &hit, depth),
        MaterialType::Refractive => shade_refractive(scene, &hit, depth),
        MaterialType::Glossy => shade_glossy(scene, &hit, depth),
    }
}

/// Find the hit closest to the ray origin among `entities`.
///
/// Linear scan; on exact distance ties the earlier entity wins.
pub fn nearest_hit<'a, E: Intersect>(entities: &'a [E], ray: &Ray) -> Option<RayHit<'a>> {
    let mut closest: Option<(f64, RayHit<'a>)> = None;

    for entity in entities {
        if let Some(hit) = entity.intersect(ray) {
            let distance = hit.distance_squared(ray.origin);
            if closest.as_ref().map_or(true, |(best, _)| distance < *best) {
                closest = Some((distance, hit));
            }
        }
    }

    closest.map(|(_, hit)| hit)
}

/// True if any entity blocks the segment from `position` to `light`.
///
/// The shadow ray starts slightly off the surface, towards the light. Only
/// hits strictly closer than the light count as occluders.
pub fn is_shadowed<E: Intersect>(entities: &[E], position: DVec3, light: &PointLight) -> bool {
    let origin = position + light.direction_from(position) * BIAS;
    let shadow_ray = Ray::towards(origin, light.position);
    let light_distance = light.distance_squared(position);

    entities.iter().any(|entity| {
        entity
            .intersect(&shadow_ray)
            .is_some_and(|hit| hit.distance_squared(shadow_ray.origin) < light_distance)
    })
}

/// Contribution of a single point light to a diffuse surface.
///
/// Zero when the light is behind the surface or occluded.
pub fn light_contribution<E: Intersect>(entities: &[E], hit: &RayHit, light: &PointLight) -> Color {
    if is_shadowed(entities, hit.position, light) {
        return Color::ZERO;
    }

    let n_dot_l = hit.normal.dot(light.direction_from(hit.position)).max(0.0);
    hit.material.color * n_dot_l * light.color
}

/// Sum of the unshadowed diffuse contributions of every light. No ambient term.
pub fn direct_lighting(scene: &Scene, hit: &RayHit) -> Color {
    scene
        .lights()
        .iter()
        .map(|light| light_contribution(scene.entities(), hit, light))
        .sum()
}

/// Perfect mirror: follow the reflected ray without attenuation.
fn shade_reflective(scene: &Scene, hit: &RayHit, depth: u32) -> Color {
    let direction = reflect(hit.incident, hit.normal);
    let reflected = Ray::new(hit.position + hit.normal * BIAS, direction);
    cast_ray(scene, &reflected, depth + 1)
}

/// Dielectric: blend reflection and refraction by the Fresnel term.
fn shade_refractive(scene: &Scene, hit: &RayHit, depth: u32) -> Color {
    let ior = hit.material.refractive_index;
    let outside = hit.incident.dot(hit.normal) < 0.0;
    let offset = hit.normal * BIAS;

    let mut kr = fresnel(hit.incident, hit.normal, ior);
    let mut refraction_color = Color::ZERO;
    if kr < 1.0 {
        match refract(hit.incident, hit.normal, ior) {
            Some(direction) => {
                let origin = if outside {
                    hit.position - offset
                } else {
                    hit.position + offset
                };
                refraction_color = cast_ray(scene, &Ray::new(origin, direction), depth + 1);
            }
            // Numerically at the critical angle: treat as total internal reflection
            None => kr = 1.0,
        }
    }

    let origin = if outside {
        hit.position + offset
    } else {
        hit.position - offset
    };
    let direction = reflect(hit.incident, hit.normal);
    let reflection_color = cast_ray(scene, &Ray::new(origin, direction), depth + 1);

    reflection_color * kr + refraction_color * (1.0 - kr)
}

/// Glossy: damped direct lighting plus the reflected scene color weighted by
/// a Phong-style lobe around the mirror direction.
///
/// The lobe scales the color found along the reflected ray, not a light's
/// color.
fn shade_glossy(scene: &Scene, hit: &RayHit, depth: u32) -> Color {
    let diffuse = direct_lighting(scene, hit) * KD;

    let direction = reflect(hit.incident, hit.normal);
    let specular = direction.dot(-hit.incident).max(0.0).powi(SPECULAR_EXPONENT);
    let reflected = Ray::new(hit.position + hit.normal * BIAS, direction);

    diffuse + cast_ray(scene, &reflected, depth + 1) * specular * KS
}
