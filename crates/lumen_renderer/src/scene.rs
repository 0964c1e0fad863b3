//! Renderable scene: entities, point lights and options.

use crate::Intersect;
use lumen_core::{PointLight, SceneOptions};

/// A scene ready to be rendered.
///
/// Entities and lights are read-only while rendering and are shared across
/// render workers without locking.
#[derive(Default)]
pub struct Scene {
    options: SceneOptions,
    entities: Vec<Box<dyn Intersect>>,
    lights: Vec<PointLight>,
}

impl Scene {
    /// Create an empty scene with the given options.
    pub fn new(options: SceneOptions) -> Self {
        Self {
            options,
            entities: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Add an entity that should be rendered.
    pub fn add_entity(&mut self, entity: impl Intersect + 'static) {
        log::debug!(
            "Adding entity #{} ({:?})",
            self.entities.len(),
            entity.material().material_type
        );
        self.entities.push(Box::new(entity));
    }

    /// Add a point light that should be computed.
    pub fn add_point_light(&mut self, light: PointLight) {
        log::debug!("Adding point light at {:?}", light.position);
        self.lights.push(light);
    }

    pub fn options(&self) -> &SceneOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SceneOptions) {
        self.options = options;
    }

    pub fn entities(&self) -> &[Box<dyn Intersect>] {
        &self.entities
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plane, Sphere, Triangle};
    use lumen_core::{Color, Material};
    use lumen_math::DVec3;

    #[test]
    fn test_scene_creation() {
        let mut scene = Scene::new(SceneOptions::with_anti_alias(3));
        assert_eq!(scene.entity_count(), 0);
        assert_eq!(scene.light_count(), 0);

        scene.add_entity(Sphere::new(DVec3::Z, 1.0, Material::default()));
        scene.add_entity(Plane::new(DVec3::ZERO, DVec3::Y, Material::reflective()));
        scene.add_entity(Triangle::new(
            DVec3::ZERO,
            DVec3::X,
            DVec3::Y,
            Material::refractive(1.5),
        ));
        scene.add_point_light(PointLight::new(DVec3::Y, Color::ONE));

        assert_eq!(scene.entity_count(), 3);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.options().anti_alias_multiplier, 3);
        assert_eq!(
            scene.entities()[2].material().material_type,
            lumen_core::MaterialType::Refractive
        );
    }

    #[test]
    fn test_scene_options_update() {
        let mut scene = Scene::default();
        assert_eq!(scene.options().anti_alias_multiplier, 1);

        scene.set_options(SceneOptions::with_anti_alias(4));
        assert_eq!(scene.options().samples_per_pixel(), 16);
    }

    #[test]
    fn test_scene_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Scene>();
    }
}
