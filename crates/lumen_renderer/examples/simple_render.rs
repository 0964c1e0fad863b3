//! Simple ray tracer example.
//!
//! Renders a small room with one entity of every material type and saves it
//! as a PNG. Pass an output path and an anti-aliasing multiplier to override
//! the defaults, e.g. `simple_render out.png 3`.

use anyhow::{Context, Result};
use lumen_renderer::{
    Color, DVec3, ImageBuffer, Material, Plane, PointLight, Scene, SceneOptions, Sphere,
    Triangle,
};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "output.png".to_string());
    let anti_alias = match args.next() {
        Some(value) => value
            .parse()
            .with_context(|| format!("invalid anti-alias multiplier '{value}'"))?,
        None => 2,
    };

    let scene = build_scene(SceneOptions::with_anti_alias(anti_alias));

    let mut image = ImageBuffer::new(WIDTH, HEIGHT);
    scene.render(&mut image);

    image
        .save(&output)
        .with_context(|| format!("failed to save {output}"))?;
    Ok(())
}

fn build_scene(options: SceneOptions) -> Scene {
    let mut scene = Scene::new(options);

    // Room
    scene.add_entity(Plane::new(
        DVec3::new(0.0, -2.0, 0.0),
        DVec3::Y,
        Material::diffuse(Color::new(0.8, 0.8, 0.8)),
    ));
    scene.add_entity(Plane::new(
        DVec3::new(0.0, 0.0, 12.0),
        -DVec3::Z,
        Material::diffuse(Color::new(0.4, 0.5, 0.8)),
    ));
    scene.add_entity(Plane::new(
        DVec3::new(-5.0, 0.0, 0.0),
        DVec3::X,
        Material::diffuse(Color::new(0.8, 0.2, 0.2)),
    ));
    scene.add_entity(Plane::new(
        DVec3::new(5.0, 0.0, 0.0),
        -DVec3::X,
        Material::diffuse(Color::new(0.2, 0.8, 0.2)),
    ));

    // Spheres
    scene.add_entity(Sphere::new(
        DVec3::new(-2.2, -1.0, 8.0),
        1.0,
        Material::reflective(),
    ));
    scene.add_entity(Sphere::new(
        DVec3::new(0.0, -1.0, 6.5),
        1.0,
        Material::refractive(1.5),
    ));
    scene.add_entity(Sphere::new(
        DVec3::new(2.2, -1.0, 8.0),
        1.0,
        Material::glossy(Color::new(0.9, 0.7, 0.2)),
    ));

    scene.add_entity(Triangle::new(
        DVec3::new(-1.5, 0.5, 10.0),
        DVec3::new(1.5, 0.5, 10.0),
        DVec3::new(0.0, 3.0, 10.0),
        Material::diffuse(Color::new(0.9, 0.9, 0.3)),
    ));

    scene.add_point_light(PointLight::new(
        DVec3::new(0.0, 4.0, 3.0),
        Color::new(0.8, 0.8, 0.8),
    ));
    scene.add_point_light(PointLight::new(
        DVec3::new(-3.0, 3.0, 9.0),
        Color::new(0.4, 0.4, 0.5),
    ));

    scene
}
