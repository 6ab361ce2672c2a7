//! Scene setups for the bundled demos.

use glam::Vec3;

use prism_scene::animation::OrbitAnimation;
use prism_scene::geometry::{plane, sphere, torus};
use prism_scene::scene::{Camera, DrawMode, Material, Model};
use prism_scene::{Color, Scene};

/// Red torus between a green and a blue sphere above a white floor, lit by two
/// white lights. The torus is interactive.
pub fn lighting() -> Scene {
    let red = Material::phong().with_kd([1.0, 0.0, 0.0]);
    let green = Material::phong().with_kd([0.0, 1.0, 0.0]);
    let blue = Material::phong().with_kd([0.0, 0.0, 1.0]);
    let floor = Material::phong()
        .with_ka([1.0, 1.0, 1.0])
        .with_kd([0.5, 0.5, 0.5])
        .with_ks([0.0, 0.0, 0.0]);

    let mut scene = Scene::new();
    scene.camera = Camera::new().with_ortho_depth(-10.0, 100.0);

    scene.interactive = scene.push(Model::new(torus()).translate([0.0, 0.75, 0.0]).material(red));
    scene.push(
        Model::new(sphere())
            .translate([-1.25, 0.5, 0.0])
            .scale(Vec3::splat(0.5))
            .material(green),
    );
    scene.push(
        Model::new(sphere())
            .translate([1.25, 0.5, 0.0])
            .scale(Vec3::splat(0.5))
            .material(blue),
    );
    scene.push(Model::new(plane()).material(floor));
    scene
}

/// Colours of the four orbiting spheres, in orbit order.
pub const SATELLITE_COLORS: [Color; 4] = [
    Color::rgb(0.0, 1.0, 1.0),
    Color::rgb(1.0, 0.0, 1.0),
    Color::rgb(0.0, 0.0, 1.0),
    Color::rgb(1.0, 1.0, 0.0),
];

/// White torus over a wireframe floor with four small spheres circling it.
///
/// Returns the scene and the animation that drives the spheres (models `2..6`).
pub fn orbit() -> (Scene, OrbitAnimation) {
    let mut scene = Scene::new();
    scene.camera = Camera::new().with_ortho_depth(-10.0, 10.0);

    scene.interactive = scene.push(Model::new(torus()).scale(Vec3::splat(1.2)));
    scene.push(
        Model::new(plane())
            .translate([0.0, -1.0, 0.0])
            .draw_mode(DrawMode::Wireframe),
    );

    let first = scene.models.len();
    for color in SATELLITE_COLORS {
        scene.push(Model::new(sphere()).color(color).scale(Vec3::splat(0.2)));
    }

    let animation = OrbitAnimation::new(first..scene.models.len());
    animation.place_satellites(&mut scene);
    (scene, animation)
}
