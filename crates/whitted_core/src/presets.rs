//! Built-in scenes.

use whitted_math::{Color, Vec3};

use crate::scene::{Light, Scene, Thing, View};
use crate::surface::Surface;

/// The reference scene: a checkerboard floor, two shiny spheres and four
/// colored lights.
pub fn default_scene() -> Scene {
    let things = vec![
        Thing::plane(Vec3::new(0.0, 1.0, 0.0), 0.0, Surface::Checkerboard),
        Thing::sphere(Vec3::new(0.0, 1.0, -0.25), 1.0, Surface::Shiny),
        Thing::sphere(Vec3::new(-1.0, 0.5, 1.5), 0.5, Surface::Shiny),
    ];

    let lights = vec![
        Light::new(Vec3::new(-2.0, 2.5, 0.0), Color::new(0.49, 0.07, 0.07)),
        Light::new(Vec3::new(1.5, 2.5, 1.5), Color::new(0.07, 0.07, 0.49)),
        Light::new(Vec3::new(1.5, 2.5, -1.5), Color::new(0.07, 0.49, 0.071)),
        Light::new(Vec3::new(0.0, 3.5, 0.0), Color::new(0.21, 0.21, 0.35)),
    ];

    let view = View::new(Vec3::new(3.0, 2.0, 4.0), Vec3::new(-1.0, 0.5, 0.0));

    Scene::new(things, lights, view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_contents() {
        let scene = default_scene();

        assert_eq!(scene.thing_count(), 3);
        assert_eq!(scene.light_count(), 4);
        assert!(matches!(scene.things()[0], Thing::Plane(_)));
        assert!(matches!(scene.things()[1], Thing::Sphere(_)));
        assert_eq!(scene.view().look_at, Vec3::new(-1.0, 0.5, 0.0));
    }
}
