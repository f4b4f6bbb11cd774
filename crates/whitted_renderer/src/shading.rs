//! Whitted shading: direct lighting, hard shadows and mirror reflection.
//!
//! Recursion depth counts up from 0 for primary rays. Once `max_depth` is
//! reached the reflected term is replaced by a constant instead of tracing
//! another ray.

use crate::hittable::{nearest_distance, nearest_intersection, Hittable, Intersection};
use crate::renderer::RenderConfig;
use whitted_core::{Light, Scene, SurfaceProperties};
use whitted_math::{normalize, reflect, Color, Ray, Vec3, BLACK};

/// Compute the color seen along a ray.
pub fn trace_ray(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    match nearest_intersection(scene.things(), ray) {
        Some(isect) => shade(&isect, scene, depth, config),
        None => config.background,
    }
}

/// Full color at a hit: natural color plus the reflected contribution.
pub fn shade(isect: &Intersection<'_>, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    let d = isect.ray.direction();
    let pos = isect.point();
    let normal = isect.thing.normal(pos);
    let reflect_dir = reflect(d, normal);
    let surface = isect.thing.surface().properties(pos);

    let natural = config.background + natural_color(&surface, pos, normal, reflect_dir, scene);
    let reflected = if depth >= config.max_depth {
        config.reflection_fallback
    } else {
        reflection_color(&surface, pos, reflect_dir, scene, depth, config)
    };

    natural + reflected
}

/// Mirror contribution: trace one level deeper and scale by reflectivity.
pub fn reflection_color(
    surface: &SurfaceProperties,
    pos: Vec3,
    reflect_dir: Vec3,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
) -> Color {
    let ray = Ray::new(pos, reflect_dir);
    trace_ray(&ray, scene, depth + 1, config) * surface.reflect
}

/// Diffuse and specular light from every unshadowed light.
pub fn natural_color(
    surface: &SurfaceProperties,
    pos: Vec3,
    normal: Vec3,
    reflect_dir: Vec3,
    scene: &Scene,
) -> Color {
    let reflect_dir = normalize(reflect_dir);

    scene.lights().iter().fold(BLACK, |acc, light| {
        let to_light = light.position - pos;
        let light_dir = normalize(to_light);

        if in_shadow(pos, light_dir, to_light.length(), scene) {
            return acc;
        }

        let illum = light_dir.dot(normal);
        let diffuse = if illum > 0.0 {
            light.color * illum
        } else {
            BLACK
        };

        let specular = light_dir.dot(reflect_dir);
        let highlight = if specular > 0.0 {
            light.color * specular.powf(surface.shininess)
        } else {
            BLACK
        };

        acc + diffuse * surface.diffuse + highlight * surface.specular
    })
}

/// Whether `light` is blocked when seen from `pos`.
pub fn is_in_shadow(pos: Vec3, light: &Light, scene: &Scene) -> bool {
    let to_light = light.position - pos;
    in_shadow(pos, normalize(to_light), to_light.length(), scene)
}

/// Anything hit at or before the light's distance casts a shadow.
#[inline]
fn in_shadow(pos: Vec3, light_dir: Vec3, light_distance: f32, scene: &Scene) -> bool {
    let ray = Ray::new(pos, light_dir);
    match nearest_distance(scene.things(), &ray) {
        Some(distance) => distance <= light_distance,
        None => false,
    }
}
