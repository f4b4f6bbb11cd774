//! Hittable trait and nearest-hit search.

use whitted_core::Thing;
use whitted_math::{Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// The object that was hit
    pub thing: &'a Thing,
    /// The ray that hit it
    pub ray: Ray,
    /// Distance along the ray direction, always > 0
    pub distance: f32,
}

impl<'a> Intersection<'a> {
    /// World-space hit point.
    #[inline]
    pub fn point(&self) -> Vec3 {
        self.ray.at(self.distance)
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Distance along `ray` to the surface, or `None` if the ray misses.
    ///
    /// Rays parallel to or heading away from the surface return `None`.
    /// A returned distance may still be zero or negative (surface behind the
    /// origin); callers that need a hit in front of the origin filter for that.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Outward unit normal at a point on the surface.
    fn normal(&self, pos: Vec3) -> Vec3;
}

impl Hittable for Thing {
    #[inline]
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Thing::Sphere(sphere) => sphere.intersect(ray),
            Thing::Plane(plane) => plane.intersect(ray),
        }
    }

    #[inline]
    fn normal(&self, pos: Vec3) -> Vec3 {
        match self {
            Thing::Sphere(sphere) => sphere.normal(pos),
            Thing::Plane(plane) => plane.normal(pos),
        }
    }
}

/// Find the closest positive-distance hit along `ray`.
///
/// Objects are scanned in order; on equal distances the first one wins.
pub fn nearest_intersection<'a>(things: &'a [Thing], ray: &Ray) -> Option<Intersection<'a>> {
    let mut closest: Option<Intersection<'a>> = None;
    let mut closest_so_far = f32::INFINITY;

    for thing in things {
        if let Some(distance) = thing.intersect(ray) {
            if distance > 0.0 && distance < closest_so_far {
                closest_so_far = distance;
                closest = Some(Intersection {
                    thing,
                    ray: *ray,
                    distance,
                });
            }
        }
    }

    closest
}

/// Distance to the closest positive-distance hit along `ray`.
#[inline]
pub fn nearest_distance(things: &[Thing], ray: &Ray) -> Option<f32> {
    nearest_intersection(things, ray).map(|isect| isect.distance)
}
