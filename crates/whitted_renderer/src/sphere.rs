//! Sphere intersection.

use crate::hittable::Hittable;
use whitted_core::Sphere;
use whitted_math::{normalize, Ray, Vec3};

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let eo = self.center - ray.origin();
        let v = eo.dot(ray.direction());

        // Center is behind the origin
        if v < 0.0 {
            return None;
        }

        let disc = self.radius_squared() - (eo.dot(eo) - v * v);
        if disc < 0.0 {
            return None;
        }

        let dist = v - disc.sqrt();
        // A zero distance counts as a miss; this keeps rays leaving the
        // surface from re-hitting it.
        if dist == 0.0 {
            None
        } else {
            Some(dist)
        }
    }

    fn normal(&self, pos: Vec3) -> Vec3 {
        normalize(pos - self.center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_core::Surface;

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Surface::Shiny);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        assert_eq!(sphere.intersect(&ray), Some(4.0));
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(5.0, 5.0, 5.0), 1.0, Surface::Shiny);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Surface::Shiny);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);

        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn test_sphere_zero_distance_is_miss() {
        // Origin on the surface, heading through the sphere
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Surface::Shiny);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::NEG_Z);

        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn test_sphere_grazing_hit() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Surface::Shiny);
        let ray = Ray::new(Vec3::new(1.0, 0.0, 5.0), Vec3::NEG_Z);

        assert_eq!(sphere.intersect(&ray), Some(5.0));
    }

    #[test]
    fn test_sphere_normal() {
        let sphere = Sphere::new(Vec3::new(1.0, 1.0, 1.0), 2.0, Surface::Shiny);

        assert_eq!(sphere.normal(Vec3::new(3.0, 1.0, 1.0)), Vec3::X);
        assert_eq!(sphere.normal(Vec3::new(1.0, -1.0, 1.0)), Vec3::NEG_Y);
    }
}
