//! Plane intersection.

use crate::hittable::Hittable;
use whitted_core::Plane;
use whitted_math::{Ray, Vec3};

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction());
        if denom >= 0.0 {
            return None;
        }
        Some((self.normal.dot(ray.origin()) + self.offset) / -denom)
    }

    #[inline]
    fn normal(&self, _pos: Vec3) -> Vec3 {
        self.normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_core::Surface;

    #[test]
    fn test_plane_hit() {
        let plane = Plane::new(Vec3::Y, 0.0, Surface::Checkerboard);
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

        assert_eq!(plane.intersect(&ray), Some(5.0));
    }

    #[test]
    fn test_plane_facing_away() {
        let plane = Plane::new(Vec3::Y, 0.0, Surface::Checkerboard);
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 1.0, 0.0));

        assert_eq!(plane.intersect(&ray), None);
    }

    #[test]
    fn test_plane_parallel_ray() {
        let plane = Plane::new(Vec3::Y, 0.0, Surface::Checkerboard);

        // Above the plane, and lying in it
        let above = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        let inside = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(plane.intersect(&above), None);
        assert_eq!(plane.intersect(&inside), None);
    }

    #[test]
    fn test_plane_offset() {
        // y = 2 plane: normal.p + offset = 0 with offset -2
        let plane = Plane::new(Vec3::Y, -2.0, Surface::Checkerboard);
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y);

        assert_eq!(plane.intersect(&ray), Some(3.0));
    }

    #[test]
    fn test_plane_normal_is_constant() {
        let plane = Plane::new(Vec3::Y, 0.0, Surface::Checkerboard);

        assert_eq!(plane.normal(Vec3::ZERO), Vec3::Y);
        assert_eq!(plane.normal(Vec3::new(10.0, 0.0, -3.0)), Vec3::Y);
    }
}
