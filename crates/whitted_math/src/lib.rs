// Re-export glam for convenience
pub use glam::*;

// Whitted math types
mod camera;
mod color;
mod ray;
mod vector;

pub use camera::{Camera, FIELD_OF_VIEW_SCALE};
pub use color::{clamp_color, color_to_rgb8, pixels_as_bytes, Color, Rgb8, BLACK, GREY, WHITE};
pub use ray::Ray;
pub use vector::{normalize, reflect};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }
}
