use glam::Vec3;

use crate::normalize;

/// Length of the `right` and `up` basis vectors. Sets the field of view.
pub const FIELD_OF_VIEW_SCALE: f32 = 1.5;

/// Reference "down" used to derive the camera basis.
const DOWN: Vec3 = Vec3::new(0.0, -1.0, 0.0);

/// Used instead of `DOWN` when the camera looks straight up or down.
const FALLBACK_DOWN: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Pinhole camera described by its position and view basis.
///
/// `forward` is unit length, `right` and `up` are scaled to
/// [`FIELD_OF_VIEW_SCALE`]. All three are mutually orthogonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Camera {
    /// Build a camera at `position` looking at `look_at`.
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        let forward = normalize(look_at - position);

        let mut side = forward.cross(DOWN);
        if side.length_squared() == 0.0 {
            // forward is parallel to DOWN
            side = forward.cross(FALLBACK_DOWN);
        }

        let right = normalize(side) * FIELD_OF_VIEW_SCALE;
        let up = normalize(forward.cross(right)) * FIELD_OF_VIEW_SCALE;

        Self {
            position,
            forward,
            right,
            up,
        }
    }

    /// Direction through the point `(rx, ry)` of the image plane.
    ///
    /// `rx`/`ry` are recentered screen coordinates; the result is normalized.
    #[inline]
    pub fn direction(&self, rx: f32, ry: f32) -> Vec3 {
        normalize(self.forward + self.right * rx + self.up * ry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthogonal_basis(camera: &Camera) {
        assert!((camera.forward.length() - 1.0).abs() < 1e-5);
        assert!((camera.right.length() - FIELD_OF_VIEW_SCALE).abs() < 1e-5);
        assert!((camera.up.length() - FIELD_OF_VIEW_SCALE).abs() < 1e-5);
        assert!(camera.forward.dot(camera.right).abs() < 1e-5);
        assert!(camera.forward.dot(camera.up).abs() < 1e-5);
        assert!(camera.right.dot(camera.up).abs() < 1e-5);
    }

    #[test]
    fn test_camera_basis() {
        let camera = Camera::new(Vec3::new(3.0, 2.0, 4.0), Vec3::new(-1.0, 0.5, 0.0));

        assert_eq!(camera.position, Vec3::new(3.0, 2.0, 4.0));
        assert_orthogonal_basis(&camera);
    }

    #[test]
    fn test_camera_up_points_up() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);

        assert!((camera.forward - Vec3::NEG_Z).length() < 1e-6);
        assert!(camera.up.y > 0.0);
        assert!((camera.up - Vec3::Y * FIELD_OF_VIEW_SCALE).length() < 1e-5);
    }

    #[test]
    fn test_camera_looking_straight_down() {
        let camera = Camera::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO);

        assert!(camera.right.is_finite());
        assert!(camera.up.is_finite());
        assert_orthogonal_basis(&camera);
    }

    #[test]
    fn test_camera_center_direction() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let dir = camera.direction(0.0, 0.0);

        assert!((dir - camera.forward).length() < 1e-6);
    }
}
