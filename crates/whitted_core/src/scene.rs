//! Scene model for the ray tracer.
//!
//! A scene is built once and is read-only while it is being rendered.
//! Geometry and lights are kept in the order they were added; the renderer
//! relies on that order to break ties between equally distant hits.

use serde::{Deserialize, Serialize};
use whitted_math::{Camera, Color, Vec3};

use crate::surface::Surface;

/// A sphere. `radius` must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub surface: Surface,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, surface: Surface) -> Self {
        Self {
            center,
            radius,
            surface,
        }
    }

    #[inline]
    pub fn radius_squared(&self) -> f32 {
        self.radius * self.radius
    }
}

/// An infinite plane `normal . p + offset = 0`.
///
/// `normal` must be unit length and points into the visible half-space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vec3,
    pub offset: f32,
    pub surface: Surface,
}

impl Plane {
    pub fn new(normal: Vec3, offset: f32, surface: Surface) -> Self {
        Self {
            normal,
            offset,
            surface,
        }
    }
}

/// Any intersectable scene object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Thing {
    Sphere(Sphere),
    Plane(Plane),
}

impl Thing {
    pub fn sphere(center: Vec3, radius: f32, surface: Surface) -> Self {
        Thing::Sphere(Sphere::new(center, radius, surface))
    }

    pub fn plane(normal: Vec3, offset: f32, surface: Surface) -> Self {
        Thing::Plane(Plane::new(normal, offset, surface))
    }

    /// The material of this object.
    pub fn surface(&self) -> Surface {
        match self {
            Thing::Sphere(sphere) => sphere.surface,
            Thing::Plane(plane) => plane.surface,
        }
    }
}

/// A point light. Intensity does not fall off with distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl View {
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }
}

/// A complete scene: ordered things, ordered lights and one camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    things: Vec<Thing>,
    lights: Vec<Light>,
    view: View,
    camera: Camera,
}

impl Scene {
    /// Create a scene. The camera basis is derived from `view`.
    pub fn new(things: Vec<Thing>, lights: Vec<Light>, view: View) -> Self {
        let camera = Camera::new(view.position, view.look_at);
        Self {
            things,
            lights,
            view,
            camera,
        }
    }

    /// Scene objects, in insertion order.
    pub fn things(&self) -> &[Thing] {
        &self.things
    }

    /// Lights, in insertion order.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The camera pose this scene was built from.
    pub fn view(&self) -> View {
        self.view
    }

    pub fn thing_count(&self) -> usize {
        self.things.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
