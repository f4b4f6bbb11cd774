//! Whitted Renderer - CPU ray tracing
//!
//! A direct, single-sample Whitted-style ray tracer: one primary ray per
//! pixel, Phong-style diffuse and specular lighting from point lights, hard
//! shadows and depth-limited mirror reflection.
//!
//! Scenes come from `whitted_core`; the output is an unclamped
//! [`ImageBuffer`] that callers convert with [`ImageBuffer::to_rgb8`].

mod bucket;
mod hittable;
mod plane;
mod renderer;
mod shading;
mod sphere;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use hittable::{nearest_distance, nearest_intersection, Hittable, Intersection};
pub use renderer::{
    primary_ray, render, render_pixel, ImageBuffer, RenderConfig, RenderError, RenderResult,
    DEFAULT_MAX_DEPTH,
};
pub use shading::{is_in_shadow, natural_color, reflection_color, shade, trace_ray};

/// Re-export common math and scene types
pub use whitted_core::{Light, Plane, Scene, Sphere, Surface, SurfaceProperties, Thing};
pub use whitted_math::{Camera, Color, Ray, Rgb8, Vec3};
