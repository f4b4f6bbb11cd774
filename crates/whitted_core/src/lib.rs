//! Whitted Core - Scene model for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Thing` (`Sphere`, `Plane`), `Light`, `View`
//! - **Materials**: `Surface` (`Shiny`, `Checkerboard`) and `SurfaceProperties`
//! - **Scene files**: JSON loading/saving with validation
//!
//! # Example
//!
//! ```ignore
//! use whitted_core::{default_scene, load_scene};
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} things, {} lights",
//!     scene.thing_count(),
//!     scene.light_count());
//! ```

pub mod loader;
pub mod presets;
pub mod scene;
pub mod surface;

// Re-export commonly used types
pub use loader::{
    load_scene, load_scene_from_str, save_scene, scene_to_json, SceneError, SceneFile,
    SceneResult,
};
pub use presets::default_scene;
pub use scene::{Light, Plane, Scene, Sphere, Thing, View};
pub use surface::{Surface, SurfaceProperties};
