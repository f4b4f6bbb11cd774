//! JSON scene files.
//!
//! A scene file lists things, lights and the camera pose:
//!
//! ```json
//! {
//!   "things": [
//!     { "type": "plane", "normal": [0.0, 1.0, 0.0], "offset": 0.0, "surface": "checkerboard" },
//!     { "type": "sphere", "center": [0.0, 1.0, -0.25], "radius": 1.0, "surface": "shiny" }
//!   ],
//!   "lights": [ { "position": [-2.0, 2.5, 0.0], "color": [0.49, 0.07, 0.07] } ],
//!   "camera": { "position": [3.0, 2.0, 4.0], "look_at": [-1.0, 0.5, 0.0] }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use whitted_math::normalize;

use crate::scene::{Light, Scene, Thing, View};

/// Errors that can occur while reading or writing scene files.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Thing {index}: sphere radius must be positive, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Thing {index}: plane normal must be a finite non-zero vector")]
    InvalidNormal { index: usize },
}

/// Result type for scene file operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// On-disk layout of a scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub things: Vec<Thing>,
    #[serde(default)]
    pub lights: Vec<Light>,
    pub camera: View,
}

impl SceneFile {
    /// Capture an existing scene.
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            things: scene.things().to_vec(),
            lights: scene.lights().to_vec(),
            camera: scene.view(),
        }
    }

    /// Validate the description and build a scene from it.
    ///
    /// Plane normals are re-normalized.
    pub fn into_scene(self) -> SceneResult<Scene> {
        let mut things = self.things;

        for (index, thing) in things.iter_mut().enumerate() {
            match thing {
                Thing::Sphere(sphere) => {
                    if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
                        return Err(SceneError::InvalidRadius {
                            index,
                            radius: sphere.radius,
                        });
                    }
                }
                Thing::Plane(plane) => {
                    let length = plane.normal.length();
                    if !(length > 0.0 && length.is_finite()) {
                        return Err(SceneError::InvalidNormal { index });
                    }
                    if (length - 1.0).abs() > 1e-6 {
                        log::debug!("Thing {}: normalizing plane normal of length {}", index, length);
                        plane.normal = normalize(plane.normal);
                    }
                }
            }
        }

        Ok(Scene::new(things, self.lights, self.camera))
    }
}

/// Load a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let scene = load_scene_from_str(&json)?;

    log::info!(
        "Loaded scene {} ({} things, {} lights)",
        path.display(),
        scene.thing_count(),
        scene.light_count()
    );

    Ok(scene)
}

/// Parse a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> SceneResult<Scene> {
    let file: SceneFile = serde_json::from_str(json)?;
    file.into_scene()
}

/// Serialize a scene to pretty-printed JSON.
pub fn scene_to_json(scene: &Scene) -> SceneResult<String> {
    Ok(serde_json::to_string_pretty(&SceneFile::from_scene(scene))?)
}

/// Write a scene to a JSON file.
pub fn save_scene<P: AsRef<Path>>(scene: &Scene, path: P) -> SceneResult<()> {
    let path = path.as_ref();
    fs::write(path, scene_to_json(scene)?)?;
    log::info!("Saved scene to {}", path.display());
    Ok(())
}
