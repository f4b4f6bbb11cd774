//! Surface materials.
//!
//! Surfaces are stateless: every property is a function of the world-space
//! position being shaded.

use serde::{Deserialize, Serialize};
use whitted_math::{Color, Vec3, BLACK, GREY, WHITE};

/// Material properties at a point on a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceProperties {
    /// Diffuse color
    pub diffuse: Color,
    /// Specular highlight color
    pub specular: Color,
    /// Reflectivity coefficient applied to the mirrored ray
    pub reflect: f32,
    /// Specular exponent
    pub shininess: f32,
}

/// Material kinds known to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    /// Uniform white, highly reflective.
    Shiny,
    /// Black/white unit tiles on the x/z plane.
    Checkerboard,
}

impl Surface {
    /// Look up the material properties at `pos`.
    pub fn properties(&self, pos: Vec3) -> SurfaceProperties {
        match self {
            Surface::Shiny => SurfaceProperties {
                diffuse: WHITE,
                specular: GREY,
                reflect: 0.7,
                shininess: 250.0,
            },
            Surface::Checkerboard => {
                let (diffuse, reflect) = if is_odd_tile(pos) {
                    (WHITE, 0.1)
                } else {
                    (BLACK, 0.7)
                };
                SurfaceProperties {
                    diffuse,
                    specular: WHITE,
                    reflect,
                    shininess: 150.0,
                }
            }
        }
    }
}

/// Parity of `floor(x) + floor(z)`, kept in floating point.
///
/// Sums too large for an integer stay exact here; NaN and infinite sums
/// count as odd.
#[inline]
fn is_odd_tile(pos: Vec3) -> bool {
    (pos.z.floor() + pos.x.floor()) % 2.0 != 0.0
}
