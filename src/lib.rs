//! Lightcast - a 2D shadow-casting light visualization
//!
//! Core modules:
//! - `sim`: Deterministic ray casting (scene, intersection engine, frame evaluation)
//! - `settings`: Data-driven configuration
//!
//! Rendering and input live outside this crate: an adapter feeds viewpoint
//! updates in and draws the beams that come back out each frame.

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Visualization constants
pub mod consts {
    /// Default drawing surface extent
    pub const DEFAULT_WIDTH: f32 = 1500.0;
    pub const DEFAULT_HEIGHT: f32 = 900.0;

    /// One ray per degree
    pub const DEFAULT_RAY_COUNT: usize = 360;

    /// Default random scene composition
    pub const DEFAULT_WALL_COUNT: usize = 10;
    pub const DEFAULT_CIRCLE_COUNT: usize = 20;
    pub const DEFAULT_CIRCLE_RADIUS: f32 = 20.0;
}

/// Rotate `point` around `center` by `angle` radians.
///
/// Counter-clockwise in a y-up frame; on a y-down canvas the sweep runs
/// clockwise. The ray fan covers the full turn either way.
#[inline]
pub fn rotate_about(center: Vec2, point: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let d = point - center;
    center + Vec2::new(cos * d.x - sin * d.y, sin * d.x + cos * d.y)
}
