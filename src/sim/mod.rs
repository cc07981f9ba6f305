//! Deterministic ray-casting module
//!
//! All visibility logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (scene order)
//! - No rendering or platform dependencies

pub mod frame;
pub mod intersect;
pub mod scene;

pub use frame::{Beam, FrameContext, evaluate_frame, nearest_hit};
pub use intersect::{Hit, Ray, intersect, ray_circle_intersections, ray_wall_intersection};
pub use scene::{Circle, Color, GeometryError, Scene, SceneObject, Wall};
