//! Visualization settings
//!
//! Persisted as a JSON file next to the binary; unreadable or invalid
//! files fall back to defaults with a logged warning.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Visualization settings and scene composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Drawing surface extent, in pixels
    pub width: f32,
    pub height: f32,

    /// Rays per frame, evenly spaced over the full turn
    pub ray_count: usize,

    /// Random scene composition
    pub wall_count: usize,
    pub circle_count: usize,
    pub circle_radius: f32,

    /// Scene generation seed
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            ray_count: DEFAULT_RAY_COUNT,
            wall_count: DEFAULT_WALL_COUNT,
            circle_count: DEFAULT_CIRCLE_COUNT,
            circle_radius: DEFAULT_CIRCLE_RADIUS,
            seed: 0,
        }
    }
}

impl Settings {
    /// Ray length. The surface diagonal reaches past every obstacle from
    /// any interior viewpoint, so the finite ray never clips a hit.
    pub fn reach(&self) -> f32 {
        self.width.hypot(self.height)
    }

    /// Load settings from a JSON file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings.sanitized()
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("failed to save settings to {}: {err}", path.display());
                }
            }
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }

    /// Replace values downstream code cannot work with (non-positive
    /// extents or radii, a zero ray count) by their defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.width <= 0.0 || self.height <= 0.0 {
            log::warn!("non-positive surface extent, using default");
            self.width = defaults.width;
            self.height = defaults.height;
        }
        if self.circle_radius <= 0.0 {
            log::warn!("non-positive circle radius, using default");
            self.circle_radius = defaults.circle_radius;
        }
        if self.ray_count == 0 {
            log::warn!("ray count of zero, using default");
            self.ray_count = defaults.ray_count;
        }
        self
    }
}
