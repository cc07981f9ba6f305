//! Scene objects and random scene generation
//!
//! A scene is an ordered list of colored obstacles, built once at startup
//! and immutable for the rest of the session.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use thiserror::Error;

use crate::Settings;

/// Errors raised when constructing degenerate geometry
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Both wall endpoints coincide, so the segment has no direction.
    #[error("degenerate wall: both endpoints at ({x}, {y})")]
    DegenerateWall { x: f32, y: f32 },

    /// Circle radius must be strictly positive.
    #[error("invalid circle radius: {0}")]
    InvalidRadius(f32),
}

/// An RGB color, kept numeric until the adapter turns it into a style string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS form for canvas stroke styles
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Uniformly random color
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }
}

/// A finite wall segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub a: Vec2,
    pub b: Vec2,
    pub color: Color,
}

impl Wall {
    pub fn new(a: Vec2, b: Vec2, color: Color) -> Result<Self, GeometryError> {
        if a == b {
            return Err(GeometryError::DegenerateWall { x: a.x, y: a.y });
        }
        Ok(Self { a, b, color })
    }
}

/// A circular obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32, color: Color) -> Result<Self, GeometryError> {
        if radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            color,
        })
    }
}

/// An obstacle that rays can strike
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneObject {
    Wall(Wall),
    Circle(Circle),
}

impl SceneObject {
    /// Color used when this object is the nearest hit
    pub fn color(&self) -> Color {
        match self {
            SceneObject::Wall(wall) => wall.color,
            SceneObject::Circle(circle) => circle.color,
        }
    }
}

/// An ordered, session-static collection of obstacles
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    pub fn from_objects(objects: Vec<SceneObject>) -> Self {
        Self { objects }
    }

    pub fn push(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Generate a random scene: walls first, then circles, with counts and
    /// extent taken from `settings`. Same seed, same scene.
    pub fn generate(seed: u64, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut objects = Vec::with_capacity(settings.wall_count + settings.circle_count);

        for _ in 0..settings.wall_count {
            let color = Color::random(&mut rng);
            // Re-roll a coincident endpoint pair instead of failing
            let wall = loop {
                let a = random_point(&mut rng, settings);
                let b = random_point(&mut rng, settings);
                if let Ok(wall) = Wall::new(a, b, color) {
                    break wall;
                }
            };
            objects.push(SceneObject::Wall(wall));
        }

        for _ in 0..settings.circle_count {
            let center = random_point(&mut rng, settings);
            objects.push(SceneObject::Circle(Circle {
                center,
                radius: settings.circle_radius,
                color: Color::random(&mut rng),
            }));
        }

        log::info!(
            "generated scene: {} walls, {} circles (seed {seed})",
            settings.wall_count,
            settings.circle_count
        );

        Scene { objects }
    }
}

fn random_point<R: Rng>(rng: &mut R, settings: &Settings) -> Vec2 {
    Vec2::new(
        rng.random_range(0.0..settings.width),
        rng.random_range(0.0..settings.height),
    )
}
