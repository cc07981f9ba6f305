//! Ray intersection tests against scene obstacles
//!
//! All functions here are pure. "No intersection" outcomes (parallel
//! walls, missed circles) are empty results, not errors.

use glam::Vec2;

use super::scene::{Circle, Color, SceneObject, Wall};

/// A cast ray, represented as a finite segment from `origin` to `tip`.
///
/// The tip must sit beyond the scene's bounding extent so the finite
/// representation never clips a genuine hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec2,
    pub tip: Vec2,
}

impl Ray {
    pub fn new(origin: Vec2, tip: Vec2) -> Self {
        Self { origin, tip }
    }

    /// Point at parameter `u` along the segment (u=0 origin, u=1 tip)
    #[inline]
    pub fn at(&self, u: f32) -> Vec2 {
        self.origin + (self.tip - self.origin) * u
    }
}

/// A single intersection: where the ray struck, and the obstacle's color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub point: Vec2,
    pub color: Color,
}

/// Ray/wall intersection via the parametric line-line formulation.
///
/// `t` parametrizes the wall, `u` the ray. A hit requires t strictly
/// inside (0, 1) and u strictly positive; u has no upper bound because the
/// ray stands in for an infinite cast. A parallel or collinear pair
/// reports no hit, including the overlapping-collinear case.
pub fn ray_wall_intersection(ray: &Ray, wall: &Wall) -> Option<Hit> {
    let wall_dir = wall.b - wall.a;
    let ray_dir = ray.tip - ray.origin;

    let den = wall_dir.perp_dot(ray_dir);
    if den == 0.0 {
        return None;
    }

    let offset = ray.origin - wall.a;
    let t = offset.perp_dot(ray_dir) / den;
    let u = offset.perp_dot(wall_dir) / den;

    if t > 0.0 && t < 1.0 && u > 0.0 {
        Some(Hit {
            point: wall.a + wall_dir * t,
            color: wall.color,
        })
    } else {
        None
    }
}

/// Ray/circle intersections via the discriminant method, projected onto
/// the ray's segment parametrization.
///
/// Roots outside [0, 1] fall beyond the ray's finite representation and
/// are dropped. When both roots qualify the nearer one comes first.
pub fn ray_circle_intersections(ray: &Ray, circle: &Circle) -> Vec<Hit> {
    let dir = ray.tip - ray.origin;
    let to_origin = ray.origin - circle.center;

    let b = -2.0 * dir.dot(to_origin);
    let c = 2.0 * dir.length_squared();
    let disc = b * b - 2.0 * c * (to_origin.length_squared() - circle.radius * circle.radius);
    if disc < 0.0 {
        return Vec::new();
    }

    let d = disc.sqrt();
    let mut hits = Vec::with_capacity(2);
    for u in [(b - d) / c, (b + d) / c] {
        if (0.0..=1.0).contains(&u) {
            hits.push(Hit {
                point: ray.at(u),
                color: circle.color,
            });
        }
    }
    hits
}

/// Intersect a ray against one scene object.
pub fn intersect(ray: &Ray, object: &SceneObject) -> Vec<Hit> {
    match object {
        SceneObject::Wall(wall) => ray_wall_intersection(ray, wall).into_iter().collect(),
        SceneObject::Circle(circle) => ray_circle_intersections(ray, circle),
    }
}
