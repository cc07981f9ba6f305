//! Per-frame visibility evaluation
//!
//! Casts a full fan of rays from the viewpoint, intersects each ray
//! against every obstacle, and keeps only the nearest hit per ray.

use std::f32::consts::TAU;

use glam::Vec2;

use super::intersect::{Hit, Ray, intersect};
use super::scene::{Color, Scene};
use crate::{Settings, rotate_about};

/// One drawable output segment, viewpoint to nearest hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beam {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Color,
}

/// Reduce a ray's hits to the single nearest one.
///
/// A lone hit is returned without computing any distance. Ties keep the
/// first hit in input order.
pub fn nearest_hit(hits: Vec<Hit>, origin: Vec2) -> Option<Hit> {
    if hits.len() < 2 {
        return hits.into_iter().next();
    }

    let mut iter = hits.into_iter();
    let mut best = iter.next()?;
    let mut best_dist = origin.distance(best.point);
    for hit in iter {
        let dist = origin.distance(hit.point);
        if dist < best_dist {
            best = hit;
            best_dist = dist;
        }
    }
    Some(best)
}

/// Evaluate one frame: cast `ray_count` evenly spaced rays from
/// `viewpoint` and emit a beam for each ray that struck something.
///
/// The fan's reference direction points down the +y axis; every ray
/// reaches `reach` units out, which must exceed the scene's bounding
/// extent so no genuine hit is clipped.
pub fn evaluate_frame(viewpoint: Vec2, scene: &Scene, ray_count: usize, reach: f32) -> Vec<Beam> {
    let far = viewpoint + Vec2::new(0.0, reach);
    let mut beams = Vec::with_capacity(ray_count);

    for i in 0..ray_count {
        let angle = TAU * i as f32 / ray_count as f32;
        let ray = Ray::new(viewpoint, rotate_about(viewpoint, far, angle));

        let hits: Vec<Hit> = scene
            .objects
            .iter()
            .flat_map(|object| intersect(&ray, object))
            .collect();

        if let Some(hit) = nearest_hit(hits, viewpoint) {
            beams.push(Beam {
                start: viewpoint,
                end: hit.point,
                color: hit.color,
            });
        }
    }

    beams
}

/// Everything one frame needs, owned by the driving adapter.
///
/// The viewpoint is the only field that changes between frames: input
/// handling writes it through [`FrameContext::set_viewpoint`] and the next
/// [`FrameContext::frame`] call reads it.
#[derive(Debug, Clone)]
pub struct FrameContext {
    scene: Scene,
    viewpoint: Vec2,
    ray_count: usize,
    reach: f32,
}

impl FrameContext {
    /// Build a context with the viewpoint starting at the surface center.
    pub fn new(scene: Scene, settings: &Settings) -> Self {
        Self {
            scene,
            viewpoint: Vec2::new(settings.width / 2.0, settings.height / 2.0),
            ray_count: settings.ray_count,
            reach: settings.reach(),
        }
    }

    pub fn viewpoint(&self) -> Vec2 {
        self.viewpoint
    }

    pub fn set_viewpoint(&mut self, viewpoint: Vec2) {
        self.viewpoint = viewpoint;
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn ray_count(&self) -> usize {
        self.ray_count
    }

    /// Evaluate one frame at the current viewpoint.
    pub fn frame(&self) -> Vec<Beam> {
        evaluate_frame(self.viewpoint, &self.scene, self.ray_count, self.reach)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::scene::{Circle, SceneObject, Wall};
    use proptest::prelude::*;

    const RED: Color = Color::new(255, 0, 0);
    const BLUE: Color = Color::new(0, 0, 255);
    const GREEN: Color = Color::new(0, 255, 0);

    fn hit(x: f32, y: f32, color: Color) -> Hit {
        Hit {
            point: Vec2::new(x, y),
            color,
        }
    }

    #[test]
    fn test_nearest_empty() {
        assert_eq!(nearest_hit(Vec::new(), Vec2::ZERO), None);
    }

    #[test]
    fn test_nearest_single() {
        let lone = hit(10.0, 0.0, RED);
        assert_eq!(nearest_hit(vec![lone], Vec2::ZERO), Some(lone));
    }

    #[test]
    fn test_nearest_picks_minimum() {
        let hits = vec![hit(30.0, 0.0, RED), hit(5.0, 0.0, BLUE), hit(12.0, 0.0, GREEN)];
        let nearest = nearest_hit(hits, Vec2::ZERO).unwrap();
        assert_eq!(nearest.color, BLUE);
    }

    #[test]
    fn test_nearest_tie_keeps_first() {
        let hits = vec![hit(10.0, 0.0, RED), hit(-10.0, 0.0, BLUE)];
        let nearest = nearest_hit(hits, Vec2::ZERO).unwrap();
        assert_eq!(nearest.color, RED);
    }

    proptest! {
        #[test]
        fn prop_nearest_is_minimum(points in prop::collection::vec((-500.0f32..500.0, -500.0f32..500.0), 1..20)) {
            let origin = Vec2::new(7.0, -3.0);
            let hits: Vec<Hit> = points.iter().map(|&(x, y)| hit(x, y, RED)).collect();
            let best = nearest_hit(hits.clone(), origin).unwrap();
            for h in &hits {
                prop_assert!(origin.distance(best.point) <= origin.distance(h.point));
            }
        }

        #[test]
        fn prop_nearest_order_independent_for_unique_minimum(
            points in prop::collection::vec((-500.0f32..500.0, -500.0f32..500.0), 2..20),
            rotation in 0usize..20,
        ) {
            let origin = Vec2::ZERO;
            let hits: Vec<Hit> = points.iter().map(|&(x, y)| hit(x, y, RED)).collect();

            let mut dists: Vec<f32> = hits.iter().map(|h| origin.distance(h.point)).collect();
            dists.sort_by(|a, b| a.partial_cmp(b).unwrap());
            prop_assume!(dists[1] - dists[0] > 1e-3);

            let mut shuffled = hits.clone();
            let shuffled_len = shuffled.len();
            shuffled.rotate_left(rotation % shuffled_len);

            let a = nearest_hit(hits, origin).unwrap();
            let b = nearest_hit(shuffled, origin).unwrap();
            prop_assert_eq!(a.point, b.point);
        }
    }

    fn four_ray_settings() -> Settings {
        Settings {
            width: 400.0,
            height: 400.0,
            ray_count: 4,
            ..Default::default()
        }
    }

    #[test]
    fn test_frame_wall_above_and_below() {
        // Horizontal wall below the viewpoint. With 4 rays (down, and the
        // three quarter turns) only the downward ray can strike it.
        let wall = Wall::new(Vec2::new(0.0, 200.0), Vec2::new(400.0, 200.0), RED).unwrap();
        let scene = Scene::from_objects(vec![SceneObject::Wall(wall)]);
        let settings = four_ray_settings();
        let viewpoint = Vec2::new(200.0, 100.0);

        let beams = evaluate_frame(viewpoint, &scene, settings.ray_count, settings.reach());
        assert_eq!(beams.len(), 1);
        assert_eq!(beams[0].start, viewpoint);
        assert!((beams[0].end - Vec2::new(200.0, 200.0)).length() < 1e-2);
        assert_eq!(beams[0].color, RED);
    }

    #[test]
    fn test_frame_viewpoint_on_wall_line_sees_nothing() {
        // Degenerate configuration from the wall's own line: the two rays
        // along the wall are parallel-dropped, the perpendicular pair
        // crosses at the origin itself and is excluded
        let wall = Wall::new(Vec2::new(0.0, 200.0), Vec2::new(400.0, 200.0), RED).unwrap();
        let scene = Scene::from_objects(vec![SceneObject::Wall(wall)]);
        let settings = four_ray_settings();

        let beams = evaluate_frame(
            Vec2::new(200.0, 200.0),
            &scene,
            settings.ray_count,
            settings.reach(),
        );
        assert!(beams.is_empty());
    }

    #[test]
    fn test_frame_circle_occludes_to_near_surface() {
        let circle = Circle::new(Vec2::new(300.0, 200.0), 20.0, BLUE).unwrap();
        let scene = Scene::from_objects(vec![SceneObject::Circle(circle)]);
        let viewpoint = Vec2::new(200.0, 200.0);

        let beams = evaluate_frame(viewpoint, &scene, 360, 2000.0);
        // The beam aimed straight at the center stops at the near surface
        let direct = beams
            .iter()
            .find(|b| (b.end.y - 200.0).abs() < 1e-2)
            .unwrap();
        assert!((viewpoint.distance(direct.end) - 280.0).abs() < 1e-2);
        assert_eq!(direct.color, BLUE);
    }

    #[test]
    fn test_frame_nearest_object_wins() {
        // A wall in front of a circle along the same ray: the wall occludes
        let wall = Wall::new(Vec2::new(250.0, 100.0), Vec2::new(250.0, 300.0), RED).unwrap();
        let circle = Circle::new(Vec2::new(300.0, 200.0), 20.0, BLUE).unwrap();
        let scene = Scene::from_objects(vec![
            SceneObject::Circle(circle),
            SceneObject::Wall(wall),
        ]);
        let viewpoint = Vec2::new(200.0, 200.0);

        let beams = evaluate_frame(viewpoint, &scene, 360, 2000.0);
        let direct = beams
            .iter()
            .find(|b| (b.end.y - 200.0).abs() < 1e-2 && b.end.x > 200.0)
            .unwrap();
        assert_eq!(direct.color, RED);
        assert!((direct.end.x - 250.0).abs() < 1e-2);
    }

    #[test]
    fn test_frame_empty_scene_emits_nothing() {
        let scene = Scene::new();
        for ray_count in [1, 4, 360] {
            let beams = evaluate_frame(Vec2::new(123.0, 456.0), &scene, ray_count, 2000.0);
            assert!(beams.is_empty());
        }
    }

    #[test]
    fn test_frame_emits_at_most_one_beam_per_ray() {
        let settings = Settings::default();
        let scene = Scene::generate(99, &settings);
        let ctx = FrameContext::new(scene, &settings);

        let beams = ctx.frame();
        assert!(beams.len() <= ctx.ray_count());
        assert!(beams.iter().all(|b| b.start == ctx.viewpoint()));
    }

    #[test]
    fn test_context_set_viewpoint() {
        let settings = Settings::default();
        let mut ctx = FrameContext::new(Scene::new(), &settings);

        let target = Vec2::new(42.0, 24.0);
        ctx.set_viewpoint(target);
        assert_eq!(ctx.viewpoint(), target);
    }
}
