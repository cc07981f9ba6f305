//! Lightcast demo driver
//!
//! Headless stand-in for a canvas adapter: generates a scene, sweeps the
//! viewpoint along a closed path the way a mouse would, and logs what each
//! frame would draw.

use std::path::Path;

use glam::Vec2;

use lightcast::Settings;
use lightcast::sim::{FrameContext, Scene};

/// Frames to run before exiting
const DEMO_FRAMES: usize = 240;

fn main() {
    env_logger::init();
    log::info!("lightcast demo starting");

    let settings = std::env::args()
        .nth(1)
        .map(|path| Settings::load(Path::new(&path)))
        .unwrap_or_default();

    let scene = Scene::generate(settings.seed, &settings);
    let mut ctx = FrameContext::new(scene, &settings);

    let center = Vec2::new(settings.width / 2.0, settings.height / 2.0);
    let orbit = settings.height / 4.0;

    let mut total_beams = 0usize;
    for frame_index in 0..DEMO_FRAMES {
        let t = frame_index as f32 / DEMO_FRAMES as f32 * std::f32::consts::TAU;
        ctx.set_viewpoint(center + Vec2::new(t.cos(), t.sin()) * orbit);

        let beams = ctx.frame();
        total_beams += beams.len();

        if let Some(shortest) = beams
            .iter()
            .map(|b| b.start.distance(b.end))
            .min_by(|a, b| a.total_cmp(b))
        {
            log::debug!(
                "frame {frame_index}: {} of {} rays hit, nearest obstacle {shortest:.1}px",
                beams.len(),
                ctx.ray_count(),
            );
        } else {
            log::debug!("frame {frame_index}: no hits");
        }
    }

    println!(
        "ran {DEMO_FRAMES} frames over {} objects, {} beams drawn ({:.1} per frame)",
        ctx.scene().len(),
        total_beams,
        total_beams as f32 / DEMO_FRAMES as f32,
    );
}
