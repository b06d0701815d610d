//! Pairwise collision reports over a scene.

use easygame_collision::{Collider, CollisionError, DebugDraw};
use easygame_core::{DrawCommand, RecordingSurface};
use tracing::{debug, info, warn};

use crate::scene::SceneFile;

/// Outcome of testing one pair of bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct PairReport {
    pub first: String,
    pub second: String,
    pub outcome: Result<bool, CollisionError>,
}

/// Totals over all reported pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub hits: usize,
    pub misses: usize,
    pub unsupported: usize,
}

impl Summary {
    pub fn from_reports(reports: &[PairReport]) -> Self {
        reports.iter().fold(Self::default(), |mut s, r| {
            match r.outcome {
                Ok(true) => s.hits += 1,
                Ok(false) => s.misses += 1,
                Err(_) => s.unsupported += 1,
            }
            s
        })
    }
}

/// Test every unordered pair of bodies once, in file order.
pub fn check_all_pairs(scene: &SceneFile) -> Vec<PairReport> {
    let placed: Vec<(&str, Collider)> = scene
        .bodies
        .iter()
        .map(|body| (body.name.as_str(), body.world_collider()))
        .collect();

    let mut reports = Vec::new();
    for (i, (first, a)) in placed.iter().enumerate() {
        for (second, b) in &placed[i + 1..] {
            let outcome = a.collides(b);
            match &outcome {
                Ok(true) => info!(first, second, "Bodies collide"),
                Ok(false) => debug!(first, second, "Bodies are apart"),
                Err(e) => warn!(first, second, error = %e, "Skipping unsupported pair"),
            }
            reports.push(PairReport {
                first: first.to_string(),
                second: second.to_string(),
                outcome,
            });
        }
    }
    reports
}

/// Draw every body's world-space outline into a display list.
pub fn draw_outlines(scene: &SceneFile) -> Vec<DrawCommand> {
    let mut surface = RecordingSurface::new();
    for body in &scene.bodies {
        body.world_collider().draw_debug_info(&mut surface);
        debug!(body = %body.name, depth = surface.depth(), "Outline drawn");
    }
    surface.take_commands()
}
