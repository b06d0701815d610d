//! Integration tests for the sandbox scene runner.
//!
//! Loads the bundled demo scene and checks every pair verdict.

use easygame_collision::{CollisionError, ShapeKind};
use easygame_core::DrawCommand;
use easygame_sandbox::{check_all_pairs, draw_outlines, SceneFile, Summary};

const DEMO_SCENE: &[u8] = include_bytes!("../../easygame-sandbox/scenes/demo.json");

fn verdict(scene: &SceneFile, first: &str, second: &str) -> Result<bool, CollisionError> {
    check_all_pairs(scene)
        .into_iter()
        .find(|r| r.first == first && r.second == second)
        .map(|r| r.outcome)
        .unwrap_or_else(|| panic!("no report for {first}/{second}"))
}

#[test]
fn demo_scene_loads() {
    let scene = SceneFile::from_json(DEMO_SCENE).unwrap();
    let names: Vec<_> = scene.bodies.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["player", "zombie", "boulder", "pickup", "fence"]);
}

#[test]
fn demo_scene_verdicts() {
    let scene = SceneFile::from_json(DEMO_SCENE).unwrap();

    // Radius sum 10, distance 9
    assert_eq!(verdict(&scene, "player", "zombie"), Ok(true));
    // Boulder radius 2 scaled by 3, pickup offset 2 inside its own wrapper
    assert_eq!(verdict(&scene, "boulder", "pickup"), Ok(true));
    assert_eq!(verdict(&scene, "zombie", "boulder"), Ok(false));
    assert_eq!(verdict(&scene, "player", "pickup"), Ok(false));
    assert_eq!(
        verdict(&scene, "player", "fence"),
        Err(CollisionError::UnsupportedPair {
            left: ShapeKind::Circle,
            right: ShapeKind::Polygon,
        })
    );
}

#[test]
fn demo_scene_summary() {
    let scene = SceneFile::from_json(DEMO_SCENE).unwrap();
    let reports = check_all_pairs(&scene);
    assert_eq!(reports.len(), 10);
    assert_eq!(
        Summary::from_reports(&reports),
        Summary {
            hits: 2,
            misses: 4,
            unsupported: 4
        }
    );
}

#[test]
fn demo_scene_outlines() {
    let scene = SceneFile::from_json(DEMO_SCENE).unwrap();
    let commands = draw_outlines(&scene);

    let circles = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::StrokeCircle { .. }))
        .count();
    let segments = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::LineTo(_)))
        .count();
    assert_eq!(circles, 4);
    // Three fence vertices plus the closing one
    assert_eq!(segments, 4);
}
