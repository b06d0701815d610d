//! EasyGame Sandbox - runs the collision dispatcher over a scene file.
//!
//! Usage: `easygame-sandbox <scene.json> [--draw]`
//!
//! Log verbosity follows `EASYGAME_LOG` (an `EnvFilter` directive, default
//! `info`).

use anyhow::{bail, Context, Result};
use easygame_core::DrawCommand;
use easygame_sandbox::{check_all_pairs, draw_outlines, SceneFile, Summary};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_env("EASYGAME_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut scene_path: Option<PathBuf> = None;
    let mut draw = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--draw" => draw = true,
            _ if scene_path.is_none() => scene_path = Some(PathBuf::from(arg)),
            other => bail!("unexpected argument: {other}"),
        }
    }
    let Some(scene_path) = scene_path else {
        bail!("usage: easygame-sandbox <scene.json> [--draw]");
    };

    let scene = SceneFile::load(&scene_path)
        .with_context(|| format!("loading scene {}", scene_path.display()))?;
    info!(path = %scene_path.display(), bodies = scene.bodies.len(), "Scene loaded");

    let reports = check_all_pairs(&scene);
    for report in &reports {
        let verdict = match &report.outcome {
            Ok(true) => "collide".to_string(),
            Ok(false) => "apart".to_string(),
            Err(e) => format!("skipped ({e})"),
        };
        println!("{:<16} {:<16} {}", report.first, report.second, verdict);
    }

    let summary = Summary::from_reports(&reports);
    info!(
        hits = summary.hits,
        misses = summary.misses,
        unsupported = summary.unsupported,
        "Collision pass complete"
    );

    if draw {
        let commands = draw_outlines(&scene);
        let strokes = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke | DrawCommand::StrokeCircle { .. }))
            .count();
        info!(commands = commands.len(), strokes, "Debug outlines recorded");
        println!("{}", serde_json::to_string_pretty(&commands)?);
    }

    Ok(())
}
