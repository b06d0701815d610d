//! EasyGame Sandbox - headless scene runner.
//!
//! Loads a versioned JSON scene, places each body's collider and runs the
//! pairwise collision test over every pair of bodies.

pub mod report;
pub mod scene;

pub use report::{check_all_pairs, draw_outlines, PairReport, Summary};
pub use scene::{Body, SceneError, SceneFile, CURRENT_VERSION};
