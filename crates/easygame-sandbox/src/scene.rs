//! Scene files with a schema version.
//!
//! Uses JSON with a version field so older files keep loading.

use easygame_collision::Collider;
use easygame_core::{AffineTransform2d, Vec2d};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Current schema version.
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scene version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u64, supported: u32 },
}

fn default_scale() -> f64 {
    1.0
}

/// A named collider placed in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    /// Collider in the body's local space.
    pub collider: Collider,
    #[serde(default)]
    pub position: Vec2d,
    /// Radians.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl Body {
    pub fn new(name: impl Into<String>, collider: Collider) -> Self {
        Self {
            name: name.into(),
            collider,
            position: Vec2d::ZERO,
            rotation: 0.0,
            scale: 1.0,
        }
    }

    pub fn at(mut self, position: Vec2d) -> Self {
        self.position = position;
        self
    }

    /// Placement transform: rotate, scale, then move to `position`.
    pub fn placement(&self) -> AffineTransform2d {
        AffineTransform2d::create(self.position, self.rotation, self.scale)
    }

    /// The collider in world space.
    pub fn world_collider(&self) -> Collider {
        self.collider.transformed(&self.placement())
    }
}

/// Versioned scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    /// Schema version for migration.
    pub version: u32,
    pub bodies: Vec<Body>,
}

impl SceneFile {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            version: CURRENT_VERSION,
            bodies,
        }
    }

    /// Serialize to JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>, SceneError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Deserialize from JSON bytes. A missing version is read as version 1.
    pub fn from_json(data: &[u8]) -> Result<Self, SceneError> {
        let mut raw: serde_json::Value = serde_json::from_slice(data)?;

        // Non-integer versions fall through to deserialization and fail there
        if let Some(found) = raw.get("version").and_then(|v| v.as_u64()) {
            if found > u64::from(CURRENT_VERSION) {
                return Err(SceneError::UnsupportedVersion {
                    found,
                    supported: CURRENT_VERSION,
                });
            }
        }
        if raw.get("version").is_none() {
            if let Some(obj) = raw.as_object_mut() {
                obj.insert("version".to_string(), CURRENT_VERSION.into());
            }
        }

        Ok(serde_json::from_value(raw)?)
    }

    /// Read and parse a scene file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }
}
