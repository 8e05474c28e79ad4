//! Scene description loaded from JSON.
//!
//! The config layer is plain data: image dimensions, camera parameters,
//! and an ordered list of spheres with materials. The renderer makes no
//! assumption about how it was populated; the CLI turns it into live
//! camera and world objects.

use std::fs;
use std::path::Path;

use prism_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::material::Material;

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scene file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output image dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImageConfig {
    pub width: u32,
    pub height: u32,
}

/// Look-at camera parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Camera position in world space
    #[serde(default)]
    pub position: Vec3,

    /// Point the camera looks at
    #[serde(default = "default_look_at")]
    pub look_at: Vec3,

    /// Up-direction hint for the camera basis
    #[serde(default = "default_up")]
    pub up: Vec3,

    /// Vertical field of view in degrees
    #[serde(default = "default_vfov")]
    pub vfov: f32,
}

fn default_look_at() -> Vec3 {
    Vec3::new(0.0, 0.0, -1.0)
}

fn default_up() -> Vec3 {
    Vec3::Y
}

fn default_vfov() -> f32 {
    90.0
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            look_at: default_look_at(),
            up: default_up(),
            vfov: default_vfov(),
        }
    }
}

/// One sphere in the scene.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SphereConfig {
    pub center: Vec3,
    pub radius: f32,
    #[serde(default)]
    pub material: Material,
}

/// A complete scene description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub image: ImageConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    pub spheres: Vec<SphereConfig>,
}

impl Default for SceneConfig {
    /// The classic demo scene: one white matte sphere in front of a
    /// canonical camera.
    fn default() -> Self {
        Self {
            image: ImageConfig {
                width: 800,
                height: 600,
            },
            camera: CameraConfig::default(),
            spheres: vec![SphereConfig {
                center: Vec3::new(0.0, 0.0, -5.0),
                radius: 1.0,
                material: Material::matte_white(),
            }],
        }
    }
}

/// Load a scene description from a JSON file.
pub fn load_scene(path: impl AsRef<Path>) -> Result<SceneConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
