//! prism - a small CPU ray tracer.
//!
//! Loads a scene description (or falls back to the built-in demo scene),
//! renders it with flat shading, and writes the image to disk.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use prism_core::{config, ppm, FrameBuffer, SceneConfig};
use prism_renderer::{render, Camera, FlatShader, RenderConfig, Sphere, World};

/// Command line arguments.
#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "A small CPU ray tracer")]
struct Args {
    /// Scene description file (JSON); renders the built-in demo scene
    /// when omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Override the image width from the scene
    #[arg(long)]
    width: Option<u32>,

    /// Override the image height from the scene
    #[arg(long)]
    height: Option<u32>,

    /// Override the vertical field of view in degrees
    #[arg(long)]
    fov: Option<f32>,

    /// Output file path (.ppm or .png)
    #[arg(short, long, default_value = "output.ppm")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut scene = match &args.scene {
        Some(path) => config::load_scene(path)
            .with_context(|| format!("failed to load scene {}", path.display()))?,
        None => SceneConfig::default(),
    };

    if let Some(width) = args.width {
        scene.image.width = width;
    }
    if let Some(height) = args.height {
        scene.image.height = height;
    }
    if let Some(fov) = args.fov {
        scene.camera.vfov = fov;
    }

    let camera = Camera::look_at(
        scene.camera.position,
        scene.camera.look_at,
        scene.camera.up,
        scene.camera.vfov,
        scene.image.width,
        scene.image.height,
    )
    .context("invalid camera in scene")?;

    let mut world = World::new();
    for sphere in &scene.spheres {
        world.add(Box::new(Sphere::new(
            sphere.center,
            sphere.radius,
            sphere.material,
        )));
    }

    info!(
        "scene: {} sphere(s), {}x{} @ fov {}",
        world.len(),
        scene.image.width,
        scene.image.height,
        scene.camera.vfov
    );

    let mut fb = FrameBuffer::new(scene.image.width, scene.image.height);
    render(&world, &camera, &FlatShader, &RenderConfig::default(), &mut fb);

    save_image(&fb, &args.output)?;
    info!("saved {}", args.output.display());

    Ok(())
}

/// Write the framebuffer to disk, choosing the format by extension.
fn save_image(fb: &FrameBuffer, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "ppm" => ppm::write_ppm(path, fb)
            .with_context(|| format!("failed to write {}", path.display()))?,
        "png" => image::save_buffer(
            path,
            fb.as_bytes(),
            fb.width(),
            fb.height(),
            image::ColorType::Rgb8,
        )
        .with_context(|| format!("failed to write {}", path.display()))?,
        other => bail!("unsupported output format {other:?} (use .ppm or .png)"),
    }

    Ok(())
}
