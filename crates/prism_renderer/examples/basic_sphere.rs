//! Minimal render example.
//!
//! Renders three matte spheres with flat shading and saves a PPM file.

use prism_core::{ppm, Color, FrameBuffer, Material};
use prism_renderer::{render, Camera, FlatShader, RenderConfig, Sphere, Vec3, World};

fn main() {
    let width = 800;
    let height = 600;

    let mut world = World::new();
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 0.0, -5.0),
        1.0,
        Material::matte_white(),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(-2.0, 0.0, -6.0),
        0.8,
        Material::matte(Color::new(1.0, 0.2, 0.2)),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(2.0, 0.0, -6.0),
        0.8,
        Material::matte(Color::new(0.2, 0.2, 1.0)),
    )));

    let camera = Camera::new(width, height, 90.0);
    let config = RenderConfig::default();
    let mut fb = FrameBuffer::new(width, height);

    println!("Rendering {}x{} @ {} spheres...", width, height, world.len());
    let start = std::time::Instant::now();
    render(&world, &camera, &FlatShader, &config, &mut fb);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    ppm::write_ppm(filename, &fb).expect("Failed to save image");
    println!("Saved to {}", filename);
}
