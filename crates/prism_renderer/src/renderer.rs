//! Render loop.
//!
//! Sequential, single pass: one primary ray per pixel, a linear
//! closest-hit scan of the scene, one shading call, one framebuffer
//! write. The image is processed as full-width row bands iterated top to
//! bottom, which preserves exact row-major pixel order while giving a
//! future scheduler independent work units - band pixel vectors are
//! disjoint and the world is immutable during the pass, so parallelizing
//! needs nothing beyond a join. Any RNG used by future stochastic
//! sampling must be instantiated per band, never shared.

use prism_core::{Color, FrameBuffer};

use crate::camera::Camera;
use crate::primitive::{World, DEFAULT_EPSILON};
use crate::shading::Shader;

/// Render pass settings.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Minimum parametric distance for accepted intersections
    pub epsilon: f32,
    /// Color for rays that hit nothing
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            background: Color::ZERO,
        }
    }
}

/// A full-width range of image rows, rendered independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBand {
    /// First row of the band
    pub y_start: u32,
    /// One past the last row
    pub y_end: u32,
}

impl RowBand {
    /// Partition `height` rows into bands of at most `band_height` rows,
    /// in top-to-bottom order.
    pub fn split(height: u32, band_height: u32) -> Vec<RowBand> {
        let band_height = band_height.max(1);
        let mut bands = Vec::new();
        let mut y = 0;
        while y < height {
            bands.push(RowBand {
                y_start: y,
                y_end: (y + band_height).min(height),
            });
            y += band_height;
        }
        bands
    }

    /// Number of rows in the band.
    pub fn rows(&self) -> u32 {
        self.y_end - self.y_start
    }
}

/// Default number of rows per band.
const BAND_HEIGHT: u32 = 32;

/// Render one band into a local pixel vector, row-major within the band.
pub fn render_band(
    world: &World,
    camera: &Camera,
    shader: &dyn Shader,
    config: &RenderConfig,
    band: RowBand,
) -> Vec<Color> {
    let width = camera.image_width();
    let mut pixels = Vec::with_capacity((band.rows() * width) as usize);

    for y in band.y_start..band.y_end {
        for x in 0..width {
            let ray = camera.ray(x, y);
            let color = match world.closest_hit(&ray, config.epsilon) {
                Some(hit) => shader.shade(&hit, &ray),
                None => config.background,
            };
            pixels.push(color);
        }
    }

    pixels
}

/// Render the whole image into the framebuffer.
///
/// Every pixel is written exactly once; the pass runs to completion with
/// no early termination. Progress is logged per band.
pub fn render(
    world: &World,
    camera: &Camera,
    shader: &dyn Shader,
    config: &RenderConfig,
    fb: &mut FrameBuffer,
) {
    let width = camera.image_width();
    let height = camera.image_height();
    let bands = RowBand::split(height, BAND_HEIGHT);

    log::info!(
        "rendering {}x{} pixels, {} primitives, {} bands",
        width,
        height,
        world.len(),
        bands.len()
    );
    let start = std::time::Instant::now();

    for (i, band) in bands.iter().enumerate() {
        let pixels = render_band(world, camera, shader, config, *band);

        let mut px = pixels.into_iter();
        for y in band.y_start..band.y_end {
            for x in 0..width {
                if let Some(color) = px.next() {
                    fb.set(x, y, color);
                }
            }
        }

        log::debug!("band {}/{} done (rows {}..{})", i + 1, bands.len(), band.y_start, band.y_end);
    }

    log::info!("render finished in {:.2?}", start.elapsed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shading::FlatShader;
    use crate::sphere::Sphere;
    use prism_core::Material;
    use prism_math::Vec3;

    fn single_sphere_world() -> World {
        let mut world = World::new();
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Material::matte_white(),
        )));
        world
    }

    #[test]
    fn test_band_split_covers_image() {
        let bands = RowBand::split(100, 32);
        assert_eq!(bands.len(), 4);
        assert_eq!(bands[0], RowBand { y_start: 0, y_end: 32 });
        assert_eq!(bands[3], RowBand { y_start: 96, y_end: 100 });
        let total: u32 = bands.iter().map(|b| b.rows()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_band_split_degenerate_height() {
        assert_eq!(RowBand::split(10, 0).len(), 10); // clamped to 1-row bands
        assert!(RowBand::split(0, 32).is_empty());
    }

    #[test]
    fn test_center_pixel_shaded_corners_background() {
        let world = single_sphere_world();
        let camera = Camera::new(64, 64, 90.0);
        let config = RenderConfig {
            background: Color::new(0.0, 0.0, 1.0),
            ..RenderConfig::default()
        };
        let mut fb = FrameBuffer::new(64, 64);

        render(&world, &camera, &FlatShader, &config, &mut fb);

        // Center ray hits the sphere head-on: white at full diffuse
        let center = fb.get(32, 32);
        assert!(center.x > 0.9 && center.y > 0.9 && center.z > 0.9);

        // Corners miss and take the background
        for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
            assert_eq!(fb.get(x, y), Color::new(0.0, 0.0, 1.0));
        }
    }

    #[test]
    fn test_render_band_matches_full_render() {
        let world = single_sphere_world();
        let camera = Camera::new(16, 16, 90.0);
        let config = RenderConfig::default();

        let mut fb = FrameBuffer::new(16, 16);
        render(&world, &camera, &FlatShader, &config, &mut fb);

        // Rendering a middle band in isolation reproduces those rows
        let band = RowBand { y_start: 6, y_end: 10 };
        let pixels = render_band(&world, &camera, &FlatShader, &config, band);
        assert_eq!(pixels.len(), 4 * 16);

        for (i, color) in pixels.iter().enumerate() {
            let x = (i as u32) % 16;
            let y = band.y_start + (i as u32) / 16;
            let expected = fb.get(x, y);
            // Compare after the same quantization the framebuffer applies
            let mut probe = FrameBuffer::new(1, 1);
            probe.set(0, 0, *color);
            assert_eq!(probe.get(0, 0), expected, "pixel ({x}, {y})");
        }
    }

    #[test]
    fn test_empty_world_is_all_background() {
        let world = World::new();
        let camera = Camera::new(8, 8, 90.0);
        let config = RenderConfig::default();
        let mut fb = FrameBuffer::new(8, 8);
        fb.fill(Color::ONE);

        render(&world, &camera, &FlatShader, &config, &mut fb);

        // Default background is black
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }
}
