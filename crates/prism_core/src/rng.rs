//! Linear-congruential random sampler.
//!
//! A small deterministic generator for stochastic sampling (antialiasing,
//! soft shadows). State is 31 bits; a fixed seed reproduces the exact
//! sequence, which is the contract future parallel sampling relies on:
//! one generator per worker, never a shared global. Implements
//! [`rand::RngCore`] so it plugs into any `&mut dyn RngCore` consumer.

use std::time::{SystemTime, UNIX_EPOCH};

use prism_math::Vec3;
use rand::RngCore;

const LCG_A: u32 = 1_103_515_245;
const LCG_C: u32 = 12_345;
const LCG_MASK: u32 = 0x7fff_ffff;

/// Linear-congruential generator with 31-bit masked state.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Create a generator. A zero seed is replaced by the system clock.
    pub fn new(seed: u32) -> Self {
        let seed = if seed == 0 {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs() as u32)
                .unwrap_or(1)
        } else {
            seed
        };
        Self { state: seed }
    }

    fn next(&mut self) -> u32 {
        self.state = LCG_A
            .wrapping_mul(self.state)
            .wrapping_add(LCG_C)
            & LCG_MASK;
        self.state
    }

    /// Uniform f32 in [0, 1).
    ///
    /// Uses the top 24 bits of the state: an f32 mantissa holds exactly
    /// 24 bits, so dividing the full 31-bit value could round up to 1.0.
    pub fn next_f32(&mut self) -> f32 {
        (self.next() >> 7) as f32 * (1.0 / 16_777_216.0)
    }

    /// Uniform f32 in [min, max).
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Uniform i32 in [0, max); zero for non-positive `max`.
    pub fn range_i32(&mut self, max: i32) -> i32 {
        if max <= 0 {
            return 0;
        }
        (self.next_f32() * max as f32) as i32
    }

    /// Uniformly distributed unit vector.
    ///
    /// Rejection sampling in the unit cube, discarding points outside the
    /// unit ball and the tiny core where normalization would degenerate.
    pub fn unit_vector(&mut self) -> Vec3 {
        loop {
            let p = Vec3::new(
                self.range_f32(-1.0, 1.0),
                self.range_f32(-1.0, 1.0),
                self.range_f32(-1.0, 1.0),
            );
            let len_sq = p.length_squared();
            if len_sq > 1e-6 && len_sq < 1.0 {
                return p / len_sq.sqrt();
            }
        }
    }

    /// Uniformly distributed point in the unit disk (z = 0).
    pub fn in_unit_disk(&mut self) -> Vec3 {
        loop {
            let p = Vec3::new(self.range_f32(-1.0, 1.0), self.range_f32(-1.0, 1.0), 0.0);
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }

    /// Cosine-weighted sample on the hemisphere around `normal`.
    ///
    /// Maps two uniform variates through a concentric disk and lifts the
    /// result into a local frame around the normal. The frame is built
    /// from the world axis least parallel to the normal, so the cross
    /// product cannot degenerate.
    pub fn cosine_hemisphere(&mut self, normal: Vec3) -> Vec3 {
        let r1 = self.next_f32();
        let r2 = self.next_f32();

        let r = r1.sqrt();
        let theta = 2.0 * std::f32::consts::PI * r2;
        let x = r * theta.cos();
        let y = r * theta.sin();
        let z = (1.0 - r1).sqrt();

        let axis = if normal.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
        let u = axis.cross(normal).normalize();
        let v = normal.cross(u);

        u * x + v * y + normal * z
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.next()
    }

    fn next_u64(&mut self) -> u64 {
        ((self.next() as u64) << 32) | self.next() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
