//! Particle ring placement.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Particle;
use crate::options::ParticleOptions;

/// Place `options.count` particles evenly by angle around the Y axis, with
/// jittered radius and height.
///
/// Jitter comes from a RNG seeded with `options.seed`, so the same options
/// always give the same layout.
#[must_use]
pub fn particle_ring(options: &ParticleOptions) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let count = options.count as f32;

    (0..options.count)
        .map(|i| {
            let angle = i as f32 / count * TAU;
            let radius = options.base_radius
                + rng.random::<f32>() * options.radius_jitter;
            let y = (rng.random::<f32>() - 0.5) * options.height_span;
            Particle {
                position: Vec3::new(angle.cos() * radius, y, angle.sin() * radius),
                scale: options.scale,
            }
        })
        .collect()
}
