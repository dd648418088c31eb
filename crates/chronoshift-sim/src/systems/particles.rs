//! Cosmetic particles and beam visuals. Nothing here affects gameplay.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use chronoshift_core::components::{Particle, SniperBeam};
use chronoshift_core::constants::*;

/// Capped particle pool with its own RNG, so cosmetic draws never perturb
/// the gameplay stream.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    cap: usize,
    rng: ChaCha8Rng,
}

impl ParticleSystem {
    pub fn new(cap: usize, seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(cap),
            cap: cap.min(MAX_PARTICLES),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Add one particle. Dropped silently at the cap.
    pub fn spawn(&mut self, particle: Particle) -> bool {
        if self.particles.len() >= self.cap {
            return false;
        }
        self.particles.push(particle);
        true
    }

    /// Spray `count` particles outward and upward from a ground point.
    pub fn burst(&mut self, origin: Vec2, height: f32, count: usize, speed: f32) {
        for _ in 0..count {
            if self.particles.len() >= self.cap {
                break;
            }
            let angle = self.rng.gen_range(0.0..std::f32::consts::TAU);
            let magnitude = self.rng.gen_range(0.3..1.0) * speed;
            let lift = self.rng.gen_range(0.5..1.5) * speed * 0.5;
            let life = self.rng.gen_range(0.3..0.8);
            self.spawn(Particle {
                position: Vec3::new(origin.x, height, origin.y),
                velocity: Vec3::new(angle.sin() * magnitude, lift, angle.cos() * magnitude),
                life_secs: life,
                max_life_secs: life,
            });
        }
    }

    /// Ballistic motion under gravity; expired particles are swap-removed
    /// while walking backwards so no element is skipped.
    pub fn update(&mut self, dilated_dt: f32) {
        for i in (0..self.particles.len()).rev() {
            let p = &mut self.particles[i];
            p.velocity.y -= PARTICLE_GRAVITY * dilated_dt;
            p.position += p.velocity * dilated_dt;
            p.life_secs -= dilated_dt;
            if p.life_secs <= 0.0 {
                self.particles.swap_remove(i);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

/// Decay beam visuals and drop the finished ones.
pub fn update_beams(beams: &mut Vec<SniperBeam>, dilated_dt: f32) {
    for beam in beams.iter_mut() {
        beam.life_secs -= dilated_dt;
    }
    beams.retain(|b| b.life_secs > 0.0);
}
