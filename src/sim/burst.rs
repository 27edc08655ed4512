//! Radial particle burst played on a target hit
//!
//! Purely cosmetic. The only gameplay effect is that the next level waits
//! until every particle has expired.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::consts::BURST_DRAG;

#[derive(Debug, Clone)]
pub struct BurstParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: u32,
    pub lifespan: u32,
}

impl BurstParticle {
    /// Remaining life in `[0, 1]`
    pub fn life(&self) -> f32 {
        1.0 - self.age as f32 / self.lifespan.max(1) as f32
    }
}

#[derive(Debug, Clone, Default)]
pub struct Burst {
    pub particles: Vec<BurstParticle>,
}

impl Burst {
    /// Spawn `count` particles evenly around `center`, with jittered speed and life
    pub fn spawn<R: Rng>(center: Vec2, count: u32, lifespan: u32, speed: f32, rng: &mut R) -> Self {
        let lifespan = lifespan.max(1);
        let particles = (0..count)
            .map(|i| {
                let angle = i as f32 / count as f32 * TAU + rng.random_range(-0.1..0.1);
                let speed = speed * rng.random_range(0.5..1.5);
                let life = rng.random_range(lifespan / 2..=lifespan).max(1);
                BurstParticle {
                    pos: center,
                    vel: Vec2::from_angle(angle) * speed,
                    age: 0,
                    lifespan: life,
                }
            })
            .collect();
        Self { particles }
    }

    /// Advance one tick and drop expired particles
    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.vel *= BURST_DRAG;
            p.age += 1;
        }
        self.particles.retain(|p| p.age < p.lifespan);
    }

    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_count_and_origin() {
        let mut rng = Pcg32::seed_from_u64(7);
        let center = Vec2::new(300.0, 200.0);
        let burst = Burst::spawn(center, 40, 45, 4.0, &mut rng);
        assert_eq!(burst.len(), 40);
        assert!(burst.particles.iter().all(|p| p.pos == center && p.age == 0));
        assert!(burst.particles.iter().all(|p| p.lifespan >= 22 && p.lifespan <= 45));
    }

    #[test]
    fn test_particles_fly_outward() {
        let mut rng = Pcg32::seed_from_u64(7);
        let center = Vec2::new(300.0, 200.0);
        let mut burst = Burst::spawn(center, 12, 45, 4.0, &mut rng);
        burst.update();
        assert!(burst.particles.iter().all(|p| p.pos.distance(center) > 0.0));
    }

    #[test]
    fn test_burst_finishes_within_lifespan() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut burst = Burst::spawn(Vec2::ZERO, 40, 45, 4.0, &mut rng);
        burst.update();
        assert!(!burst.is_finished());
        for _ in 1..45 {
            burst.update();
        }
        assert!(burst.is_finished());
    }

    #[test]
    fn test_empty_burst_is_finished() {
        let mut rng = Pcg32::seed_from_u64(1);
        let burst = Burst::spawn(Vec2::ZERO, 0, 45, 4.0, &mut rng);
        assert!(burst.is_finished());
    }
}
