//! Per-frame particle integration.
//!
//! Each particle feels a constant pull plus a linear drag scaled by the
//! inverse of its size:
//!
//! ```text
//! a  = (-size * g * dir - v) / size
//! v' = v + a * dt
//! p' = p + v * dt        // velocity from the start of the step
//! ```
//!
//! Particles that leave the visible region are moved to the respawn point
//! before being integrated, with a fresh velocity pointing down and to the left.

use crate::particle::Particle;
use crate::viewport::{is_outside_screen, Viewport};
use crate::{Vec2, Vec3};
use rand::Rng;

/// Surface gravity of Mars, in m/s².
pub const MARS_GRAVITY: f32 = 3.711;

/// Largest speed along each axis given to a respawned particle.
pub const RESPAWN_SPEED: f32 = 5.0;

/// Constants of the gravity step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravityStep {
    /// Magnitude of the pull.
    pub strength: f32,
    /// The force term is `-size * strength * direction`.
    pub direction: Vec3,
    /// Upper bound of each respawn velocity component.
    pub respawn_speed: f32,
}

/// What happened during one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub respawned: usize,
}

impl Default for GravityStep {
    fn default() -> Self {
        Self {
            strength: MARS_GRAVITY,
            direction: Vec3::Y,
            respawn_speed: RESPAWN_SPEED,
        }
    }
}

impl GravityStep {
    pub fn new(strength: f32) -> Self {
        Self {
            strength,
            ..Default::default()
        }
    }

    pub fn with_respawn_speed(mut self, speed: f32) -> Self {
        self.respawn_speed = speed;
        self
    }

    /// Advance every particle by `dt` seconds, in place.
    ///
    /// `respawn` is a pixel position in `viewport`; `None` respawns at the
    /// centre of the screen. Random draws are only taken for particles that
    /// respawn.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        particles: &mut [Particle],
        dt: f32,
        respawn: Option<Vec2>,
        viewport: Viewport,
        rng: &mut R,
    ) -> StepStats {
        let spawn_at = viewport.to_ndc(respawn.unwrap_or_else(|| viewport.center()));
        let mut stats = StepStats::default();

        for particle in particles.iter_mut() {
            if is_outside_screen(particle.position) {
                particle.position = spawn_at;
                particle.velocity = self.respawn_velocity(rng);
                stats.respawned += 1;
            }
            self.integrate(particle, dt);
        }

        stats
    }

    fn respawn_velocity<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let u1: f32 = rng.gen();
        let u2: f32 = rng.gen();
        Vec3::new(-u1, -u2, 0.0) * self.respawn_speed
    }

    /// Explicit Euler on position, velocity updated afterwards.
    #[inline]
    pub fn integrate(&self, particle: &mut Particle, dt: f32) {
        let acceleration =
            (-particle.size * self.strength * self.direction - particle.velocity) / particle.size;

        let next_velocity = particle.velocity + acceleration * dt;
        let next_position = particle.position + particle.velocity * dt;

        particle.velocity = next_velocity;
        particle.position = next_position;
    }
}

/// Run one step with the default constants.
pub fn apply_gravity<R: Rng + ?Sized>(
    particles: &mut [Particle],
    dt: f32,
    respawn: Option<Vec2>,
    viewport: Viewport,
    rng: &mut R,
) -> StepStats {
    GravityStep::default().apply(particles, dt, respawn, viewport, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at_rest(position: Vec3, size: f32) -> Particle {
        Particle::new(position, Vec3::ONE, size)
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn test_single_step_from_rest() {
        let mut particles = [at_rest(Vec3::ZERO, 1.0)];
        let mut rng = StdRng::seed_from_u64(0);

        let stats = apply_gravity(&mut particles, 1.0, None, Viewport::new(100, 100), &mut rng);

        assert_eq!(stats.respawned, 0);
        assert_eq!(particles[0].position, Vec3::ZERO);
        assert!(close(particles[0].velocity, Vec3::new(0.0, -3.711, 0.0)));
    }

    #[test]
    fn test_position_uses_previous_velocity() {
        let mut p = at_rest(Vec3::ZERO, 2.0);
        p.velocity = Vec3::new(0.5, 0.0, 0.0);
        let step = GravityStep::default();

        step.integrate(&mut p, 0.5);

        assert!(close(p.position, Vec3::new(0.25, 0.0, 0.0)));
        // a = (-2 * g * Y - v) / 2 = (-0.25, -g, 0)
        assert!(close(p.velocity, Vec3::new(0.5 - 0.125, -MARS_GRAVITY * 0.5, 0.0)));
    }

    #[test]
    fn test_drag_scales_with_inverse_size() {
        let step = GravityStep::new(0.0);
        let mut small = at_rest(Vec3::ZERO, 0.5);
        let mut large = at_rest(Vec3::ZERO, 10.0);
        small.velocity = Vec3::X;
        large.velocity = Vec3::X;

        step.integrate(&mut small, 0.1);
        step.integrate(&mut large, 0.1);

        assert!(small.velocity.x < large.velocity.x);
    }

    #[test]
    fn test_respawn_replaces_state() {
        let viewport = Viewport::new(1000, 500);
        let cursor = Vec2::new(750.0, 125.0);
        let mut p = at_rest(Vec3::new(-1.5, 0.0, 0.0), 3.0);
        p.velocity = Vec3::new(100.0, 100.0, 100.0);
        let mut particles = [p];
        let mut rng = StdRng::seed_from_u64(11);

        let stats = apply_gravity(&mut particles, 0.0, Some(cursor), viewport, &mut rng);

        assert_eq!(stats.respawned, 1);
        assert!(close(particles[0].position, Vec3::new(0.5, 0.5, 1.0)));
        let v = particles[0].velocity;
        assert!((-RESPAWN_SPEED..=0.0).contains(&v.x));
        assert!((-RESPAWN_SPEED..=0.0).contains(&v.y));
        assert_eq!(v.z, 0.0);
        assert_eq!(particles[0].color, Vec3::ONE);
        assert_eq!(particles[0].size, 3.0);
    }

    #[test]
    fn test_respawn_without_cursor_uses_center() {
        let mut particles = [at_rest(Vec3::new(0.0, -2.0, 0.0), 1.0)];
        let mut rng = StdRng::seed_from_u64(5);

        apply_gravity(&mut particles, 0.0, None, Viewport::new(640, 480), &mut rng);

        assert!(close(particles[0].position, Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_respawn_without_cursor_in_minimized_window() {
        let mut particles = [at_rest(Vec3::new(0.0, -2.0, 0.0), 1.0)];
        let mut rng = StdRng::seed_from_u64(5);

        let stats = apply_gravity(&mut particles, 0.0, None, Viewport::new(0, 0), &mut rng);

        assert_eq!(stats.respawned, 1);
        assert!(close(particles[0].position, Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_high_particle_is_not_respawned() {
        let mut particles = [at_rest(Vec3::new(0.0, 5.0, 0.0), 1.0)];
        let mut rng = StdRng::seed_from_u64(5);

        let stats = apply_gravity(&mut particles, 0.0, None, Viewport::new(640, 480), &mut rng);

        assert_eq!(stats.respawned, 0);
        assert_eq!(particles[0].position, Vec3::new(0.0, 5.0, 0.0));
    }

    #[test]
    fn test_step_is_deterministic_for_seed() {
        let start = vec![
            at_rest(Vec3::new(-1.5, 0.0, 0.0), 1.0),
            at_rest(Vec3::new(0.2, 0.3, 0.0), 4.0),
            at_rest(Vec3::new(0.0, -1.2, 0.0), 9.0),
        ];
        let viewport = Viewport::new(800, 600);
        let cursor = Some(Vec2::new(10.0, 20.0));

        let mut a = start.clone();
        let mut b = start;
        apply_gravity(&mut a, 0.016, cursor, viewport, &mut StdRng::seed_from_u64(77));
        apply_gravity(&mut b, 0.016, cursor, viewport, &mut StdRng::seed_from_u64(77));

        assert_eq!(a, b);
    }
}
