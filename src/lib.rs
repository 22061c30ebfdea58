//! # marsdust
//!
//! Coloured particles falling under Martian gravity with size-dependent drag.
//! Particles that drop out of the bottom or the sides of the screen are
//! recycled in place at the mouse cursor.
//!
//! The simulation is plain CPU code and does not need a window:
//!
//! ```ignore
//! use marsdust::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut particles = create_particles(1000, &mut rng);
//! let viewport = Viewport::new(1200, 1200);
//!
//! // Once per frame:
//! let cursor = Some(Vec2::new(600.0, 100.0));
//! apply_gravity(&mut particles, 1.0 / 60.0, cursor, viewport, &mut rng);
//! ```
//!
//! ## Physics
//!
//! Per particle and per step:
//!
//! | Quantity | Update |
//! |----------|--------|
//! | acceleration | `(-size * g * (0, 1, 0) - v) / size` |
//! | velocity | `v + a * dt` |
//! | position | `p + v * dt`, with `v` from before the update |
//!
//! `g` defaults to [`MARS_GRAVITY`]. A particle respawns when `x < -1`,
//! `x > 1` or `y < -1`. There is no upper bound, so particles thrown
//! upwards come back down on their own.
//!
//! ## Viewer
//!
//! [`viewer::run`] opens a window, steps the simulation every frame and draws
//! each particle as a round sprite `size` pixels wide. Settings come from a
//! [`SimConfig`], optionally loaded from JSON.

pub mod config;
pub mod error;
mod gpu;
pub mod gravity;
pub mod input;
mod particle;
mod shader;
pub mod spawn;
pub mod time;
pub mod viewer;
pub mod viewport;

pub use config::{SimConfig, WindowConfig};
pub use error::{ConfigError, GpuError, ViewerError};
pub use glam::{Vec2, Vec3};
pub use gravity::{apply_gravity, GravityStep, StepStats, MARS_GRAVITY, RESPAWN_SPEED};
pub use particle::{Particle, ParticleGpu, MAX_PARTICLES, MIN_PARTICLE_SIZE};
pub use spawn::{create_particles, Spawner, SIZE_SCALE};
pub use viewport::{is_outside_screen, Viewport};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use marsdust::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::SimConfig;
    pub use crate::gravity::{apply_gravity, GravityStep};
    pub use crate::particle::Particle;
    pub use crate::spawn::{create_particles, Spawner};
    pub use crate::time::FrameClock;
    pub use crate::viewport::Viewport;
    pub use crate::{Vec2, Vec3};
}
