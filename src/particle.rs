//! Particle record and its GPU-side layout.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Smallest size a particle may have.
///
/// Size divides the acceleration every step, so it must stay strictly positive.
pub const MIN_PARTICLE_SIZE: f32 = 1.0e-3;

/// Largest instance buffer the viewer asks for, matching the default
/// `max_buffer_size` limit wgpu guarantees (256 MiB).
pub const MAX_INSTANCE_BYTES: u64 = 256 << 20;

/// Most particles that fit in one instance buffer.
pub const MAX_PARTICLES: usize = (MAX_INSTANCE_BYTES / std::mem::size_of::<ParticleGpu>() as u64) as usize;

/// One simulated point.
///
/// `position` lives in normalized device coordinates. `size` is both the
/// rendered point size in pixels and the divisor of the drag term, and is
/// always greater than zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    /// RGB, each channel in `[0, 1]`. Never changed after creation.
    pub color: Vec3,
    pub velocity: Vec3,
    pub size: f32,
}

impl Particle {
    /// Create a particle at rest.
    ///
    /// `size` is clamped to [`MIN_PARTICLE_SIZE`].
    pub fn new(position: Vec3, color: Vec3, size: f32) -> Self {
        Self {
            position,
            color,
            velocity: Vec3::ZERO,
            size: size.max(MIN_PARTICLE_SIZE),
        }
    }

    /// Convert to the layout read by the vertex shader.
    #[inline]
    pub fn to_gpu(&self) -> ParticleGpu {
        ParticleGpu {
            position: self.position.to_array(),
            size: self.size,
            color: self.color.to_array(),
            _pad: 0.0,
        }
    }
}

/// Per-instance vertex data.
///
/// Packed as two 16-byte rows so it can be bound directly as an instance
/// buffer. Velocity stays on the CPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ParticleGpu {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

impl ParticleGpu {
    /// Byte offset of `color`, used for the vertex attribute layout.
    pub const COLOR_OFFSET: u64 = 16;
}

/// Pack a particle slice for upload.
pub fn to_gpu_vec(particles: &[Particle]) -> Vec<ParticleGpu> {
    particles.iter().map(Particle::to_gpu).collect()
}
