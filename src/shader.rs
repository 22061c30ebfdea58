use bytemuck::{Pod, Zeroable};

use crate::viewport::Viewport;

/// Point-sprite shader drawing one quad per particle instance.
pub const SHADER_SOURCE: &str = include_str!("shader.wgsl");

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    pub viewport: [f32; 2],
    pub _padding: [f32; 2],
}

impl Uniforms {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport: [viewport.width as f32, viewport.height as f32],
            _padding: [0.0; 2],
        }
    }
}
