//! Renderer collaborator.
//!
//! The engine never rasterizes. Each tick it hands a `FrameData` snapshot to
//! whatever implements `Renderer`: the shared-buffer bridge in `orbit-web`, a
//! native GPU backend, or a recording stub in tests.

use super::camera::{CameraUniform, Viewport};
use super::instance::{ShadowInstance, SphereInstance};
use crate::api::config::{GroundConfig, LightConfig};

/// Textured ground plane, lying flat at y = 0.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundPlane {
    /// Edge length in world units.
    pub size: f32,
    /// Texture repeats per axis.
    pub repeats: f32,
    pub texture: String,
    pub tint: [f32; 3],
}

impl GroundPlane {
    pub fn from_config(config: &GroundConfig) -> Self {
        Self {
            size: config.size,
            repeats: config.repeats(),
            texture: config.texture.clone(),
            tint: config.tint,
        }
    }
}

/// Single directional light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub direction: [f32; 3],
}

impl DirectionalLight {
    pub fn from_config(config: &LightConfig) -> Self {
        Self {
            color: config.rgb(),
            intensity: config.intensity,
            direction: config.direction,
        }
    }
}

/// Everything a renderer needs for one frame.
pub struct FrameData<'a> {
    pub spheres: &'a [SphereInstance],
    pub shadows: &'a [ShadowInstance],
    pub camera: CameraUniform,
    pub ground: &'a GroundPlane,
    pub light: &'a DirectionalLight,
    /// Seconds since animation start.
    pub elapsed: f32,
    /// Number of frames rendered before this one.
    pub frame: u64,
}

impl FrameData<'_> {
    pub fn sphere_floats(&self) -> &[f32] {
        bytemuck::cast_slice(self.spheres)
    }

    pub fn shadow_floats(&self) -> &[f32] {
        bytemuck::cast_slice(self.shadows)
    }
}

/// Render backend contract.
///
/// The loop calls `render` exactly once per running tick and ignores the outcome.
pub trait Renderer {
    /// Backend identifier (e.g. "shared-buffer", "wgpu", "null").
    fn backend(&self) -> &'static str;

    /// Draw one frame.
    fn render(&mut self, frame: &FrameData<'_>);

    /// Surface size changed.
    fn resize(&mut self, _viewport: &Viewport) {}
}
