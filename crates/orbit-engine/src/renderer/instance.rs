use bytemuck::{Pod, Zeroable};

/// Per-sphere render data for the host renderer.
/// Must match the TypeScript protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SphereInstance {
    /// World-space center.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    /// Rotation around X in radians.
    pub rotation_x: f32,
    /// Rotation around Y in radians.
    pub rotation_y: f32,
    /// Linear RGB from the wrapped hue.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Hue in [0, 1) that produced `r, g, b`.
    pub hue: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl SphereInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-shadow render data: a flat textured quad on the ground.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct ShadowInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Quad edge length in world units.
    pub size: f32,
    /// Rotation around X (−π/2 lays the quad flat).
    pub rotation_x: f32,
    /// Material opacity (0.0 = invisible, 1.0 = opaque).
    pub opacity: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl ShadowInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Sphere and shadow instances for one frame, in entity order.
pub struct InstanceBuffer {
    pub spheres: Vec<SphereInstance>,
    pub shadows: Vec<ShadowInstance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            spheres: Vec::with_capacity(max),
            shadows: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.spheres.clear();
        self.shadows.clear();
    }

    pub fn push(&mut self, sphere: SphereInstance, shadow: ShadowInstance) {
        self.spheres.push(sphere);
        self.shadows.push(shadow);
    }

    pub fn instance_count(&self) -> u32 {
        self.spheres.len() as u32
    }

    /// Sphere data viewed as raw floats.
    pub fn sphere_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.spheres)
    }

    /// Shadow data viewed as raw floats.
    pub fn shadow_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.shadows)
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}
