/// Shared f32 buffer layout read by the host renderer.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 20 floats]
/// [Spheres: max_spheres × 12 floats]
/// [Shadows: max_spheres × 8 floats]
/// [Camera: 20 floats]
/// ```
///
/// Capacity is written once into the header at init.
/// TypeScript reads it from the header to compute offsets.

use crate::api::config::SceneConfig;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::{ShadowInstance, SphereInstance};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 20;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_SPHERES: usize = 2;
pub const HEADER_SPHERE_COUNT: usize = 3;
pub const HEADER_ELAPSED: usize = 4;
pub const HEADER_PROTOCOL_VERSION: usize = 5;
pub const HEADER_VIEWPORT_WIDTH: usize = 6;
pub const HEADER_VIEWPORT_HEIGHT: usize = 7;
pub const HEADER_PIXEL_RATIO: usize = 8;
pub const HEADER_GROUND_SIZE: usize = 9;
pub const HEADER_GROUND_REPEATS: usize = 10;
pub const HEADER_LIGHT_R: usize = 11;
pub const HEADER_LIGHT_G: usize = 12;
pub const HEADER_LIGHT_B: usize = 13;
pub const HEADER_LIGHT_INTENSITY: usize = 14;
pub const HEADER_GROUND_TINT_R: usize = 15;
pub const HEADER_GROUND_TINT_G: usize = 16;
pub const HEADER_GROUND_TINT_B: usize = 17;
// 18..20 reserved.

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per sphere record (wire format).
pub const SPHERE_FLOATS: usize = SphereInstance::FLOATS;

/// Floats per shadow record (wire format).
pub const SHADOW_FLOATS: usize = ShadowInstance::FLOATS;

/// Floats in the camera block: view-projection matrix (16) + eye (4).
pub const CAMERA_FLOATS: usize = std::mem::size_of::<CameraUniform>() / 4;

#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum spheres (and shadows).
    pub max_spheres: usize,

    /// Size of sphere data section in floats.
    pub sphere_data_floats: usize,
    /// Size of shadow data section in floats.
    pub shadow_data_floats: usize,

    /// Offset (in floats) where sphere data begins.
    pub sphere_data_offset: usize,
    /// Offset (in floats) where shadow data begins.
    pub shadow_data_offset: usize,
    /// Offset (in floats) where the camera block begins.
    pub camera_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_spheres: usize) -> Self {
        let sphere_data_floats = max_spheres * SPHERE_FLOATS;
        let shadow_data_floats = max_spheres * SHADOW_FLOATS;

        let sphere_data_offset = HEADER_FLOATS;
        let shadow_data_offset = sphere_data_offset + sphere_data_floats;
        let camera_data_offset = shadow_data_offset + shadow_data_floats;

        let buffer_total_floats = camera_data_offset + CAMERA_FLOATS;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_spheres,
            sphere_data_floats,
            shadow_data_floats,
            sphere_data_offset,
            shadow_data_offset,
            camera_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Capacity is `max_entities`, raised to the sphere count if that is larger.
    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.max_entities.max(config.spheres.count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_sizes() {
        assert_eq!(SPHERE_FLOATS, 12);
        assert_eq!(SHADOW_FLOATS, 8);
        assert_eq!(CAMERA_FLOATS, 20);
    }

    #[test]
    fn from_default_config() {
        let layout = ProtocolLayout::from_config(&SceneConfig::default());
        assert_eq!(layout.max_spheres, 64);
        assert_eq!(layout.sphere_data_offset, 20);
        assert_eq!(layout.shadow_data_offset, 20 + 64 * 12);
        assert_eq!(layout.camera_data_offset, 20 + 64 * 12 + 64 * 8);
        assert_eq!(layout.buffer_total_floats, 20 + 64 * 20 + 20);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn capacity_covers_sphere_count() {
        let mut config = SceneConfig::default();
        config.max_entities = 4;
        config.spheres.count = 10;
        assert_eq!(ProtocolLayout::from_config(&config).max_spheres, 10);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(7);
        assert_eq!(layout.sphere_data_offset, HEADER_FLOATS);
        assert_eq!(layout.shadow_data_offset, layout.sphere_data_offset + layout.sphere_data_floats);
        assert_eq!(layout.camera_data_offset, layout.shadow_data_offset + layout.shadow_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.camera_data_offset + CAMERA_FLOATS);
    }
}
