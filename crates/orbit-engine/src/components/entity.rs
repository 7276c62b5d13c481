use glam::Vec3;
use crate::api::types::{EntityIndex, FrameResult};
use crate::components::mesh::{ShadowVisual, SphereVisual};

/// Position container for a sphere and its shadow. The orbit base never rotates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform {
    /// Position in world space. Orbit motion keeps `y` at 0.
    pub position: Vec3,
}

/// One orbiting sphere-and-shadow pair.
/// Created once during scene assembly; only the animated fields change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityState {
    /// Stable index within the scene.
    pub index: EntityIndex,
    /// Fixed reference height of the sphere center.
    base_height: f32,
    /// Group transform (parent of sphere and shadow).
    pub orbit_base: Transform,
    pub sphere: SphereVisual,
    pub shadow: ShadowVisual,
}

impl EntityState {
    /// Create an entity resting at the origin with its sphere at `base_height`.
    pub fn new(index: EntityIndex, base_height: f32) -> Self {
        Self {
            index,
            base_height,
            orbit_base: Transform::default(),
            sphere: SphereVisual::default().with_y(base_height),
            shadow: ShadowVisual::default(),
        }
    }

    // -- Builder pattern --

    pub fn with_sphere(mut self, sphere: SphereVisual) -> Self {
        self.sphere = sphere.with_y(self.base_height);
        self
    }

    pub fn with_shadow(mut self, shadow: ShadowVisual) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn with_hue(mut self, hue: f32) -> Self {
        self.sphere.hue = hue;
        self
    }

    pub fn base_height(&self) -> f32 {
        self.base_height
    }

    /// Write every animated field from one motion result.
    /// Callers compute the full result first, so no entity is ever half-updated.
    pub fn apply(&mut self, frame: &FrameResult) {
        self.orbit_base.position = Vec3::new(frame.orbit_x, 0.0, frame.orbit_z);
        self.sphere.y = frame.vertical_offset;
        self.sphere.rotation_x = frame.rot_x;
        self.sphere.rotation_y = frame.rot_y;
        self.sphere.hue = frame.hue;
        self.shadow.opacity = frame.shadow_opacity;
    }

    /// World-space center of the sphere.
    pub fn sphere_world_position(&self) -> Vec3 {
        self.orbit_base.position + Vec3::new(0.0, self.sphere.y, 0.0)
    }

    /// World-space center of the shadow quad.
    pub fn shadow_world_position(&self) -> Vec3 {
        self.orbit_base.position + Vec3::new(0.0, self.shadow.lift, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entity_rests_at_base_height() {
        let e = EntityState::new(EntityIndex(2), 3.0);
        assert_eq!(e.base_height(), 3.0);
        assert_eq!(e.sphere.y, 3.0);
        assert_eq!(e.orbit_base.position, Vec3::ZERO);
        assert_eq!(e.shadow.opacity, 1.0);
    }

    #[test]
    fn apply_writes_all_animated_fields() {
        let mut e = EntityState::new(EntityIndex(0), 3.0);
        let frame = FrameResult {
            orbit_x: 1.5,
            orbit_z: -2.0,
            vertical_offset: 4.0,
            hue: 0.7,
            shadow_opacity: 0.4,
            rot_x: 0.25,
            rot_y: 0.5,
            bounce: 0.5,
        };
        e.apply(&frame);
        assert_eq!(e.orbit_base.position, Vec3::new(1.5, 0.0, -2.0));
        assert_eq!(e.sphere.y, 4.0);
        assert_eq!(e.sphere.hue, 0.7);
        assert_eq!(e.sphere.rotation_x, 0.25);
        assert_eq!(e.sphere.rotation_y, 0.5);
        assert_eq!(e.shadow.opacity, 0.4);
        assert_eq!(e.base_height(), 3.0);
    }

    #[test]
    fn world_positions_follow_orbit_base() {
        let mut e = EntityState::new(EntityIndex(0), 3.0);
        e.orbit_base.position = Vec3::new(2.0, 0.0, 1.0);
        assert_eq!(e.sphere_world_position(), Vec3::new(2.0, 3.0, 1.0));
        assert!((e.shadow_world_position().y - 0.001).abs() < 1e-7);
    }
}
