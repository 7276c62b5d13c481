use crate::components::entity::EntityState;
use crate::renderer::instance::{InstanceBuffer, ShadowInstance, SphereInstance};
use crate::systems::color::{hsl_to_rgb, wrap_hue};

/// HSL saturation/lightness shared by every sphere; hue comes from the entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereMaterial {
    pub saturation: f32,
    pub lightness: f32,
}

impl Default for SphereMaterial {
    fn default() -> Self {
        Self { saturation: 1.0, lightness: 0.75 }
    }
}

/// Build sphere and shadow instances from the entity records, in entity order.
pub fn build_instance_buffer<'a>(
    entities: impl Iterator<Item = &'a EntityState>,
    material: SphereMaterial,
    buffer: &mut InstanceBuffer,
) {
    buffer.clear();
    for entity in entities {
        let center = entity.sphere_world_position();
        let hue = wrap_hue(entity.sphere.hue);
        let [r, g, b] = hsl_to_rgb(hue, material.saturation, material.lightness);

        let ground = entity.shadow_world_position();

        buffer.push(
            SphereInstance {
                x: center.x,
                y: center.y,
                z: center.z,
                radius: entity.sphere.radius,
                rotation_x: entity.sphere.rotation_x,
                rotation_y: entity.sphere.rotation_y,
                r,
                g,
                b,
                hue,
                _pad0: 0.0,
                _pad1: 0.0,
            },
            ShadowInstance {
                x: ground.x,
                y: ground.y,
                z: ground.z,
                size: entity.shadow.size,
                rotation_x: entity.shadow.rotation_x,
                opacity: entity.shadow.opacity,
                _pad0: 0.0,
                _pad1: 0.0,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityIndex;
    use glam::Vec3;

    #[test]
    fn instances_follow_entity_state() {
        let mut e = EntityState::new(EntityIndex(0), 3.0);
        e.orbit_base.position = Vec3::new(2.0, 0.0, -1.0);
        e.sphere.y = 4.5;
        e.sphere.hue = 1.0 + 1.0 / 3.0; // wraps to green
        e.sphere.rotation_x = 0.2;
        e.shadow.opacity = 0.3;

        let mut buffer = InstanceBuffer::new();
        build_instance_buffer(
            std::iter::once(&e),
            SphereMaterial { saturation: 1.0, lightness: 0.5 },
            &mut buffer,
        );

        assert_eq!(buffer.instance_count(), 1);
        let s = buffer.spheres[0];
        assert_eq!((s.x, s.y, s.z), (2.0, 4.5, -1.0));
        assert_eq!(s.rotation_x, 0.2);
        assert!((s.hue - 1.0 / 3.0).abs() < 1e-5);
        assert!(s.r < 1e-4 && (s.g - 1.0).abs() < 1e-4 && s.b < 1e-4);

        let sh = buffer.shadows[0];
        assert_eq!((sh.x, sh.z), (2.0, -1.0));
        assert!((sh.y - 0.001).abs() < 1e-7);
        assert_eq!(sh.opacity, 0.3);
        assert_eq!(sh.size, 4.0);
    }

    #[test]
    fn rebuild_replaces_previous_frame() {
        let entities: Vec<EntityState> =
            (0..3).map(|i| EntityState::new(EntityIndex(i), 3.0)).collect();
        let mut buffer = InstanceBuffer::new();
        build_instance_buffer(entities.iter(), SphereMaterial::default(), &mut buffer);
        build_instance_buffer(entities.iter(), SphereMaterial::default(), &mut buffer);
        assert_eq!(buffer.instance_count(), 3);
        assert_eq!(buffer.shadows.len(), 3);
    }
}
