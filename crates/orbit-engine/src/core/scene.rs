use crate::api::config::SceneConfig;
use crate::api::types::EntityIndex;
use crate::components::entity::EntityState;
use crate::components::mesh::{ShadowVisual, SphereVisual};
use crate::error::{OrbitError, Result};

/// Fixed set of orbiting entities, stored in a flat Vec indexed by `EntityIndex`.
/// The entity count is decided at assembly and never changes.
pub struct Scene {
    entities: Vec<EntityState>,
}

impl Scene {
    /// Build the scene described by `config`.
    /// Entity `i` starts at the origin with hue `i / count`.
    pub fn assemble(config: &SceneConfig) -> Result<Self> {
        config.validate()?;

        let spheres = &config.spheres;
        let count = spheres.count;
        let base_height = spheres.base_height();

        let entities = (0..count)
            .map(|i| {
                EntityState::new(EntityIndex(i as u32), base_height)
                    .with_sphere(SphereVisual::new(spheres.radius))
                    .with_shadow(ShadowVisual::for_sphere(
                        spheres.radius,
                        config.shadow.size_factor,
                        config.shadow.lift,
                    ))
                    .with_hue(i as f32 / count as f32)
            })
            .collect();

        log::info!("Scene: assembled {count} entities at base height {base_height}");
        Ok(Self { entities })
    }

    /// Build a scene from pre-made entities.
    /// Indices must run `0..len` in order.
    pub fn from_entities(entities: Vec<EntityState>) -> Result<Self> {
        if entities.is_empty() {
            return Err(OrbitError::InvalidArgument { context: "entity count", value: 0 });
        }
        if let Some(slot) = entities.iter().enumerate().position(|(slot, e)| e.index.as_usize() != slot) {
            return Err(OrbitError::InvalidArgument {
                context: "entity index does not match its slot",
                value: slot,
            });
        }
        Ok(Self { entities })
    }

    pub fn get(&self, index: EntityIndex) -> Option<&EntityState> {
        self.entities.get(index.as_usize())
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityState> {
        self.entities.iter()
    }

    pub fn entities(&self) -> &[EntityState] {
        &self.entities
    }

    /// Mutable access to the entity records. The slice length is fixed.
    pub fn entities_mut(&mut self) -> &mut [EntityState] {
        &mut self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_default_scene() {
        let scene = Scene::assemble(&SceneConfig::default()).unwrap();
        assert_eq!(scene.len(), 6);
        for (i, e) in scene.iter().enumerate() {
            assert_eq!(e.index, EntityIndex(i as u32));
            assert_eq!(e.base_height(), 3.0);
            assert_eq!(e.sphere.y, 3.0);
            assert_eq!(e.sphere.radius, 1.0);
            assert_eq!(e.shadow.size, 4.0);
            assert!((e.sphere.hue - i as f32 / 6.0).abs() < 1e-6);
        }
    }

    #[test]
    fn assemble_rejects_empty_scene() {
        let mut config = SceneConfig::default();
        config.spheres.count = 0;
        assert!(Scene::assemble(&config).is_err());
    }

    #[test]
    fn get_by_index() {
        let scene = Scene::assemble(&SceneConfig::default()).unwrap();
        assert_eq!(scene.get(EntityIndex(5)).map(|e| e.index), Some(EntityIndex(5)));
        assert!(scene.get(EntityIndex(6)).is_none());
    }

    #[test]
    fn from_entities_checks_indices() {
        let good = vec![
            EntityState::new(EntityIndex(0), 1.0),
            EntityState::new(EntityIndex(1), 2.0),
        ];
        assert_eq!(Scene::from_entities(good).unwrap().len(), 2);

        let bad = vec![
            EntityState::new(EntityIndex(1), 1.0),
            EntityState::new(EntityIndex(0), 2.0),
        ];
        assert!(matches!(
            Scene::from_entities(bad),
            Err(OrbitError::InvalidArgument { value: 0, .. })
        ));
        assert!(Scene::from_entities(Vec::new()).is_err());
    }
}
