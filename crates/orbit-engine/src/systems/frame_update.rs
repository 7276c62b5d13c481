use crate::api::types::DirectionMode;
use crate::components::entity::EntityState;
use crate::error::OrbitError;
use crate::systems::motion::compute_frame_with;

/// Outcome of one pass over the entities.
#[derive(Debug, Default)]
pub struct UpdateReport {
    /// Entities whose state was written this pass.
    pub updated: usize,
    /// Entities left untouched, with the reason.
    pub errors: Vec<(usize, OrbitError)>,
}

impl UpdateReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Drive the motion model for every entity at `elapsed` and write the results.
///
/// Each entity's frame is computed in full before any of its fields are written.
/// An entity whose computation fails keeps its previous state.
pub fn update_entities(
    entities: &mut [EntityState],
    elapsed: f32,
    direction: DirectionMode,
) -> UpdateReport {
    let mut report = UpdateReport::default();
    let count = entities.len() as u32;

    for (slot, entity) in entities.iter_mut().enumerate() {
        match compute_frame_with(direction, elapsed, entity.index.0, count, entity.base_height()) {
            Ok(frame) => {
                entity.apply(&frame);
                report.updated += 1;
            }
            Err(err) => report.errors.push((slot, err)),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityIndex;
    use crate::systems::motion::compute_frame;

    fn entities(n: u32) -> Vec<EntityState> {
        (0..n).map(|i| EntityState::new(EntityIndex(i), 3.0)).collect()
    }

    #[test]
    fn updates_every_entity() {
        let mut list = entities(6);
        let report = update_entities(&mut list, 1.25, DirectionMode::Alternating);
        assert!(report.is_ok());
        assert_eq!(report.updated, 6);

        for e in &list {
            let expected = compute_frame(1.25, e.index.0, 6, 3.0).unwrap();
            assert_eq!(e.orbit_base.position.x, expected.orbit_x);
            assert_eq!(e.orbit_base.position.y, 0.0);
            assert_eq!(e.orbit_base.position.z, expected.orbit_z);
            assert_eq!(e.sphere.y, expected.vertical_offset);
            assert_eq!(e.sphere.hue, expected.hue);
            assert_eq!(e.shadow.opacity, expected.shadow_opacity);
        }
    }

    #[test]
    fn repeated_update_at_same_time_is_idempotent() {
        let mut list = entities(5);
        update_entities(&mut list, 3.7, DirectionMode::Alternating);
        let first = list.clone();
        update_entities(&mut list, 3.7, DirectionMode::Alternating);
        assert_eq!(list, first);
    }

    #[test]
    fn base_height_is_never_touched() {
        let mut list = entities(4);
        for k in 0..50 {
            update_entities(&mut list, k as f32 * 0.3, DirectionMode::Alternating);
        }
        assert!(list.iter().all(|e| e.base_height() == 3.0));
    }

    #[test]
    fn entity_with_bad_index_is_skipped_and_reported() {
        let mut list = entities(3);
        list[2].index = EntityIndex(9);
        let before = list[2].clone();

        let report = update_entities(&mut list, 2.0, DirectionMode::Alternating);

        assert_eq!(report.updated, 2);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].0, 2);
        assert_eq!(list[2], before);
    }

    #[test]
    fn empty_slice_is_a_no_op() {
        let mut list: Vec<EntityState> = Vec::new();
        let report = update_entities(&mut list, 1.0, DirectionMode::Alternating);
        assert_eq!(report.updated, 0);
        assert!(report.is_ok());
    }

    #[test]
    fn entities_do_not_influence_each_other() {
        // The same entity gets the same state regardless of its neighbours' state.
        let mut a = entities(4);
        let mut b = entities(4);
        b[0].sphere.hue = 42.0;
        b[3].shadow.opacity = 0.5;
        update_entities(&mut a, 0.9, DirectionMode::Legacy);
        update_entities(&mut b, 0.9, DirectionMode::Legacy);
        assert_eq!(a[1], b[1]);
        assert_eq!(a[2], b[2]);
    }
}
