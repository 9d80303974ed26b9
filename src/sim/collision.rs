//! All-pairs collision detection
//!
//! The playfield holds a few dozen entities at most, so the O(n^2) scan is
//! the whole algorithm. Spatial partitioning would cost more to maintain
//! than it saves at this scale.

use super::entity::Entity;

/// Flag every entity involved in at least one circle-circle overlap.
/// Both members of a colliding pair die; flags accumulate so an entity
/// touching several others is flagged once and stays flagged.
pub fn mark_collisions(entities: &mut [Entity]) {
    for i in 0..entities.len() {
        for j in (i + 1)..entities.len() {
            let hit = entities[i].radius() + entities[j].radius();
            if entities[i].pos.distance_squared(entities[j].pos) < hit * hit {
                entities[i].dead = true;
                entities[j].dead = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::EntityKind;
    use glam::Vec2;
    use proptest::prelude::*;

    fn asteroid_at(x: f32, y: f32) -> Entity {
        Entity::new(EntityKind::AsteroidBig, Vec2::new(x, y), Vec2::ZERO, 0.0)
    }

    #[test]
    fn overlapping_pair_both_flagged() {
        // Combined radius 80, centers 50 apart
        let mut entities = vec![asteroid_at(100.0, 100.0), asteroid_at(150.0, 100.0)];
        mark_collisions(&mut entities);
        assert!(entities[0].dead);
        assert!(entities[1].dead);
    }

    #[test]
    fn separated_pair_untouched() {
        let mut entities = vec![asteroid_at(100.0, 100.0), asteroid_at(300.0, 100.0)];
        mark_collisions(&mut entities);
        assert!(!entities[0].dead);
        assert!(!entities[1].dead);
    }

    #[test]
    fn touching_exactly_is_not_a_hit() {
        // Centers exactly at the combined radius: strict inequality
        let mut entities = vec![asteroid_at(100.0, 100.0), asteroid_at(180.0, 100.0)];
        mark_collisions(&mut entities);
        assert!(!entities[0].dead);
        assert!(!entities[1].dead);
    }

    #[test]
    fn lone_entity_never_collides_with_itself() {
        let mut entities = vec![asteroid_at(100.0, 100.0)];
        mark_collisions(&mut entities);
        assert!(!entities[0].dead);
    }

    #[test]
    fn chain_of_overlaps_flags_all_members() {
        // A overlaps B, B overlaps C, A clear of C
        let mut entities = vec![
            asteroid_at(100.0, 100.0),
            asteroid_at(170.0, 100.0),
            asteroid_at(240.0, 100.0),
        ];
        mark_collisions(&mut entities);
        assert!(entities.iter().all(|e| e.dead));
    }

    proptest! {
        #[test]
        fn flags_match_distance_and_ignore_order(
            ax in 0.0f32..800.0, ay in 0.0f32..600.0,
            bx in 0.0f32..800.0, by in 0.0f32..600.0,
        ) {
            let mut forward = vec![asteroid_at(ax, ay), asteroid_at(bx, by)];
            let mut reverse = vec![asteroid_at(bx, by), asteroid_at(ax, ay)];
            mark_collisions(&mut forward);
            mark_collisions(&mut reverse);

            let dist_sq = Vec2::new(ax, ay).distance_squared(Vec2::new(bx, by));
            let expect = dist_sq < 80.0 * 80.0;
            prop_assert_eq!(forward[0].dead, expect);
            prop_assert_eq!(forward[1].dead, expect);
            prop_assert_eq!(reverse[0].dead, expect);
            prop_assert_eq!(reverse[1].dead, expect);
        }
    }
}
