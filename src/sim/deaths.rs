//! End-of-frame death resolution
//!
//! Collision detection only flags entities; this pass turns the flags into
//! consequences. Flagged entities are visited in sequence order: a dead
//! player costs a life and respawns in place while lives remain, dead
//! asteroids shed debris, and everything still flagged is compacted out at
//! the end with relative order preserved.

use rand::Rng;

use super::entity::{Entity, EntityKind};
use super::spawn::{spawn_debris, spawn_player};

pub fn resolve_deaths<R: Rng>(entities: &mut Vec<Entity>, lives: &mut u8, rng: &mut R) {
    let mut i = 0;
    while i < entities.len() {
        if !entities[i].dead {
            i += 1;
            continue;
        }
        if entities[i].kind == EntityKind::Player {
            *lives = lives.saturating_sub(1);
            if *lives > 0 {
                log::info!("ship destroyed, {} lives left", lives);
                // Fresh ship in the same slot keeps the player at index 0
                entities[i] = spawn_player();
            }
            // Out of lives: the wreck stays flagged and is removed below.
            // The caller notices lives hitting zero and ends the game.
        } else if let Some((kind, count)) = entities[i].kind.debris() {
            let parent = entities[i].clone();
            for _ in 0..count {
                // Each fragment is placed against the list as it stands,
                // earlier fragments included
                let fragment = spawn_debris(rng, &parent, kind, entities);
                entities.push(fragment);
            }
        }
        i += 1;
    }
    entities.retain(|e| !e.dead);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SCREEN_H, SCREEN_W};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(99)
    }

    fn dead(kind: EntityKind, x: f32, y: f32) -> Entity {
        let mut e = Entity::new(kind, Vec2::new(x, y), Vec2::new(15.0, 0.0), 0.0);
        e.dead = true;
        e
    }

    #[test]
    fn big_asteroid_breaks_into_two_medium() {
        let mut entities = vec![dead(EntityKind::AsteroidBig, 200.0, 200.0)];
        let mut lives = 3;
        resolve_deaths(&mut entities, &mut lives, &mut rng());

        assert_eq!(entities.len(), 2);
        for fragment in &entities {
            assert_eq!(fragment.kind, EntityKind::AsteroidMedium);
            assert!(!fragment.dead);
            // Inherited parent velocity plus a nonzero impulse
            assert!((fragment.vel - Vec2::new(15.0, 0.0)).length() > 1.0);
        }
        assert_eq!(lives, 3);
    }

    #[test]
    fn small_asteroid_disappears_without_debris() {
        let mut entities = vec![dead(EntityKind::AsteroidSmall, 200.0, 200.0)];
        let mut lives = 3;
        resolve_deaths(&mut entities, &mut lives, &mut rng());
        assert!(entities.is_empty());
    }

    #[test]
    fn projectile_disappears_without_debris() {
        let mut entities = vec![dead(EntityKind::Projectile, 200.0, 200.0)];
        let mut lives = 3;
        resolve_deaths(&mut entities, &mut lives, &mut rng());
        assert!(entities.is_empty());
    }

    #[test]
    fn dead_player_with_lives_left_respawns_in_place() {
        let mut entities = vec![dead(EntityKind::Player, 120.0, 80.0)];
        let mut lives = 3;
        resolve_deaths(&mut entities, &mut lives, &mut rng());

        assert_eq!(lives, 2);
        assert_eq!(entities.len(), 1);
        let player = &entities[0];
        assert_eq!(player.kind, EntityKind::Player);
        assert!(!player.dead);
        assert_eq!(player.pos, Vec2::new(SCREEN_W / 2.0, SCREEN_H / 2.0));
        assert_eq!(player.vel, Vec2::ZERO);
    }

    #[test]
    fn dead_player_on_last_life_is_removed() {
        let mut entities = vec![
            dead(EntityKind::Player, 120.0, 80.0),
            Entity::new(EntityKind::AsteroidSmall, Vec2::new(600.0, 500.0), Vec2::ZERO, 0.0),
        ];
        let mut lives = 1;
        resolve_deaths(&mut entities, &mut lives, &mut rng());

        assert_eq!(lives, 0);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].kind, EntityKind::AsteroidSmall);
    }

    #[test]
    fn survivors_keep_their_relative_order() {
        let mut entities = vec![
            Entity::new(EntityKind::Player, Vec2::new(400.0, 300.0), Vec2::ZERO, 0.0),
            dead(EntityKind::AsteroidSmall, 100.0, 100.0),
            Entity::new(EntityKind::Projectile, Vec2::new(50.0, 50.0), Vec2::ZERO, 0.0),
            dead(EntityKind::AsteroidSmall, 700.0, 500.0),
            Entity::new(EntityKind::AsteroidMedium, Vec2::new(200.0, 500.0), Vec2::ZERO, 0.0),
        ];
        let mut lives = 3;
        resolve_deaths(&mut entities, &mut lives, &mut rng());

        let kinds: Vec<_> = entities.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Player,
                EntityKind::Projectile,
                EntityKind::AsteroidMedium,
            ]
        );
    }

    #[test]
    fn debris_from_multiple_parents_in_one_pass() {
        let mut entities = vec![
            dead(EntityKind::AsteroidMedium, 100.0, 100.0),
            dead(EntityKind::AsteroidMedium, 700.0, 500.0),
        ];
        let mut lives = 3;
        resolve_deaths(&mut entities, &mut lives, &mut rng());

        assert_eq!(entities.len(), 4);
        assert!(
            entities
                .iter()
                .all(|e| e.kind == EntityKind::AsteroidSmall && !e.dead)
        );
    }
}
