//! Entity construction with collision-avoiding placement

use glam::Vec2;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, TAU};

use super::entity::{Entity, EntityKind};
use crate::consts::{
    ASTEROID_MAX_SPEED, ASTEROID_MIN_SPEED, PROJECTILE_SPEED, SCREEN_H, SCREEN_W, SPAWN_ATTEMPTS,
    SPAWN_CLEARANCE,
};
use crate::heading;

/// The player ship: screen center, at rest, facing up
pub fn spawn_player() -> Entity {
    Entity::new(
        EntityKind::Player,
        Vec2::new(SCREEN_W / 2.0, SCREEN_H / 2.0),
        Vec2::ZERO,
        -FRAC_PI_2,
    )
}

/// A projectile leaving the shooter's nose. Placed far enough along the
/// heading that it can never hit the shooter on the frame it is fired.
pub fn spawn_projectile(shooter: &Entity) -> Entity {
    let dir = shooter.heading();
    let offset = SPAWN_CLEARANCE * (shooter.radius() + EntityKind::Projectile.radius());
    Entity::new(
        EntityKind::Projectile,
        shooter.pos + dir * offset,
        shooter.vel + dir * PROJECTILE_SPEED,
        shooter.rot,
    )
}

/// A big asteroid somewhere on the playfield, drifting in a random
/// direction at a random speed
pub fn spawn_asteroid<R: Rng>(rng: &mut R, existing: &[Entity]) -> Entity {
    let rot = rng.random_range(0.0..TAU);
    let speed = rng.random_range(ASTEROID_MIN_SPEED..ASTEROID_MAX_SPEED);
    let radius = EntityKind::AsteroidBig.radius();
    let pos = place(rng, radius, existing, |rng| {
        Vec2::new(
            rng.random_range(0.0..SCREEN_W),
            rng.random_range(0.0..SCREEN_H),
        )
    });
    Entity::new(EntityKind::AsteroidBig, pos, heading(rot) * speed, rot)
}

/// One debris fragment of a destroyed parent. Placed on a ring around the
/// parent and launched with the parent's velocity plus a random impulse.
pub fn spawn_debris<R: Rng>(
    rng: &mut R,
    parent: &Entity,
    kind: EntityKind,
    existing: &[Entity],
) -> Entity {
    let radius = kind.radius();
    let ring = SPAWN_CLEARANCE * (parent.radius() + radius);
    let center = parent.pos;
    let pos = place(rng, radius, existing, |rng| {
        center + heading(rng.random_range(0.0..TAU)) * ring
    });
    let impulse_angle = rng.random_range(0.0..TAU);
    let impulse = rng.random_range(ASTEROID_MIN_SPEED..ASTEROID_MAX_SPEED);
    Entity::new(
        kind,
        pos,
        parent.vel + heading(impulse_angle) * impulse,
        impulse_angle,
    )
}

/// True when `pos` keeps a new entity of `radius` clear of everything in
/// `existing` (center distance beyond the combined radii)
fn is_clear(pos: Vec2, radius: f32, existing: &[Entity]) -> bool {
    existing.iter().all(|e| {
        let hit = radius + e.radius();
        pos.distance_squared(e.pos) > hit * hit
    })
}

/// Sample candidate positions until one is clear of `existing`, bounded by
/// `SPAWN_ATTEMPTS`. On exhaustion the last candidate is accepted even if
/// it overlaps; a crowded field must not make spawning fail.
fn place<R: Rng>(
    rng: &mut R,
    radius: f32,
    existing: &[Entity],
    mut candidate: impl FnMut(&mut R) -> Vec2,
) -> Vec2 {
    let mut pos = candidate(rng);
    for _ in 1..SPAWN_ATTEMPTS {
        if is_clear(pos, radius, existing) {
            return pos;
        }
        pos = candidate(rng);
    }
    if !is_clear(pos, radius, existing) {
        log::debug!("placement retries exhausted, accepting overlapping spawn");
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(0x5eed)
    }

    #[test]
    fn player_starts_centered_at_rest_facing_up() {
        let p = spawn_player();
        assert_eq!(p.kind, EntityKind::Player);
        assert_eq!(p.pos, Vec2::new(400.0, 300.0));
        assert_eq!(p.vel, Vec2::ZERO);
        // Facing up means heading points toward -Y in screen coordinates
        let h = p.heading();
        assert!(h.x.abs() < 1e-6);
        assert!((h.y + 1.0).abs() < 1e-6);
        assert!(!p.dead);
    }

    #[test]
    fn projectile_offset_and_velocity() {
        let mut shooter = spawn_player();
        shooter.rot = 0.0;
        shooter.vel = Vec2::new(10.0, -5.0);
        let p = spawn_projectile(&shooter);

        // 1.5 * (15 + 3) = 27 px along +X from the shooter
        assert!((p.pos.x - (shooter.pos.x + 27.0)).abs() < 1e-4);
        assert!((p.pos.y - shooter.pos.y).abs() < 1e-4);
        // Shooter velocity carries over
        assert!((p.vel.x - 410.0).abs() < 1e-3);
        assert!((p.vel.y + 5.0).abs() < 1e-3);
        assert_eq!(p.rot, shooter.rot);
    }

    #[test]
    fn projectile_spawns_outside_shooter_radius() {
        let shooter = spawn_player();
        let p = spawn_projectile(&shooter);
        let hit = shooter.radius() + p.radius();
        assert!(shooter.pos.distance_squared(p.pos) > hit * hit);
    }

    #[test]
    fn asteroid_spawns_in_bounds_with_speed_in_range() {
        let mut rng = rng();
        for _ in 0..50 {
            let a = spawn_asteroid(&mut rng, &[]);
            assert_eq!(a.kind, EntityKind::AsteroidBig);
            assert!(a.pos.x >= 0.0 && a.pos.x < SCREEN_W);
            assert!(a.pos.y >= 0.0 && a.pos.y < SCREEN_H);
            let speed = a.vel.length();
            assert!((ASTEROID_MIN_SPEED..ASTEROID_MAX_SPEED).contains(&speed));
        }
    }

    #[test]
    fn asteroid_avoids_existing_entities() {
        let mut rng = rng();
        let player = spawn_player();
        for _ in 0..50 {
            let a = spawn_asteroid(&mut rng, std::slice::from_ref(&player));
            let hit = a.radius() + player.radius();
            assert!(a.pos.distance_squared(player.pos) > hit * hit);
        }
    }

    #[test]
    fn crowded_field_still_produces_an_in_bounds_asteroid() {
        // Big asteroids on an 80px grid: every point on screen is within
        // 57px of some center, so no candidate can clear the 80px needed
        // and every attempt must be rejected.
        let mut field = Vec::new();
        for gx in 0..10 {
            for gy in 0..8 {
                field.push(Entity::new(
                    EntityKind::AsteroidBig,
                    Vec2::new(40.0 + 80.0 * gx as f32, 40.0 + 80.0 * gy as f32),
                    Vec2::ZERO,
                    0.0,
                ));
            }
        }
        let mut rng = rng();
        let a = spawn_asteroid(&mut rng, &field);
        assert!(a.pos.x >= 0.0 && a.pos.x < SCREEN_W);
        assert!(a.pos.y >= 0.0 && a.pos.y < SCREEN_H);
        let nearest = field
            .iter()
            .map(|e| e.pos.distance(a.pos))
            .fold(f32::INFINITY, f32::min);
        assert!(nearest < 80.0, "spawn was accepted despite overlapping");
    }

    #[test]
    fn debris_spawns_on_ring_around_parent() {
        let mut rng = rng();
        let parent = Entity::new(
            EntityKind::AsteroidBig,
            Vec2::new(400.0, 300.0),
            Vec2::new(20.0, 0.0),
            0.0,
        );
        let d = spawn_debris(&mut rng, &parent, EntityKind::AsteroidMedium, &[]);
        assert_eq!(d.kind, EntityKind::AsteroidMedium);
        // Ring radius is 1.5 * (40 + 20) = 90
        assert!((parent.pos.distance(d.pos) - 90.0).abs() < 1e-3);
        // Impulse magnitude on top of inherited velocity
        let impulse = (d.vel - parent.vel).length();
        assert!((ASTEROID_MIN_SPEED..ASTEROID_MAX_SPEED).contains(&impulse));
    }
}
