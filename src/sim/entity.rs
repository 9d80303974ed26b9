//! Entity kinds and their intrinsic attributes

use glam::Vec2;

/// What an entity is. Kind determines radius, wireframe shape, and what
/// (if anything) it breaks into when destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Projectile,
    AsteroidBig,
    AsteroidMedium,
    AsteroidSmall,
}

impl EntityKind {
    /// Collision radius in game pixels
    pub const fn radius(self) -> f32 {
        match self {
            EntityKind::Player => 15.0,
            EntityKind::Projectile => 3.0,
            EntityKind::AsteroidBig => 40.0,
            EntityKind::AsteroidMedium => 20.0,
            EntityKind::AsteroidSmall => 10.0,
        }
    }

    /// Debris produced on destruction: (kind, count), or None for kinds
    /// that just disappear
    pub const fn debris(self) -> Option<(EntityKind, u32)> {
        match self {
            EntityKind::AsteroidBig => Some((EntityKind::AsteroidMedium, 2)),
            EntityKind::AsteroidMedium => Some((EntityKind::AsteroidSmall, 2)),
            _ => None,
        }
    }

    pub const fn is_asteroid(self) -> bool {
        matches!(
            self,
            EntityKind::AsteroidBig | EntityKind::AsteroidMedium | EntityKind::AsteroidSmall
        )
    }
}

/// A single game object. Everything on screen is one of these.
#[derive(Debug, Clone)]
pub struct Entity {
    pub kind: EntityKind,
    /// Position in game pixels, wrapped to the playfield each frame
    pub pos: Vec2,
    /// Velocity in px/s
    pub vel: Vec2,
    /// Facing angle in radians; 0 points along +X
    pub rot: f32,
    /// Flagged by collision detection, resolved at end of frame
    pub dead: bool,
}

impl Entity {
    pub fn new(kind: EntityKind, pos: Vec2, vel: Vec2, rot: f32) -> Self {
        Self {
            kind,
            pos,
            vel,
            rot,
            dead: false,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.kind.radius()
    }

    /// Unit vector along the facing direction
    #[inline]
    pub fn heading(&self) -> Vec2 {
        crate::heading(self.rot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debris_chain_big_to_medium_to_small() {
        assert_eq!(
            EntityKind::AsteroidBig.debris(),
            Some((EntityKind::AsteroidMedium, 2))
        );
        assert_eq!(
            EntityKind::AsteroidMedium.debris(),
            Some((EntityKind::AsteroidSmall, 2))
        );
        assert_eq!(EntityKind::AsteroidSmall.debris(), None);
        assert_eq!(EntityKind::Player.debris(), None);
        assert_eq!(EntityKind::Projectile.debris(), None);
    }

    #[test]
    fn radii_shrink_along_the_debris_chain() {
        assert!(EntityKind::AsteroidBig.radius() > EntityKind::AsteroidMedium.radius());
        assert!(EntityKind::AsteroidMedium.radius() > EntityKind::AsteroidSmall.radius());
    }

    #[test]
    fn asteroid_predicate() {
        assert!(EntityKind::AsteroidBig.is_asteroid());
        assert!(EntityKind::AsteroidSmall.is_asteroid());
        assert!(!EntityKind::Player.is_asteroid());
        assert!(!EntityKind::Projectile.is_asteroid());
    }
}
