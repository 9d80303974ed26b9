//! Per-frame player commands
//!
//! The window layer reduces raw keyboard events to this small struct once
//! per frame; the simulation never sees key codes.

use crate::consts::{PLAYER_ACCEL, PLAYER_TURN_RATE};

use super::spawn::spawn_projectile;
use super::state::{GamePhase, GameState};

/// Commands sampled from the keyboard for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Up held: accelerate along the current heading
    pub thrust: bool,
    /// Left held: rotate counter-clockwise
    pub turn_left: bool,
    /// Right held: rotate clockwise
    pub turn_right: bool,
    /// Fire key went down this frame (OS auto-repeat already filtered out)
    pub fire: bool,
}

/// Apply one frame of input to the player. After game over every command
/// is ignored; quitting is handled by the window layer, not here.
pub fn apply_input(state: &mut GameState, input: &FrameInput, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }
    if input.fire {
        let projectile = spawn_projectile(state.player());
        state.entities.push(projectile);
    }
    let player = state.player_mut();
    if input.turn_left {
        player.rot -= PLAYER_TURN_RATE * dt;
    }
    if input.turn_right {
        player.rot += PLAYER_TURN_RATE * dt;
    }
    if input.thrust {
        let dir = player.heading();
        player.vel += dir * PLAYER_ACCEL * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::EntityKind;

    const FIRE: FrameInput = FrameInput {
        thrust: false,
        turn_left: false,
        turn_right: false,
        fire: true,
    };

    #[test]
    fn fire_appends_exactly_one_projectile() {
        let mut state = GameState::new(1);
        apply_input(&mut state, &FIRE, 1.0 / 60.0);

        let projectiles: Vec<_> = state
            .entities
            .iter()
            .filter(|e| e.kind == EntityKind::Projectile)
            .collect();
        assert_eq!(projectiles.len(), 1);

        // Spawned outside the shooter so it cannot hit the ship this frame
        let player = state.player();
        let hit = player.radius() + projectiles[0].radius();
        assert!(player.pos.distance_squared(projectiles[0].pos) > hit * hit);
    }

    #[test]
    fn held_fire_without_a_new_edge_spawns_nothing() {
        let mut state = GameState::new(1);
        let released = FrameInput::default();
        apply_input(&mut state, &released, 1.0 / 60.0);
        assert_eq!(state.entities.len(), 1);
    }

    #[test]
    fn turn_scales_with_frame_time() {
        let mut state = GameState::new(1);
        let start = state.player().rot;
        let input = FrameInput {
            turn_right: true,
            ..Default::default()
        };
        apply_input(&mut state, &input, 0.5);
        assert!((state.player().rot - (start + PLAYER_TURN_RATE * 0.5)).abs() < 1e-5);
    }

    #[test]
    fn thrust_accelerates_along_heading() {
        let mut state = GameState::new(1);
        state.player_mut().rot = 0.0;
        let input = FrameInput {
            thrust: true,
            ..Default::default()
        };
        apply_input(&mut state, &input, 0.1);
        let vel = state.player().vel;
        assert!((vel.x - PLAYER_ACCEL * 0.1).abs() < 1e-4);
        assert!(vel.y.abs() < 1e-4);
    }

    #[test]
    fn input_is_ignored_after_game_over() {
        let mut state = GameState::new(1);
        state.entities.clear();
        state.lives = 0;
        state.phase = GamePhase::GameOver;
        apply_input(&mut state, &FIRE, 1.0 / 60.0);
        assert!(state.entities.is_empty());
    }
}
