//! Game state and the per-frame step sequence

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::mark_collisions;
use super::deaths::resolve_deaths;
use super::entity::Entity;
use super::input::{FrameInput, apply_input};
use super::physics::integrate;
use super::spawn::{spawn_asteroid, spawn_player};
use crate::consts::{MAX_WAVE_ASTEROIDS, STARTING_LIVES};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay; the player ship exists
    Playing,
    /// Run ended; asteroids keep drifting behind the game-over screen
    GameOver,
}

/// Complete simulation state. Deterministic: two states built from the
/// same seed and fed the same inputs stay identical.
#[derive(Debug)]
pub struct GameState {
    /// Every live entity; the player occupies index 0 while playing
    pub entities: Vec<Entity>,
    pub lives: u8,
    /// Completed-wave counter, 1-based once play begins
    pub round: u32,
    pub phase: GamePhase,
    /// Duration of the most recent frame in seconds
    pub frame_dt: f32,
    rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            entities: vec![spawn_player()],
            lives: STARTING_LIVES,
            round: 0,
            phase: GamePhase::Playing,
            frame_dt: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// The player ship. Only meaningful while playing; after game over the
    /// ship is gone and asking for it is a caller bug, so this panics
    /// rather than hand back an arbitrary entity.
    pub fn player(&self) -> &Entity {
        assert_eq!(
            self.phase,
            GamePhase::Playing,
            "player accessed after game over"
        );
        &self.entities[0]
    }

    pub fn player_mut(&mut self) -> &mut Entity {
        assert_eq!(
            self.phase,
            GamePhase::Playing,
            "player accessed after game over"
        );
        &mut self.entities[0]
    }

    pub fn live_asteroids(&self) -> usize {
        self.entities
            .iter()
            .filter(|e| e.kind.is_asteroid() && !e.dead)
            .count()
    }

    /// Start the next round if the field is clear of asteroids. The wave
    /// size doubles every round and caps at `MAX_WAVE_ASTEROIDS`.
    pub fn advance_round(&mut self) {
        if self.live_asteroids() > 0 {
            return;
        }
        self.round += 1;
        let count = MAX_WAVE_ASTEROIDS.min(1u32 << self.round.min(31));
        log::info!("round {}: spawning {} asteroids", self.round, count);
        for _ in 0..count {
            let asteroid = spawn_asteroid(&mut self.rng, &self.entities);
            self.entities.push(asteroid);
        }
    }

    /// Advance the simulation by one frame
    pub fn step(&mut self, input: &FrameInput, dt: f32) {
        self.frame_dt = dt;

        self.advance_round();
        integrate(&mut self.entities, dt);
        apply_input(self, input, dt);
        mark_collisions(&mut self.entities);
        resolve_deaths(&mut self.entities, &mut self.lives, &mut self.rng);

        if self.lives == 0 && self.phase == GamePhase::Playing {
            self.phase = GamePhase::GameOver;
            log::info!("game over in round {}", self.round);
        }
    }
}
