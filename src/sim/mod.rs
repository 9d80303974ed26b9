//! Frame-driven game simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - All motion scaled by the frame time passed in
//! - Seeded RNG only
//! - Stable entity order (player at index 0, spawns appended)
//! - No rendering or platform dependencies

pub mod collision;
pub mod deaths;
pub mod entity;
pub mod input;
pub mod physics;
pub mod spawn;
pub mod state;

pub use entity::{Entity, EntityKind};
pub use input::FrameInput;
pub use state::{GamePhase, GameState};
