//! Vector Rocks - a wireframe Asteroids-style arcade game
//!
//! Core modules:
//! - `sim`: frame-driven game simulation (entities, spawning, physics,
//!   collisions, rounds). Deterministic given a seed; no platform code.
//! - `renderer`: WebGPU line rendering plus a bitmap-font HUD overlay
//! - `input`: keyboard state tracking for the window event loop
//! - `settings`: runtime preferences loaded from disk

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game tuning constants
pub mod consts {
    /// Playfield width in game pixels
    pub const SCREEN_W: f32 = 800.0;
    /// Playfield height in game pixels
    pub const SCREEN_H: f32 = 600.0;

    /// Player forward acceleration while thrusting (px/s^2)
    pub const PLAYER_ACCEL: f32 = 350.0;
    /// Player turn rate while a turn key is held (rad/s)
    pub const PLAYER_TURN_RATE: f32 = 4.0;
    /// Projectile speed relative to the shooter (px/s)
    pub const PROJECTILE_SPEED: f32 = 400.0;

    /// Asteroid speed range (px/s), also used for debris impulses
    pub const ASTEROID_MIN_SPEED: f32 = 30.0;
    pub const ASTEROID_MAX_SPEED: f32 = 90.0;

    /// Placement samples before a spawn accepts an overlapping position
    pub const SPAWN_ATTEMPTS: u32 = 10;
    /// Debris and projectiles spawn at this multiple of the combined radii
    pub const SPAWN_CLEARANCE: f32 = 1.5;

    pub const STARTING_LIVES: u8 = 3;
    /// Per-round asteroid count doubles each round up to this cap
    pub const MAX_WAVE_ASTEROIDS: u32 = 16;
}

/// Unit vector for an angle in radians (0 points along +X)
#[inline]
pub fn heading(angle: f32) -> glam::Vec2 {
    glam::Vec2::new(angle.cos(), angle.sin())
}
