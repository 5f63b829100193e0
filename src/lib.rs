//! Brick Breaker - a single-screen arcade ball-and-paddle game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//!
//! Rendering, window/event-loop setup and raw input capture are external
//! collaborators: a presentation layer draws [`sim::Snapshot`]s, and an input
//! layer pushes paddle positions and [`sim::Command`]s into the core.

pub mod sim;

pub use sim::{Command, GamePhase, GameState, Snapshot, tick};

/// Game configuration constants
pub mod consts {
    /// Nominal tick cadence driven by the external loop (milliseconds)
    pub const TICK_MS: u64 = 16;

    /// Play field dimensions (y-up: y = 0 is the floor, bricks sit near the top)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_Y: f32 = 50.0;
    /// Width while the expansion power-up is active
    pub const PADDLE_EXPANDED_WIDTH: f32 = 160.0;
    /// Expansion duration in ticks
    pub const EXPAND_DURATION_TICKS: u32 = 500;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_SPEED: f32 = 5.0;
    /// Base speed bump applied when a level is cleared (future spawns only)
    pub const BALL_SPEED_INCREMENT: f32 = 0.5;
    /// Fresh balls spawn this far above the paddle's base line
    pub const BALL_SPAWN_HEIGHT: f32 = 30.0;

    /// Brick grid
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLS: u32 = 10;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Spacing between neighboring bricks
    pub const BRICK_GAP: f32 = 5.0;
    /// Left margin of the grid
    pub const GRID_MARGIN: f32 = 30.0;
    /// Score awarded per destroyed brick
    pub const BRICK_SCORE: u32 = 10;
    /// Multi-hit bricks only appear from this level on
    pub const MULTI_HIT_MIN_LEVEL: u32 = 2;

    /// Particle burst size per brick hit
    pub const PARTICLE_BURST: usize = 10;
    /// Life drained from every particle each tick (life starts at 1.0)
    pub const PARTICLE_DECAY: f32 = 0.02;
    /// Particle velocities are drawn from [-range, range] per axis
    pub const PARTICLE_VEL_RANGE: f32 = 2.0;

    pub const STARTING_LIVES: u8 = 3;
}
