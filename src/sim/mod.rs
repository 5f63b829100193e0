//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per call
//! - Seeded RNG only
//! - Stable iteration order (brick generation order)
//! - No rendering or platform dependencies

pub mod grid;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use grid::generate;
pub use snapshot::{BallView, BrickView, Rect, Snapshot};
pub use state::{Ball, Brick, Command, GamePhase, GameState, Paddle, Particle};
pub use tick::tick;
