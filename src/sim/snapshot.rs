//! Read-only render snapshot
//!
//! The presentation layer consumes one of these between ticks and emits
//! pixels; nothing flows back into the simulation.

use glam::Vec2;
use serde::Serialize;

use crate::consts::*;
use crate::sim::state::{GamePhase, GameState};

/// An axis-aligned rectangle (bottom-left origin, y-up)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BrickView {
    pub rect: Rect,
    /// Remaining hits (1 or 2); renderers tint multi-hit bricks differently
    pub hits_left: u8,
    pub power_up: bool,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub level: u32,
    pub lives: u8,
    pub paddle: Rect,
    pub balls: Vec<BallView>,
    /// Visible bricks only; destroyed bricks never reappear here
    pub bricks: Vec<BrickView>,
    pub particles: Vec<Vec2>,
}

impl GameState {
    /// Capture a consistent read-only view of the current frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            level: self.level,
            lives: self.lives,
            paddle: Rect {
                pos: Vec2::new(self.paddle.x, PADDLE_Y),
                size: Vec2::new(self.paddle.width, PADDLE_HEIGHT),
            },
            balls: self
                .balls
                .iter()
                .map(|b| BallView {
                    pos: b.pos,
                    radius: b.radius,
                })
                .collect(),
            bricks: self
                .bricks
                .iter()
                .filter(|b| b.visible)
                .map(|b| BrickView {
                    rect: Rect {
                        pos: b.pos,
                        size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
                    },
                    hits_left: b.hits_left,
                    power_up: b.power_up,
                })
                .collect(),
            particles: self.particles.iter().map(|p| p.pos).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Command;

    #[test]
    fn test_snapshot_reflects_counters_and_paddle() {
        let mut state = GameState::new(42);
        state.handle_command(Command::Start);
        state.score = 230;

        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.score, 230);
        assert_eq!(snap.level, 1);
        assert_eq!(snap.lives, STARTING_LIVES);
        assert_eq!(snap.paddle.pos.y, PADDLE_Y);
        assert_eq!(snap.paddle.size, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT));
        assert_eq!(snap.balls.len(), 1);
        assert_eq!(snap.bricks.len(), (BRICK_ROWS * BRICK_COLS) as usize);
    }

    #[test]
    fn test_destroyed_bricks_are_excluded() {
        let mut state = GameState::new(42);
        state.handle_command(Command::Start);
        state.bricks[0].visible = false;
        state.bricks[7].visible = false;

        let snap = state.snapshot();
        assert_eq!(snap.bricks.len(), (BRICK_ROWS * BRICK_COLS) as usize - 2);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = GameState::new(42);
        state.handle_command(Command::Start);

        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"score\":0"));
        assert!(json.contains("\"lives\":3"));
    }
}
