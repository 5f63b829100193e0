//! Game state and core simulation types
//!
//! Everything the simulation owns lives here, including the seeded RNG that
//! makes runs reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::grid;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start command
    Menu,
    /// Active gameplay
    Playing,
    /// All bricks cleared; waiting for the start command
    LevelComplete,
    /// Lives exhausted; waiting for restart
    GameOver,
}

/// Discrete input commands from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin the game from the menu, or advance past a cleared level
    Start,
    /// Full reset to level 1, from any phase
    Restart,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge x position
    pub x: f32,
    /// Current width (temporarily widened by the expansion power-up)
    pub width: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: FIELD_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
            width: PADDLE_WIDTH,
        }
    }
}

impl Paddle {
    /// Move the paddle so its center sits at `x`, clamped to the play field
    pub fn set_center_x(&mut self, x: f32) {
        self.x = (x - self.width / 2.0).clamp(0.0, FIELD_WIDTH - self.width);
    }

    /// Top edge of the paddle (y-up coordinates)
    pub fn top(&self) -> f32 {
        PADDLE_Y + PADDLE_HEIGHT
    }

    /// True if `x` lies strictly within the paddle span
    pub fn spans(&self, x: f32) -> bool {
        x > self.x && x < self.x + self.width
    }
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Spawn a fresh ball centered above the paddle line, moving up and to a
    /// random side at the given base speed
    pub fn spawn(speed: f32, rng: &mut Pcg32) -> Self {
        let dir = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
        Self {
            pos: Vec2::new(FIELD_WIDTH / 2.0, PADDLE_Y + BALL_SPAWN_HEIGHT),
            vel: Vec2::new(dir * speed, speed),
            radius: BALL_RADIUS,
        }
    }
}

/// A brick in the level grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Bottom-left corner
    pub pos: Vec2,
    pub visible: bool,
    /// Remaining hits before destruction (1 or 2)
    pub hits_left: u8,
    /// Destroying this brick widens the paddle
    pub power_up: bool,
}

impl Brick {
    /// True if the point lies strictly inside the brick's box
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.pos.x
            && p.x < self.pos.x + BRICK_WIDTH
            && p.y > self.pos.y
            && p.y < self.pos.y + BRICK_HEIGHT
    }
}

/// A particle for brick-hit visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 0-1, decreases each tick until removal
    pub life: f32,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    /// Current level (1-based)
    pub level: u32,
    pub lives: u8,
    /// Base speed for freshly spawned balls; grows per cleared level
    pub ball_speed: f32,
    /// Ticks until the paddle expansion wears off (0 = inactive)
    pub expand_ticks: u32,
    /// Simulation tick counter (advances only while Playing)
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub balls: Vec<Ball>,
    pub bricks: Vec<Brick>,
    pub particles: Vec<Particle>,
    pub rng: Pcg32,
}

impl GameState {
    /// Create a fresh game in the menu phase
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Menu,
            score: 0,
            level: 1,
            lives: STARTING_LIVES,
            ball_speed: BALL_START_SPEED,
            expand_ticks: 0,
            time_ticks: 0,
            paddle: Paddle::default(),
            balls: Vec::new(),
            bricks: Vec::new(),
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Input intake: position the paddle center (clamped to the field)
    pub fn set_paddle_center_x(&mut self, x: f32) {
        self.paddle.set_center_x(x);
    }

    /// Apply a discrete command. Commands that don't apply in the current
    /// phase are ignored.
    pub fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Start => match self.phase {
                GamePhase::Menu | GamePhase::LevelComplete => {
                    self.enter_level();
                }
                _ => {}
            },
            Command::Restart => {
                log::info!("restart: final score {}", self.score);
                self.score = 0;
                self.level = 1;
                self.lives = STARTING_LIVES;
                self.ball_speed = BALL_START_SPEED;
                self.expand_ticks = 0;
                self.paddle = Paddle::default();
                self.particles.clear();
                self.enter_level();
            }
        }
    }

    /// Regenerate the brick grid for the current level, re-seed the ball
    /// collection to exactly one ball, and enter Playing
    fn enter_level(&mut self) {
        self.bricks = grid::generate(
            &mut self.rng,
            self.level,
            BRICK_ROWS,
            BRICK_COLS,
            Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            GRID_MARGIN,
        );
        self.balls.clear();
        self.spawn_ball();
        self.phase = GamePhase::Playing;
        log::info!(
            "level {} started: {} bricks, ball speed {}",
            self.level,
            self.bricks.len(),
            self.ball_speed
        );
    }

    /// Push one fresh ball at the current base speed
    pub fn spawn_ball(&mut self) {
        let ball = Ball::spawn(self.ball_speed, &mut self.rng);
        self.balls.push(ball);
    }
}
