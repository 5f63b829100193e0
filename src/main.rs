//! Headless demo driver
//!
//! Runs the simulation with a trivial ball-tracking paddle and logs progress.
//! A real front end would draw a snapshot every ~16ms tick; this driver just
//! fast-forwards the core and dumps the final snapshot as JSON.
//!
//! Usage: `brick-breaker [seed] [max_ticks]`

use brick_breaker::{Command, GamePhase, GameState, tick};

const DEFAULT_SEED: u64 = 0xB41C;
const DEFAULT_MAX_TICKS: u64 = 100_000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let max_ticks: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_TICKS);

    let mut state = GameState::new(seed);
    log::info!("demo run: seed {seed}, up to {max_ticks} ticks");

    for _ in 0..max_ticks {
        match state.phase {
            GamePhase::Menu | GamePhase::LevelComplete => {
                state.handle_command(Command::Start);
            }
            GamePhase::Playing => {
                // Track the ball like an attentive (if unimaginative) player
                if let Some(ball) = state.balls.first() {
                    let x = ball.pos.x;
                    state.set_paddle_center_x(x);
                }
                tick(&mut state);
            }
            GamePhase::GameOver => break,
        }
    }

    log::info!(
        "run finished: phase {:?}, score {}, level {}, lives {}",
        state.phase,
        state.score,
        state.level,
        state.lives
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("snapshot serialization failed: {e}"),
    }
}
