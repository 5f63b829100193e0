//! Per-tick simulation step
//!
//! Advances balls and particles one fixed tick, resolves collisions against
//! walls, paddle and bricks, and applies the resulting scoring, power-up and
//! phase transitions. The external loop drives this on a ~16ms cadence; each
//! call performs exactly one step.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::state::{Ball, GamePhase, GameState, Particle};

/// Advance the game state by one tick. No-op unless the game is Playing.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    // Split borrows: the ball loop mutates balls while reading/writing
    // bricks, particles, paddle and counters.
    let GameState {
        phase,
        score,
        level,
        lives,
        ball_speed,
        expand_ticks,
        paddle,
        balls,
        bricks,
        particles,
        rng,
        ..
    } = state;

    // Power-up timer: paddle shrinks back when it runs out
    if *expand_ticks > 0 {
        *expand_ticks -= 1;
        if *expand_ticks == 0 {
            paddle.width = PADDLE_WIDTH;
            log::debug!("paddle expansion expired");
        }
    }

    // Particle integration; each particle depends only on its own prior state
    for p in particles.iter_mut() {
        p.pos += p.vel;
        p.life -= PARTICLE_DECAY;
    }
    particles.retain(|p| p.life > 0.0);

    // Per-ball processing, sequential. A life loss ends the loop for this
    // tick; the re-seeded collection picks up next tick.
    let mut respawn = false;
    'balls: for ball in balls.iter_mut() {
        ball.pos += ball.vel;

        // Side walls reflect without position correction; the ball may sit
        // briefly outside the field
        if ball.pos.x < 0.0 || ball.pos.x > FIELD_WIDTH {
            ball.vel.x = -ball.vel.x;
        }
        if ball.pos.y > FIELD_HEIGHT {
            ball.vel.y = -ball.vel.y;
        }

        // Below the floor: lose a life
        if ball.pos.y < 0.0 {
            *lives = lives.saturating_sub(1);
            if *lives == 0 {
                *phase = GamePhase::GameOver;
                log::info!("game over: score {}, level {}", *score, *level);
            } else {
                respawn = true;
                log::debug!("ball lost, {} lives left", *lives);
            }
            break 'balls;
        }

        // Paddle: purely vertical reflection, no hit-position angle
        if paddle.spans(ball.pos.x) && ball.pos.y <= paddle.top() {
            ball.vel.y = -ball.vel.y;
        }

        // Bricks in generation order; first containing brick wins, one brick
        // per ball per tick
        for brick in bricks.iter_mut() {
            if !brick.visible {
                continue;
            }
            if brick.contains(ball.pos) {
                brick.hits_left = brick.hits_left.saturating_sub(1);
                if brick.hits_left == 0 {
                    brick.visible = false;
                    *score += BRICK_SCORE;
                    if brick.power_up {
                        paddle.width = PADDLE_EXPANDED_WIDTH;
                        *expand_ticks = EXPAND_DURATION_TICKS;
                        log::debug!("power-up: paddle expanded");
                    }
                }
                spawn_burst(particles, ball.pos, rng);
                ball.vel.y = -ball.vel.y;
                break;
            }
        }
    }

    if respawn {
        balls.clear();
        balls.push(Ball::spawn(*ball_speed, rng));
    }

    // Level cleared? Speed bump applies to future spawns only.
    if *phase == GamePhase::Playing && bricks.iter().all(|b| !b.visible) {
        *phase = GamePhase::LevelComplete;
        *level += 1;
        *ball_speed += BALL_SPEED_INCREMENT;
        log::info!("level complete: next level {}, ball speed {}", *level, *ball_speed);
    }
}

/// Emit a burst of short-lived particles at a brick-hit position
fn spawn_burst(particles: &mut Vec<Particle>, pos: Vec2, rng: &mut Pcg32) {
    for _ in 0..PARTICLE_BURST {
        let vel = Vec2::new(
            rng.random_range(-PARTICLE_VEL_RANGE..=PARTICLE_VEL_RANGE),
            rng.random_range(-PARTICLE_VEL_RANGE..=PARTICLE_VEL_RANGE),
        );
        particles.push(Particle { pos, vel, life: 1.0 });
    }
}
