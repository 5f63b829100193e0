//! Brick grid generation
//!
//! Layout is fully deterministic (row/column to position); per-brick
//! attributes come from the injected RNG so runs stay reproducible.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::state::Brick;

/// Build a fresh grid of bricks for a level.
///
/// Bricks are laid out row-major from the top of the field down, `margin`
/// pixels in from the left, with [`BRICK_GAP`] spacing. From level
/// [`MULTI_HIT_MIN_LEVEL`] on, each brick has a 1-in-4 chance of requiring
/// two hits; independently, each has a 1-in-10 chance of carrying a
/// power-up. The caller replaces its old grid wholesale.
pub fn generate(
    rng: &mut Pcg32,
    level: u32,
    rows: u32,
    cols: u32,
    cell_size: Vec2,
    margin: f32,
) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity((rows * cols) as usize);
    for i in 0..rows {
        for j in 0..cols {
            let x = j as f32 * (cell_size.x + BRICK_GAP) + margin;
            let y = FIELD_HEIGHT - (i + 1) as f32 * (cell_size.y + BRICK_GAP);
            let hits_left = if level >= MULTI_HIT_MIN_LEVEL && rng.random_range(0..4) == 0 {
                2
            } else {
                1
            };
            let power_up = rng.random_range(0..10) == 0;
            bricks.push(Brick {
                pos: Vec2::new(x, y),
                visible: true,
                hits_left,
                power_up,
            });
        }
    }
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn grid_for_level(level: u32, seed: u64) -> Vec<Brick> {
        let mut rng = Pcg32::seed_from_u64(seed);
        generate(
            &mut rng,
            level,
            BRICK_ROWS,
            BRICK_COLS,
            Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            GRID_MARGIN,
        )
    }

    #[test]
    fn test_grid_dimensions_and_visibility() {
        let bricks = grid_for_level(1, 42);
        assert_eq!(bricks.len(), (BRICK_ROWS * BRICK_COLS) as usize);
        assert!(bricks.iter().all(|b| b.visible));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let bricks = grid_for_level(1, 42);
        // Row-major: first brick is top-left
        assert_eq!(bricks[0].pos.x, GRID_MARGIN);
        assert_eq!(bricks[0].pos.y, FIELD_HEIGHT - (BRICK_HEIGHT + BRICK_GAP));
        // Second brick one column over
        assert_eq!(bricks[1].pos.x, GRID_MARGIN + BRICK_WIDTH + BRICK_GAP);
        assert_eq!(bricks[1].pos.y, bricks[0].pos.y);
        // Second row one step down
        let second_row = &bricks[BRICK_COLS as usize];
        assert_eq!(second_row.pos.x, GRID_MARGIN);
        assert_eq!(
            second_row.pos.y,
            FIELD_HEIGHT - 2.0 * (BRICK_HEIGHT + BRICK_GAP)
        );
    }

    #[test]
    fn test_level_one_has_no_multi_hit_bricks() {
        for seed in 0..20 {
            let bricks = grid_for_level(1, seed);
            assert!(bricks.iter().all(|b| b.hits_left == 1));
        }
    }

    #[test]
    fn test_level_two_mixes_hit_counts() {
        // 50 bricks at 1/4 odds: a seed with zero two-hit bricks would be
        // astronomically unlucky, and the stream is fixed anyway
        let bricks = grid_for_level(2, 42);
        assert!(bricks.iter().any(|b| b.hits_left == 2));
        assert!(bricks.iter().any(|b| b.hits_left == 1));
        assert!(bricks.iter().all(|b| b.hits_left == 1 || b.hits_left == 2));
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = grid_for_level(3, 1234);
        let b = grid_for_level(3, 1234);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.hits_left, y.hits_left);
            assert_eq!(x.power_up, y.power_up);
        }
    }

    #[test]
    fn test_empty_grid_is_harmless() {
        let mut rng = Pcg32::seed_from_u64(0);
        let bricks = generate(&mut rng, 1, 0, 0, Vec2::new(BRICK_WIDTH, BRICK_HEIGHT), 0.0);
        assert!(bricks.is_empty());
    }
}
