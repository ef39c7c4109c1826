//! World transition
//!
//! One tick moves the snake a single cell, lets it eat and grow, respawns
//! the eaten egg and updates the score.

use rand::Rng;

use super::SimError;
use super::eggs::{replace_at, spawn_avoiding};
use super::grid::{Direction, Grid, Position};
use super::world::World;
use crate::consts::SCORE_PER_EGG;

/// Result of a tick: keep going, or the run ended on this world
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Continue(World),
    /// The snake hit a wall or itself. Carries the world at the moment of
    /// death.
    Terminated(World),
}

impl TickOutcome {
    pub fn world(&self) -> &World {
        match self {
            TickOutcome::Continue(world) | TickOutcome::Terminated(world) => world,
        }
    }

    pub fn into_world(self) -> World {
        match self {
            TickOutcome::Continue(world) | TickOutcome::Terminated(world) => world,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, TickOutcome::Terminated(_))
    }
}

/// Slot of the egg sitting on `cell`. When several slots share the cell the
/// last one wins.
pub fn egg_at(eggs: &[Position], cell: Position) -> Option<usize> {
    eggs.iter().rposition(|egg| *egg == cell)
}

/// Advance the world by one step.
///
/// `on_eating_egg` runs once, before the snake grows, when the step lands on
/// an egg.
pub fn next_world<R, F>(
    world: &World,
    step: Direction,
    grid: &Grid,
    rng: &mut R,
    on_eating_egg: F,
) -> Result<World, SimError>
where
    R: Rng + ?Sized,
    F: FnOnce(),
{
    let snake = world.snake();
    let next_head = snake.head + step.delta();

    let Some(eaten) = egg_at(world.eggs(), next_head) else {
        return Ok(World::new(
            snake.advance(step, false),
            world.eggs().to_vec(),
            world.score(),
        )?);
    };

    on_eating_egg();

    let mut reject = world.eggs().to_vec();
    reject.extend(snake.joints());
    let egg = spawn_avoiding(&reject, grid, rng).ok_or(SimError::NoFreeCell)?;
    let eggs = replace_at(world.eggs(), eaten, egg)?;

    Ok(World::new(
        snake.advance(step, true),
        eggs,
        world.score() + SCORE_PER_EGG,
    )?)
}

/// `next_world` plus the game over check on the resulting world
pub fn tick<R, F>(
    world: &World,
    step: Direction,
    grid: &Grid,
    rng: &mut R,
    on_eating_egg: F,
) -> Result<TickOutcome, SimError>
where
    R: Rng + ?Sized,
    F: FnOnce(),
{
    let next = next_world(world, step, grid, rng, on_eating_egg)?;
    if next.is_terminal(grid) {
        log::debug!(
            "snake died at {} with score {}",
            next.snake().head,
            next.score()
        );
        Ok(TickOutcome::Terminated(next))
    } else {
        Ok(TickOutcome::Continue(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Snake;
    use crate::sim::world::init_world;
    use glam::IVec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn world(head: (i32, i32), body: &[(i32, i32)], eggs: &[(i32, i32)], score: u64) -> World {
        World::new(
            Snake::new(
                IVec2::new(head.0, head.1),
                body.iter().map(|(x, y)| IVec2::new(*x, *y)).collect(),
            ),
            eggs.iter().map(|(x, y)| IVec2::new(*x, *y)).collect(),
            score,
        )
        .unwrap()
    }

    #[test]
    fn test_eating_example() {
        let grid = Grid::new(40, 40);
        let start = world((20, 20), &[(0, 1)], &[(20, 19)], 0);
        let mut rng = Pcg32::seed_from_u64(5);
        let mut eaten = 0;

        let next = next_world(&start, Direction::Up, &grid, &mut rng, || eaten += 1).unwrap();

        assert_eq!(eaten, 1);
        assert_eq!(next.snake().head, IVec2::new(20, 19));
        assert_eq!(next.snake().body, vec![IVec2::new(0, 1), IVec2::new(0, 1)]);
        assert_eq!(next.score(), 100);
        assert_eq!(next.eggs().len(), 1);

        let egg = next.eggs()[0];
        assert_ne!(egg, IVec2::new(20, 19));
        assert!(!next.snake().whole_snake().contains(&egg));
        assert!(grid.contains(egg));
    }

    #[test]
    fn test_plain_move() {
        let grid = Grid::new(40, 40);
        let start = world((20, 20), &[(0, 1), (0, 1)], &[(1, 1), (2, 2)], 300);
        let mut rng = Pcg32::seed_from_u64(5);
        let mut eaten = false;

        let next = next_world(&start, Direction::Left, &grid, &mut rng, || eaten = true).unwrap();

        assert!(!eaten);
        assert_eq!(next.snake().head, IVec2::new(19, 20));
        assert_eq!(next.snake().body, vec![IVec2::new(1, 0), IVec2::new(0, 1)]);
        assert_eq!(next.eggs(), start.eggs());
        assert_eq!(next.score(), 300);
        // Previous snapshot still intact
        assert_eq!(start.snake().head, IVec2::new(20, 20));
    }

    #[test]
    fn test_last_matching_egg_wins() {
        let cell = IVec2::new(4, 4);
        assert_eq!(egg_at(&[cell, IVec2::new(1, 1), cell], cell), Some(2));
        assert_eq!(egg_at(&[IVec2::new(1, 1)], cell), None);

        let grid = Grid::new(40, 40);
        let start = world((4, 5), &[(0, 1)], &[(4, 4), (9, 9), (4, 4)], 0);
        let mut rng = Pcg32::seed_from_u64(8);
        let next = next_world(&start, Direction::Up, &grid, &mut rng, || {}).unwrap();

        assert_eq!(next.eggs()[0], IVec2::new(4, 4));
        assert_eq!(next.eggs()[1], IVec2::new(9, 9));
        assert_ne!(next.eggs()[2], IVec2::new(4, 4));
    }

    #[test]
    fn test_wall_hit_terminates() {
        let grid = Grid::new(10, 10);
        let mut rng = Pcg32::seed_from_u64(1);

        let right = world((9, 5), &[(-1, 0)], &[(0, 0)], 200);
        let outcome = tick(&right, Direction::Right, &grid, &mut rng, || {}).unwrap();
        assert!(outcome.is_terminated());
        assert!(outcome.world().snake().is_colliding_with_wall(&grid));
        assert_eq!(outcome.world().score(), 200);

        let left = world((0, 5), &[(1, 0)], &[(9, 9)], 0);
        let outcome = tick(&left, Direction::Left, &grid, &mut rng, || {}).unwrap();
        assert!(outcome.is_terminated());

        let inside = tick(&left, Direction::Up, &grid, &mut rng, || {}).unwrap();
        assert!(matches!(inside, TickOutcome::Continue(_)));
    }

    #[test]
    fn test_self_bite_terminates() {
        let grid = Grid::new(10, 10);
        let mut rng = Pcg32::seed_from_u64(1);
        let coiled = world((5, 5), &[(0, 1), (1, 0), (0, -1), (0, -1)], &[(0, 0)], 0);
        // Moving right lands on (6,5), still occupied by the fourth joint
        let outcome = tick(&coiled, Direction::Right, &grid, &mut rng, || {}).unwrap();
        assert!(outcome.is_terminated());
        assert!(outcome.into_world().snake().is_self_colliding());
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_tick_accounting(
            seed in any::<u64>(),
            steps in prop::collection::vec(direction(), 1..120),
        ) {
            let grid = Grid::new(12, 12);
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut world = init_world(&grid, &mut rng).unwrap();
            let initial_body = world.snake().body.len();
            let initial_eggs = world.eggs().len();
            let mut eaten_total = 0;

            for step in steps {
                let mut eaten = false;
                let next = next_world(&world, step, &grid, &mut rng, || eaten = true).unwrap();

                prop_assert_eq!(next.eggs().len(), initial_eggs);
                prop_assert!(next.score() >= world.score());
                if eaten {
                    eaten_total += 1;
                    prop_assert_eq!(next.score(), world.score() + SCORE_PER_EGG);
                    prop_assert_eq!(next.snake().body.len(), world.snake().body.len() + 1);

                    // The fresh egg avoids every egg and joint present at spawn time
                    let slot = egg_at(world.eggs(), next.snake().head).unwrap();
                    let fresh = next.eggs()[slot];
                    prop_assert!(!world.eggs().contains(&fresh));
                    prop_assert!(!world.snake().whole_snake().contains(&fresh));
                } else {
                    prop_assert_eq!(next.score(), world.score());
                    prop_assert_eq!(next.snake().body.len(), world.snake().body.len());
                    prop_assert_eq!(next.eggs(), world.eggs());
                }
                prop_assert_eq!(next.snake().body.len(), initial_body + eaten_total);
                world = next;
            }
        }
    }
}
