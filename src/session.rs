//! One play-through
//!
//! Manual key steps and autosteps from the frame clock are merged into a
//! single ordered stream of ticks. The session owns the only writable copy
//! of the current world.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::input::{InputDebouncer, Key};
use crate::sim::{
    Autostep, Direction, Grid, LevelController, LevelEvent, SecondSampler, SimError, World,
    init_world, tick,
};

/// Things that happened during a key press or frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The player picked a direction for the first time
    FirstMove,
    EggEaten { score: u64 },
    LevelChanged { level: u32, speed_ms: u32 },
    /// The run ended. Carries the world at the moment of death.
    GameOver { world: World, level: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Running,
    Over,
    Stopped,
}

pub struct Session {
    grid: Grid,
    world: World,
    rng: Pcg32,
    debouncer: InputDebouncer,
    levels: LevelController,
    autostep: Autostep,
    seconds: SecondSampler,
    status: Status,
    ticks: u64,
}

impl Session {
    pub fn new(grid: Grid, seed: u64) -> Result<Self, SimError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let world = init_world(&grid, &mut rng)?;
        log::info!(
            "session started on {}x{} board (seed {})",
            grid.width,
            grid.height,
            seed
        );

        Ok(Self::resume(grid, world, rng))
    }

    /// Continue from a saved world snapshot at level 1
    pub fn from_world(grid: Grid, world: World, seed: u64) -> Self {
        Self::resume(grid, world, Pcg32::seed_from_u64(seed))
    }

    fn resume(grid: Grid, world: World, rng: Pcg32) -> Self {
        Self {
            grid,
            world,
            rng,
            debouncer: InputDebouncer::new(),
            levels: LevelController::new(),
            autostep: Autostep::new(),
            seconds: SecondSampler::new(),
            status: Status::Running,
            ticks: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn level(&self) -> u32 {
        self.levels.level()
    }

    pub fn speed_ms(&self) -> u32 {
        self.levels.speed_ms()
    }

    /// Level progress points (seconds plus egg bonuses)
    pub fn progress(&self) -> u32 {
        self.levels.progress()
    }

    /// Ticks processed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::Over
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// Tear the session down. Later keys and frames are ignored.
    pub fn stop(&mut self) {
        if self.status == Status::Running {
            log::debug!("session stopped after {} ticks", self.ticks);
        }
        self.status = Status::Stopped;
    }

    /// Handle a key press. An accepted direction steps the snake at once.
    pub fn press(&mut self, key: Key) -> Result<Vec<SessionEvent>, SimError> {
        let mut events = Vec::new();
        if !self.is_running() {
            return Ok(events);
        }

        let Some(direction) = key.direction() else {
            return Ok(events);
        };
        let first = self.debouncer.last().is_none();
        let Some(direction) = self.debouncer.accept(direction) else {
            return Ok(events);
        };
        if first {
            events.push(SessionEvent::FirstMove);
        }

        self.step(direction, &mut events)?;
        Ok(events)
    }

    /// Advance the clock by one fixed frame
    pub fn frame(&mut self) -> Result<Vec<SessionEvent>, SimError> {
        let mut events = Vec::new();
        if !self.is_running() {
            return Ok(events);
        }

        if self.seconds.on_frame() {
            self.feed_level(LevelEvent::Second, &mut events);
        }

        let due = self.autostep.on_frame(self.levels.speed_ms());
        // Autosteps only start once the player has chosen a direction
        if let (true, Some(direction)) = (due, self.debouncer.last()) {
            self.step(direction, &mut events)?;
        }

        Ok(events)
    }

    fn feed_level(&mut self, event: LevelEvent, events: &mut Vec<SessionEvent>) {
        if let Some(level) = self.levels.apply(event) {
            let speed_ms = self.levels.speed_ms();
            log::info!("level {} (step every {}ms)", level, speed_ms);
            events.push(SessionEvent::LevelChanged { level, speed_ms });
        }
    }

    fn step(
        &mut self,
        direction: Direction,
        events: &mut Vec<SessionEvent>,
    ) -> Result<(), SimError> {
        let mut ate = false;
        let outcome = tick(&self.world, direction, &self.grid, &mut self.rng, || {
            ate = true
        })?;
        self.ticks += 1;

        let terminated = outcome.is_terminated();
        self.world = outcome.into_world();

        if ate {
            events.push(SessionEvent::EggEaten {
                score: self.world.score(),
            });
            self.feed_level(LevelEvent::AteEgg, events);
        }

        if terminated {
            self.status = Status::Over;
            log::info!(
                "game over: score {} at level {} after {} ticks",
                self.world.score(),
                self.levels.level(),
                self.ticks
            );
            events.push(SessionEvent::GameOver {
                world: self.world.clone(),
                level: self.levels.level(),
            });
        }

        Ok(())
    }
}
