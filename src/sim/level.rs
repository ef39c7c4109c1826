//! Level pacing and the autostep timer
//!
//! Progress grows with elapsed seconds and eaten eggs. Every
//! `PROGRESS_PER_LEVEL` points is a level, and the level picks how often the
//! snake steps on its own.

use serde::{Deserialize, Serialize};

use crate::consts::{
    FRAME_MS, PROGRESS_PER_EGG, PROGRESS_PER_LEVEL, PROGRESS_PER_SECOND, SPEED_LEVELS, START_LEVEL,
};

/// Inputs to the level controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelEvent {
    /// One second of play elapsed
    Second,
    /// The snake ate an egg
    AteEgg,
}

impl LevelEvent {
    fn progress(self) -> u32 {
        match self {
            LevelEvent::Second => PROGRESS_PER_SECOND,
            LevelEvent::AteEgg => PROGRESS_PER_EGG,
        }
    }
}

/// Autostep interval (ms) for a level, clamped to the table
pub fn speed_for_level(level: u32) -> u32 {
    let index = (level.saturating_sub(1) as usize).min(SPEED_LEVELS.len() - 1);
    SPEED_LEVELS[index]
}

/// Tracks progress points and reports level changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelController {
    progress: u32,
    level: u32,
}

impl Default for LevelController {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelController {
    pub fn new() -> Self {
        Self {
            progress: 0,
            level: START_LEVEL,
        }
    }

    /// Feed an event. Returns the new level only when it changed.
    pub fn apply(&mut self, event: LevelEvent) -> Option<u32> {
        self.progress = self.progress.saturating_add(event.progress());
        let level = START_LEVEL + self.progress / PROGRESS_PER_LEVEL;
        if level == self.level {
            return None;
        }
        self.level = level;
        Some(level)
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current autostep interval (ms)
    pub fn speed_ms(&self) -> u32 {
        speed_for_level(self.level)
    }
}

/// Frame-counted autostep timer.
///
/// The countdown is never restarted by a speed change; a new interval only
/// applies to the comparison on the following frames.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Autostep {
    count_ms: u32,
}

impl Autostep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame. Returns true when a step is due.
    pub fn on_frame(&mut self, speed_ms: u32) -> bool {
        if self.count_ms >= speed_ms {
            self.count_ms = 0;
            true
        } else {
            self.count_ms += FRAME_MS;
            false
        }
    }
}

/// Turns the frame clock into whole seconds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondSampler {
    elapsed_ms: u32,
}

impl SecondSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame. Returns true each time a full second has passed.
    pub fn on_frame(&mut self) -> bool {
        self.elapsed_ms += FRAME_MS;
        if self.elapsed_ms >= 1000 {
            self.elapsed_ms -= 1000;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_table_clamped() {
        assert_eq!(speed_for_level(0), 500);
        assert_eq!(speed_for_level(1), 500);
        assert_eq!(speed_for_level(2), 400);
        assert_eq!(speed_for_level(10), 50);
        assert_eq!(speed_for_level(11), 50);
        assert_eq!(speed_for_level(u32::MAX), 50);
    }

    #[test]
    fn test_level_after_sixty_seconds() {
        let mut levels = LevelController::new();
        let mut changes = Vec::new();
        for _ in 0..60 {
            if let Some(level) = levels.apply(LevelEvent::Second) {
                changes.push(level);
            }
        }
        assert_eq!(levels.level(), 2);
        assert_eq!(changes, vec![2]);
        assert_eq!(levels.speed_ms(), 400);
    }

    #[test]
    fn test_egg_counts_as_twenty_seconds() {
        let mut levels = LevelController::new();
        assert_eq!(levels.apply(LevelEvent::AteEgg), None);
        assert_eq!(levels.progress(), 20);
        assert_eq!(levels.apply(LevelEvent::AteEgg), None);
        assert_eq!(levels.apply(LevelEvent::AteEgg), Some(2));
        assert_eq!(levels.progress(), 60);

        let mut mixed = LevelController::new();
        mixed.apply(LevelEvent::AteEgg);
        for _ in 0..39 {
            assert_eq!(mixed.apply(LevelEvent::Second), None);
        }
        assert_eq!(mixed.apply(LevelEvent::Second), Some(2));
    }

    #[test]
    fn test_level_changes_not_repeated() {
        let mut levels = LevelController::new();
        let changes: Vec<_> = (0..300)
            .filter_map(|_| levels.apply(LevelEvent::Second))
            .collect();
        assert_eq!(changes, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_autostep_period() {
        // 100ms interval: counts 0,20,..,100 then fires on the sixth frame
        let mut autostep = Autostep::new();
        let fired: Vec<bool> = (0..12).map(|_| autostep.on_frame(100)).collect();
        assert_eq!(
            fired,
            vec![false, false, false, false, false, true, false, false, false, false, false, true]
        );
    }

    #[test]
    fn test_autostep_speed_change_keeps_countdown() {
        let mut autostep = Autostep::new();
        for _ in 0..4 {
            assert!(!autostep.on_frame(500));
        }
        // 80ms accumulated; a faster interval fires once the count reaches it
        assert!(!autostep.on_frame(100));
        assert!(autostep.on_frame(100));
    }

    #[test]
    fn test_second_sampler() {
        let mut sampler = SecondSampler::new();
        let frames_per_second = 1000 / FRAME_MS;
        let seconds = (0..frames_per_second * 3)
            .filter(|_| sampler.on_frame())
            .count();
        assert_eq!(seconds, 3);
    }
}
