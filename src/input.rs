//! Keyboard input: key codes to game keys, and direction debouncing

use serde::{Deserialize, Serialize};

use crate::sim::Direction;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Arrow(Direction),
    Space,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` value
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowUp" => Key::Arrow(Direction::Up),
            "ArrowDown" => Key::Arrow(Direction::Down),
            "ArrowLeft" => Key::Arrow(Direction::Left),
            "ArrowRight" => Key::Arrow(Direction::Right),
            "Space" => Key::Space,
            _ => Key::Other,
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Arrow(direction) => Some(direction),
            _ => None,
        }
    }
}

/// Drops a direction that would reverse the last accepted one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputDebouncer {
    last: Option<Direction>,
}

impl InputDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, direction: Direction) -> Option<Direction> {
        if self.last.is_some_and(|last| last.is_opposite(direction)) {
            log::trace!("dropping reversed direction {:?}", direction);
            return None;
        }
        self.last = Some(direction);
        Some(direction)
    }

    /// Last accepted direction, `None` until the player first moves
    pub fn last(&self) -> Option<Direction> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_codes() {
        assert_eq!(Key::from_code("ArrowUp"), Key::Arrow(Direction::Up));
        assert_eq!(Key::from_code("ArrowDown"), Key::Arrow(Direction::Down));
        assert_eq!(Key::from_code("ArrowLeft"), Key::Arrow(Direction::Left));
        assert_eq!(Key::from_code("ArrowRight"), Key::Arrow(Direction::Right));
        assert_eq!(Key::from_code("Space"), Key::Space);
        assert_eq!(Key::from_code("KeyW"), Key::Other);
        assert_eq!(Key::from_code("Space").direction(), None);
    }

    #[test]
    fn test_reverse_dropped() {
        let mut debouncer = InputDebouncer::new();
        assert_eq!(debouncer.accept(Direction::Right), Some(Direction::Right));
        assert_eq!(debouncer.accept(Direction::Left), None);
        assert_eq!(debouncer.last(), Some(Direction::Right));
    }

    #[test]
    fn test_compared_against_last_accepted() {
        let mut debouncer = InputDebouncer::new();
        debouncer.accept(Direction::Up);
        assert_eq!(debouncer.accept(Direction::Down), None);
        // Still compared with Up, not with the dropped Down
        assert_eq!(debouncer.accept(Direction::Down), None);
        assert_eq!(debouncer.accept(Direction::Left), Some(Direction::Left));
        assert_eq!(debouncer.accept(Direction::Right), None);
    }

    #[test]
    fn test_repeat_accepted() {
        let mut debouncer = InputDebouncer::new();
        assert_eq!(debouncer.accept(Direction::Up), Some(Direction::Up));
        assert_eq!(debouncer.accept(Direction::Up), Some(Direction::Up));
    }

    #[test]
    fn test_first_direction_always_accepted() {
        for direction in Direction::ALL {
            let mut debouncer = InputDebouncer::new();
            assert_eq!(debouncer.last(), None);
            assert_eq!(debouncer.accept(direction), Some(direction));
        }
    }
}
