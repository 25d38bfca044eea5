use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EntityId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Pos {
        let (dy, dx) = direction.delta();
        Pos { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Floor,
    Chest,
    Stairs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Player,
    Monster,
}

/// The four movement commands. Monster wandering draws indices 0..4 in this
/// declaration order, so reordering variants changes seeded runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Unit `(dy, dx)` delta, y growing downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Victory,
    Defeat,
}

/// Result of one `move_player` resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Continues,
    Finished(RunOutcome),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_are_unit_steps() {
        for direction in Direction::ALL {
            let (dy, dx) = direction.delta();
            assert_eq!(dy.abs() + dx.abs(), 1);
        }
    }

    #[test]
    fn step_applies_delta() {
        let origin = Pos { y: 4, x: 7 };
        assert_eq!(origin.step(Direction::Up), Pos { y: 3, x: 7 });
        assert_eq!(origin.step(Direction::Right), Pos { y: 4, x: 8 });
        assert_eq!(origin.step(Direction::Down), Pos { y: 5, x: 7 });
        assert_eq!(origin.step(Direction::Left), Pos { y: 4, x: 6 });
    }
}
