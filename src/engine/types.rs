#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Movement direction. Wire codes match the host's key mapping:
/// Up=0, Down=1, Left=2, Right=3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn from_code(code: u32) -> Option<Direction> {
        match code {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    /// Unit step in grid coordinates, y growing downward.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Cell classification as serialized for the host, one byte per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Cell {
    Empty = 0,
    Filled = 1,
    Food = 2,
    Head = 3,
}

impl Cell {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: usize,
    pub height: usize,
}

impl FieldSize {
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.x < self.width && point.y < self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
}

/// Result of a single step, as reported across the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Alive,
    Ended,
}

impl StepStatus {
    pub fn code(self) -> u64 {
        match self {
            StepStatus::Alive => 0,
            StepStatus::Ended => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_codes_match_host_mapping() {
        assert_eq!(Direction::from_code(0), Some(Direction::Up));
        assert_eq!(Direction::from_code(1), Some(Direction::Down));
        assert_eq!(Direction::from_code(2), Some(Direction::Left));
        assert_eq!(Direction::from_code(3), Some(Direction::Right));
        assert_eq!(Direction::from_code(4), None);
    }

    #[test]
    fn test_is_opposite() {
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Right.is_opposite(&Direction::Right));
    }

    #[test]
    fn test_cell_codes() {
        assert_eq!(Cell::Empty.code(), 0);
        assert_eq!(Cell::Filled.code(), 1);
        assert_eq!(Cell::Food.code(), 2);
        assert_eq!(Cell::Head.code(), 3);
    }
}
