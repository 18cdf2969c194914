use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub body_set: HashSet<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
}

impl Snake {
    /// Builds a snake with the head at `head` and `length - 1` segments
    /// trailing opposite the heading. The caller guarantees the whole body
    /// fits on the field.
    pub fn new(head: Point, direction: Direction, length: usize) -> Self {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();

        let (dx, dy) = direction.offset();
        for i in 0..length as i32 {
            let segment = Point::new(
                (head.x as i32 - dx * i) as usize,
                (head.y as i32 - dy * i) as usize,
            );
            body.push_back(segment);
            body_set.insert(segment);
        }

        Self {
            body,
            body_set,
            direction,
            pending_direction: None,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }
}
