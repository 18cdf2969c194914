use super::game_state::GameState;
use super::types::{Cell, FieldSize};

/// Engine-owned serialization buffer the host reads directly.
///
/// One byte per cell, row-major. Allocated once per game so its address
/// is stable: mutating calls rewrite the contents in place and only a new
/// game replaces the allocation. A host must therefore re-fetch the
/// descriptor after starting a new game and never cache it across one.
pub struct DisplayFrame {
    cells: Vec<u8>,
    width: usize,
}

impl DisplayFrame {
    pub fn new(field_size: &FieldSize) -> Self {
        Self {
            cells: vec![Cell::Empty.code(); field_size.area()],
            width: field_size.width,
        }
    }

    /// Rewrites the buffer from the current game state.
    pub fn update(&mut self, state: &GameState) {
        self.cells.fill(Cell::Empty.code());

        for segment in state.snake().body.iter().skip(1) {
            self.cells[segment.y * self.width + segment.x] = Cell::Filled.code();
        }

        let head = state.snake().head();
        self.cells[head.y * self.width + head.x] = Cell::Head.code();

        if let Some(food) = state.food() {
            self.cells[food.y * self.width + food.x] = Cell::Food.code();
        }
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}
