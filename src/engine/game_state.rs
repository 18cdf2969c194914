use crate::config::Validate;
use crate::log;

use super::rng::GameRng;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{Direction, EndReason, FieldSize, Point, StepStatus};

const START_DIRECTION: Direction = Direction::Right;

/// One live game. The host owns exactly one of these at a time and drives
/// it one call at a time; a new game replaces the whole state.
pub struct GameState {
    snake: Snake,
    food: Option<Point>,
    field_size: FieldSize,
    end_reason: Option<EndReason>,
}

impl GameState {
    /// Construction is the only place dimensions are checked; everything
    /// after assumes a valid field.
    pub fn new(settings: &GameSettings, rng: &mut GameRng) -> Result<Self, String> {
        settings.validate()?;

        let field_size = FieldSize {
            width: settings.field_width,
            height: settings.field_height,
        };
        let head = Point::new(field_size.width / 2, field_size.height / 2);
        // The body trails left of the head, so it must fit between the
        // head and the left edge on narrow fields.
        let length = settings.initial_snake_length.min(head.x + 1);
        let snake = Snake::new(head, START_DIRECTION, length);
        let food = Self::place_food(&snake, &field_size, rng);

        log!(
            "Game started: {}x{} field, snake length {}",
            field_size.width,
            field_size.height,
            snake.len()
        );

        Ok(Self {
            snake,
            food,
            field_size,
            end_reason: None,
        })
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn field_size(&self) -> &FieldSize {
        &self.field_size
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn ended(&self) -> bool {
        self.end_reason.is_some()
    }

    /// Stores the direction for the next step. Reversing into the second
    /// segment is silently ignored while the snake is longer than one cell.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.ended() {
            return;
        }
        if self.snake.len() > 1 && direction.is_opposite(&self.snake.direction) {
            return;
        }
        self.snake.pending_direction = Some(direction);
    }

    /// Advances the game by one cell in the effective direction.
    pub fn advance(&mut self, rng: &mut GameRng) -> StepStatus {
        if self.ended() {
            return StepStatus::Ended;
        }

        if let Some(direction) = self.snake.pending_direction.take() {
            self.snake.direction = direction;
        }

        let next_head = match self.next_head_position() {
            Ok(point) => point,
            Err(reason) => {
                self.end_reason = Some(reason);
                log!("Game over: {:?}", reason);
                return StepStatus::Ended;
            }
        };

        self.snake.body.push_front(next_head);
        self.snake.body_set.insert(next_head);

        if self.food == Some(next_head) {
            log!(
                "Ate food at ({}, {}). Length: {}",
                next_head.x,
                next_head.y,
                self.snake.len()
            );
            self.food = Self::place_food(&self.snake, &self.field_size, rng);
        } else {
            let tail = self
                .snake
                .body
                .pop_back()
                .expect("Snake body should never be empty");
            // When the head moves into the vacating tail cell the cell
            // stays occupied, so it must stay in the occupancy set.
            if tail != next_head {
                self.snake.body_set.remove(&tail);
            }
        }

        StepStatus::Alive
    }

    /// `request_direction` followed by `advance`, the host's `move` call.
    pub fn apply_move(&mut self, direction: Direction, rng: &mut GameRng) -> StepStatus {
        self.request_direction(direction);
        self.advance(rng)
    }

    /// Forced idle tick: advance along the held direction.
    pub fn keep_move(&mut self, rng: &mut GameRng) -> StepStatus {
        self.advance(rng)
    }

    fn next_head_position(&self) -> Result<Point, EndReason> {
        let head = self.snake.head();

        let next_head = match self.snake.direction {
            Direction::Up => {
                if head.y == 0 {
                    return Err(EndReason::WallCollision);
                }
                Point::new(head.x, head.y - 1)
            }
            Direction::Down => {
                if head.y >= self.field_size.height - 1 {
                    return Err(EndReason::WallCollision);
                }
                Point::new(head.x, head.y + 1)
            }
            Direction::Left => {
                if head.x == 0 {
                    return Err(EndReason::WallCollision);
                }
                Point::new(head.x - 1, head.y)
            }
            Direction::Right => {
                if head.x >= self.field_size.width - 1 {
                    return Err(EndReason::WallCollision);
                }
                Point::new(head.x + 1, head.y)
            }
        };

        // The tail cell vacates this step (food is never on the body, so a
        // body hit means no growth), making it a legal target.
        if self.snake.occupies(&next_head) && next_head != self.snake.tail() {
            return Err(EndReason::SelfCollision);
        }

        Ok(next_head)
    }

    fn place_food(snake: &Snake, field_size: &FieldSize, rng: &mut GameRng) -> Option<Point> {
        let mut empty_cells = Vec::new();
        for y in 0..field_size.height {
            for x in 0..field_size.width {
                let point = Point::new(x, y);
                if !snake.occupies(&point) {
                    empty_cells.push(point);
                }
            }
        }

        if empty_cells.is_empty() {
            log!("Field is full, no food placed");
            return None;
        }

        let food = empty_cells[rng.random_range(0..empty_cells.len())];
        log!("Food spawned at ({}, {})", food.x, food.y);
        Some(food)
    }
}
