mod display;
mod game_state;
mod rng;
mod settings;
mod snake;
mod types;

pub use display::DisplayFrame;
pub use game_state::GameState;
pub use rng::GameRng;
pub use settings::GameSettings;
pub use snake::Snake;
pub use types::{Cell, Direction, EndReason, FieldSize, Point, StepStatus};
