//! Snake game core.
//!
//! The engine owns all game state (field, snake body, food, direction,
//! end-of-game condition) and is driven entirely by an external host:
//! a renderer/input layer that calls `init`, `move`, `keepMove` and
//! `display` and reads the serialized field straight out of the module's
//! linear memory. Everything host-side (rendering, key mapping, the
//! idle-timeout tick) stays outside this crate.

pub mod boundary;
pub mod config;
pub mod engine;
pub mod logger;

pub use boundary::{FrameDescriptor, PTR_BASE};
pub use engine::{
    Cell, Direction, DisplayFrame, EndReason, FieldSize, GameRng, GameSettings, GameState, Point,
    Snake, StepStatus,
};
