mod descriptor;
#[cfg(target_arch = "wasm32")]
mod exports;
mod instance;

pub use descriptor::{FrameDescriptor, PTR_BASE};
pub use instance::{frame_descriptor, init, keep_move, snake_move};
