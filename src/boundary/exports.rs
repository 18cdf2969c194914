//! The wasm module surface the host instantiates. Thin wrappers only;
//! the logic lives in `instance`.

use super::instance;

#[unsafe(no_mangle)]
pub extern "C" fn init(width: u32, height: u32) {
    instance::init(width, height);
}

// `move` is a keyword in Rust but is the name the host calls.
#[unsafe(export_name = "move")]
pub extern "C" fn snake_move(direction: u32) -> u64 {
    instance::snake_move(direction)
}

#[unsafe(export_name = "keepMove")]
pub extern "C" fn keep_move() -> u64 {
    instance::keep_move()
}

// Pointers fit 32 bits here, so the structured descriptor always packs.
#[unsafe(no_mangle)]
pub extern "C" fn display() -> u64 {
    instance::frame_descriptor().pack()
}
