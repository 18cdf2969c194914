use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::engine::{Direction, DisplayFrame, GameRng, GameSettings, GameState};

use super::descriptor::FrameDescriptor;

struct EngineInstance {
    state: GameState,
    frame: DisplayFrame,
    rng: GameRng,
}

/// The single live game behind the exported entry points. The host is
/// single-threaded and drives one call at a time; the mutex only makes
/// that assumption explicit for native embedders and tests.
static INSTANCE: Mutex<Option<EngineInstance>> = Mutex::new(None);

// wasm32-unknown-unknown has no ambient entropy, so boundary games draw
// seeds from a fixed-increment sequence instead of the system RNG.
static NEXT_SEED: AtomicU64 = AtomicU64::new(0x5EED_0BAD_F00D);

fn next_seed() -> u64 {
    NEXT_SEED.fetch_add(0x9E37_79B9_7F4A_7C15, Ordering::Relaxed)
}

/// Starts a fresh game, replacing any previous one. Degenerate dimensions
/// are a caller bug and abort instead of leaving a corrupt game behind.
pub fn init(width: u32, height: u32) {
    let settings = GameSettings::new(width as usize, height as usize);
    let mut rng = GameRng::new(next_seed());
    let state = GameState::new(&settings, &mut rng)
        .expect("init called with invalid field dimensions");
    let frame = DisplayFrame::new(state.field_size());

    let mut instance = INSTANCE.lock().unwrap();
    *instance = Some(EngineInstance { state, frame, rng });
}

/// The host's `move(direction)`: request the direction, then step.
/// Unknown direction codes leave the heading unchanged.
pub fn snake_move(direction_code: u32) -> u64 {
    with_instance(|instance| match Direction::from_code(direction_code) {
        Some(direction) => instance.state.apply_move(direction, &mut instance.rng).code(),
        None => instance.state.advance(&mut instance.rng).code(),
    })
}

/// The host's idle-timeout tick: step along the held direction.
pub fn keep_move() -> u64 {
    with_instance(|instance| instance.state.keep_move(&mut instance.rng).code())
}

/// Serializes the field and returns the frame's location in memory. The
/// descriptor stays valid until the next `init`; mutating moves rewrite
/// the same buffer in place. The wasm export packs this into the scalar
/// form; native embedders use the structured pair as-is, since a 64-bit
/// heap address does not fit the packing.
pub fn frame_descriptor() -> FrameDescriptor {
    with_instance(|instance| {
        instance.frame.update(&instance.state);
        let cells = instance.frame.cells();
        FrameDescriptor::new(cells.as_ptr() as usize, cells.len())
    })
}

fn with_instance<T>(f: impl FnOnce(&mut EngineInstance) -> T) -> T {
    let mut instance = INSTANCE.lock().unwrap();
    let instance = instance.as_mut().expect("engine called before init");
    f(instance)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The exported surface shares one process-wide instance, so the whole
    // host flow lives in a single test to keep calls serialized.
    #[test]
    fn test_host_call_flow() {
        init(20, 10);

        let descriptor = frame_descriptor();
        assert_eq!(descriptor.len, 200);

        // Read the frame exactly as the host does: straight out of memory.
        let cells =
            unsafe { std::slice::from_raw_parts(descriptor.offset as *const u8, descriptor.len) };
        assert_eq!(cells.iter().filter(|&&c| c == 3).count(), 1);
        assert!(cells.iter().filter(|&&c| c == 2).count() <= 1);

        // Right, Down, Right: all in the open field.
        assert_eq!(snake_move(3), 0);
        assert_eq!(snake_move(1), 0);
        assert_eq!(snake_move(3), 0);
        assert_eq!(keep_move(), 0);

        // Unknown code still advances with the held direction.
        assert_eq!(snake_move(42), 0);

        // The descriptor is stable across moves within one game.
        assert_eq!(frame_descriptor(), descriptor);

        // A fresh game resets the frame size contract.
        init(4, 4);
        let descriptor = frame_descriptor();
        assert_eq!(descriptor.len, 16);

        // Run the tiny field into the right wall.
        let mut status = 0;
        for _ in 0..10 {
            status = snake_move(3);
            if status == 1 {
                break;
            }
        }
        assert_eq!(status, 1);
        assert_eq!(keep_move(), 1);

        init(20, 10);
        assert_eq!(keep_move(), 0);
    }
}
