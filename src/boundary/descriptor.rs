/// Packing base shared with the host. Frame lengths are capped well below
/// it by settings validation, so offset and length split losslessly.
pub const PTR_BASE: u64 = 100_000_000;

/// Location of the serialized frame inside linear memory.
///
/// The structured pair is the primary form; native embedders read it
/// directly. The wasm boundary has no multi-value returns, so there the
/// pair crosses packed into one `u64` and the host recovers it as
/// `offset = d / PTR_BASE`, `len = d - offset * PTR_BASE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameDescriptor {
    pub offset: usize,
    pub len: usize,
}

impl FrameDescriptor {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Scalar form for the wasm boundary. The encoding only covers 32-bit
    /// linear memory; offsets or lengths beyond it must stay in structured
    /// form, so packing them aborts instead of wrapping into a garbage
    /// descriptor.
    pub fn pack(&self) -> u64 {
        assert!(
            self.offset <= u32::MAX as usize,
            "offset exceeds 32-bit linear memory"
        );
        assert!(
            (self.len as u64) < PTR_BASE,
            "frame length exceeds packing base"
        );
        self.offset as u64 * PTR_BASE + self.len as u64
    }

    pub fn unpack(packed: u64) -> Self {
        let offset = packed / PTR_BASE;
        let len = packed - offset * PTR_BASE;
        Self {
            offset: offset as usize,
            len: len as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack_roundtrip() {
        let descriptor = FrameDescriptor::new(1_048_576, 200);
        assert_eq!(FrameDescriptor::unpack(descriptor.pack()), descriptor);
    }

    #[test]
    fn test_pack_matches_host_decode() {
        let packed = FrameDescriptor::new(4096, 200).pack();
        let offset = packed / PTR_BASE;
        let len = packed - offset * PTR_BASE;
        assert_eq!(offset, 4096);
        assert_eq!(len, 200);
    }

    #[test]
    fn test_zero_length_frame() {
        let descriptor = FrameDescriptor::new(4096, 0);
        assert_eq!(FrameDescriptor::unpack(descriptor.pack()), descriptor);
    }

    #[test]
    fn test_high_offset_survives_packing() {
        // Offsets anywhere in a 32-bit linear memory must fit.
        let descriptor = FrameDescriptor::new(u32::MAX as usize, 99_999_999);
        assert_eq!(FrameDescriptor::unpack(descriptor.pack()), descriptor);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    #[should_panic(expected = "offset exceeds 32-bit linear memory")]
    fn test_pack_rejects_native_heap_offset() {
        // A 64-bit heap address is representable as a descriptor but not
        // as the packed scalar.
        FrameDescriptor::new(1usize << 40, 200).pack();
    }

    #[test]
    #[should_panic(expected = "frame length exceeds packing base")]
    fn test_pack_rejects_oversized_frame() {
        FrameDescriptor::new(4096, PTR_BASE as usize).pack();
    }
}
