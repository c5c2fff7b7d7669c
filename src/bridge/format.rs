// In: src/bridge/format.rs

//! Defines the compressed stream layout and the result structs of a codec run.
//!
//! Stream layout (no magic number, no version field, no checksum):
//!
//! ```text
//! byte 0      padding count p, 1..=8
//! byte 1..    LSB-first packed bits of: p zero bits ++ tree topology ++ payload
//! ```

use serde::Serialize;

use crate::kernels::bitpack::BITS_IN_BYTE;

/// Size of the padding header in bytes.
pub const PADDING_HEADER_SIZE: usize = 1;

/// Bits a single leaf occupies in the topology: the leaf flag plus one symbol byte.
pub const LEAF_TOPOLOGY_BITS: usize = 1 + BITS_IN_BYTE;

/// Smallest possible stream: the header plus a two-leaf topology (19 bits) padded out.
pub const MIN_STREAM_SIZE: usize = PADDING_HEADER_SIZE + 3;

/// Rounds a bit count up to whole bytes.
pub fn bytes_for_bits(bits: usize) -> usize {
    bits.div_ceil(BITS_IN_BYTE)
}

/// The three counters reported after every run.
///
/// For an encode run: `initial_size` is the input length, `processed_size` the
/// payload size in bytes and `aux_size` everything else in the stream (header,
/// padding and topology). A decode run swaps the first two so that
/// `encode.initial_size == decode.processed_size` and vice versa; `aux_size`
/// matches on both sides.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    pub initial_size: usize,
    pub processed_size: usize,
    pub aux_size: usize,
}

/// Output bytes of a codec run together with its counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOutput {
    pub bytes: Vec<u8>,
    pub stats: RunStats,
}

/// The result of inspecting a compressed stream without decoding its payload.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamInfo {
    pub padding_bits: usize,
    pub topology_bits: usize,
    pub payload_bits: usize,
    pub leaf_count: usize,
    /// Total stream length in bytes.
    pub total_size: usize,
    /// Payload bits rounded up to bytes.
    pub payload_size: usize,
    /// `total_size - payload_size`.
    pub aux_size: usize,
}
