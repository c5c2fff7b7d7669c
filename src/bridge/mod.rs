// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the public codec API of huffpack. It owns the stream framing and
// orchestrates the pure `kernels` and `tree` modules. It never touches files; the
// `runner` feeds it in-memory buffers.
//
// Data Flow (Encode):
//
//   1. [EncodingTree::new]     -> frequencies, priority-queue merge, code table
//   2. [topology ++ payload]   -> one bit sequence
//   3. [pack_with_padding]     -> `[p][packed bits]`, returned with RunStats
//
// Data Flow (Decode):
//
//   1. [unpack_with_padding]   -> bit sequence without header and padding
//   2. [DecodingTree::new]     -> tree + cursor on the first payload bit
//   3. [decode_symbol loop]    -> original bytes, returned with RunStats
//
// ====================================================================================
pub mod format;
pub mod stateless_api;

pub use format::{CodecOutput, RunStats, StreamInfo};
pub use stateless_api::{analyze_stream, decode, encode};

#[cfg(test)]
mod tests;
