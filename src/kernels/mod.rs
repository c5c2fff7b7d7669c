//! This module collects the pure, stateless bit-level kernels used by the codec.
//!
//! Kernels never allocate trees or touch I/O; they only convert between bit
//! sequences (`bitvec::BitVec<u8, Lsb0>`) and byte buffers.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Bit/byte packing and the padded stream framing.
pub mod bitpack;

pub use bitpack::{bits_to_bytes, bytes_to_bits, pack_with_padding, unpack_with_padding};
