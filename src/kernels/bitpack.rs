//! This module contains the pure, stateless kernels that move between bit
//! sequences and byte-aligned storage.
//!
//! Bits are grouped LSB-first: the first bit of every group of eight becomes bit 0
//! of the output byte. The padded form used by the compressed stream prepends
//! between one and eight zero bits so the sequence becomes byte-aligned, and stores
//! that count in a leading header byte.

use bitvec::prelude::*;

use crate::error::HuffpackError;

/// Number of bits in one packed byte.
pub const BITS_IN_BYTE: usize = 8;

//==================================================================================
// 1. Core Logic (The "Engine")
//==================================================================================

/// Reads exactly eight bits, LSB-first, into a byte.
///
/// # Panics
/// Panics if `bits` is not exactly eight bits long.
pub fn load_byte(bits: &BitSlice<u8, Lsb0>) -> u8 {
    assert_eq!(bits.len(), BITS_IN_BYTE, "a byte is read from exactly 8 bits");
    let mut container = 0u8;
    for (i, bit) in bits.iter().by_vals().enumerate() {
        if bit {
            container |= 1 << i;
        }
    }
    container
}

/// Packs a byte-aligned bit sequence into bytes.
///
/// # Panics
/// Panics if the length of `bits` is not a multiple of eight. Callers inside this
/// crate always pad first, so an unaligned input is a bug.
pub fn bits_to_bytes(bits: &BitSlice<u8, Lsb0>) -> Vec<u8> {
    assert!(
        bits.len() % BITS_IN_BYTE == 0,
        "bit sequence of length {} is not byte-aligned",
        bits.len()
    );
    bits.chunks_exact(BITS_IN_BYTE).map(load_byte).collect()
}

/// Expands every byte into eight bits, LSB-first.
pub fn bytes_to_bits(bytes: &[u8]) -> BitVec<u8, Lsb0> {
    BitVec::from_slice(bytes)
}

//==================================================================================
// 2. Public API (Padded Framing)
//==================================================================================

/// The number of zero bits `pack_with_padding` prepends to `bit_len` bits.
/// Always in `1..=8`: an already aligned sequence still gets a full byte.
pub fn padding_for(bit_len: usize) -> usize {
    BITS_IN_BYTE - bit_len % BITS_IN_BYTE
}

/// Frames an arbitrary bit sequence as `[padding][bytes of (padding zeros ++ bits)]`.
pub fn pack_with_padding(bits: &BitSlice<u8, Lsb0>) -> Vec<u8> {
    let padding = padding_for(bits.len());

    let mut padded = BitVec::<u8, Lsb0>::with_capacity(padding + bits.len());
    padded.resize(padding, false);
    padded.extend_from_bitslice(bits);

    let mut output_buf = Vec::with_capacity(1 + padded.len() / BITS_IN_BYTE);
    output_buf.push(padding as u8);
    output_buf.extend(bits_to_bytes(&padded));
    output_buf
}

/// Inverts `pack_with_padding`.
///
/// # Errors
/// Returns `CorruptStream` if the buffer is empty, the header byte is outside `1..=8`,
/// or the padding is longer than the packed bits.
pub fn unpack_with_padding(bytes: &[u8]) -> Result<BitVec<u8, Lsb0>, HuffpackError> {
    let (&padding, packed) = bytes.split_first().ok_or_else(|| {
        HuffpackError::CorruptStream("stream is empty, missing padding header".to_string())
    })?;
    let padding = padding as usize;

    if !(1..=BITS_IN_BYTE).contains(&padding) {
        return Err(HuffpackError::CorruptStream(format!(
            "padding header must be in 1..=8, got {}",
            padding
        )));
    }

    let mut bits = bytes_to_bits(packed);
    if padding > bits.len() {
        return Err(HuffpackError::CorruptStream(format!(
            "padding of {} bits exceeds the {} packed bits",
            padding,
            bits.len()
        )));
    }

    Ok(bits.split_off(padding))
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
