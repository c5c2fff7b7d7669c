// In: src/bridge/stateless_api.rs

use crate::bridge::format::{bytes_for_bits, CodecOutput, RunStats, StreamInfo};
use crate::error::HuffpackError;
use crate::kernels::bitpack::{pack_with_padding, unpack_with_padding, BITS_IN_BYTE};
use crate::tree::{DecodingTree, EncodingTree};

/// Compresses a whole byte buffer into a self-describing stream.
///
/// Builds the tree for `bytes`, writes its topology followed by the code of every
/// input byte, and packs the result with the padding header. Never fails.
pub fn encode(bytes: &[u8]) -> CodecOutput {
    // 1. Build the tree over the full input.
    let tree = EncodingTree::new(bytes);

    // 2. Topology first, payload directly behind it.
    let payload = tree.encode_payload(bytes);
    let mut stream_bits = tree.topology();
    let topology_bits = stream_bits.len();
    stream_bits.extend_from_bitslice(&payload);

    // 3. Frame it.
    let packed = pack_with_padding(&stream_bits);

    let processed_size = bytes_for_bits(payload.len());
    let stats = RunStats {
        initial_size: bytes.len(),
        processed_size,
        aux_size: packed.len() - processed_size,
    };

    log_metric!(
        "event" = "encode",
        "leaves" = tree.codes().len(),
        "topology_bits" = topology_bits,
        "payload_bits" = payload.len(),
        "stream_bytes" = packed.len(),
    );

    CodecOutput {
        bytes: packed,
        stats,
    }
}

/// Decompresses a stream produced by [`encode`].
///
/// # Errors
/// Returns `CorruptStream` if the padding header, the topology or the payload is
/// malformed.
pub fn decode(stream: &[u8]) -> Result<CodecOutput, HuffpackError> {
    // 1. Strip the header and the padding bits.
    let bits = unpack_with_padding(stream)?;

    // 2. Rebuild the tree; the cursor now sits on the first payload bit.
    let mut decoder = DecodingTree::new(&bits)?;
    let topology_bits = decoder.position();
    let payload_size = bytes_for_bits(decoder.remaining());

    // 3. Decode until the bits run out.
    // Starting estimate of one output byte per payload byte; short codes grow it.
    let mut output = Vec::with_capacity(payload_size);
    while !decoder.is_eof() {
        output.push(decoder.decode_symbol()?);
    }

    let stats = RunStats {
        initial_size: payload_size,
        processed_size: output.len(),
        aux_size: stream.len() - payload_size,
    };

    log_metric!(
        "event" = "decode",
        "leaves" = decoder.tree().leaf_count(),
        "topology_bits" = topology_bits,
        "payload_bits" = bits.len() - topology_bits,
        "decoded_bytes" = output.len(),
    );

    Ok(CodecOutput {
        bytes: output,
        stats,
    })
}

/// Inspects a compressed stream's framing and tree without decoding the payload.
pub fn analyze_stream(stream: &[u8]) -> Result<StreamInfo, HuffpackError> {
    let bits = unpack_with_padding(stream)?;
    let decoder = DecodingTree::new(&bits)?;

    let packed_bits = (stream.len() - 1) * BITS_IN_BYTE;
    let payload_bits = decoder.remaining();
    let payload_size = bytes_for_bits(payload_bits);

    Ok(StreamInfo {
        padding_bits: packed_bits - bits.len(),
        topology_bits: decoder.position(),
        payload_bits,
        leaf_count: decoder.tree().leaf_count(),
        total_size: stream.len(),
        payload_size,
        aux_size: stream.len() - payload_size,
    })
}
