//! This file is the root of the `huffpack` Rust crate.
//!
//! huffpack is a lossless byte-stream codec built on Huffman coding. A compressed
//! stream carries its own tree, so it can be decoded with nothing but this library.
//!
//! ```
//! let packed = huffpack::encode(b"aabac");
//! let restored = huffpack::decode(&packed.bytes)?;
//! assert_eq!(restored.bytes, b"aabac");
//! assert_eq!(restored.stats.aux_size, packed.stats.aux_size);
//! # Ok::<(), huffpack::HuffpackError>(())
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod error;
pub mod kernels;
pub mod runner;
pub mod tree;

#[doc(hidden)]
pub use log as __log;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use bridge::{analyze_stream, decode, encode, CodecOutput, RunStats, StreamInfo};
pub use config::{Action, ReportFormat, RunConfig, RunConfigBuilder};
pub use error::HuffpackError;
pub use runner::Runner;
pub use tree::{DecodingTree, EncodingTree, HuffNode, HuffmanTree};
