// In: src/error.rs

//! This module defines the single, unified error type for the entire huffpack library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Malformed bit sequences handed to the packing kernels by our own code are not
//! represented here: they are contract violations and panic.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffpackError {
    // =========================================================================
    // === Configuration Errors (detected before any codec work begins)
    // =========================================================================
    #[error("No input file specified. Use -f <path> or --file <path> to set.")]
    NoInput,

    #[error("No output file specified. Use -o <path> or --output <path> to set.")]
    NoOutput,

    #[error("No action specified. Use -c to compress or -u to uncompress.")]
    NoAction,

    #[error("Multiple actions specified. Only one of -c or -u should be used.")]
    MultipleActions,

    #[error(
        "Multiple input files specified. Only one of -f <path> or --file <path> should be used."
    )]
    MultipleInputs,

    #[error(
        "Multiple output files specified. Only one of -o <path> or --output <path> should be used."
    )]
    MultipleOutputs,

    // =========================================================================
    // === Boundary I/O Errors
    // =========================================================================
    #[error(
        "Error opening input file '{}'. Check that the path is valid and the file exists.",
        path.display()
    )]
    InputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating output file '{}'. Check that the path is valid.", path.display())]
    OutputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An error from the report sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, raised while writing a JSON report.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    // =========================================================================
    // === Stream Errors
    // =========================================================================
    #[error("Corrupt compressed stream: {0}")]
    CorruptStream(String),
}
