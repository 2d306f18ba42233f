// In: src/error.rs

//! This module defines the single, unified error type for the entire huffpack library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffError {
    // =========================================================================
    // === Stream Format Errors (Detected before any output is produced)
    // =========================================================================
    /// The leading 32-bit magic field does not identify a huffpack stream.
    #[error("bad magic number: expected {expected:#010x}, found {found:#010x}")]
    BadMagic { expected: u32, found: u32 },

    /// End of input while reading the serialized tree header.
    #[error("truncated header: {0}")]
    TruncatedHeader(String),

    /// The header decoded, but not into a usable Huffman tree.
    #[error("malformed tree: {0}")]
    MalformedTree(String),

    // =========================================================================
    // === Data Section Errors
    // =========================================================================
    /// End of input while descending the tree, before the pseudo-EOF leaf was
    /// reached. Any output produced so far is discarded.
    #[error("truncated data: input ended before the pseudo-EOF marker")]
    TruncatedData,

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem, only reachable
    /// through the `compress_stream` / `decompress_stream` entry points.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
