//! This file is the root of the `huffpack` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`codec`, `kernels`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the small public surface: the compress/decompress entry
//!     points and the unified error type.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of bits in one input symbol (one byte).
pub const BITS_PER_WORD: u32 = 8;

/// Number of distinct byte values.
pub const ALPH_SIZE: usize = 1 << BITS_PER_WORD;

/// The reserved pseudo-EOF symbol. It never occurs in real input; its code is
/// written once at the very end of the data section so the decoder needs no
/// explicit length field.
pub const EOF_SYMBOL: u16 = ALPH_SIZE as u16;

/// Total number of symbols a tree can carry: 256 byte values plus pseudo-EOF.
pub const NUM_SYMBOLS: usize = ALPH_SIZE + 1;

/// Width of the symbol field inside the serialized tree header. Nine bits are
/// enough for values 0..=256.
pub const BITS_PER_SYMBOL: u32 = BITS_PER_WORD + 1;

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bitio;
pub mod codec;
pub mod kernels;
pub mod tree;

mod error;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use codec::{compress, compress_stream, decompress, decompress_stream, MAGIC};
pub use error::HuffError;
