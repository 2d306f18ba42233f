//! This module strings the kernels together into the public compress and
//! decompress entry points, and owns the two bit-level state machines: the
//! encoder that emits per-symbol codes and the decoder that walks the tree
//! bit-by-bit.
//!
//! Stream layout, most-significant-bit first throughout:
//!
//! | field       | width            | contents                                  |
//! |-------------|------------------|-------------------------------------------|
//! | magic       | 32 bits          | [`MAGIC`]                                  |
//! | tree header | self-delimiting  | preorder tree encoding (`kernels::header`) |
//! | data        | self-delimiting  | per-symbol codes, pseudo-EOF code last     |
//!
//! The data section carries no length field; decoding ends when the walk
//! lands on the pseudo-EOF leaf.

use std::io::{Read, Write};

use crate::bitio::{BitReader, BitWriter};
use crate::error::HuffError;
use crate::kernels::{codebook, freq, header};
use crate::tree::{HuffTree, Node};
use crate::EOF_SYMBOL;

/// Magic marker identifying a Huffman-tree-header stream.
pub const MAGIC: u32 = 0xFACE_8201;

const MAGIC_BITS: u32 = 32;

//==================================================================================
// 1. Compression
//==================================================================================

/// Compresses `input` into a self-describing bitstream.
///
/// Two sequential passes over the slice: one to count, one to encode. The
/// `Result` is for signature uniformity; in-memory compression has no failure
/// modes, since every byte that can occur has a code and so does pseudo-EOF.
pub fn compress(input: &[u8]) -> Result<Vec<u8>, HuffError> {
    let weights = freq::count_frequencies(input);
    let tree = HuffTree::from_weights(&weights);
    let codes = codebook::build_code_table(&tree);

    let mut out = BitWriter::new();
    out.write_bits(MAGIC_BITS, MAGIC);
    header::write_tree(&tree, &mut out);
    log::debug!(
        "compress: {} bytes in, {} tree nodes, {} header bits",
        input.len(),
        tree.node_count(),
        out.bit_len()
    );

    for &byte in input {
        // Counted in the first pass, so a leaf and a code exist.
        let code = codes[byte as usize].as_ref().unwrap();
        out.write_code(code);
    }
    // The sentinel code is the canonical end marker; the data section has no
    // length prefix.
    let eof_code = codes[EOF_SYMBOL as usize].as_ref().unwrap();
    out.write_code(eof_code);

    log::debug!("compress: {} bits out before padding", out.bit_len());
    Ok(out.into_bytes())
}

//==================================================================================
// 2. Decompression
//==================================================================================

/// Decompresses a stream produced by [`compress`]. A truncated or corrupt
/// stream yields an error and no output, never a partial result.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, HuffError> {
    let mut input = BitReader::new(bytes);

    let found = input.read_bits(MAGIC_BITS).ok_or_else(|| {
        HuffError::TruncatedHeader("input ended inside the magic field".to_string())
    })?;
    if found != MAGIC {
        return Err(HuffError::BadMagic {
            expected: MAGIC,
            found,
        });
    }

    let tree = header::read_tree(&mut input)?;
    log::debug!(
        "decompress: {} tree nodes, {} header bits",
        tree.node_count(),
        input.bits_read()
    );

    let root = tree.root();

    // Degenerate stream: the whole tree is the lone pseudo-EOF leaf and the
    // data section is empty. Recognize the terminal state before touching
    // any data bit; a childless root has nothing to descend into.
    if let Node::Leaf { symbol } = tree.node(root) {
        return if symbol == EOF_SYMBOL {
            Ok(Vec::new())
        } else {
            Err(HuffError::MalformedTree(format!(
                "single-leaf tree for symbol {symbol} can never terminate"
            )))
        };
    }

    let mut out = Vec::new();
    let mut current = root;
    loop {
        match tree.node(current) {
            Node::Leaf { symbol } => {
                if symbol == EOF_SYMBOL {
                    break;
                }
                out.push(symbol as u8);
                current = root;
            }
            Node::Internal { left, right } => {
                let bit = input.read_bit().ok_or(HuffError::TruncatedData)?;
                current = if bit { right } else { left };
            }
        }
    }

    log::debug!("decompress: {} bytes out", out.len());
    Ok(out)
}

//==================================================================================
// 3. Stream Convenience Wrappers
//==================================================================================

/// Reads `reader` to end, compresses, and writes the stream to `writer`.
/// Returns the number of compressed bytes written. The counting and encoding
/// passes both run over the buffered copy, so the reader needs no rewind
/// support.
pub fn compress_stream<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<u64, HuffError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    let compressed = compress(&input)?;
    writer.write_all(&compressed)?;
    Ok(compressed.len() as u64)
}

/// Reads a compressed stream to end, decompresses, and writes the recovered
/// bytes to `writer`. Returns the number of bytes written.
pub fn decompress_stream<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<u64, HuffError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    let decompressed = decompress(&input)?;
    writer.write_all(&decompressed)?;
    Ok(decompressed.len() as u64)
}
