//! This module contains the bit-level transport layer the codec sits on.
//!
//! The codec itself never deals with byte alignment: it asks for N bits at a
//! time (1 <= N <= 32) and appends N bits at a time, most-significant-bit
//! first. Both halves are thin, panic-free wrappers around `bitvec` buffers.
//! End of data is signalled out-of-band as `None`, distinct from every valid
//! N-bit value.

use bitvec::prelude::*;

//==================================================================================
// 1. BitWriter
//==================================================================================

/// An append-only bit sink backed by a `BitVec` with `Msb0` ordering, so the
/// bit-by-bit write order maps directly onto big-endian bytes.
#[derive(Debug, Default)]
pub struct BitWriter {
    bits: BitVec<u8, Msb0>,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the low `width` bits of `value`, most significant first.
    /// `width` must be in `1..=32`.
    pub fn write_bits(&mut self, width: u32, value: u32) {
        debug_assert!((1..=32).contains(&width));
        for shift in (0..width).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
    }

    /// Appends a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Appends a pre-built code string verbatim, first bit first.
    pub fn write_code(&mut self, code: &BitSlice<u8, Msb0>) {
        self.bits.extend_from_bitslice(code);
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Zero-pads the buffer to a byte boundary and returns the raw bytes.
    pub fn into_bytes(mut self) -> Vec<u8> {
        while self.bits.len() % 8 != 0 {
            self.bits.push(false);
        }
        self.bits.into_vec()
    }
}

//==================================================================================
// 2. BitReader
//==================================================================================

/// A forward-only cursor over a byte slice viewed as `Msb0` bits.
#[derive(Debug)]
pub struct BitReader<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bits: bytes.view_bits::<Msb0>(),
            pos: 0,
        }
    }

    /// Reads the next `width` bits as an unsigned integer, most significant
    /// first. Returns `None` if fewer than `width` bits remain; the cursor is
    /// not advanced in that case. `width` must be in `1..=32`.
    pub fn read_bits(&mut self, width: u32) -> Option<u32> {
        debug_assert!((1..=32).contains(&width));
        if self.pos + width as usize > self.bits.len() {
            return None;
        }
        let mut value = 0u32;
        for _ in 0..width {
            value = (value << 1) | u32::from(self.bits[self.pos]);
            self.pos += 1;
        }
        Some(value)
    }

    /// Reads a single bit. `None` means end of data.
    pub fn read_bit(&mut self) -> Option<bool> {
        let bit = *self.bits.get(self.pos)?;
        self.pos += 1;
        Some(bit)
    }

    /// Number of bits consumed so far.
    pub fn bits_read(&self) -> usize {
        self.pos
    }
}
