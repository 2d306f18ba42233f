//! This module contains the pure, stateless kernel for the counting pass.
//!
//! One forward scan over the input produces the weight table that drives tree
//! construction. The pseudo-EOF slot is forced to exactly 1 afterwards: the
//! sentinel never occurs in real input, but it must always earn a leaf.

use crate::{EOF_SYMBOL, NUM_SYMBOLS};

/// Counts byte occurrences into a 257-slot weight table, index = symbol.
///
/// Never fails; an empty input yields a table whose only non-zero slot is the
/// sentinel at 1.
pub fn count_frequencies(input: &[u8]) -> [u64; NUM_SYMBOLS] {
    let mut weights = [0u64; NUM_SYMBOLS];
    for &byte in input {
        weights[byte as usize] += 1;
    }
    weights[EOF_SYMBOL as usize] = 1;
    weights
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_every_byte() {
        let weights = count_frequencies(b"abbccc");
        assert_eq!(weights[b'a' as usize], 1);
        assert_eq!(weights[b'b' as usize], 2);
        assert_eq!(weights[b'c' as usize], 3);
        assert_eq!(weights[b'd' as usize], 0);
    }

    #[test]
    fn test_sentinel_slot_is_always_one() {
        assert_eq!(count_frequencies(b"")[EOF_SYMBOL as usize], 1);
        assert_eq!(count_frequencies(&[0xFF; 512])[EOF_SYMBOL as usize], 1);
    }

    #[test]
    fn test_empty_input_has_no_other_weight() {
        let weights = count_frequencies(b"");
        assert!(weights[..EOF_SYMBOL as usize].iter().all(|&w| w == 0));
    }
}
