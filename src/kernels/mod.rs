//! This module gathers the pure, stateless kernels of the codec: frequency
//! counting, code-table derivation, and the tree header wire codec. Each
//! kernel does one transform and owns no state between calls; the `codec`
//! module strings them together.

pub mod codebook;
pub mod freq;
pub mod header;
