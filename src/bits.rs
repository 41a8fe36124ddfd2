//! Bit-level utilities shared by the framing, error-coding, and modulation
//! stages. Every intermediate pipeline stage (frame, codeword) is an owned
//! [`Bits`], matching the MSB-first wire format fixed by the spec's
//! constants (FLAG, ESCAPE, the CRC generator).

use bitvec::prelude::*;

/// A packed, owned bit sequence, MSB first. Replaces the "list of
/// integers" payload convention of the origin implementation with a real
/// bit-indexed container.
pub type Bits = BitVec<u8, Msb0>;

/// Pack up to 8 bits into a `u8`, MSB first.
pub fn bitslice_to_u8(bits: &BitSlice<u8, Msb0>) -> u8 {
    assert!(bits.len() <= 8, "bitslice_to_u8: slice longer than a byte");
    let mut value = 0u8;
    for bit in bits {
        value = (value << 1) | (*bit as u8);
    }
    value
}

/// Expand a byte into its 8 bits, MSB first.
pub fn u8_to_bits(byte: u8) -> Bits {
    byte.view_bits::<Msb0>().to_bitvec()
}

/// Pack up to 32 bits into a `u32`, MSB first.
pub fn bitslice_to_u32(bits: &BitSlice<u8, Msb0>) -> u32 {
    assert!(bits.len() <= 32, "bitslice_to_u32: slice longer than a u32");
    let mut value = 0u32;
    for bit in bits {
        value = (value << 1) | (*bit as u32);
    }
    value
}

/// Expand a `u32` into its 32 bits, MSB first.
pub fn u32_to_bits(value: u32) -> Bits {
    value.view_bits::<Msb0>().to_bitvec()
}
