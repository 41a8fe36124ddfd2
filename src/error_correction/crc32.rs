//! CRC-32 error detection (§4.2): bit-level polynomial long division against
//! the fixed generator in [`crate::constants::CRC32_GENERATOR`], with no
//! reflection and no final XOR — the arithmetic runs directly over the
//! MSB-first bit stream.

use crate::bits::Bits;
use crate::constants::CRC32_GENERATOR;
use crate::error_correction::ErrorReport;

const POLY_WIDTH: usize = 33;

fn generator_bits() -> [bool; POLY_WIDTH] {
    let mut bits = [false; POLY_WIDTH];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (CRC32_GENERATOR >> (32 - i)) & 1 != 0;
    }
    bits
}

/// Divide `buf` (frame bits followed by 32 zero bits) by the generator
/// polynomial in place, returning the final 32-bit remainder.
fn divide(buf: &mut Bits) -> Bits {
    let gen = generator_bits();
    let n = buf.len();
    assert!(n >= 32, "crc32 divisor requires at least 32 bits");
    for i in 0..(n - 32) {
        if buf[i] {
            for (k, g) in gen.iter().enumerate() {
                if *g {
                    let idx = i + k;
                    let cur = buf[idx];
                    buf.set(idx, cur ^ true);
                }
            }
        }
    }
    buf[n - 32..].to_bitvec()
}

pub fn encode(frame: &Bits) -> Bits {
    let mut buf = frame.clone();
    buf.extend(std::iter::repeat(false).take(32));
    let remainder = divide(&mut buf);
    let mut out = frame.clone();
    out.extend_from_bitslice(&remainder);
    out
}

pub fn decode(codeword: &Bits) -> (Bits, ErrorReport) {
    let mut buf = codeword.clone();
    let remainder = divide(&mut buf);
    let report = if remainder.not_any() { ErrorReport::Ok } else { ErrorReport::CRCMismatch };
    let data = codeword[..codeword.len() - 32].to_bitvec();
    (data, report)
}
