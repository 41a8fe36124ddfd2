//! Character-count framing discipline (§4.1): an 8-bit length header
//! followed by the payload.

use crate::bits::Bits;
use bitvec::prelude::*;

/// Prepend an 8-bit length header equal to the payload's bit count modulo
/// 256. Payloads longer than 255 bits silently lose their upper length
/// bits on the header — a known limitation carried over unchanged from the
/// source algorithm (no extended header is specified).
pub fn encode(payload: &Bits) -> Bits {
    let len = (payload.len() % 256) as u8;
    let mut out = Bits::with_capacity(8 + payload.len());
    out.extend_from_bitslice(len.view_bits::<Msb0>());
    out.extend_from_bitslice(payload);
    out
}

pub fn decode(frame: &Bits) -> Bits {
    frame[8..].to_bitvec()
}
