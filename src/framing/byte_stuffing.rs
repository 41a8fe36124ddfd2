//! FLAG + byte stuffing framing discipline (§4.1).

use crate::bits::{bitslice_to_u8, Bits};
use crate::constants::{ESCAPE, FLAG};
use bitvec::prelude::*;

pub fn encode(payload: &Bits) -> Bits {
    let mut out = Bits::new();
    out.extend_from_bitslice(FLAG.view_bits::<Msb0>());

    for chunk in payload.chunks(8) {
        let mut byte_bits = chunk.to_bitvec();
        if byte_bits.len() < 8 {
            byte_bits.resize(8, false);
        }
        let byte = bitslice_to_u8(&byte_bits);
        if byte == FLAG || byte == ESCAPE {
            out.extend_from_bitslice(ESCAPE.view_bits::<Msb0>());
        }
        out.extend_from_bitslice(&byte_bits);
    }

    out.extend_from_bitslice(FLAG.view_bits::<Msb0>());
    out
}

pub fn decode(frame: &Bits) -> Bits {
    let body = &frame[8..frame.len() - 8];
    let mut out = Bits::new();
    let mut i = 0;
    while i < body.len() {
        let byte = bitslice_to_u8(&body[i..i + 8]);
        i += 8;
        if byte == ESCAPE {
            out.extend_from_bitslice(&body[i..i + 8]);
            i += 8;
        } else {
            out.extend_from_bitslice(&body[i - 8..i]);
        }
    }
    out
}
