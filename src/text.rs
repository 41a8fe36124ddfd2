//! Text ↔ bit codec (§6, §7). Encoding is plain UTF-8 byte packing;
//! decoding attempts UTF-8 and falls back to a sentinel string rather than
//! raising, since an upper layer may hand back padding bits or a corrupted
//! stream and the contract says never to substitute or panic on that.

use crate::bits::{bitslice_to_u8, Bits};
use bitvec::prelude::*;

/// Sentinel returned by [`bits_to_text`] when the recovered bits are not
/// valid UTF-8.
pub const UNDECODABLE: &str = "undecodable bit sequence";

pub fn text_to_bits(text: &str) -> Bits {
    text.as_bytes().view_bits::<Msb0>().to_bitvec()
}

pub fn bits_to_text(bits: &Bits) -> String {
    let mut bytes = Vec::with_capacity(bits.len() / 8 + 1);
    for chunk in bits.chunks(8) {
        if chunk.len() == 8 {
            bytes.push(bitslice_to_u8(chunk));
        } else if !chunk.is_empty() {
            let mut padded = chunk.to_bitvec();
            padded.resize(8, false);
            bytes.push(bitslice_to_u8(&padded));
        }
    }
    String::from_utf8(bytes).unwrap_or_else(|_| UNDECODABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_ascii() {
        let text = "Hello, FT-simulator!";
        let bits = text_to_bits(text);
        assert_eq!(bits.len(), text.len() * 8);
        assert_eq!(bits_to_text(&bits), text);
    }

    #[test]
    fn round_trips_empty() {
        assert_eq!(bits_to_text(&text_to_bits("")), "");
    }

    #[test]
    fn round_trips_multibyte_utf8() {
        let text = "café 🎛";
        assert_eq!(bits_to_text(&text_to_bits(text)), text);
    }

    #[test]
    fn invalid_utf8_yields_sentinel() {
        // 0xFF is never valid as a UTF-8 lead byte.
        let mut bits = Bits::new();
        bits.extend_from_bitslice(0xFFu8.view_bits::<Msb0>());
        assert_eq!(bits_to_text(&bits), UNDECODABLE);
    }
}
