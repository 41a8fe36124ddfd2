//! Framing disciplines (§4.1): character count, FLAG+byte stuffing, and
//! FLAG+bit stuffing, plus a `None` identity discipline to round out the
//! §6 enumeration. The decoder is always told out of band which
//! discipline was used — nothing in the bit stream itself is
//! self-describing.

mod bit_stuffing;
mod byte_stuffing;
mod char_count;

use crate::bits::Bits;
use crate::error::ConfigParseError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    None,
    CharCount,
    ByteStuffing,
    BitStuffing,
}

impl FromStr for Framing {
    type Err = ConfigParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Framing::None),
            "char-count" => Ok(Framing::CharCount),
            "byte-stuffing" => Ok(Framing::ByteStuffing),
            "bit-stuffing" => Ok(Framing::BitStuffing),
            other => Err(ConfigParseError::InvalidFraming { value: other.to_string() }),
        }
    }
}

pub fn encode_frame(payload: &Bits, framing: Framing) -> Bits {
    let frame = match framing {
        Framing::None => payload.clone(),
        Framing::CharCount => char_count::encode(payload),
        Framing::ByteStuffing => byte_stuffing::encode(payload),
        Framing::BitStuffing => bit_stuffing::encode(payload),
    };
    tracing::debug!(?framing, payload_bits = payload.len(), frame_bits = frame.len(), "framed payload");
    frame
}

pub fn decode_frame(frame: &Bits, framing: Framing) -> Bits {
    match framing {
        Framing::None => frame.clone(),
        Framing::CharCount => char_count::decode(frame),
        Framing::ByteStuffing => byte_stuffing::decode(frame),
        Framing::BitStuffing => bit_stuffing::decode(frame),
    }
}
