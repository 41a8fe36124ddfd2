//! Error-detection and -correction codes (§4.2): none, even parity, CRC-32,
//! and a generalized Hamming SEC code over four block sizes.

mod crc32;
mod hamming;
mod parity;

use crate::bits::Bits;
use crate::error::ConfigParseError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    None,
    EvenParity,
    Crc32,
    Hamming,
}

impl FromStr for ErrorCode {
    type Err = ConfigParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ErrorCode::None),
            "even-parity" => Ok(ErrorCode::EvenParity),
            "crc32" => Ok(ErrorCode::Crc32),
            "hamming" => Ok(ErrorCode::Hamming),
            other => Err(ConfigParseError::InvalidErrorCode { value: other.to_string() }),
        }
    }
}

/// Outcome of decoding a codeword. Decoding never raises an error — a
/// mismatch is reported here, alongside the (best-effort) recovered data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorReport {
    Ok,
    ParityMismatch,
    CRCMismatch,
    HammingApplied,
    NotChecked,
}

pub fn encode(frame: &Bits, code: ErrorCode) -> Bits {
    let codeword = match code {
        ErrorCode::None => frame.clone(),
        ErrorCode::EvenParity => parity::encode(frame),
        ErrorCode::Crc32 => crc32::encode(frame),
        ErrorCode::Hamming => hamming::encode(frame),
    };
    tracing::debug!(?code, frame_bits = frame.len(), codeword_bits = codeword.len(), "applied error code");
    codeword
}

pub fn decode(codeword: &Bits, code: ErrorCode) -> (Bits, ErrorReport) {
    let (frame, report) = match code {
        ErrorCode::None => (codeword.clone(), ErrorReport::NotChecked),
        ErrorCode::EvenParity => parity::decode(codeword),
        ErrorCode::Crc32 => crc32::decode(codeword),
        ErrorCode::Hamming => (hamming::decode(codeword), ErrorReport::HammingApplied),
    };
    tracing::debug!(?code, ?report, "checked error code");
    (frame, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitvec::prelude::*;

    #[test]
    fn from_str_rejects_unknown_code() {
        assert!("frobnicate".parse::<ErrorCode>().is_err());
        assert_eq!("crc32".parse::<ErrorCode>().unwrap(), ErrorCode::Crc32);
    }

    #[test]
    fn none_is_identity_and_unchecked() {
        let frame: Bits = bitvec![u8, Msb0; 1, 0, 1, 1];
        let codeword = encode(&frame, ErrorCode::None);
        assert_eq!(codeword, frame);
        let (data, report) = decode(&codeword, ErrorCode::None);
        assert_eq!(data, frame);
        assert_eq!(report, ErrorReport::NotChecked);
    }
}
