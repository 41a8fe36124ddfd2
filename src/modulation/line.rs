//! Baseband line codes (§4.3): NRZ-Polar, Manchester, and Bipolar (AMI).
//! Used whenever no carrier is selected; bypassed entirely when a carrier
//! is selected, since carrier modulation consumes codeword bits directly.

use crate::bits::Bits;
use crate::error::ConfigParseError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCode {
    NrzPolar,
    Manchester,
    Bipolar,
}

impl FromStr for LineCode {
    type Err = ConfigParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nrz-polar" => Ok(LineCode::NrzPolar),
            "manchester" => Ok(LineCode::Manchester),
            "bipolar" => Ok(LineCode::Bipolar),
            other => Err(ConfigParseError::InvalidLineCode { value: other.to_string() }),
        }
    }
}

const VOLTAGE: f64 = 1.0;

pub fn encode(bits: &Bits, code: LineCode, samples_per_bit: usize) -> Vec<f64> {
    match code {
        LineCode::NrzPolar => encode_nrz(bits, samples_per_bit),
        LineCode::Manchester => encode_manchester(bits, samples_per_bit),
        LineCode::Bipolar => encode_bipolar(bits, samples_per_bit),
    }
}

pub fn decode(samples: &[f64], code: LineCode, samples_per_bit: usize) -> Bits {
    match code {
        LineCode::NrzPolar => decode_nrz(samples, samples_per_bit),
        LineCode::Manchester => decode_manchester(samples, samples_per_bit),
        LineCode::Bipolar => decode_bipolar(samples, samples_per_bit),
    }
}

fn encode_nrz(bits: &Bits, spb: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(bits.len() * spb);
    for bit in bits {
        let level = if *bit { VOLTAGE } else { -VOLTAGE };
        out.extend(std::iter::repeat(level).take(spb));
    }
    out
}

fn decode_nrz(samples: &[f64], spb: usize) -> Bits {
    let mut out = Bits::new();
    for slot in samples.chunks(spb) {
        let sum: f64 = slot.iter().sum();
        out.push(sum > 0.0);
    }
    out
}

fn encode_manchester(bits: &Bits, spb: usize) -> Vec<f64> {
    let half = spb / 2;
    let mut out = Vec::with_capacity(bits.len() * spb);
    for bit in bits {
        if *bit {
            out.extend(std::iter::repeat(-VOLTAGE).take(half));
            out.extend(std::iter::repeat(VOLTAGE).take(spb - half));
        } else {
            out.extend(std::iter::repeat(VOLTAGE).take(half));
            out.extend(std::iter::repeat(-VOLTAGE).take(spb - half));
        }
    }
    out
}

fn decode_manchester(samples: &[f64], spb: usize) -> Bits {
    let half = spb / 2;
    let mut out = Bits::new();
    for slot in samples.chunks(spb) {
        let first: f64 = slot[..half].iter().sum();
        let second: f64 = slot[half..].iter().sum();
        out.push(second - first > 0.0);
    }
    out
}

fn encode_bipolar(bits: &Bits, spb: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(bits.len() * spb);
    let mut last_positive = false;
    for bit in bits {
        if *bit {
            let level = if last_positive { -VOLTAGE } else { VOLTAGE };
            last_positive = !last_positive;
            out.extend(std::iter::repeat(level).take(spb));
        } else {
            out.extend(std::iter::repeat(0.0).take(spb));
        }
    }
    out
}

fn decode_bipolar(samples: &[f64], spb: usize) -> Bits {
    let threshold = spb as f64 * VOLTAGE * VOLTAGE / 4.0;
    let mut out = Bits::new();
    for slot in samples.chunks(spb) {
        let e: f64 = slot.iter().map(|s| s * s).sum();
        out.push(e > threshold);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitvec::prelude::*;

    const SPB: usize = 50;

    #[test]
    fn from_str_rejects_unknown_line_code() {
        assert!("frobnicate".parse::<LineCode>().is_err());
        assert_eq!("manchester".parse::<LineCode>().unwrap(), LineCode::Manchester);
    }

    #[test]
    fn nrz_round_trips() {
        let bits: crate::bits::Bits = bitvec![u8, Msb0; 1, 0, 1, 1, 0];
        let samples = encode(&bits, LineCode::NrzPolar, SPB);
        assert_eq!(decode(&samples, LineCode::NrzPolar, SPB), bits);
    }

    #[test]
    fn manchester_round_trips() {
        let bits: crate::bits::Bits = bitvec![u8, Msb0; 1, 0, 1, 1, 0];
        let samples = encode(&bits, LineCode::Manchester, SPB);
        assert_eq!(decode(&samples, LineCode::Manchester, SPB), bits);
    }

    #[test]
    fn bipolar_round_trips_and_alternates_polarity() {
        let bits: crate::bits::Bits = bitvec![u8, Msb0; 1, 0, 1, 0, 1];
        let samples = encode(&bits, LineCode::Bipolar, SPB);
        assert_eq!(decode(&samples, LineCode::Bipolar, SPB), bits);
        assert!(samples[0] > 0.0);
        assert!(samples[2 * SPB] < 0.0);
        assert!(samples[4 * SPB] > 0.0);
    }
}
