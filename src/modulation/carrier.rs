//! Passband carrier modulation (§4.4): ASK, FSK, QPSK, and 16-QAM. Each
//! scheme demodulates by correlating the received slot against the same
//! template waveforms used to build it, exploiting the fact that the fixed
//! carrier frequency, sample rate, and samples-per-bit constants (see
//! [`crate::constants`]) produce an exact integer number of carrier cycles
//! per symbol.

use crate::bits::{bitslice_to_u32, u32_to_bits, Bits};
use crate::error::ConfigParseError;
use crate::modulation::pulse::{correlate, cosinusoid, energy, sinusoid};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carrier {
    Ask,
    Fsk,
    Qpsk,
    Qam16,
}

impl FromStr for Carrier {
    type Err = ConfigParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ask" => Ok(Carrier::Ask),
            "fsk" => Ok(Carrier::Fsk),
            "qpsk" => Ok(Carrier::Qpsk),
            "16-qam" => Ok(Carrier::Qam16),
            other => Err(ConfigParseError::InvalidCarrier { value: other.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CarrierConfig {
    pub carrier_freq: f64,
    pub sample_rate: f64,
    pub samples_per_bit: usize,
    pub fsk_deviation: f64,
}

pub fn encode(codeword: &Bits, carrier: Carrier, cfg: &CarrierConfig) -> Vec<f64> {
    match carrier {
        Carrier::Ask => encode_ask(codeword, cfg),
        Carrier::Fsk => encode_fsk(codeword, cfg),
        Carrier::Qpsk => encode_qpsk(codeword, cfg),
        Carrier::Qam16 => encode_qam16(codeword, cfg),
    }
}

pub fn decode(samples: &[f64], carrier: Carrier, cfg: &CarrierConfig) -> Bits {
    match carrier {
        Carrier::Ask => decode_ask(samples, cfg),
        Carrier::Fsk => decode_fsk(samples, cfg),
        Carrier::Qpsk => decode_qpsk(samples, cfg),
        Carrier::Qam16 => decode_qam16(samples, cfg),
    }
}

/// QPSK and 16-QAM pack more than one bit per symbol, so a codeword whose
/// length isn't a multiple of the symbol width is zero-padded up to a
/// whole symbol before modulation (see `encode_qpsk`/`encode_qam16`).
/// Without a way to name how much of the last symbol was real, that pad
/// leaks into the recovered bits and corrupts everything downstream of
/// it. A 32-bit length header — itself modulated the same way, and
/// already a multiple of both symbol widths so it never needs padding —
/// carries the real bit count so the decoder can drop the pad exactly.
fn with_length_header(bits: &Bits) -> Bits {
    let mut framed = u32_to_bits(bits.len() as u32);
    framed.extend_from_bitslice(bits);
    framed
}

fn strip_length_header(bits: &Bits) -> Bits {
    if bits.len() < 32 {
        return Bits::new();
    }
    let len = (bitslice_to_u32(&bits[0..32]) as usize).min(bits.len() - 32);
    bits[32..32 + len].to_bitvec()
}

// --- ASK -------------------------------------------------------------

fn encode_ask(bits: &Bits, cfg: &CarrierConfig) -> Vec<f64> {
    let template = sinusoid(cfg.carrier_freq, cfg.sample_rate, cfg.samples_per_bit);
    let mut out = Vec::with_capacity(bits.len() * cfg.samples_per_bit);
    for bit in bits {
        if *bit {
            out.extend_from_slice(&template);
        } else {
            out.extend(std::iter::repeat(0.0).take(cfg.samples_per_bit));
        }
    }
    out
}

fn decode_ask(samples: &[f64], cfg: &CarrierConfig) -> Bits {
    let template = sinusoid(cfg.carrier_freq, cfg.sample_rate, cfg.samples_per_bit);
    let threshold = energy(&template) / 2.0;
    let mut out = Bits::new();
    for slot in samples.chunks(cfg.samples_per_bit) {
        out.push(energy(slot) > threshold);
    }
    out
}

// --- FSK -------------------------------------------------------------

fn encode_fsk(bits: &Bits, cfg: &CarrierConfig) -> Vec<f64> {
    let freq0 = cfg.carrier_freq + cfg.fsk_deviation;
    let freq1 = cfg.carrier_freq - cfg.fsk_deviation;
    let mut out = Vec::with_capacity(bits.len() * cfg.samples_per_bit);
    for bit in bits {
        let freq = if *bit { freq1 } else { freq0 };
        out.extend(sinusoid(freq, cfg.sample_rate, cfg.samples_per_bit));
    }
    out
}

fn decode_fsk(samples: &[f64], cfg: &CarrierConfig) -> Bits {
    let freq0 = cfg.carrier_freq + cfg.fsk_deviation;
    let freq1 = cfg.carrier_freq - cfg.fsk_deviation;
    let template0 = sinusoid(freq0, cfg.sample_rate, cfg.samples_per_bit);
    let template1 = sinusoid(freq1, cfg.sample_rate, cfg.samples_per_bit);
    let mut out = Bits::new();
    for slot in samples.chunks(cfg.samples_per_bit) {
        out.push(correlate(slot, &template1) > correlate(slot, &template0));
    }
    out
}

// --- QPSK --------------------------------------------------------------

fn qpsk_symbol(b0: bool, b1: bool) -> (f64, f64) {
    match (b0, b1) {
        (false, true) => (1.0, 0.0),
        (true, false) => (-1.0, 0.0),
        (false, false) => (0.0, 1.0),
        (true, true) => (0.0, -1.0),
    }
}

fn qpsk_inverse(i: f64, q: f64) -> (bool, bool) {
    if i.abs() > q.abs() {
        if i > 0.0 {
            (false, true)
        } else {
            (true, false)
        }
    } else if q > 0.0 {
        (false, false)
    } else {
        (true, true)
    }
}

fn encode_qpsk(bits: &Bits, cfg: &CarrierConfig) -> Vec<f64> {
    let framed = with_length_header(bits);
    let n = cfg.samples_per_bit * 2;
    let cos_t = cosinusoid(cfg.carrier_freq, cfg.sample_rate, n);
    let sin_t = sinusoid(cfg.carrier_freq, cfg.sample_rate, n);
    let mut out = Vec::with_capacity((framed.len() / 2 + 1) * n);
    for pair in framed.chunks(2) {
        let b0 = pair[0];
        let b1 = if pair.len() > 1 { pair[1] } else { false };
        let (i, q) = qpsk_symbol(b0, b1);
        for k in 0..n {
            out.push(i * cos_t[k] - q * sin_t[k]);
        }
    }
    out
}

fn decode_qpsk(samples: &[f64], cfg: &CarrierConfig) -> Bits {
    let n = cfg.samples_per_bit * 2;
    let cos_t = cosinusoid(cfg.carrier_freq, cfg.sample_rate, n);
    let sin_t = sinusoid(cfg.carrier_freq, cfg.sample_rate, n);
    let cos_energy = energy(&cos_t);
    let sin_energy = energy(&sin_t);
    let mut raw = Bits::new();
    for symbol in samples.chunks(n) {
        let i = correlate(symbol, &cos_t) / cos_energy;
        let q = -correlate(symbol, &sin_t) / sin_energy;
        let (b0, b1) = qpsk_inverse(i, q);
        raw.push(b0);
        raw.push(b1);
    }
    strip_length_header(&raw)
}

// --- 16-QAM --------------------------------------------------------------

const QAM16_TABLE: [([bool; 4], (f64, f64)); 16] = [
    ([false, false, false, false], (-3.0, -3.0)),
    ([false, false, false, true], (-3.0, -1.0)),
    ([false, false, true, false], (-3.0, 3.0)),
    ([false, false, true, true], (-3.0, 1.0)),
    ([false, true, false, false], (-1.0, -3.0)),
    ([false, true, false, true], (-1.0, -1.0)),
    ([false, true, true, false], (-1.0, 3.0)),
    ([false, true, true, true], (-1.0, 1.0)),
    ([true, false, false, false], (3.0, -3.0)),
    ([true, false, false, true], (3.0, -1.0)),
    ([true, false, true, false], (3.0, 3.0)),
    ([true, false, true, true], (3.0, 1.0)),
    ([true, true, false, false], (1.0, -3.0)),
    ([true, true, false, true], (1.0, -1.0)),
    ([true, true, true, false], (1.0, 3.0)),
    ([true, true, true, true], (1.0, 1.0)),
];

fn qam_normalization() -> f64 {
    crate::constants::qam_normalization()
}

fn qam16_symbol(bits: [bool; 4]) -> (f64, f64) {
    QAM16_TABLE
        .iter()
        .find(|(b, _)| *b == bits)
        .map(|(_, iq)| *iq)
        .unwrap_or((0.0, 0.0))
}

fn qam16_lookup(i: f64, q: f64) -> [bool; 4] {
    QAM16_TABLE
        .iter()
        .find(|(_, (ti, tq))| *ti == i && *tq == q)
        .map(|(b, _)| *b)
        .unwrap_or([false; 4])
}

fn snap_to_level(x: f64) -> f64 {
    const LEVELS: [f64; 4] = [-3.0, -1.0, 1.0, 3.0];
    let mut best = LEVELS[0];
    let mut best_dist = f64::MAX;
    for level in LEVELS {
        let dist = (x - level).abs();
        if dist < best_dist {
            best_dist = dist;
            best = level;
        }
    }
    best
}

fn encode_qam16(bits: &Bits, cfg: &CarrierConfig) -> Vec<f64> {
    let framed = with_length_header(bits);
    let n = cfg.samples_per_bit * 4;
    let cos_t = cosinusoid(cfg.carrier_freq, cfg.sample_rate, n);
    let sin_t = sinusoid(cfg.carrier_freq, cfg.sample_rate, n);
    let norm = qam_normalization();
    let mut out = Vec::with_capacity((framed.len() / 4 + 1) * n);
    for group in framed.chunks(4) {
        let mut symbol_bits = [false; 4];
        for (idx, bit) in group.iter().enumerate() {
            symbol_bits[idx] = *bit;
        }
        let (i, q) = qam16_symbol(symbol_bits);
        for k in 0..n {
            out.push((i * cos_t[k] - q * sin_t[k]) / norm);
        }
    }
    out
}

fn decode_qam16(samples: &[f64], cfg: &CarrierConfig) -> Bits {
    let n = cfg.samples_per_bit * 4;
    let cos_t = cosinusoid(cfg.carrier_freq, cfg.sample_rate, n);
    let sin_t = sinusoid(cfg.carrier_freq, cfg.sample_rate, n);
    let cos_energy = energy(&cos_t);
    let sin_energy = energy(&sin_t);
    let norm = qam_normalization();
    let mut raw = Bits::new();
    for symbol in samples.chunks(n) {
        let i_raw = correlate(symbol, &cos_t) / cos_energy * norm;
        let q_raw = -correlate(symbol, &sin_t) / sin_energy * norm;
        let i = snap_to_level(i_raw);
        let q = snap_to_level(q_raw);
        for bit in qam16_lookup(i, q) {
            raw.push(bit);
        }
    }
    strip_length_header(&raw)
}
