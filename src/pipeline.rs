//! Top-level encode/decode pipeline (§6): chains framing, error coding,
//! modulation, and the channel into the two entry points the rest of this
//! crate exists to support.

use crate::bits::Bits;
use crate::channel::Channel;
use crate::constants::{CARRIER_FREQUENCY, FSK_DEVIATION, SAMPLES_PER_BIT, SAMPLE_RATE};
use crate::error_correction::{self, ErrorCode, ErrorReport};
use crate::framing::{self, Framing};
use crate::modulation::carrier::{self, Carrier, CarrierConfig};
use crate::modulation::line::{self, LineCode};
use crate::text::{bits_to_text, text_to_bits};

fn carrier_config() -> CarrierConfig {
    CarrierConfig {
        carrier_freq: CARRIER_FREQUENCY,
        sample_rate: SAMPLE_RATE,
        samples_per_bit: SAMPLES_PER_BIT,
        fsk_deviation: FSK_DEVIATION,
    }
}

/// Result of running [`decode`]: the recovered text, the error-coding
/// verdict, and the raw recovered payload bits for callers that want to
/// inspect a failed decode without re-running the pipeline.
#[derive(Debug, Clone)]
pub struct DecodeResult {
    pub text: String,
    pub error_report: ErrorReport,
    pub recovered_bits: Bits,
}

/// Encode `payload_text` through framing, error coding, and modulation
/// (line or carrier, never both — see [`crate::modulation`]), then push the
/// resulting samples through `channel` at noise level `sigma`.
pub fn encode(
    payload_text: &str,
    framing: Framing,
    error_code: ErrorCode,
    line_code: LineCode,
    carrier: Option<Carrier>,
    sigma: f64,
    channel: &mut Channel,
) -> Vec<f64> {
    let payload_bits = text_to_bits(payload_text);
    let frame = framing::encode_frame(&payload_bits, framing);
    let codeword = error_correction::encode(&frame, error_code);
    let samples = match carrier {
        None => line::encode(&codeword, line_code, SAMPLES_PER_BIT),
        Some(c) => carrier::encode(&codeword, c, &carrier_config()),
    };
    channel.add_noise(&samples, sigma)
}

/// Invert [`encode`]: demodulate, check/correct the error code, strip
/// framing, and decode the remaining bits back to text. Never raises —
/// failures at any stage surface through [`DecodeResult::error_report`] or
/// the sentinel text produced by [`bits_to_text`].
pub fn decode(
    samples: &[f64],
    framing: Framing,
    error_code: ErrorCode,
    line_code: LineCode,
    carrier: Option<Carrier>,
) -> DecodeResult {
    let codeword = match carrier {
        None => line::decode(samples, line_code, SAMPLES_PER_BIT),
        Some(c) => carrier::decode(samples, c, &carrier_config()),
    };
    let (frame, error_report) = error_correction::decode(&codeword, error_code);
    let payload_bits = framing::decode_frame(&frame, framing);
    let text = bits_to_text(&payload_bits);
    tracing::info!(?framing, ?error_code, ?error_report, "decoded payload");
    DecodeResult { text, error_report, recovered_bits: payload_bits }
}
