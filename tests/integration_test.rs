//! Integration tests for the full encode→decode pipeline across the
//! worked scenarios and combination matrix described alongside the
//! physical-layer design.

use linksim::error_correction::{ErrorCode, ErrorReport};
use linksim::framing::Framing;
use linksim::modulation::{Carrier, LineCode};
use linksim::{decode, encode, Channel};

fn round_trip(
    message: &str,
    framing: Framing,
    error_code: ErrorCode,
    line_code: LineCode,
    carrier: Option<Carrier>,
) -> (String, ErrorReport) {
    let mut channel = Channel::new(1);
    let samples = encode(message, framing, error_code, line_code, carrier, 0.0, &mut channel);
    let result = decode(&samples, framing, error_code, line_code, carrier);
    (result.text, result.error_report)
}

#[test]
fn scenario_char_count_even_parity_nrz() {
    let (text, report) = round_trip(
        "Hi",
        Framing::CharCount,
        ErrorCode::EvenParity,
        LineCode::NrzPolar,
        None,
    );
    assert_eq!(text, "Hi");
    assert_eq!(report, ErrorReport::Ok);
}

#[test]
fn scenario_byte_stuffing_with_literal_flag_byte() {
    let (text, _) = round_trip(
        "~",
        Framing::ByteStuffing,
        ErrorCode::None,
        LineCode::Manchester,
        None,
    );
    assert_eq!(text, "~");
}

#[test]
fn scenario_bit_stuffing_crc32_bipolar() {
    let (text, report) = round_trip(
        "FT8",
        Framing::BitStuffing,
        ErrorCode::Crc32,
        LineCode::Bipolar,
        None,
    );
    assert_eq!(text, "FT8");
    assert_eq!(report, ErrorReport::Ok);
}

#[test]
fn scenario_hamming_survives_framing() {
    let (text, report) = round_trip(
        "Hi",
        Framing::CharCount,
        ErrorCode::Hamming,
        LineCode::NrzPolar,
        None,
    );
    assert_eq!(text, "Hi");
    assert_eq!(report, ErrorReport::HammingApplied);
}

#[test]
fn scenario_ask_carrier_round_trip() {
    let (text, _) = round_trip("Hi", Framing::None, ErrorCode::None, LineCode::NrzPolar, Some(Carrier::Ask));
    assert_eq!(text, "Hi");
}

#[test]
fn scenario_qpsk_carrier_round_trip() {
    let (text, _) = round_trip("Hi", Framing::None, ErrorCode::None, LineCode::NrzPolar, Some(Carrier::Qpsk));
    assert_eq!(text, "Hi");
}

#[test]
fn scenario_16qam_carrier_round_trip() {
    let (text, _) = round_trip("Hi", Framing::None, ErrorCode::None, LineCode::NrzPolar, Some(Carrier::Qam16));
    assert_eq!(text, "Hi");
}

#[test]
fn scenario_fsk_carrier_round_trip() {
    let (text, _) = round_trip("Hi", Framing::None, ErrorCode::None, LineCode::NrzPolar, Some(Carrier::Fsk));
    assert_eq!(text, "Hi");
}

#[test]
fn universal_round_trips_across_framing_ecc_line_combinations() {
    let framings = [Framing::None, Framing::CharCount, Framing::ByteStuffing, Framing::BitStuffing];
    let codes = [ErrorCode::None, ErrorCode::EvenParity, ErrorCode::Crc32, ErrorCode::Hamming];
    let lines = [LineCode::NrzPolar, LineCode::Manchester, LineCode::Bipolar];

    for framing in framings {
        for code in codes {
            for line in lines {
                let (text, _) = round_trip("Link test 123", framing, code, line, None);
                assert_eq!(text, "Link test 123", "{framing:?}/{code:?}/{line:?}");
            }
        }
    }
}

#[test]
fn universal_round_trips_across_framing_ecc_carrier_combinations() {
    let framings = [Framing::None, Framing::CharCount, Framing::ByteStuffing, Framing::BitStuffing];
    let codes = [ErrorCode::None, ErrorCode::EvenParity, ErrorCode::Crc32, ErrorCode::Hamming];
    let carriers = [Carrier::Ask, Carrier::Fsk, Carrier::Qpsk, Carrier::Qam16];

    for framing in framings {
        for code in codes {
            for carrier in carriers {
                let (text, _) = round_trip("Hi!", framing, code, LineCode::NrzPolar, Some(carrier));
                assert_eq!(text, "Hi!", "{framing:?}/{code:?}/{carrier:?}");
            }
        }
    }
}

#[test]
fn noisy_channel_still_decodes_at_low_sigma() {
    let mut channel = Channel::new(42);
    let samples = encode(
        "Hi",
        Framing::CharCount,
        ErrorCode::Hamming,
        LineCode::NrzPolar,
        None,
        0.05,
        &mut channel,
    );
    let result = decode(&samples, Framing::CharCount, ErrorCode::Hamming, LineCode::NrzPolar, None);
    assert_eq!(result.text, "Hi");
}

#[test]
fn empty_message_round_trips() {
    let (text, _) = round_trip("", Framing::CharCount, ErrorCode::Crc32, LineCode::NrzPolar, None);
    assert_eq!(text, "");
}
